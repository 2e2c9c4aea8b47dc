pub const SONG_KIND: &str = "song";

#[derive(Default, Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Track {
    pub artist_name: Option<String>,
    pub track_name: Option<String>,
    pub album_name: Option<String>,
    pub artwork_url: Option<String>,
    pub media_kind: Option<String>,
}

impl Track {
    pub fn is_song(&self) -> bool {
        self.media_kind.as_deref() == Some(SONG_KIND)
    }

    /// Title line shown in result lists, e.g. `Hold On - Tom Waits`.
    pub fn display_title(&self) -> String {
        let track = self.track_name.as_deref().unwrap_or("Unknown track");
        let artist = self.artist_name.as_deref().unwrap_or("Unknown artist");

        match &self.album_name {
            Some(album) => format!("{track} - {artist} ({album})"),
            None => format!("{track} - {artist}"),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub result_count: i64,
    pub results: Option<Vec<Track>>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LyricsResult {
    pub artist: Option<String>,
    pub song: Option<String>,
    pub lyrics: Option<String>,
}
