use serde::{Deserialize, Serialize};
use tunelyrics_models::LyricsResult;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lyrics {
    pub artist: Option<String>,
    pub song: Option<String>,
    pub lyrics: Option<String>,
}

impl From<Lyrics> for LyricsResult {
    fn from(value: Lyrics) -> Self {
        Self {
            artist: value.artist,
            song: value.song,
            lyrics: value.lyrics,
        }
    }
}
