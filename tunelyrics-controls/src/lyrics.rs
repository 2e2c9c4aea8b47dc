use tracing::{info, warn};
use tunelyrics_models::Track;

use crate::{Result, client::LyricsSource, error::Error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricsOutcome {
    /// The lookup succeeded. `lyrics` can still be empty.
    Found { lyrics: Option<String> },
    NotFound { error_message: String },
}

impl LyricsOutcome {
    pub fn found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn lyrics(&self) -> Option<&str> {
        match self {
            Self::Found { lyrics } => lyrics.as_deref(),
            Self::NotFound { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Found { .. } => None,
            Self::NotFound { error_message } => Some(error_message),
        }
    }
}

pub async fn resolve_lyrics<L>(track: &Track, lookup: &L) -> Result<LyricsOutcome>
where
    L: LyricsSource + ?Sized,
{
    let (Some(track_name), Some(artist_name)) = (&track.track_name, &track.artist_name) else {
        return Err(Error::MissingMetadata);
    };

    match lookup.fetch_lyrics(track_name, artist_name).await {
        Ok(result) => {
            info!("lyrics lookup for \"{track_name}\" succeeded");
            Ok(LyricsOutcome::Found {
                lyrics: result.lyrics,
            })
        }
        Err(error) => {
            warn!("lyrics lookup for \"{track_name}\" failed: {error}");
            Ok(LyricsOutcome::NotFound {
                error_message: error.to_string(),
            })
        }
    }
}
