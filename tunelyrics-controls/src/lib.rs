pub use tunelyrics_models::{LyricsResult, SearchResponse, Track};

pub mod client;
pub mod error;
pub mod lyrics;
pub mod notification;
pub mod pagination;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub type Result<T, E = error::Error> = std::result::Result<T, E>;
