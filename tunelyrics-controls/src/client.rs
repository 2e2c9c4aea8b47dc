use async_trait::async_trait;
use tunelyrics_models::{LyricsResult, SearchResponse};

use crate::Result;

type CatalogClient = tunelyrics_client::client::Client;

#[async_trait]
pub trait Catalog: Send + Sync {
    async fn search_catalog(&self, query: &str) -> Result<SearchResponse>;
}

#[async_trait]
pub trait LyricsSource: Send + Sync {
    async fn fetch_lyrics(&self, track: &str, artist: &str) -> Result<LyricsResult>;
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn search_catalog(&self, query: &str) -> Result<SearchResponse> {
        Ok(CatalogClient::search_catalog(self, query).await?)
    }
}

#[async_trait]
impl LyricsSource for CatalogClient {
    async fn fetch_lyrics(&self, track: &str, artist: &str) -> Result<LyricsResult> {
        Ok(CatalogClient::fetch_lyrics(self, track, artist).await?)
    }
}
