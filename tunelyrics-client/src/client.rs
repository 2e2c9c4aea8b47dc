use crate::{
    Error, Result,
    catalog_models::{lyrics::Lyrics, search_results::SearchResults},
};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use tunelyrics_models::{LyricsResult, SearchResponse};
use url::Url;

pub const DEFAULT_CATALOG_URL: &str = "https://itunes.apple.com/";
pub const DEFAULT_LYRICS_URL: &str = "https://lyrics.wikia.com/";

#[derive(Debug, Clone)]
pub struct Client {
    catalog_url: Url,
    lyrics_url: Url,
    client: reqwest::Client,
}

pub fn new(catalog_url: &str, lyrics_url: &str) -> Result<Client> {
    let http_client = reqwest::Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    Ok(Client {
        catalog_url: base_url(catalog_url)?,
        lyrics_url: base_url(lyrics_url)?,
        client: http_client,
    })
}

enum Endpoint {
    Search,
    Lyrics,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let endpoint = match self {
            Endpoint::Search => "search",
            Endpoint::Lyrics => "api.php",
        };

        f.write_str(endpoint)
    }
}

macro_rules! get {
    ($self:ident, $url:expr) => {
        match $self.make_get_call($url).await {
            Ok(response) => decode(response.as_str()),
            Err(error) => Err(error),
        }
    };
}

impl Client {
    pub async fn search_catalog(&self, query: &str) -> Result<SearchResponse> {
        let url = self.search_url(query)?;
        info!("searching catalog for \"{query}\"");

        let results: SearchResults = get!(self, url)?;
        debug!("catalog returned {} results", results.result_count);

        Ok(results.into())
    }

    pub async fn fetch_lyrics(&self, track: &str, artist: &str) -> Result<LyricsResult> {
        let url = self.lyrics_url(track, artist)?;
        info!("fetching lyrics for \"{track}\" by \"{artist}\"");

        let lyrics: Lyrics = get!(self, url)?;

        Ok(lyrics.into())
    }

    /// `<catalog>/search?term=<query>`, spaces encoded as `+`.
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.catalog_url.join(&Endpoint::Search.to_string())?;
        url.query_pairs_mut().append_pair("term", query);

        Ok(url)
    }

    pub fn lyrics_url(&self, track: &str, artist: &str) -> Result<Url> {
        let mut url = self.lyrics_url.join(&Endpoint::Lyrics.to_string())?;
        url.query_pairs_mut()
            .append_pair("func", "getSong")
            .append_pair("artist", artist)
            .append_pair("song", track)
            .append_pair("fmt", "realjson");

        Ok(url)
    }

    async fn make_get_call(&self, url: Url) -> Result<String> {
        debug!("calling {url}");
        let response = self.client.request(Method::GET, url).send().await?;

        handle_response(response).await
    }
}

async fn handle_response(response: Response) -> Result<String> {
    if response.status() == StatusCode::OK {
        let body = response.text().await?;
        non_empty_body(body)
    } else {
        error!("request failed with status {}", response.status());
        Err(Error::Transport {
            message: response.status().to_string(),
        })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|error| Error::DeserializeJSON {
        message: error.to_string(),
    })
}

fn non_empty_body(body: String) -> Result<String> {
    if body.trim().is_empty() {
        Err(Error::DataUnavailable)
    } else {
        Ok(body)
    }
}

// Url::join drops the last path segment unless the base ends with a slash.
fn base_url(url: &str) -> Result<Url> {
    if url.ends_with('/') {
        Ok(Url::parse(url)?)
    } else {
        Ok(Url::parse(&format!("{url}/"))?)
    }
}
