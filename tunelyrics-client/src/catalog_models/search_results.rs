use serde::{Deserialize, Serialize};
use tunelyrics_models::{SearchResponse, Track};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub result_count: i64,
    pub results: Option<Vec<CatalogItem>>,
}

/// One entry of a catalog search. The catalog mixes songs, albums, videos
/// and podcasts in the same list, and omits keys that do not apply.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub kind: Option<String>,
    pub artist_name: Option<String>,
    pub track_name: Option<String>,
    pub collection_name: Option<String>,
    #[serde(rename = "artworkUrl100")]
    pub artwork_url_100: Option<String>,
}

impl From<CatalogItem> for Track {
    fn from(item: CatalogItem) -> Self {
        Self {
            artist_name: item.artist_name,
            track_name: item.track_name,
            album_name: item.collection_name,
            artwork_url: item.artwork_url_100,
            media_kind: item.kind,
        }
    }
}

impl From<SearchResults> for SearchResponse {
    fn from(value: SearchResults) -> Self {
        Self {
            result_count: value.result_count,
            results: value
                .results
                .map(|items| items.into_iter().map(Into::into).collect()),
        }
    }
}
