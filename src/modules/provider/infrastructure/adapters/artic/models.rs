// Art Institute of Chicago API models
// https://api.artic.edu/docs/

use serde::{Deserialize, Serialize};

/// Envelope of `/artworks` and `/artworks/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticListResponse {
    #[serde(default)]
    pub data: Vec<Artwork>,
    #[serde(default)]
    pub pagination: Option<ArticPagination>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticPagination {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Only the fields requested through `fields=`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_title: Option<String>,
}
