// Pexels API models
// https://www.pexels.com/api/documentation/

use serde::{Deserialize, Serialize};

/// Envelope shared by `/curated` and `/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PexelsPhotosResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PexelsPhoto {
    #[serde(default)]
    pub id: Option<u64>,
    pub src: PexelsSrc,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub photographer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PexelsSrc {
    pub large: String,
    pub medium: String,
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
}
