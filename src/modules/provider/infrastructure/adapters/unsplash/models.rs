// Unsplash API models (only the fields we read)
// https://unsplash.com/documentation

use serde::{Deserialize, Serialize};

/// Envelope of `GET /search/photos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsplashSearchResponse {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsplashPhoto {
    #[serde(default)]
    pub id: Option<String>,
    pub urls: UnsplashUrls,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub likes: Option<u32>,
    #[serde(default)]
    pub user: Option<UnsplashUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsplashUrls {
    pub regular: String,
    pub small: String,
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsplashUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}
