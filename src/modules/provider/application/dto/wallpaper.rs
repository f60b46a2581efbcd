use serde::{Deserialize, Serialize};

use crate::shared::application::pagination::DEFAULT_PAGE;

/// Query string of `GET /wallpaper/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WallpaperSearchRequest {
    pub query: Option<String>,
    pub page: Option<u32>,
}

impl WallpaperSearchRequest {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }
}

/// Raw wallpaper URLs for one scraped page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperResponse {
    pub images: Vec<String>,
    pub query: String,
    pub page: u32,
    pub is_random: bool,
}

/// Body returned when a search arrives without a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperErrorResponse {
    pub images: Vec<String>,
    pub error: String,
}

impl WallpaperErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            images: Vec::new(),
            error: error.into(),
        }
    }
}
