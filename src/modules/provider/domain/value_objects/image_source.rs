use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Origin provider of an image
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// Curated-photo API (Unsplash)
    #[serde(alias = "unsplash")]
    Curated,
    /// Stock-photo API (Pexels)
    #[serde(alias = "pexels")]
    Stock,
    /// Anime-image API (nekos.life)
    #[serde(alias = "nekos")]
    Anime,
    /// Museum-artwork API (Art Institute of Chicago)
    #[serde(alias = "artic")]
    Artwork,
    /// HTML-scraped wallpaper site (WallpaperFlare)
    #[serde(alias = "wallpaperflare")]
    Wallpaper,
}

impl ImageSource {
    pub const ALL: [ImageSource; 5] = [
        ImageSource::Curated,
        ImageSource::Stock,
        ImageSource::Anime,
        ImageSource::Artwork,
        ImageSource::Wallpaper,
    ];

    /// Providers that take part in the multi-source aggregation, in call order
    pub const AGGREGATED: [ImageSource; 4] = [
        ImageSource::Curated,
        ImageSource::Stock,
        ImageSource::Anime,
        ImageSource::Artwork,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSource::Curated => "curated",
            ImageSource::Stock => "stock",
            ImageSource::Anime => "anime",
            ImageSource::Artwork => "artwork",
            ImageSource::Wallpaper => "wallpaper",
        }
    }

    /// Human-facing name of the upstream service
    pub fn provider_name(&self) -> &'static str {
        match self {
            ImageSource::Curated => "Unsplash",
            ImageSource::Stock => "Pexels",
            ImageSource::Anime => "Nekos",
            ImageSource::Artwork => "Art Institute",
            ImageSource::Wallpaper => "WallpaperFlare",
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "curated" | "unsplash" => Ok(ImageSource::Curated),
            "stock" | "pexels" => Ok(ImageSource::Stock),
            "anime" | "nekos" => Ok(ImageSource::Anime),
            "artwork" | "artic" => Ok(ImageSource::Artwork),
            "wallpaper" | "wallpaperflare" => Ok(ImageSource::Wallpaper),
            other => Err(AppError::InvalidInput(format!("Unknown image source: {}", other))),
        }
    }
}
