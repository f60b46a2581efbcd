use serde::{Deserialize, Serialize};

use crate::modules::provider::domain::value_objects::ImageSource;

pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Normalized image, identical in shape whichever provider produced it.
///
/// Every field is always populated: adapters go through the `with_*`
/// setters, which fall back to provider defaults for missing values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRecord {
    pub url: String,
    pub thumbnail: String,
    pub source: ImageSource,
    pub alt: String,
    pub author: String,
    pub likes: u32,
}

impl ImageRecord {
    /// Record with every optional field at its default
    pub fn new(source: ImageSource, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            thumbnail: url.clone(),
            url,
            source,
            alt: default_alt(source).to_string(),
            author: UNKNOWN_AUTHOR.to_string(),
            likes: 0,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: Option<String>) -> Self {
        if let Some(thumbnail) = non_blank(thumbnail) {
            self.thumbnail = thumbnail;
        }
        self
    }

    pub fn with_alt(mut self, alt: Option<String>) -> Self {
        if let Some(alt) = non_blank(alt) {
            self.alt = alt;
        }
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        if let Some(author) = non_blank(author) {
            self.author = author;
        }
        self
    }

    pub fn with_likes(mut self, likes: u32) -> Self {
        self.likes = likes;
        self
    }

    /// True when no field is blank
    pub fn is_complete(&self) -> bool {
        !self.url.trim().is_empty()
            && !self.thumbnail.trim().is_empty()
            && !self.alt.trim().is_empty()
            && !self.author.trim().is_empty()
    }
}

/// Description used when a provider gives none
pub fn default_alt(source: ImageSource) -> &'static str {
    match source {
        ImageSource::Curated => "Unsplash image",
        ImageSource::Stock => "Pexels image",
        ImageSource::Anime => "Neko anime image",
        ImageSource::Artwork => "Art Institute artwork",
        ImageSource::Wallpaper => "Wallpaper",
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
