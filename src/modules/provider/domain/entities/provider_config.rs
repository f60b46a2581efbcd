use std::ops::RangeInclusive;
use std::time::Duration;

use crate::modules::provider::domain::value_objects::ImageSource;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Static description of one provider: where it lives and what it can supply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub source: ImageSource,
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Whether the provider reports real like counts
    pub provides_authoritative_likes: bool,
    /// Range for placeholder likes when the provider has none
    pub synthetic_likes: RangeInclusive<u32>,
}

impl ProviderConfig {
    pub fn new(source: ImageSource) -> Self {
        let (base_url, provides_authoritative_likes, synthetic_likes) = match source {
            ImageSource::Curated => ("https://api.unsplash.com", true, 0..=0),
            ImageSource::Stock => ("https://api.pexels.com/v1", false, 50..=5000),
            ImageSource::Anime => ("https://nekos.life/api/v2", false, 10..=1000),
            ImageSource::Artwork => ("https://api.artic.edu/api/v1", false, 100..=10000),
            ImageSource::Wallpaper => ("https://www.wallpaperflare.com", false, 100..=10000),
        };

        Self {
            source,
            base_url: base_url.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            provides_authoritative_likes,
            synthetic_likes,
        }
    }

    /// Point the provider at another host (used for mock servers in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_seconds = timeout.as_secs().max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
