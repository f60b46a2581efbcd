use crate::{
    modules::provider::{
        domain::{ImageRecord, ImageSource, LikesSynthesizer, ProviderConfig},
        infrastructure::http_client::RateLimitClient,
        traits::{FetchRequest, HealthProbe, ImageProvider, ProviderPage},
    },
    shared::{
        errors::{AppError, AppResult},
        utils::logger::LogContext,
    },
};
use async_trait::async_trait;
use futures::future::join_all;
use std::time::{Duration, Instant};

use super::models::NekoImage;

const NEKOS_AUTHOR: &str = "Nekos.life";
const IMAGE_PATH: &str = "/img/neko";

/// Anime-image provider: nekos.life, which returns a single image per call
pub struct NekosAdapter {
    http_client: RateLimitClient,
    config: ProviderConfig,
    likes: LikesSynthesizer,
    probe_timeout: Duration,
}

impl NekosAdapter {
    pub fn new() -> Self {
        Self::with_config(ProviderConfig::new(ImageSource::Anime))
    }

    /// Create adapter against a custom endpoint (for testing)
    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            http_client: RateLimitClient::for_nekos(&config),
            likes: LikesSynthesizer::for_provider(&config),
            config,
            probe_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    fn to_record(&self, image: NekoImage) -> ImageRecord {
        ImageRecord::new(ImageSource::Anime, image.url)
            .with_author(Some(NEKOS_AUTHOR.to_string()))
            .with_likes(self.likes.synthesize())
    }
}

impl Default for NekosAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageProvider for NekosAdapter {
    fn source(&self) -> ImageSource {
        ImageSource::Anime
    }

    /// Performs `quota` independent single-image calls concurrently.
    ///
    /// Individual failures are tolerated; the call only fails when every
    /// attempt failed.
    async fn fetch(&self, request: &FetchRequest) -> AppResult<ProviderPage> {
        let url = self.config.endpoint(IMAGE_PATH);
        let attempts = request.quota.max(1);
        let start = Instant::now();

        let calls = (0..attempts).map(|_| self.http_client.get_json::<NekoImage>(&url, &[], &[]));
        let results = join_all(calls).await;

        let mut records = Vec::with_capacity(attempts);
        let mut last_error: Option<AppError> = None;
        for (attempt, result) in results.into_iter().enumerate() {
            match result {
                Ok(image) => records.push(self.to_record(image)),
                Err(e) => {
                    log::debug!("Nekos: call {}/{} failed: {}", attempt + 1, attempts, e);
                    last_error = Some(e);
                }
            }
        }

        LogContext::api_call(
            "Nekos",
            &url,
            &format!("{}/{} images", records.len(), attempts),
            Some(start.elapsed().as_millis() as u64),
        );

        match (records.is_empty(), last_error) {
            (true, Some(e)) => Err(e),
            _ => Ok(ProviderPage::new(records, None)),
        }
    }

    async fn probe(&self) -> AppResult<HealthProbe> {
        let url = self.config.endpoint(IMAGE_PATH);
        let raw = self.http_client.probe(&url, self.probe_timeout).await?;
        let working = raw.is_success();
        let response = if working {
            serde_json::from_str(&raw.body)?
        } else {
            serde_json::Value::String(raw.body)
        };

        Ok(HealthProbe {
            status: raw.status,
            working,
            response,
        })
    }
}
