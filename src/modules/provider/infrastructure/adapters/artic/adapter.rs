use crate::{
    modules::provider::{
        domain::{ImageSource, LikesSynthesizer, ProviderConfig},
        infrastructure::{
            adapters::{artic::mapper::ArticMapper, mapper::ImageMapper},
            http_client::RateLimitClient,
        },
        traits::{FetchRequest, HealthProbe, ImageProvider, ProviderPage},
    },
    shared::{errors::AppResult, utils::logger::LogContext},
};
use async_trait::async_trait;
use std::time::{Duration, Instant};

use super::models::*;

const ARTWORK_FIELDS: &str = "image_id,title,artist_title";

/// Museum-artwork provider: Art Institute of Chicago public API
pub struct ArticAdapter {
    http_client: RateLimitClient,
    config: ProviderConfig,
    mapper: ArticMapper,
    probe_timeout: Duration,
}

impl ArticAdapter {
    pub fn new() -> Self {
        Self::with_config(ProviderConfig::new(ImageSource::Artwork))
    }

    /// Create adapter against a custom endpoint (for testing)
    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            http_client: RateLimitClient::for_artic(&config),
            mapper: ArticMapper::new(LikesSynthesizer::for_provider(&config)),
            config,
            probe_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }
}

impl Default for ArticAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageProvider for ArticAdapter {
    fn source(&self) -> ImageSource {
        ImageSource::Artwork
    }

    async fn fetch(&self, request: &FetchRequest) -> AppResult<ProviderPage> {
        let mut params = vec![
            ("limit", request.quota.to_string()),
            ("page", request.page.to_string()),
            ("fields", ARTWORK_FIELDS.to_string()),
        ];
        let url = match request.query() {
            Some(query) => {
                params.push(("q", query.to_string()));
                self.config.endpoint("/artworks/search")
            }
            None => self.config.endpoint("/artworks"),
        };

        let start = Instant::now();
        LogContext::api_call("Art Institute", &url, "", None);

        let response: ArticListResponse = self.http_client.get_json(&url, &params, &[]).await?;
        let received = response.data.len();
        let records = self.mapper.map_to_records(response.data, request.quota);

        LogContext::api_call(
            "Art Institute",
            &url,
            &format!("{} images from {} artworks", records.len(), received),
            Some(start.elapsed().as_millis() as u64),
        );

        // Artwork totals count records without images, so they don't feed the page estimate
        Ok(ProviderPage::new(records, None))
    }

    async fn probe(&self) -> AppResult<HealthProbe> {
        let url = format!(
            "{}?limit=1&fields=image_id,title",
            self.config.endpoint("/artworks")
        );
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
