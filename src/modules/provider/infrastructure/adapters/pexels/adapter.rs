use crate::{
    modules::provider::{
        domain::{ImageSource, LikesSynthesizer, ProviderConfig},
        infrastructure::{
            adapters::{
                mapper::ImageMapper,
                pexels::mapper::{estimate_total_pages, PexelsMapper},
            },
            http_client::RateLimitClient,
        },
        traits::{FetchRequest, ImageProvider, ProviderPage},
    },
    shared::{errors::AppResult, utils::logger::LogContext},
};
use async_trait::async_trait;
use std::time::Instant;

use super::models::*;

/// Stock-photo provider: Pexels REST API
pub struct PexelsAdapter {
    http_client: RateLimitClient,
    config: ProviderConfig,
    api_key: String,
    mapper: PexelsMapper,
}

impl PexelsAdapter {
    pub fn new(api_key: String) -> Self {
        Self::with_config(ProviderConfig::new(ImageSource::Stock), api_key)
    }

    /// Create adapter against a custom endpoint (for testing)
    pub fn with_config(config: ProviderConfig, api_key: String) -> Self {
        Self {
            http_client: RateLimitClient::for_pexels(&config),
            mapper: PexelsMapper::new(LikesSynthesizer::for_provider(&config)),
            config,
            api_key,
        }
    }
}

#[async_trait]
impl ImageProvider for PexelsAdapter {
    fn source(&self) -> ImageSource {
        ImageSource::Stock
    }

    async fn fetch(&self, request: &FetchRequest) -> AppResult<ProviderPage> {
        let mut params = vec![
            ("per_page", request.quota.to_string()),
            ("page", request.page.to_string()),
        ];
        let url = match request.query() {
            Some(query) => {
                params.push(("query", query.to_string()));
                self.config.endpoint("/search")
            }
            None => self.config.endpoint("/curated"),
        };
        let headers = [("Authorization", self.api_key.clone())];

        let start = Instant::now();
        LogContext::api_call("Pexels", &url, "", None);

        let response: PexelsPhotosResponse =
            self.http_client.get_json(&url, &params, &headers).await?;

        let total_pages = estimate_total_pages(response.total_results, request.page_size);
        let records = self.mapper.map_to_records(response.photos, request.quota);

        LogContext::api_call(
            "Pexels",
            &url,
            &format!("{} images", records.len()),
            Some(start.elapsed().as_millis() as u64),
        );

        Ok(ProviderPage::new(records, Some(total_pages)))
    }
}
