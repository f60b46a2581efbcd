use crate::{
    modules::provider::{
        domain::{ImageSource, LikesSynthesizer, ProviderConfig},
        infrastructure::{
            adapters::{mapper::ImageMapper, unsplash::mapper::UnsplashMapper},
            http_client::RateLimitClient,
        },
        traits::{FetchRequest, ImageProvider, ProviderPage},
    },
    shared::{errors::AppResult, utils::logger::LogContext, utils::logger::TimedOperation},
};
use async_trait::async_trait;

use super::models::*;

/// Unsplash gives no page count when browsing the editorial feed
const BROWSE_TOTAL_PAGES: u32 = 50;

/// Curated-photo provider: Unsplash REST API
pub struct UnsplashAdapter {
    http_client: RateLimitClient,
    config: ProviderConfig,
    access_key: String,
    mapper: UnsplashMapper,
}

impl UnsplashAdapter {
    pub fn new(access_key: String) -> Self {
        Self::with_config(ProviderConfig::new(ImageSource::Curated), access_key)
    }

    /// Create adapter against a custom endpoint (for testing)
    pub fn with_config(config: ProviderConfig, access_key: String) -> Self {
        Self {
            http_client: RateLimitClient::for_unsplash(&config),
            mapper: UnsplashMapper::new(LikesSynthesizer::for_provider(&config)),
            config,
            access_key,
        }
    }

    fn params(&self, request: &FetchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", request.page.to_string()),
            ("per_page", request.quota.to_string()),
            ("client_id", self.access_key.clone()),
        ];
        if let Some(query) = request.query() {
            params.push(("query", query.to_string()));
        }
        params
    }
}

#[async_trait]
impl ImageProvider for UnsplashAdapter {
    fn source(&self) -> ImageSource {
        ImageSource::Curated
    }

    async fn fetch(&self, request: &FetchRequest) -> AppResult<ProviderPage> {
        let params = self.params(request);
        let timer = TimedOperation::new("Unsplash fetch");

        let (photos, total_pages) = match request.query() {
            Some(query) => {
                let url = self.config.endpoint("/search/photos");
                LogContext::api_call("Unsplash", &url, "search", None);
                log::info!("Unsplash: Searching for '{}' (page {})", query, request.page);

                let response: UnsplashSearchResponse =
                    self.http_client.get_json(&url, &params, &[]).await?;
                (response.results, response.total_pages.unwrap_or(1))
            }
            None => {
                let url = self.config.endpoint("/photos");
                LogContext::api_call("Unsplash", &url, "browse", None);

                let photos: Vec<UnsplashPhoto> =
                    self.http_client.get_json(&url, &params, &[]).await?;
                (photos, BROWSE_TOTAL_PAGES)
            }
        };

        let records = self.mapper.map_to_records(photos, request.quota);
        let elapsed = timer.elapsed_ms();
        LogContext::api_call(
            "Unsplash",
            &self.config.base_url,
            &format!("{} images", records.len()),
            Some(elapsed),
        );

        Ok(ProviderPage::new(records, Some(total_pages)))
    }
}
