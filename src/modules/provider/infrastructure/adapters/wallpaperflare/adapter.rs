use crate::{
    modules::provider::{
        domain::{ImageRecord, ImageSource, LikesSynthesizer, ProviderConfig},
        infrastructure::http_client::RateLimitClient,
        traits::{FetchRequest, ImageProvider, ProviderPage},
    },
    shared::{errors::AppResult, utils::logger::LogContext},
};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Instant;

pub const WALLPAPER_AUTHOR: &str = "WallpaperFlare";
const LAZY_SRC_ATTR: &str = "data-src";

/// Scraped-wallpaper provider: WallpaperFlare search result pages
///
/// The site has no API. Results are read from the lazy-loaded `<img>` of
/// each `<figure>` on the search page. Any failure yields an empty page.
pub struct WallpaperFlareAdapter {
    http_client: RateLimitClient,
    config: ProviderConfig,
    likes: LikesSynthesizer,
}

impl WallpaperFlareAdapter {
    pub fn new() -> Self {
        Self::with_config(ProviderConfig::new(ImageSource::Wallpaper))
    }

    /// Create adapter against a custom endpoint (for testing)
    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            http_client: RateLimitClient::for_wallpaperflare(&config),
            likes: LikesSynthesizer::for_provider(&config),
            config,
        }
    }

    /// Search URL; words are joined with `+` the way the site's own form does
    pub fn search_url(&self, query: &str, page: u32) -> String {
        let words: Vec<String> = query
            .split_whitespace()
            .map(|word| urlencoding::encode(word).into_owned())
            .collect();
        format!(
            "{}?wallpaper={}&page={}",
            self.config.endpoint("/search"),
            words.join("+"),
            page.max(1)
        )
    }

    /// Raw image URLs for a query, or an empty list on any failure
    pub async fn search(&self, query: &str, page: u32) -> Vec<String> {
        let url = self.search_url(query, page);
        let start = Instant::now();

        let raw = match self.http_client.get_raw(&url, &[]).await {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("WallpaperFlare: request for '{}' failed: {}", query, e);
                return Vec::new();
            }
        };

        if raw.status != 200 {
            log::warn!("WallpaperFlare: failed to load page, status {}", raw.status);
            return Vec::new();
        }

        let images = extract_image_urls(&raw.body);
        LogContext::api_call(
            "WallpaperFlare",
            &url,
            &format!("{} images", images.len()),
            Some(start.elapsed().as_millis() as u64),
        );
        images
    }

    pub fn to_record(&self, url: String, query: &str) -> ImageRecord {
        ImageRecord::new(ImageSource::Wallpaper, url)
            .with_alt(Some(query.to_string()))
            .with_author(Some(WALLPAPER_AUTHOR.to_string()))
            .with_likes(self.likes.synthesize())
    }
}

impl Default for WallpaperFlareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy-load sources of the first image inside each `<figure>`
pub fn extract_image_urls(html: &str) -> Vec<String> {
    let (Ok(figure), Ok(img)) = (Selector::parse("figure"), Selector::parse("img")) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    document
        .select(&figure)
        .filter_map(|fig| fig.select(&img).next())
        .filter_map(|image| image.value().attr(LAZY_SRC_ATTR))
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl ImageProvider for WallpaperFlareAdapter {
    fn source(&self) -> ImageSource {
        ImageSource::Wallpaper
    }

    async fn fetch(&self, request: &FetchRequest) -> AppResult<ProviderPage> {
        let query = request
            .query()
            .map(str::to_string)
            .unwrap_or_else(|| super::random_query().to_string());

        let records = self
            .search(&query, request.page)
            .await
            .into_iter()
            .take(request.quota)
            .map(|url| self.to_record(url, &query))
            .collect();

        Ok(ProviderPage::new(records, None))
    }
}
