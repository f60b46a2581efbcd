use crate::modules::provider::domain::{FetchMode, ImageRecord, ImageSource};
use crate::modules::provider::infrastructure::adapters::wallpaperflare::{
    random_query, WallpaperFlareAdapter,
};
use crate::modules::provider::infrastructure::service::AggregationEngine;
use crate::shared::application::pagination::PaginationParams;
use serde::Serialize;
use std::sync::Arc;

/// Page size of the related-images strip
pub const RELATED_PAGE_SIZE: u32 = 100;

/// Related strip for one source.
///
/// `source` is always the canonical name: a request for `unsplash` answers
/// with `curated`, matching the `source` field on every record.
#[derive(Debug, Clone, Serialize)]
pub struct RelatedImages {
    pub images: Vec<ImageRecord>,
    pub query: String,
    pub source: ImageSource,
}

/// Finds more images like one the user is looking at, from the same source
pub struct RelatedImagesResolver {
    engine: Arc<AggregationEngine>,
    wallpapers: Arc<WallpaperFlareAdapter>,
}

impl RelatedImagesResolver {
    pub fn new(engine: Arc<AggregationEngine>, wallpapers: Arc<WallpaperFlareAdapter>) -> Self {
        Self { engine, wallpapers }
    }

    pub async fn resolve(
        &self,
        source: ImageSource,
        query: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> RelatedImages {
        let query = query.map(str::trim).filter(|q| !q.is_empty());

        match source {
            ImageSource::Wallpaper => self.wallpaper_images(query, page, per_page).await,
            _ => self.from_aggregation(source, query, page, per_page).await,
        }
    }

    async fn wallpaper_images(&self, query: Option<&str>, page: u32, per_page: u32) -> RelatedImages {
        let query = query
            .map(str::to_string)
            .unwrap_or_else(|| random_query().to_string());
        let images = self
            .wallpapers
            .search(&query, page)
            .await
            .into_iter()
            .take(per_page as usize)
            .map(|url| self.wallpapers.to_record(url, &query))
            .collect();

        RelatedImages {
            images,
            query,
            source: ImageSource::Wallpaper,
        }
    }

    /// Over-fetch at twice the page size, keep only the requested source.
    /// An empty result for a real query falls back to one unfiltered pass.
    async fn from_aggregation(
        &self,
        source: ImageSource,
        query: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> RelatedImages {
        let doubled = PaginationParams::new(page, per_page.saturating_mul(2));
        let merged = self
            .engine
            .aggregate(query, doubled, FetchMode::Related)
            .await;

        let mut images: Vec<ImageRecord> = merged
            .images
            .into_iter()
            .filter(|image| image.source == source)
            .take(per_page as usize)
            .collect();

        if images.is_empty() {
            if let Some(q) = query {
                log::info!(
                    "Related: no {} images for '{}', falling back to all sources",
                    source,
                    q
                );
                let fallback = self
                    .engine
                    .aggregate(query, PaginationParams::new(page, per_page), FetchMode::Related)
                    .await;
                images = fallback.images;
                images.truncate(per_page as usize);
            }
        }

        RelatedImages {
            images,
            query: query.unwrap_or_default().to_string(),
            source,
        }
    }
}
