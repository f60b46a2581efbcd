use crate::modules::provider::application::dto::{
    ImagesRequest, RelatedImagesRequest, WallpaperResponse, WallpaperSearchRequest,
};
use crate::modules::provider::domain::{AggregatedPage, FetchMode};
use crate::modules::provider::infrastructure::{
    adapters::wallpaperflare::{random_query, WallpaperFlareAdapter},
    monitoring::{HealthChecker, HealthReport},
    service::{AggregationEngine, RelatedImages, RelatedImagesResolver, RELATED_PAGE_SIZE},
};
use crate::shared::errors::AppResult;
use crate::shared::utils::validation::Validator;
use std::sync::Arc;

/// Application service behind every image route
///
/// Validates client input, then delegates to the aggregation engine, the
/// related-images resolver, the wallpaper scraper or the health checker.
/// Only client-input problems surface as errors here.
#[derive(Clone)]
pub struct ImageService {
    engine: Arc<AggregationEngine>,
    related: Arc<RelatedImagesResolver>,
    wallpapers: Arc<WallpaperFlareAdapter>,
    health: Arc<HealthChecker>,
}

impl ImageService {
    pub fn new(
        engine: Arc<AggregationEngine>,
        wallpapers: Arc<WallpaperFlareAdapter>,
        health: Arc<HealthChecker>,
    ) -> Self {
        let related = Arc::new(RelatedImagesResolver::new(
            Arc::clone(&engine),
            Arc::clone(&wallpapers),
        ));

        Self {
            engine,
            related,
            wallpapers,
            health,
        }
    }

    pub async fn images(&self, request: &ImagesRequest) -> AppResult<AggregatedPage> {
        let pagination = request.pagination()?;
        Ok(self
            .engine
            .aggregate(request.query(), pagination, FetchMode::Primary)
            .await)
    }

    pub async fn related_images(&self, request: &RelatedImagesRequest) -> AppResult<RelatedImages> {
        let source = request.source()?;
        let page = request.page()?;
        Ok(self
            .related
            .resolve(source, request.query.as_deref(), page, RELATED_PAGE_SIZE)
            .await)
    }

    pub async fn random_wallpapers(&self) -> WallpaperResponse {
        let query = random_query().to_string();
        let images = self.wallpapers.search(&query, 1).await;

        WallpaperResponse {
            images,
            query,
            page: 1,
            is_random: true,
        }
    }

    pub async fn search_wallpapers(
        &self,
        request: &WallpaperSearchRequest,
    ) -> AppResult<WallpaperResponse> {
        let query = Validator::require_param(request.query.as_deref(), "query")?;
        let page = request.page();
        let images = self.wallpapers.search(&query, page).await;

        Ok(WallpaperResponse {
            images,
            query,
            page,
            is_random: false,
        })
    }

    pub async fn health(&self) -> HealthReport {
        self.health.check_all().await
    }
}
