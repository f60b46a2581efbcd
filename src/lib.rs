pub mod commands;
pub mod modules;
pub mod shared;

use axum::Router;
use std::sync::Arc;

use modules::{
    media::MediaService,
    provider::{
        domain::{BudgetPolicy, FetchBudgeter, ImageSource, ProviderConfig},
        infrastructure::{
            adapters::{
                ArticAdapter, NekosAdapter, PexelsAdapter, UnsplashAdapter, WallpaperFlareAdapter,
            },
            http_client::RateLimitClient,
        },
        AggregationEngine, HealthChecker, ImageProvider, ImageService,
    },
};
use shared::{infrastructure::AppState, AppConfig};

/// Adapters for every aggregated provider the configuration enables
pub fn build_providers(config: &AppConfig) -> Vec<Arc<dyn ImageProvider>> {
    let provider_config =
        |source: ImageSource| ProviderConfig::new(source).with_timeout(config.request_timeout);
    let mut providers: Vec<Arc<dyn ImageProvider>> = Vec::new();

    if let Some(key) = &config.credentials.unsplash_access_key {
        providers.push(Arc::new(UnsplashAdapter::with_config(
            provider_config(ImageSource::Curated),
            key.clone(),
        )));
    }
    if let Some(key) = &config.credentials.pexels_api_key {
        providers.push(Arc::new(PexelsAdapter::with_config(
            provider_config(ImageSource::Stock),
            key.clone(),
        )));
    }
    if config.enabled.contains(ImageSource::Anime) {
        providers.push(Arc::new(
            NekosAdapter::with_config(provider_config(ImageSource::Anime))
                .with_probe_timeout(config.health_check_timeout),
        ));
    }
    if config.enabled.contains(ImageSource::Artwork) {
        providers.push(Arc::new(
            ArticAdapter::with_config(provider_config(ImageSource::Artwork))
                .with_probe_timeout(config.health_check_timeout),
        ));
    }

    log::info!(
        "Aggregating from: {}",
        providers
            .iter()
            .map(|p| p.source().provider_name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    providers
}

/// Wire every service from configuration
pub fn build_state(config: &AppConfig) -> AppState {
    let providers = build_providers(config);
    let budgeter = FetchBudgeter::new(BudgetPolicy::default(), config.enabled.clone());
    let engine = Arc::new(AggregationEngine::new(
        providers.clone(),
        budgeter,
        config.provider_deadline,
    ));
    let health = Arc::new(HealthChecker::new(providers, config.health_check_timeout));
    let wallpapers = Arc::new(WallpaperFlareAdapter::with_config(
        ProviderConfig::new(ImageSource::Wallpaper).with_timeout(config.request_timeout),
    ));

    let image_service = Arc::new(ImageService::new(engine, wallpapers, health));
    let media_service = Arc::new(MediaService::new(Arc::new(RateLimitClient::for_downloads(
        config.request_timeout,
    ))));

    AppState::new(image_service, media_service)
}

pub fn app(config: &AppConfig) -> Router {
    commands::router(build_state(config))
}
