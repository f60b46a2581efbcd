use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::modules::{media::commands::*, provider::commands::*};
use crate::shared::infrastructure::{middleware::trace_request, AppState};

/// Single source of truth for every HTTP route
pub fn router(state: AppState) -> Router {
    Router::new()
        // Aggregation
        .route("/images", get(get_images))
        .route("/related_images", get(get_related_images))
        // Wallpaper scraping
        .route("/wallpaper/random", get(get_random_wallpapers))
        .route("/wallpaper/search", get(search_wallpapers))
        // Provider health
        .route("/test", get(test_providers))
        // Media
        .route("/like_image", post(like_image))
        .route("/download_image", get(download_image))
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}
