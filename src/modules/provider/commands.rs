use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::modules::provider::application::dto::*;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::AppState;

/// Aggregated, shuffled page across every configured provider
pub async fn get_images(
    State(state): State<AppState>,
    Query(request): Query<ImagesRequest>,
) -> AppResult<Response> {
    let page = state.image_service.images(&request).await?;
    Ok(Json(page).into_response())
}

/// More images from the same source as the one being viewed
pub async fn get_related_images(
    State(state): State<AppState>,
    Query(request): Query<RelatedImagesRequest>,
) -> AppResult<Response> {
    let related = state.image_service.related_images(&request).await?;
    Ok(Json(related).into_response())
}

pub async fn get_random_wallpapers(State(state): State<AppState>) -> Response {
    Json(state.image_service.random_wallpapers().await).into_response()
}

/// A search without a query is answered with an empty list and an error
/// message, not a failure status
pub async fn search_wallpapers(
    State(state): State<AppState>,
    Query(request): Query<WallpaperSearchRequest>,
) -> Response {
    match state.image_service.search_wallpapers(&request).await {
        Ok(found) => Json(found).into_response(),
        Err(AppError::InvalidInput(message)) => {
            Json(WallpaperErrorResponse::new(message)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Live probe of the providers that support one
pub async fn test_providers(State(state): State<AppState>) -> Response {
    Json(state.image_service.health().await).into_response()
}
