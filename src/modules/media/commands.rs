use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::modules::media::application::dto::*;
use crate::shared::errors::AppError;
use crate::shared::infrastructure::AppState;

/// Register a like. Nothing is stored; the count is fabricated per call
pub async fn like_image(
    State(state): State<AppState>,
    body: Option<Json<LikeImageRequest>>,
) -> Response {
    let request = body.map(|Json(request)| request).unwrap_or_default();

    match state.media_service.like_image(&request) {
        Ok(liked) => Json(liked).into_response(),
        Err(AppError::InvalidInput(message)) => (
            StatusCode::BAD_REQUEST,
            Json(LikeImageResponse::rejected(message)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Proxy a remote image back to the browser as an attachment
pub async fn download_image(
    State(state): State<AppState>,
    Query(request): Query<DownloadImageRequest>,
) -> Response {
    let download = match state.media_service.download(&request).await {
        Ok(download) => download,
        Err(AppError::InvalidInput(message)) => {
            return (StatusCode::BAD_REQUEST, message).into_response()
        }
        Err(e) => return e.into_response(),
    };

    let disposition = download.target.content_disposition();
    let body = Body::from(download.body);

    (
        [
            (header::CONTENT_TYPE, download.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}
