use rand::Rng;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::modules::media::application::dto::{
    DownloadImageRequest, LikeImageRequest, LikeImageResponse,
};
use crate::modules::media::domain::{DownloadTarget, DEFAULT_CONTENT_TYPE};
use crate::modules::provider::infrastructure::http_client::RateLimitClient;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::validation::Validator;

/// Fabricated base like count; nothing is persisted
const LIKE_BASE_RANGE: RangeInclusive<u32> = 100..=10000;

/// An upstream image, fully read, ready to be sent back to the client
#[derive(Debug)]
pub struct ImageDownload {
    pub target: DownloadTarget,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Media operations that are not part of aggregation: likes and downloads
#[derive(Clone)]
pub struct MediaService {
    http_client: Arc<RateLimitClient>,
}

impl MediaService {
    pub fn new(http_client: Arc<RateLimitClient>) -> Self {
        Self { http_client }
    }

    /// Stateless like counter: every call reports a fresh random count plus one
    pub fn like_image(&self, request: &LikeImageRequest) -> AppResult<LikeImageResponse> {
        let image_url = Validator::require_param(request.image_url.as_deref(), "image URL")?;
        let base = rand::thread_rng().gen_range(LIKE_BASE_RANGE);
        log::debug!("Like registered for {}", image_url);

        Ok(LikeImageResponse::liked(base + 1))
    }

    /// Fetches the whole upstream image before anything is sent back, so a
    /// failed transfer still becomes an error status
    pub async fn download(&self, request: &DownloadImageRequest) -> AppResult<ImageDownload> {
        let target = DownloadTarget::new(request.url.as_deref(), request.filename.as_deref())?;
        log::info!("Proxying download of {} as {}", target.url, target.filename);

        let upstream = self
            .http_client
            .get_bytes(&target.url)
            .await
            .map_err(|e| AppError::DownstreamError(e.to_string()))?;
        log::debug!("Downloaded {} bytes from {}", upstream.body.len(), target.url);

        Ok(ImageDownload {
            target,
            content_type: upstream
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            body: upstream.body,
        })
    }
}
