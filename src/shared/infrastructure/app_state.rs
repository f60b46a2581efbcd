use std::sync::Arc;

use crate::modules::media::MediaService;
use crate::modules::provider::ImageService;

/// Services shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub image_service: Arc<ImageService>,
    pub media_service: Arc<MediaService>,
}

impl AppState {
    pub fn new(image_service: Arc<ImageService>, media_service: Arc<MediaService>) -> Self {
        Self {
            image_service,
            media_service,
        }
    }
}
