use serde::{Deserialize, Serialize};

/// Body of `POST /like_image`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LikeImageRequest {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Query string of `GET /download_image`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadImageRequest {
    pub url: Option<String>,
    pub filename: Option<String>,
}
