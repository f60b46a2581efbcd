use serde::{Deserialize, Serialize};

/// `GET /img/neko` - one random image per call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NekoImage {
    pub url: String,
}
