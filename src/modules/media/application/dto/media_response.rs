use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeImageResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_likes_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LikeImageResponse {
    pub fn liked(new_likes_count: u32) -> Self {
        Self {
            success: true,
            new_likes_count: Some(new_likes_count),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            new_likes_count: None,
            message: Some(message.into()),
        }
    }
}
