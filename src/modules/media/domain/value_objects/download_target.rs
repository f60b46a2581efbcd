use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::validation::Validator;

pub const DEFAULT_DOWNLOAD_FILENAME: &str = "downloaded_image.jpg";
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Remote image to proxy, and the name the browser should save it under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadTarget {
    pub url: String,
    pub filename: String,
}

impl DownloadTarget {
    pub fn new(url: Option<&str>, filename: Option<&str>) -> AppResult<Self> {
        let url = Validator::require_param(url, "image URL")?;
        let filename = filename
            .map(sanitize_filename)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_FILENAME.to_string());

        Ok(Self { url, filename })
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Strips characters that would break out of the quoted header value
fn sanitize_filename(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '"' | '\\' | '\r' | '\n') && !c.is_control())
        .collect()
}
