use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::modules::provider::domain::ImageSource;
use crate::shared::application::pagination::DEFAULT_PAGE;
use crate::shared::errors::AppResult;
use crate::shared::utils::validation::Validator;

/// Query string of `GET /related_images`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedImagesRequest {
    pub source: Option<String>,
    pub query: Option<String>,
    pub page: Option<u32>,
}

impl RelatedImagesRequest {
    /// Requested source; curated when absent or blank
    pub fn source(&self) -> AppResult<ImageSource> {
        match self.source.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => ImageSource::from_str(raw),
            _ => Ok(ImageSource::Curated),
        }
    }

    pub fn page(&self) -> AppResult<u32> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        Validator::validate_page(page)?;
        Ok(page)
    }
}
