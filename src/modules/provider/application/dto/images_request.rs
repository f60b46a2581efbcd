use serde::{Deserialize, Serialize};

use crate::shared::application::pagination::{PaginationParams, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::shared::errors::AppResult;
use crate::shared::utils::validation::Validator;

/// Query string of `GET /images`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImagesRequest {
    pub query: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ImagesRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Trimmed query, `None` when blank
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    pub fn pagination(&self) -> AppResult<PaginationParams> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        Validator::validate_page(page)?;
        Validator::validate_per_page(per_page)?;
        Ok(PaginationParams::new(page, per_page))
    }
}
