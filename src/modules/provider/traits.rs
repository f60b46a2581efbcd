use crate::modules::provider::domain::{ImageRecord, ImageSource};
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Parameters handed to a provider for one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    query: Option<String>,
    pub page: u32,
    /// Soft cap on the number of records this provider should return
    pub quota: usize,
    /// Page size of the surrounding aggregation, used for page estimates
    pub page_size: usize,
}

impl FetchRequest {
    pub fn new(query: Option<&str>, page: u32, quota: usize, page_size: usize) -> Self {
        Self {
            query: query
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_string),
            page: page.max(1),
            quota,
            page_size: page_size.max(1),
        }
    }

    /// Search terms, or `None` when browsing
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }
}

/// Normalized result of one provider call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderPage {
    pub records: Vec<ImageRecord>,
    /// Provider's own page-count estimate, if it has one
    pub total_pages: Option<u32>,
}

impl ProviderPage {
    pub fn new(records: Vec<ImageRecord>, total_pages: Option<u32>) -> Self {
        Self {
            records,
            total_pages,
        }
    }
}

/// Result of a provider health probe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProbe {
    pub status: u16,
    pub working: bool,
    pub response: serde_json::Value,
}

/// One image provider behind a uniform, normalized contract
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Source tag stamped on every record this provider produces
    fn source(&self) -> ImageSource;

    /// Fetch one page of normalized records
    async fn fetch(&self, request: &FetchRequest) -> AppResult<ProviderPage>;

    /// Cheap connectivity check (optional - not all providers expose one)
    async fn probe(&self) -> AppResult<HealthProbe> {
        Err(AppError::NotImplemented(format!(
            "Health probe not supported by {}",
            self.source()
        )))
    }
}
