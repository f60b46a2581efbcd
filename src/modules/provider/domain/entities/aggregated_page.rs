use serde::{Deserialize, Serialize};

use super::ImageRecord;
use crate::modules::provider::domain::value_objects::Diagnostics;
use crate::shared::application::PageWindow;

/// One page of merged results from every provider that answered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedPage {
    pub images: Vec<ImageRecord>,
    pub current_page: u32,
    /// Approximate; see `PageEstimate`
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
    #[serde(rename = "debug")]
    pub diagnostics: Diagnostics,
}

impl AggregatedPage {
    pub fn new(images: Vec<ImageRecord>, window: PageWindow, diagnostics: Diagnostics) -> Self {
        Self {
            images,
            current_page: window.current_page,
            total_pages: window.total_pages,
            has_next: window.has_next,
            has_prev: window.has_prev,
            diagnostics,
        }
    }
}

/// Heuristic page-count estimate across providers.
///
/// Providers report incompatible totals (or none), so the result is an
/// upper bound for paging controls, not a count of available images.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageEstimate {
    max_reported: Option<u32>,
}

pub const BROWSE_TOTAL_PAGES: u32 = 50;
pub const SEARCH_MAX_TOTAL_PAGES: u32 = 20;

impl PageEstimate {
    pub fn observe(&mut self, provider_estimate: Option<u32>) {
        if let Some(pages) = provider_estimate {
            self.max_reported = Some(self.max_reported.map_or(pages, |m| m.max(pages)));
        }
    }

    /// Browsing (no query) is fixed at 50 pages; searches are capped at 20
    pub fn total_pages(&self, has_query: bool) -> u32 {
        if has_query {
            self.max_reported.unwrap_or(1).clamp(1, SEARCH_MAX_TOTAL_PAGES)
        } else {
            BROWSE_TOTAL_PAGES
        }
    }
}
