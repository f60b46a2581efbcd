use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ImageSource;

/// Per-provider diagnostic for a single aggregation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOutcome {
    pub success: bool,
    pub count: usize,
    pub error: Option<String>,
}

impl ProviderOutcome {
    pub fn succeeded(count: usize) -> Self {
        Self {
            success: true,
            count,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            count: 0,
            error: Some(error.into()),
        }
    }

    /// Provider not configured or not eligible for this query
    pub fn skipped() -> Self {
        Self {
            success: false,
            count: 0,
            error: None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        !self.success && self.error.is_none()
    }
}

pub type Diagnostics = BTreeMap<ImageSource, ProviderOutcome>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_has_no_error() {
        let outcome = ProviderOutcome::skipped();
        assert!(outcome.is_skipped());
        assert!(!ProviderOutcome::failed("boom").is_skipped());
        assert!(!ProviderOutcome::succeeded(0).is_skipped());
    }

    #[test]
    fn test_diagnostics_serialize_with_source_keys() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.insert(ImageSource::Stock, ProviderOutcome::failed("Status 401"));
        let json = serde_json::to_value(&diagnostics).unwrap();
        assert_eq!(json["stock"]["success"], false);
        assert_eq!(json["stock"]["error"], "Status 401");
    }
}
