pub mod adapters;
pub mod http_client;
pub mod monitoring;
pub mod service;

// Re-export commonly used types
pub use http_client::{RateLimitClient, RetryPolicy};
pub use monitoring::HealthChecker;
pub use service::{AggregationEngine, RelatedImagesResolver};
