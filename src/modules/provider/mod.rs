pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use application::ImageService;
pub use domain::{AggregatedPage, FetchBudgeter, ImageRecord, ImageSource};
pub use infrastructure::{AggregationEngine, HealthChecker, RelatedImagesResolver};
pub use traits::ImageProvider;
