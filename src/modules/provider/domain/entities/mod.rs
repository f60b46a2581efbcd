pub mod aggregated_page;
pub mod image_record;
pub mod provider_config;

pub use aggregated_page::{AggregatedPage, PageEstimate};
pub use image_record::{default_alt, ImageRecord, UNKNOWN_AUTHOR};
pub use provider_config::ProviderConfig;
