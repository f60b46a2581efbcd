pub mod image_source;
pub mod provider_outcome;

pub use image_source::ImageSource;
pub use provider_outcome::{Diagnostics, ProviderOutcome};
