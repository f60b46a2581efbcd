pub mod aggregation;
pub mod related_images;

pub use aggregation::AggregationEngine;
pub use related_images::{RelatedImages, RelatedImagesResolver, RELATED_PAGE_SIZE};
