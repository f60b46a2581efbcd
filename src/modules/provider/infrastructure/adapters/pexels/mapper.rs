use super::models::PexelsPhoto;
use crate::modules::provider::domain::{ImageRecord, ImageSource, LikesSynthesizer};
use crate::modules::provider::infrastructure::adapters::mapper::ImageMapper;

pub struct PexelsMapper {
    likes: LikesSynthesizer,
}

impl PexelsMapper {
    pub fn new(likes: LikesSynthesizer) -> Self {
        Self { likes }
    }
}

impl ImageMapper<PexelsPhoto> for PexelsMapper {
    fn map_to_record(&self, photo: PexelsPhoto) -> Option<ImageRecord> {
        Some(
            ImageRecord::new(ImageSource::Stock, photo.src.large)
                .with_thumbnail(Some(photo.src.medium))
                .with_alt(photo.alt)
                .with_author(photo.photographer)
                // Pexels has no like counts
                .with_likes(self.likes.resolve(None)),
        )
    }
}

/// `total_results / per_page + 1`, assuming 500 results when Pexels omits the total
pub fn estimate_total_pages(total_results: Option<u64>, page_size: usize) -> u32 {
    let total = total_results.unwrap_or(500);
    let pages = total / page_size.max(1) as u64 + 1;
    u32::try_from(pages).unwrap_or(u32::MAX)
}
