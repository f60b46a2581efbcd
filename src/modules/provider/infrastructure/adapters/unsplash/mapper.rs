use super::models::UnsplashPhoto;
use crate::modules::provider::domain::{ImageRecord, ImageSource, LikesSynthesizer};
use crate::modules::provider::infrastructure::adapters::mapper::ImageMapper;

pub struct UnsplashMapper {
    likes: LikesSynthesizer,
}

impl UnsplashMapper {
    pub fn new(likes: LikesSynthesizer) -> Self {
        Self { likes }
    }
}

impl ImageMapper<UnsplashPhoto> for UnsplashMapper {
    fn map_to_record(&self, photo: UnsplashPhoto) -> Option<ImageRecord> {
        let author = photo
            .user
            .and_then(|user| user.name.or(user.username));

        Some(
            ImageRecord::new(ImageSource::Curated, photo.urls.regular)
                .with_thumbnail(Some(photo.urls.small))
                .with_alt(photo.alt_description.or(photo.description))
                .with_author(author)
                .with_likes(self.likes.resolve(photo.likes)),
        )
    }
}
