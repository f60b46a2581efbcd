use super::models::Artwork;
use crate::modules::provider::domain::{ImageRecord, ImageSource, LikesSynthesizer};
use crate::modules::provider::infrastructure::adapters::mapper::ImageMapper;

pub const IIIF_BASE_URL: &str = "https://www.artic.edu/iiif/2";
pub const FULL_WIDTH: u32 = 843;
pub const THUMBNAIL_WIDTH: u32 = 400;

/// IIIF image URL for an artwork at the given width
pub fn iiif_url(image_id: &str, width: u32) -> String {
    format!("{}/{}/full/{},/0/default.jpg", IIIF_BASE_URL, image_id, width)
}

pub struct ArticMapper {
    likes: LikesSynthesizer,
}

impl ArticMapper {
    pub fn new(likes: LikesSynthesizer) -> Self {
        Self { likes }
    }
}

impl ImageMapper<Artwork> for ArticMapper {
    /// Many artworks have no digitized image; those are dropped
    fn map_to_record(&self, artwork: Artwork) -> Option<ImageRecord> {
        let image_id = artwork.image_id.filter(|id| !id.trim().is_empty())?;

        Some(
            ImageRecord::new(ImageSource::Artwork, iiif_url(&image_id, FULL_WIDTH))
                .with_thumbnail(Some(iiif_url(&image_id, THUMBNAIL_WIDTH)))
                .with_alt(artwork.title)
                .with_author(artwork.artist_title)
                .with_likes(self.likes.resolve(None)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::domain::ProviderConfig;

    fn mapper() -> ArticMapper {
        ArticMapper::new(LikesSynthesizer::for_provider(&ProviderConfig::new(
            ImageSource::Artwork,
        )))
    }

    #[test]
    fn test_builds_iiif_urls() {
        let record = mapper()
            .map_to_record(Artwork {
                image_id: Some("1adf2696".to_string()),
                title: Some("Nighthawks".to_string()),
                artist_title: None,
            })
            .unwrap();

        assert_eq!(
            record.url,
            "https://www.artic.edu/iiif/2/1adf2696/full/843,/0/default.jpg"
        );
        assert_eq!(
            record.thumbnail,
            "https://www.artic.edu/iiif/2/1adf2696/full/400,/0/default.jpg"
        );
        assert_eq!(record.alt, "Nighthawks");
        assert_eq!(record.author, "Unknown");
        assert!((100..=10000).contains(&record.likes));
    }

    #[test]
    fn test_drops_artworks_without_image() {
        let artworks = vec![
            Artwork { image_id: None, title: Some("Lost".into()), artist_title: None },
            Artwork { image_id: Some(String::new()), title: None, artist_title: None },
            Artwork { image_id: Some("abc".into()), title: None, artist_title: None },
        ];

        let records = mapper().map_to_records(artworks, 10);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].alt, "Art Institute artwork");
    }
}
