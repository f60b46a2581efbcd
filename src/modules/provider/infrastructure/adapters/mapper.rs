use crate::modules::provider::domain::ImageRecord;

/// Converts one provider-native item into a normalized `ImageRecord`
pub trait ImageMapper<T> {
    /// `None` when the item has nothing displayable (e.g. an artwork without an image)
    fn map_to_record(&self, source: T) -> Option<ImageRecord>;

    /// Map a batch, dropping undisplayable items and stopping at `limit`
    fn map_to_records(&self, sources: Vec<T>, limit: usize) -> Vec<ImageRecord> {
        sources
            .into_iter()
            .filter_map(|source| self.map_to_record(source))
            .take(limit)
            .collect()
    }
}
