use rand::Rng;
use std::ops::RangeInclusive;

use crate::modules::provider::domain::entities::ProviderConfig;

/// Produces the `likes` value for a provider.
///
/// Providers flagged with `provides_authoritative_likes` pass their own
/// count through; every other provider gets a placeholder drawn from its
/// configured range. Adapters never call the RNG themselves.
#[derive(Debug, Clone)]
pub struct LikesSynthesizer {
    authoritative: bool,
    range: RangeInclusive<u32>,
}

impl LikesSynthesizer {
    pub fn new(authoritative: bool, range: RangeInclusive<u32>) -> Self {
        Self {
            authoritative,
            range,
        }
    }

    pub fn for_provider(config: &ProviderConfig) -> Self {
        Self::new(
            config.provides_authoritative_likes,
            config.synthetic_likes.clone(),
        )
    }

    /// Provider count when trusted (missing counts as 0), otherwise a placeholder
    pub fn resolve(&self, reported: Option<u32>) -> u32 {
        if self.authoritative {
            reported.unwrap_or(0)
        } else {
            self.synthesize()
        }
    }

    pub fn synthesize(&self) -> u32 {
        if self.range.is_empty() {
            return 0;
        }
        rand::thread_rng().gen_range(self.range.clone())
    }
}
