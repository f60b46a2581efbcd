use rand::seq::SliceRandom;

/// Queries used when a wallpaper request arrives without one
pub const RANDOM_WALLPAPER_QUERIES: [&str; 20] = [
    "nature",
    "abstract",
    "space",
    "city",
    "ocean",
    "mountain",
    "sunset",
    "forest",
    "anime",
    "cars",
    "technology",
    "art",
    "landscape",
    "minimalist",
    "dark",
    "colorful",
    "fantasy",
    "architecture",
    "flowers",
    "animals",
];

pub fn random_query() -> &'static str {
    RANDOM_WALLPAPER_QUERIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("nature")
}
