pub mod adapter;
pub mod catalogue;

pub use adapter::WallpaperFlareAdapter;
pub use catalogue::{random_query, RANDOM_WALLPAPER_QUERIES};
