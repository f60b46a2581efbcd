pub mod artic;
pub mod mapper;
pub mod nekos;
pub mod pexels;
pub mod unsplash;
pub mod wallpaperflare;

pub use artic::ArticAdapter;
pub use mapper::ImageMapper;
pub use nekos::NekosAdapter;
pub use pexels::PexelsAdapter;
pub use unsplash::UnsplashAdapter;
pub use wallpaperflare::WallpaperFlareAdapter;
