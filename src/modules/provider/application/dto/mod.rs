pub mod images_request;
pub mod related_images_request;
pub mod wallpaper;

pub use images_request::*;
pub use related_images_request::*;
pub use wallpaper::*;
