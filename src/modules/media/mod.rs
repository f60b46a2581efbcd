pub mod application;
pub mod commands;
pub mod domain;

// Re-export commonly used types
pub use application::MediaService;
pub use domain::DownloadTarget;
