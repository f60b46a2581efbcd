pub mod download_target;

pub use download_target::{DownloadTarget, DEFAULT_CONTENT_TYPE, DEFAULT_DOWNLOAD_FILENAME};
