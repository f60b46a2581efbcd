pub mod dto;
pub mod services;

pub use services::MediaService;
