pub mod media_request;
pub mod media_response;

pub use media_request::*;
pub use media_response::*;
