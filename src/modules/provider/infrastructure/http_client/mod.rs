pub mod rate_limit_client;
pub mod retry_policy;

pub use rate_limit_client::{RateLimitClient, RawBytes, RawResponse, BROWSER_REFERER, BROWSER_USER_AGENT};
pub use retry_policy::{is_retryable_error, RateLimitInfo, RetryPolicy};
