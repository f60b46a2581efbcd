/// Shared infrastructure concerns
///
/// Infrastructure used by more than one bounded context: handler state and
/// HTTP middleware.
pub mod app_state;
pub mod middleware;

pub use app_state::AppState;
