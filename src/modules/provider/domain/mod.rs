pub mod entities;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::*;
pub use services::{BudgetPolicy, FetchBudgeter, FetchMode, FetchPlan, LikesSynthesizer};
pub use value_objects::{Diagnostics, ImageSource, ProviderOutcome};
