pub mod fetch_budgeter;
pub mod likes_synthesizer;

pub use fetch_budgeter::{
    BudgetPolicy, FetchBudgeter, FetchMode, FetchPlan, PlannedFetch, QuotaRule, SkipReason,
};
pub use likes_synthesizer::LikesSynthesizer;
