pub mod health_check;

pub use health_check::{HealthChecker, HealthReport, ProbeReport};
