//! Welfare-scheme screening for assisted service desks: transcript intake,
//! attribute extraction, and fail-open eligibility matching over a scheme
//! catalog.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
