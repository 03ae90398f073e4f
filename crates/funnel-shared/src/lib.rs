//! # Funnel Shared
//!
//! Shared utilities, types, configuration, and telemetry for the review
//! funnel application.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;

pub use types::*;
