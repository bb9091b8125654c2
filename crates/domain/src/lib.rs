//! # HRMS Domain
//!
//! Business domain types and models for the judiciary HRMS profile engine.
//!
//! This crate contains:
//! - Employee records, employment history blocks, leaves and disciplinary
//!   actions
//! - Financial and compliance sub-records, document metadata, master data
//! - The tagged [`DateValue`] that replaces string date sentinels
//! - Domain error types and Result definitions
//! - Configuration structures and domain constants
//!
//! ## Architecture
//! - No dependencies on other HRMS crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::dates::{days_in_month, format_date, format_display_date};
