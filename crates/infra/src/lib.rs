//! # HRMS Infrastructure
//!
//! File-backed adapters around the pure profile engine.
//!
//! This crate contains:
//! - Configuration loading from `HRMS_*` variables or JSON/TOML files
//! - JSON snapshot readers for employees and master data
//! - The in-memory master-data catalog implementing
//!   [`MasterDataLookup`](hrms_core::MasterDataLookup)
//! - Clock selection and `tracing` subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `hrms-core`
//! - Depends on `hrms-common`, `hrms-domain` and `hrms-core`
//! - Contains all "impure" code (file I/O, environment, global subscriber)

pub mod clock;
pub mod config;
pub mod errors;
pub mod master_data;
pub mod observability;
pub mod snapshot;

// Re-export commonly used items
pub use clock::clock_from_config;
pub use errors::LoadError;
pub use master_data::InMemoryMasterData;
pub use observability::init_tracing;
pub use snapshot::{load_master_data, EmployeeSnapshotReader};
