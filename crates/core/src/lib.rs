//! # HRMS Core
//!
//! Pure business logic for the employee profile view.
//!
//! This crate contains:
//! - Calendar-exact and aggregated service duration math
//! - The employment-block classifier and history reordering
//! - Presentation adapters for compliance, financial records and documents
//! - Profile view assembly per [`ViewMode`](hrms_domain::ViewMode)
//!
//! ## Architecture Principles
//! - Only depends on `hrms-common` and `hrms-domain`
//! - No file, network or platform code
//! - Master data and "today" come in through traits
//! - Every function takes an immutable snapshot and never fails; bad data
//!   degrades to display placeholders

pub mod duration;
pub mod presentation;
pub mod profile;
pub mod timeline;

// Re-export specific items to avoid ambiguity
pub use duration::{
    calculate_detailed_duration, calculate_total_in_service_duration, inclusive_days,
    total_days_in_service, CalendarSpan, ElapsedDuration,
};
pub use presentation::{compliance_banner, ComplianceBanner};
pub use profile::{ProfileService, ProfileView};
pub use timeline::ports::{MasterDataLookup, NoMasterData};
pub use timeline::{
    build_timeline, summarize_service, ServiceSummary, TimelineCategory, TimelineEntry,
};
