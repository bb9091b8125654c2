//! Presentation adapters for the non-timeline parts of a profile

pub mod compliance;
pub mod documents;
pub mod financial;
pub mod format;

pub use compliance::{compliance_banner, ComplianceBanner};
pub use documents::{DocumentCard, DocumentGroup, DocumentsSection};
pub use financial::{
    AcrRow, AssetRow, FbrRow, FinancialSection, GpFundRow, GpFundSummaryView, RecordTable,
};
pub use format::{format_amount, format_file_size};
