//! Domain types and models

pub mod compliance;
pub mod dates;
pub mod employee;
pub mod master_data;
pub mod records;
pub mod view;

pub use compliance::ComplianceReport;
pub use dates::DateValue;
pub use employee::{
    DisciplinaryAction, Employee, EmploymentBlock, EmploymentStatus, InquiryStatus, Leave,
    RecordedStatus,
};
pub use master_data::{Designation, MasterDataSet, PostingUnit, Qualification, Tehsil};
pub use records::{
    AcrRecord, AssetDeclaration, DocumentMeta, FbrRecord, GpFundRecord, GpFundSummary,
};
pub use view::{ProfileSection, ViewMode};
