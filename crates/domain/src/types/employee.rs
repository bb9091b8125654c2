//! Employee aggregate and its service history
//!
//! An [`Employee`] exclusively owns its [`EmploymentBlock`]s; blocks own their
//! leaves and disciplinary actions. Everything here is an immutable snapshot
//! fetched once per profile view.

use serde::{Deserialize, Serialize};

use super::dates::DateValue;
use super::records::{AcrRecord, AssetDeclaration, DocumentMeta, FbrRecord, GpFundRecord, GpFundSummary};
use crate::impl_domain_status_conversions;

/// Status recorded on an employment block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentStatus {
    InService,
    Retired,
    Resigned,
    Deceased,
    Terminated,
    Suspended,
    Osd,
    Deputation,
    Absent,
    Removed,
}

impl_domain_status_conversions!(EmploymentStatus {
    InService => "In-Service",
    Retired => "Retired",
    Resigned => "Resigned",
    Deceased => "Deceased",
    Terminated => "Terminated",
    Suspended => "Suspended",
    Osd => "OSD",
    Deputation => "Deputation",
    Absent => "Absent",
    Removed => "Removed",
});

impl EmploymentStatus {
    /// Statuses after which no further service is expected
    pub const TERMINAL: [Self; 2] = [Self::Retired, Self::Deceased];

    /// Statuses an employee may later return from
    pub const REJOINABLE_EXITS: [Self; 7] = [
        Self::Resigned,
        Self::Terminated,
        Self::Osd,
        Self::Deputation,
        Self::Suspended,
        Self::Absent,
        Self::Removed,
    ];

    pub const fn is_in_service(self) -> bool {
        matches!(self, Self::InService)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Retired | Self::Deceased)
    }

    pub const fn is_rejoinable_exit(self) -> bool {
        matches!(
            self,
            Self::Resigned
                | Self::Terminated
                | Self::Osd
                | Self::Deputation
                | Self::Suspended
                | Self::Absent
                | Self::Removed
        )
    }
}

/// Status as stored on a block
///
/// The backend occasionally sends statuses this crate does not know. Those
/// are kept verbatim instead of failing the whole employee record, and are
/// treated as neither in service, terminal nor an exit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordedStatus {
    /// One of the statuses listed above
    Known(EmploymentStatus),
    /// Text as recorded; empty when the status was missing
    Unrecognized(String),
}

impl RecordedStatus {
    /// Parse any spelling; unknown text is kept as [`Self::Unrecognized`]
    pub fn parse(raw: &str) -> Self {
        raw.parse().map_or_else(|_| Self::Unrecognized(raw.trim().to_string()), Self::Known)
    }

    pub const fn known(&self) -> Option<EmploymentStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognized(_) => None,
        }
    }

    /// Canonical spelling, or the text as recorded
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_in_service(&self) -> bool {
        self.known().is_some_and(EmploymentStatus::is_in_service)
    }

    pub fn is_terminal(&self) -> bool {
        self.known().is_some_and(EmploymentStatus::is_terminal)
    }

    pub fn is_rejoinable_exit(&self) -> bool {
        self.known().is_some_and(EmploymentStatus::is_rejoinable_exit)
    }
}

impl Default for RecordedStatus {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<EmploymentStatus> for RecordedStatus {
    fn from(status: EmploymentStatus) -> Self {
        Self::Known(status)
    }
}

impl PartialEq<EmploymentStatus> for RecordedStatus {
    fn eq(&self, other: &EmploymentStatus) -> bool {
        self.known() == Some(*other)
    }
}

impl std::fmt::Display for RecordedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordedStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordedStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or_else(Self::default, Self::parse))
    }
}

/// Progress of a disciplinary inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InquiryStatus {
    #[default]
    Pending,
    Decided,
}

impl_domain_status_conversions!(InquiryStatus {
    Pending => "Pending",
    Decided => "Decided",
});

/// A leave taken during one employment block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    #[serde(default, alias = "type")]
    pub leave_type: String,
    #[serde(default)]
    pub from_date: DateValue,
    #[serde(default)]
    pub to_date: DateValue,
    #[serde(default, alias = "totalDays")]
    pub days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// A disciplinary proceeding attached to one employment block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplinaryAction {
    #[serde(default)]
    pub allegation: String,
    #[serde(default)]
    pub inquiry_status: InquiryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(default)]
    pub action_date: DateValue,
    #[serde(default)]
    pub decision_date: DateValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// One posting or status interval in an employee's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentBlock {
    pub id: String,
    #[serde(default)]
    pub status: RecordedStatus,
    #[serde(default)]
    pub status_date: DateValue,
    #[serde(default)]
    pub from_date: DateValue,
    #[serde(default)]
    pub to_date: DateValue,
    #[serde(default)]
    pub is_currently_working: bool,

    // References into master data; resolved for display, raw id on miss
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tehsil_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,

    // Office order that effected the posting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default)]
    pub order_date: DateValue,

    #[serde(default)]
    pub leaves: Vec<Leave>,
    #[serde(default)]
    pub disciplinary_actions: Vec<DisciplinaryAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl EmploymentBlock {
    /// Minimal block with the given id and status; every date unset
    pub fn new(id: impl Into<String>, status: impl Into<RecordedStatus>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            status_date: DateValue::Unset,
            from_date: DateValue::Unset,
            to_date: DateValue::Unset,
            is_currently_working: false,
            designation_id: None,
            unit_id: None,
            tehsil_id: None,
            headquarters: None,
            order_number: None,
            order_date: DateValue::Unset,
            leaves: Vec::new(),
            disciplinary_actions: Vec::new(),
            remarks: None,
        }
    }

    #[must_use]
    pub fn with_status_date(mut self, date: DateValue) -> Self {
        self.status_date = date;
        self
    }

    #[must_use]
    pub fn with_from_date(mut self, date: DateValue) -> Self {
        self.from_date = date;
        self
    }

    #[must_use]
    pub fn with_to_date(mut self, date: DateValue) -> Self {
        self.to_date = date;
        self
    }

    #[must_use]
    pub const fn currently_working(mut self, flag: bool) -> Self {
        self.is_currently_working = flag;
        self
    }
}

/// Aggregate root: one employee and everything shown on the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnic: Option<String>,
    #[serde(default)]
    pub date_of_birth: DateValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domicile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub qualification_ids: Vec<String>,

    #[serde(default)]
    pub employment_history: Vec<EmploymentBlock>,

    #[serde(default)]
    pub acrs: Vec<AcrRecord>,
    #[serde(default)]
    pub assets: Vec<AssetDeclaration>,
    #[serde(default)]
    pub gp_fund_history: Vec<GpFundRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gp_fund_summary: Option<GpFundSummary>,
    #[serde(default)]
    pub fbr_records: Vec<FbrRecord>,
    #[serde(default)]
    pub documents: Vec<DocumentMeta>,
}

impl Employee {
    /// Employee with only identity fields populated
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            father_name: None,
            cnic: None,
            date_of_birth: DateValue::Unset,
            gender: None,
            domicile: None,
            phone: None,
            email: None,
            address: None,
            qualification_ids: Vec::new(),
            employment_history: Vec::new(),
            acrs: Vec::new(),
            assets: Vec::new(),
            gp_fund_history: Vec::new(),
            gp_fund_summary: None,
            fbr_records: Vec::new(),
            documents: Vec::new(),
        }
    }
}
