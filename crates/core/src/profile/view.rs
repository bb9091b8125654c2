//! Profile view model

use chrono::{Datelike, NaiveDate};
use hrms_domain::{format_display_date, DateValue, Employee, ViewMode};
use serde::Serialize;

use crate::duration::CalendarSpan;
use crate::presentation::{ComplianceBanner, DocumentsSection, FinancialSection};
use crate::timeline::ports::MasterDataLookup;
use crate::timeline::{effective_start, ServiceSummary, StatusBadge};

/// Always-present top of the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileHeader<'a> {
    pub employee_id: &'a str,
    pub full_name: &'a str,
    /// Designation of the first timeline entry
    pub designation: Option<String>,
    /// Badge of the first timeline entry; `None` without history
    pub status: Option<StatusBadge<'a>>,
    pub total_in_service: CalendarSpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalSection<'a> {
    pub father_name: Option<&'a str>,
    pub cnic: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub domicile: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
    pub date_of_birth: String,
    /// Completed years; `None` when the birth date is unreadable
    pub age: Option<i32>,
    /// Earliest in-service start on record
    pub joined_on: String,
    pub qualifications: Vec<String>,
}

impl<'a> PersonalSection<'a> {
    pub fn of(employee: &'a Employee, lookup: &dyn MasterDataLookup, today: NaiveDate) -> Self {
        let joined_on = employee
            .employment_history
            .iter()
            .filter(|block| block.status.is_in_service())
            .filter_map(|block| effective_start(block).as_date())
            .min()
            .map_or(DateValue::Unset, DateValue::Concrete);

        Self {
            father_name: employee.father_name.as_deref(),
            cnic: employee.cnic.as_deref(),
            gender: employee.gender.as_deref(),
            domicile: employee.domicile.as_deref(),
            phone: employee.phone.as_deref(),
            email: employee.email.as_deref(),
            address: employee.address.as_deref(),
            date_of_birth: format_display_date(&employee.date_of_birth),
            age: employee.date_of_birth.as_date().and_then(|born| completed_years(born, today)),
            joined_on: format_display_date(&joined_on),
            qualifications: employee
                .qualification_ids
                .iter()
                .map(|id| lookup.qualification_name(id).unwrap_or(id.as_str()).to_string())
                .collect(),
        }
    }
}

/// Whole years from `born` to `today`; `None` if `today` is earlier
fn completed_years(born: NaiveDate, today: NaiveDate) -> Option<i32> {
    if today < born {
        return None;
    }
    let mut years = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    Some(years)
}

/// Everything rendered for one employee and view mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView<'a> {
    pub mode: ViewMode,
    pub header: ProfileHeader<'a>,
    pub compliance: ComplianceBanner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal: Option<PersonalSection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceSummary<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial: Option<FinancialSection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<DocumentsSection<'a>>,
}
