//! Profile assembly service - core business logic

use std::sync::Arc;

use chrono::NaiveDate;
use hrms_common::Clock;
use hrms_domain::{ComplianceReport, Employee, ProfileSection, ViewMode};
use tracing::{debug, instrument};

use super::view::{PersonalSection, ProfileHeader, ProfileView};
use crate::presentation::{compliance_banner, ComplianceBanner, DocumentsSection, FinancialSection};
use crate::timeline::ports::MasterDataLookup;
use crate::timeline::summarize_service;

/// Builds profile views from employee snapshots
pub struct ProfileService {
    master_data: Arc<dyn MasterDataLookup>,
    clock: Arc<dyn Clock>,
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(master_data: Arc<dyn MasterDataLookup>, clock: Arc<dyn Clock>) -> Self {
        Self { master_data, clock }
    }

    /// Calendar date every duration in a view is measured to
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Assemble the sections `mode` asks for
    ///
    /// The header and compliance banner are always present. An unrecognized
    /// mode yields the header alone.
    #[instrument(skip(self, employee, mode, compliance), fields(employee_id = %employee.id, mode = %mode))]
    pub fn build_view<'e>(
        &self,
        employee: &'e Employee,
        mode: ViewMode,
        compliance: Option<&ComplianceReport>,
    ) -> ProfileView<'e> {
        let today = self.today();
        let lookup = self.master_data.as_ref();

        let service = summarize_service(&employee.employment_history, lookup, today);
        let first_entry = service.entries.first();
        let header = ProfileHeader {
            employee_id: &employee.id,
            full_name: &employee.full_name,
            designation: first_entry.and_then(|entry| entry.designation.clone()),
            status: first_entry.map(|entry| entry.badge),
            total_in_service: service.total_in_service,
        };

        let view = ProfileView {
            mode,
            header,
            compliance: compliance.map_or_else(ComplianceBanner::hidden, compliance_banner),
            personal: mode
                .includes(ProfileSection::Personal)
                .then(|| PersonalSection::of(employee, lookup, today)),
            service: mode.includes(ProfileSection::Service).then_some(service),
            financial: mode.includes(ProfileSection::Financial).then(|| FinancialSection::of(employee)),
            documents: mode
                .includes(ProfileSection::Documents)
                .then(|| DocumentsSection::of(&employee.documents)),
        };

        debug!(
            sections = mode.sections().len(),
            compliance_warning = view.compliance.show_warning,
            "assembled profile view"
        );
        view
    }
}
