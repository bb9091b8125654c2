//! Shared test helpers for `hrms-core` integration tests.
//!
//! Fixtures build employment histories tersely, and [`MockMasterData`] stands
//! in for the master-data catalog so tests can assert resolved names.

#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;
use hrms_core::MasterDataLookup;
use hrms_domain::{DateValue, EmploymentBlock, EmploymentStatus};

/// Pinned "today" used across integration tests
pub fn today() -> NaiveDate {
    hrms_common::testing::ymd(2024, 6, 14)
}

pub fn date(raw: &str) -> DateValue {
    DateValue::parse(raw)
}

/// Current in-service posting from `from`
pub fn current_posting(id: &str, from: &str) -> EmploymentBlock {
    EmploymentBlock::new(id, EmploymentStatus::InService).with_from_date(date(from)).currently_working(true)
}

/// Closed in-service posting
pub fn past_posting(id: &str, from: &str, to: &str) -> EmploymentBlock {
    EmploymentBlock::new(id, EmploymentStatus::InService).with_from_date(date(from)).with_to_date(date(to))
}

/// Exit or terminal event recorded on `on`
pub fn status_event(id: &str, status: EmploymentStatus, on: &str) -> EmploymentBlock {
    EmploymentBlock::new(id, status).with_status_date(date(on))
}

/// In-memory master data keyed by id.
#[derive(Debug, Default, Clone)]
pub struct MockMasterData {
    designations: HashMap<String, String>,
    units: HashMap<String, String>,
    tehsils: HashMap<String, String>,
    qualifications: HashMap<String, String>,
}

impl MockMasterData {
    pub fn with_designation(mut self, id: &str, title: &str) -> Self {
        self.designations.insert(id.to_string(), title.to_string());
        self
    }

    pub fn with_unit(mut self, id: &str, name: &str) -> Self {
        self.units.insert(id.to_string(), name.to_string());
        self
    }

    pub fn with_tehsil(mut self, id: &str, name: &str) -> Self {
        self.tehsils.insert(id.to_string(), name.to_string());
        self
    }

    pub fn with_qualification(mut self, id: &str, name: &str) -> Self {
        self.qualifications.insert(id.to_string(), name.to_string());
        self
    }
}

impl MasterDataLookup for MockMasterData {
    fn designation_title(&self, id: &str) -> Option<&str> {
        self.designations.get(id).map(String::as_str)
    }

    fn unit_name(&self, id: &str) -> Option<&str> {
        self.units.get(id).map(String::as_str)
    }

    fn tehsil_name(&self, id: &str) -> Option<&str> {
        self.tehsils.get(id).map(String::as_str)
    }

    fn qualification_name(&self, id: &str) -> Option<&str> {
        self.qualifications.get(id).map(String::as_str)
    }
}
