//! In-memory master-data catalog

use std::collections::HashMap;

use hrms_core::MasterDataLookup;
use hrms_domain::MasterDataSet;

/// Id-indexed master data implementing the core lookup port
#[derive(Debug, Clone, Default)]
pub struct InMemoryMasterData {
    designations: HashMap<String, String>,
    units: HashMap<String, String>,
    tehsils: HashMap<String, String>,
    qualifications: HashMap<String, String>,
}

impl InMemoryMasterData {
    /// Index a master-data export; later duplicates of an id win
    pub fn new(data: MasterDataSet) -> Self {
        Self {
            designations: data.designations.into_iter().map(|d| (d.id, d.title)).collect(),
            units: data.units.into_iter().map(|u| (u.id, u.name)).collect(),
            tehsils: data.tehsils.into_iter().map(|t| (t.id, t.name)).collect(),
            qualifications: data.qualifications.into_iter().map(|q| (q.id, q.name)).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.designations.is_empty()
            && self.units.is_empty()
            && self.tehsils.is_empty()
            && self.qualifications.is_empty()
    }
}

impl From<MasterDataSet> for InMemoryMasterData {
    fn from(data: MasterDataSet) -> Self {
        Self::new(data)
    }
}

impl MasterDataLookup for InMemoryMasterData {
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
