//! Master data referenced by employment blocks
//!
//! Maintained by the admin screens; the profile engine only looks names up.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designation {
    pub id: String,
    pub title: String,
    /// Basic Pay Scale grade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bps: Option<u8>,
}

/// Tehsil (sub-district) used as a posting location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tehsil {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

/// Court or office an employee can be posted to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingUnit {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tehsil_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualification {
    pub id: String,
    pub name: String,
}

/// Every master-data list, as exported by the admin backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterDataSet {
    #[serde(default)]
    pub designations: Vec<Designation>,
    #[serde(default)]
    pub tehsils: Vec<Tehsil>,
    #[serde(default)]
    pub units: Vec<PostingUnit>,
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
}
