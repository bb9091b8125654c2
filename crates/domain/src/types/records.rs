//! Financial, compliance and document sub-records
//!
//! Read-only display data owned by an employee. The profile engine formats
//! these but never derives anything from them.

use serde::{Deserialize, Serialize};

use super::dates::DateValue;

/// Annual Confidential Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcrRecord {
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default)]
    pub period_from: DateValue,
    #[serde(default)]
    pub period_to: DateValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_officer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Yearly asset declaration; years are fiscal labels such as `"2019-20"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDeclaration {
    pub year: String,
    #[serde(default)]
    pub submission_date: DateValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// One financial year of the General Provident Fund ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpFundRecord {
    pub financial_year: String,
    #[serde(default)]
    pub opening_balance: f64,
    #[serde(default)]
    pub subscription: f64,
    #[serde(default)]
    pub withdrawal: f64,
    #[serde(default)]
    pub profit: f64,
    #[serde(default)]
    pub closing_balance: f64,
}

/// Running totals of the GP fund account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpFundSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default)]
    pub total_subscription: f64,
    #[serde(default)]
    pub total_withdrawal: f64,
    #[serde(default)]
    pub current_balance: f64,
    #[serde(default)]
    pub as_of: DateValue,
}

/// Income tax return filing with the Federal Board of Revenue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FbrRecord {
    pub tax_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filer_status: Option<String>,
    #[serde(default)]
    pub filing_date: DateValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ntn: Option<String>,
}

/// Metadata of an uploaded document; the file itself lives elsewhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub uploaded_at: DateValue,
}
