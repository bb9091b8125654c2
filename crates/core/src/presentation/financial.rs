//! Financial and compliance records section

use hrms_domain::constants::{NOT_AVAILABLE, NO_FINANCIAL_RECORDS_MESSAGE, RANGE_SEPARATOR};
use hrms_domain::{
    format_display_date, AcrRecord, AssetDeclaration, Employee, FbrRecord, GpFundRecord,
    GpFundSummary,
};
use serde::Serialize;

use super::format::format_amount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcrRow<'a> {
    pub year: i32,
    pub grade: &'a str,
    /// `"01/01/2019 — 31/12/2019"`
    pub period: String,
    pub reporting_officer: Option<&'a str>,
    pub remarks: Option<&'a str>,
}

impl<'a> From<&'a AcrRecord> for AcrRow<'a> {
    fn from(acr: &'a AcrRecord) -> Self {
        Self {
            year: acr.year,
            grade: acr.grade.as_deref().unwrap_or(NOT_AVAILABLE),
            period: format!(
                "{}{RANGE_SEPARATOR}{}",
                format_display_date(&acr.period_from),
                format_display_date(&acr.period_to)
            ),
            reporting_officer: acr.reporting_officer.as_deref(),
            remarks: acr.remarks.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRow<'a> {
    pub year: &'a str,
    pub submitted_on: String,
    pub remarks: Option<&'a str>,
}

impl<'a> From<&'a AssetDeclaration> for AssetRow<'a> {
    fn from(asset: &'a AssetDeclaration) -> Self {
        Self {
            year: &asset.year,
            submitted_on: format_display_date(&asset.submission_date),
            remarks: asset.remarks.as_deref(),
        }
    }
}

/// GP fund ledger line with amounts already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpFundRow<'a> {
    pub financial_year: &'a str,
    pub opening_balance: String,
    pub subscription: String,
    pub withdrawal: String,
    pub profit: String,
    pub closing_balance: String,
}

impl<'a> From<&'a GpFundRecord> for GpFundRow<'a> {
    fn from(record: &'a GpFundRecord) -> Self {
        Self {
            financial_year: &record.financial_year,
            opening_balance: format_amount(record.opening_balance),
            subscription: format_amount(record.subscription),
            withdrawal: format_amount(record.withdrawal),
            profit: format_amount(record.profit),
            closing_balance: format_amount(record.closing_balance),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpFundSummaryView<'a> {
    pub account_number: &'a str,
    pub total_subscription: String,
    pub total_withdrawal: String,
    pub current_balance: String,
    pub as_of: String,
}

impl<'a> From<&'a GpFundSummary> for GpFundSummaryView<'a> {
    fn from(summary: &'a GpFundSummary) -> Self {
        Self {
            account_number: summary.account_number.as_deref().unwrap_or(NOT_AVAILABLE),
            total_subscription: format_amount(summary.total_subscription),
            total_withdrawal: format_amount(summary.total_withdrawal),
            current_balance: format_amount(summary.current_balance),
            as_of: format_display_date(&summary.as_of),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FbrRow<'a> {
    pub tax_year: i32,
    pub filer_status: &'a str,
    pub filed_on: String,
    pub ntn: Option<&'a str>,
}

impl<'a> From<&'a FbrRecord> for FbrRow<'a> {
    fn from(record: &'a FbrRecord) -> Self {
        Self {
            tax_year: record.tax_year,
            filer_status: record.filer_status.as_deref().unwrap_or(NOT_AVAILABLE),
            filed_on: format_display_date(&record.filing_date),
            ntn: record.ntn.as_deref(),
        }
    }
}

/// Rows of one record table, or its empty-state message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTable<T> {
    pub rows: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl<T> RecordTable<T> {
    fn new(rows: Vec<T>) -> Self {
        let empty_message = rows.is_empty().then_some(NO_FINANCIAL_RECORDS_MESSAGE);
        Self { rows, empty_message }
    }
}

impl<T> FromIterator<T> for RecordTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSection<'a> {
    /// Most recent year first
    pub acrs: RecordTable<AcrRow<'a>>,
    pub assets: RecordTable<AssetRow<'a>>,
    pub gp_fund: RecordTable<GpFundRow<'a>>,
    pub gp_fund_summary: Option<GpFundSummaryView<'a>>,
    pub fbr: RecordTable<FbrRow<'a>>,
}

impl<'a> FinancialSection<'a> {
    pub fn of(employee: &'a Employee) -> Self {
        let mut acrs: Vec<AcrRow<'a>> = employee.acrs.iter().map(AcrRow::from).collect();
        acrs.sort_by(|a, b| b.year.cmp(&a.year));

        Self {
            acrs: RecordTable::new(acrs),
            assets: employee.assets.iter().map(AssetRow::from).collect(),
            gp_fund: employee.gp_fund_history.iter().map(GpFundRow::from).collect(),
            gp_fund_summary: employee.gp_fund_summary.as_ref().map(GpFundSummaryView::from),
            fbr: employee.fbr_records.iter().map(FbrRow::from).collect(),
        }
    }
}
