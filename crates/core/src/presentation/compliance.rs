//! Compliance warning banner

use std::fmt::Display;

use hrms_domain::ComplianceReport;
use serde::Serialize;

/// Banner shown above the profile when any compliance year is missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceBanner {
    pub show_warning: bool,
    /// One line per record kind with gaps, e.g. `ACR missing for: 2019, 2020`
    pub lines: Vec<String>,
}

impl ComplianceBanner {
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// Banner for a compliance lookup result
pub fn compliance_banner(report: &ComplianceReport) -> ComplianceBanner {
    let lines: Vec<String> = [
        missing_line("ACR", &report.missing_years_acr),
        missing_line("Asset declaration", &report.missing_years_assets),
        missing_line("FBR return", &report.missing_years_fbr),
    ]
    .into_iter()
    .flatten()
    .collect();

    ComplianceBanner { show_warning: !lines.is_empty(), lines }
}

fn missing_line<T: Ord + Display>(kind: &str, years: &[T]) -> Option<String> {
    if years.is_empty() {
        return None;
    }
    let mut sorted: Vec<&T> = years.iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let joined = sorted.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    Some(format!("{kind} missing for: {joined}"))
}
