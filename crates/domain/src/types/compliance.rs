//! Compliance lookup results

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Filing years an employee has not covered, as returned by the compliance
/// check service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ComplianceReport {
    #[serde(rename = "missingYearsACR", default)]
    pub missing_years_acr: Vec<i32>,
    #[serde(rename = "missingYearsAssets", default)]
    pub missing_years_assets: Vec<String>,
    #[serde(rename = "missingYearsFBR", default)]
    pub missing_years_fbr: Vec<i32>,
}

impl ComplianceReport {
    /// True when every list is empty
    pub fn is_clear(&self) -> bool {
        self.missing_years_acr.is_empty()
            && self.missing_years_assets.is_empty()
            && self.missing_years_fbr.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_service_field_names() {
        let report: ComplianceReport = serde_json::from_str(
            r#"{"missingYearsACR": [2020], "missingYearsAssets": ["2019-20"], "missingYearsFBR": []}"#,
        )
        .unwrap();
        assert_eq!(report.missing_years_acr, vec![2020]);
        assert_eq!(report.missing_years_assets, vec!["2019-20".to_string()]);
        assert!(!report.is_clear());
        assert!(ComplianceReport::default().is_clear());
    }
}
