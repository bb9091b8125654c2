//! Render-ready timeline rows
//!
//! Entries borrow the employee snapshot; leaves and disciplinary actions are
//! referenced, never copied or reordered.

use hrms_domain::constants::{NO_DISCIPLINARY_MESSAGE, NO_LEAVES_MESSAGE, NOT_AVAILABLE};
use hrms_domain::{
    format_display_date, DisciplinaryAction, EmploymentBlock, EmploymentStatus, InquiryStatus,
    Leave, RecordedStatus,
};
use serde::Serialize;

use super::classifier::BlockClassification;
use super::ordering::TimelineCategory;
use crate::duration::inclusive_days;

/// Colour family of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Success,
    Neutral,
    Warning,
    Danger,
}

/// Status text plus the tone it is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusBadge<'a> {
    pub label: &'a str,
    pub tone: BadgeTone,
}

impl StatusBadge<'static> {
    pub const fn for_known(status: EmploymentStatus) -> Self {
        let tone = match status {
            EmploymentStatus::InService => BadgeTone::Success,
            EmploymentStatus::Retired => BadgeTone::Neutral,
            EmploymentStatus::Deceased | EmploymentStatus::Terminated | EmploymentStatus::Removed => {
                BadgeTone::Danger
            }
            EmploymentStatus::Resigned
            | EmploymentStatus::Suspended
            | EmploymentStatus::Osd
            | EmploymentStatus::Deputation
            | EmploymentStatus::Absent => BadgeTone::Warning,
        };
        Self { label: status.as_str(), tone }
    }
}

impl<'a> StatusBadge<'a> {
    /// Badge for a stored status; unknown text is shown as recorded
    pub fn for_status(status: &'a RecordedStatus) -> Self {
        match status {
            RecordedStatus::Known(known) => StatusBadge::for_known(*known),
            RecordedStatus::Unrecognized(raw) if raw.is_empty() => {
                Self { label: NOT_AVAILABLE, tone: BadgeTone::Neutral }
            }
            RecordedStatus::Unrecognized(raw) => Self { label: raw, tone: BadgeTone::Neutral },
        }
    }
}

/// One leave, dates formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRow<'a> {
    pub leave_type: &'a str,
    pub from: String,
    pub to: String,
    /// Recorded day count, else the inclusive span of readable dates
    pub days: Option<i64>,
    pub remarks: Option<&'a str>,
}

impl<'a> LeaveRow<'a> {
    fn from_leave(leave: &'a Leave) -> Self {
        let days = leave.days.map(i64::from).or_else(|| {
            let from = leave.from_date.as_date()?;
            let to = leave.to_date.as_date()?;
            Some(inclusive_days(from, to))
        });

        Self {
            leave_type: &leave.leave_type,
            from: format_display_date(&leave.from_date),
            to: format_display_date(&leave.to_date),
            days,
            remarks: leave.remarks.as_deref(),
        }
    }
}

/// Leaves of one block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSummary<'a> {
    pub rows: Vec<LeaveRow<'a>>,
    pub total_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl<'a> LeaveSummary<'a> {
    pub fn of(leaves: &'a [Leave]) -> Self {
        let rows: Vec<LeaveRow<'a>> = leaves.iter().map(LeaveRow::from_leave).collect();
        let total_days = rows.iter().filter_map(|row| row.days).sum();
        let empty_message = rows.is_empty().then_some(NO_LEAVES_MESSAGE);
        Self { rows, total_days, empty_message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplinaryRow<'a> {
    pub allegation: &'a str,
    pub inquiry_status: InquiryStatus,
    pub decision: Option<&'a str>,
    pub action_date: String,
    pub decision_date: String,
    pub remarks: Option<&'a str>,
}

impl<'a> DisciplinaryRow<'a> {
    fn from_action(action: &'a DisciplinaryAction) -> Self {
        Self {
            allegation: &action.allegation,
            inquiry_status: action.inquiry_status,
            decision: action.decision.as_deref(),
            action_date: format_display_date(&action.action_date),
            decision_date: format_display_date(&action.decision_date),
            remarks: action.remarks.as_deref(),
        }
    }
}

/// Disciplinary actions of one block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplinarySummary<'a> {
    pub rows: Vec<DisciplinaryRow<'a>>,
    /// Inquiries still awaiting a decision
    pub pending: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl<'a> DisciplinarySummary<'a> {
    pub fn of(actions: &'a [DisciplinaryAction]) -> Self {
        let rows: Vec<DisciplinaryRow<'a>> = actions.iter().map(DisciplinaryRow::from_action).collect();
        let pending = rows.iter().filter(|row| row.inquiry_status == InquiryStatus::Pending).count();
        let empty_message = rows.is_empty().then_some(NO_DISCIPLINARY_MESSAGE);
        Self { rows, pending, empty_message }
    }
}

/// One block as the timeline renders it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry<'a> {
    #[serde(skip)]
    pub block: &'a EmploymentBlock,
    pub block_id: &'a str,
    pub category: TimelineCategory,
    /// First rendered entry only
    pub is_active: bool,
    #[serde(flatten)]
    pub classification: BlockClassification,
    pub badge: StatusBadge<'a>,
    pub designation: Option<String>,
    pub unit: Option<String>,
    pub tehsil: Option<String>,
    pub headquarters: Option<&'a str>,
    pub order_number: Option<&'a str>,
    pub order_date: String,
    pub leaves: LeaveSummary<'a>,
    pub disciplinary: DisciplinarySummary<'a>,
}

#[cfg(test)]
mod tests {
    use hrms_domain::DateValue;

    use super::*;

    #[test]
    fn badge_tones_follow_status_severity() {
        assert_eq!(StatusBadge::for_known(EmploymentStatus::InService).tone, BadgeTone::Success);
        assert_eq!(StatusBadge::for_known(EmploymentStatus::Retired).tone, BadgeTone::Neutral);
        assert_eq!(StatusBadge::for_known(EmploymentStatus::Removed).tone, BadgeTone::Danger);
        assert_eq!(StatusBadge::for_known(EmploymentStatus::Osd).tone, BadgeTone::Warning);
        assert_eq!(StatusBadge::for_known(EmploymentStatus::Osd).label, "OSD");
    }

    #[test]
    fn unrecognized_status_badge_shows_recorded_text() {
        let transferred = RecordedStatus::parse("Transferred");
        let badge = StatusBadge::for_status(&transferred);
        assert_eq!(badge.label, "Transferred");
        assert_eq!(badge.tone, BadgeTone::Neutral);

        let blank = RecordedStatus::default();
        assert_eq!(StatusBadge::for_status(&blank).label, "N/A");
    }

    #[test]
    fn empty_sub_lists_carry_messages() {
        let leaves = LeaveSummary::of(&[]);
        assert_eq!(leaves.empty_message, Some("No leave records"));
        assert_eq!(leaves.total_days, 0);

        let actions = DisciplinarySummary::of(&[]);
        assert_eq!(actions.empty_message, Some("No disciplinary actions"));
    }

    #[test]
    fn leave_days_fall_back_to_date_span() {
        let leaves = vec![
            Leave {
                leave_type: "Earned".into(),
                from_date: DateValue::parse("2020-01-01"),
                to_date: DateValue::parse("2020-01-10"),
                days: None,
                remarks: None,
            },
            Leave {
                leave_type: "Casual".into(),
                from_date: DateValue::parse("2020-02-01"),
                to_date: DateValue::Unset,
                days: Some(2),
                remarks: None,
            },
            Leave {
                leave_type: "Medical".into(),
                from_date: DateValue::parse("unknown"),
                to_date: DateValue::Unset,
                days: None,
                remarks: None,
            },
        ];

        let summary = LeaveSummary::of(&leaves);
        assert_eq!(summary.rows[0].days, Some(10));
        assert_eq!(summary.rows[0].from, "01/01/2020");
        assert_eq!(summary.rows[1].to, "N/A");
        assert_eq!(summary.rows[2].days, None);
        assert_eq!(summary.total_days, 12);
        assert!(summary.empty_message.is_none());
    }

    #[test]
    fn pending_inquiries_are_counted() {
        let actions = vec![
            DisciplinaryAction {
                allegation: "Absence".into(),
                inquiry_status: InquiryStatus::Pending,
                decision: None,
                action_date: DateValue::parse("2019-04-01"),
                decision_date: DateValue::Unset,
                remarks: None,
            },
            DisciplinaryAction {
                allegation: "Delay".into(),
                inquiry_status: InquiryStatus::Decided,
                decision: Some("Censure".into()),
                action_date: DateValue::parse("2018-04-01"),
                decision_date: DateValue::parse("2018-09-01"),
                remarks: None,
            },
        ];

        let summary = DisciplinarySummary::of(&actions);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.rows[1].decision, Some("Censure"));
        assert_eq!(summary.rows[1].decision_date, "01/09/2018");
    }
}
