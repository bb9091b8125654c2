//! Service-history timeline
//!
//! Turns an employee's stored employment history into ordered, labelled
//! entries and the aggregate in-service total.

pub mod chronology;
pub mod classifier;
pub mod entry;
pub mod ordering;
pub mod ports;

use chrono::NaiveDate;
use hrms_domain::constants::NO_HISTORY_MESSAGE;
use hrms_domain::{format_display_date, EmploymentBlock};
use serde::Serialize;
use tracing::{debug, warn};

pub use chronology::Chronology;
pub use classifier::{classify_block, effective_start, is_rejoin_case, BlockClassification};
pub use entry::{
    BadgeTone, DisciplinaryRow, DisciplinarySummary, LeaveRow, LeaveSummary, StatusBadge,
    TimelineEntry,
};
pub use ordering::{order_history, TimelineCategory};

use self::ports::MasterDataLookup;
use crate::duration::{span_from_day_count, total_days_in_service, CalendarSpan};

/// Build the ordered timeline for a stored history
///
/// Every block yields exactly one entry. The first entry is marked active.
pub fn build_timeline<'a>(
    history: &'a [EmploymentBlock],
    lookup: &dyn MasterDataLookup,
    today: NaiveDate,
) -> Vec<TimelineEntry<'a>> {
    let current_postings = history
        .iter()
        .filter(|block| block.is_currently_working && block.status.is_in_service())
        .count();
    if current_postings > 1 {
        warn!(count = current_postings, "more than one in-service block is marked currently working");
    }

    let chronology = Chronology::of(history);
    let classifications: Vec<BlockClassification> = history
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let successor = chronology.successor(index).map(|next| &history[next]);
            classify_block(block, successor, today)
        })
        .collect();

    let entries: Vec<TimelineEntry<'a>> = order_history(history, &classifications)
        .into_iter()
        .enumerate()
        .map(|(position, (index, category))| {
            let block = &history[index];
            TimelineEntry {
                block,
                block_id: &block.id,
                category,
                is_active: position == 0,
                classification: classifications[index].clone(),
                badge: StatusBadge::for_status(&block.status),
                // unknown ids are shown raw
                designation: block
                    .designation_id
                    .as_deref()
                    .map(|id| lookup.designation_title(id).unwrap_or(id).to_string()),
                unit: block.unit_id.as_deref().map(|id| lookup.unit_name(id).unwrap_or(id).to_string()),
                tehsil: block
                    .tehsil_id
                    .as_deref()
                    .map(|id| lookup.tehsil_name(id).unwrap_or(id).to_string()),
                headquarters: block.headquarters.as_deref(),
                order_number: block.order_number.as_deref(),
                order_date: format_display_date(&block.order_date),
                leaves: LeaveSummary::of(&block.leaves),
                disciplinary: DisciplinarySummary::of(&block.disciplinary_actions),
            }
        })
        .collect();

    debug!(blocks = history.len(), entries = entries.len(), "built service timeline");
    entries
}

/// Timeline plus the aggregate figures shown above it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary<'a> {
    pub entries: Vec<TimelineEntry<'a>>,
    pub total_in_service: CalendarSpan,
    /// Exact inclusive day sum behind `total_in_service`
    pub total_days: i64,
    pub current_posting_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

/// Timeline and in-service total for one history
///
/// The total is computed over the stored history; display ordering does not
/// feed into it.
pub fn summarize_service<'a>(
    history: &'a [EmploymentBlock],
    lookup: &dyn MasterDataLookup,
    today: NaiveDate,
) -> ServiceSummary<'a> {
    let total_days = total_days_in_service(history, today);
    let entries = build_timeline(history, lookup, today);
    let current_posting_id = entries
        .iter()
        .find(|entry| entry.category == TimelineCategory::Current)
        .map(|entry| entry.block_id);
    let empty_message = entries.is_empty().then_some(NO_HISTORY_MESSAGE);

    ServiceSummary {
        entries,
        total_in_service: span_from_day_count(total_days),
        total_days,
        current_posting_id,
        empty_message,
    }
}
