//! Employment-block classifier
//!
//! Resolves, for one block and its chronological successor, whether the
//! block is still open, which dates bound it, how it should be labelled and
//! how long it has lasted. Nothing here fails: unreadable dates surface as
//! `N/A` or `Invalid Date` in the output.

use chrono::NaiveDate;
use hrms_domain::constants::RANGE_SEPARATOR;
use hrms_domain::utils::dates::day_before;
use hrms_domain::{format_display_date, DateValue, EmploymentBlock, EmploymentStatus};
use serde::Serialize;
use tracing::warn;

use crate::duration::{calculate_detailed_duration, ElapsedDuration};

/// Everything the timeline needs to know about one block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockClassification {
    /// Retired or Deceased
    pub is_terminal: bool,
    /// One of the statuses an employee may return from
    pub is_exit_status: bool,
    /// An exit that a later posting closed
    pub is_rejoin_case: bool,
    /// Still running: currently working, or an exit nobody returned from
    pub is_open: bool,
    pub start: DateValue,
    pub end: DateValue,
    pub label: String,
    pub elapsed: ElapsedDuration,
}

/// First recorded of status date, posting start, posting end
pub fn effective_start(block: &EmploymentBlock) -> DateValue {
    block.status_date.or_else_set(&block.from_date).or_else_set(&block.to_date)
}

/// Whether an exit block was later closed by a rejoin
///
/// Requires the exit date and the successor's posting start to both be
/// readable, and the posting to begin on or after the exit.
pub fn is_rejoin_case(block: &EmploymentBlock, successor: Option<&EmploymentBlock>) -> bool {
    if !block.status.is_rejoinable_exit() || block.is_currently_working {
        return false;
    }
    let Some(exit_date) = block.status_date.as_date() else {
        return false;
    };
    successor
        .and_then(|next| next.from_date.as_date())
        .is_some_and(|rejoined_on| rejoined_on >= exit_date)
}

/// Classify one block given its chronological successor
pub fn classify_block(
    block: &EmploymentBlock,
    successor: Option<&EmploymentBlock>,
    today: NaiveDate,
) -> BlockClassification {
    let status = &block.status;
    let is_terminal = status.is_terminal();
    let is_exit_status = status.is_rejoinable_exit();
    let is_rejoin_case = is_rejoin_case(block, successor);
    let is_open = block.is_currently_working || (is_exit_status && !is_rejoin_case);

    if block.is_currently_working && block.to_date.is_set() {
        warn!(
            block_id = %block.id,
            to_date = %block.to_date,
            "block is marked currently working but has an end date; treating it as open"
        );
    }

    let start = effective_start(block);
    let end = if is_open { DateValue::OpenEnded } else { closed_end(block, successor) };
    let label = label_for(block, &start, &end, is_open);

    let elapsed = if is_terminal {
        calculate_detailed_duration(&block.status_date, &DateValue::OpenEnded, today)
    } else {
        calculate_detailed_duration(&start, &end, today)
    };

    BlockClassification {
        is_terminal,
        is_exit_status,
        is_rejoin_case,
        is_open,
        start,
        end,
        label,
        elapsed,
    }
}

/// End of a block that is no longer running
///
/// Recorded end first, then the status date, then the eve of the next
/// posting.
fn closed_end(block: &EmploymentBlock, successor: Option<&EmploymentBlock>) -> DateValue {
    if block.to_date.is_set() {
        return block.to_date.clone();
    }
    if block.status_date.is_set() {
        return block.status_date.clone();
    }
    successor
        .and_then(|next| next.from_date.as_date())
        .and_then(day_before)
        .map_or(DateValue::Unset, DateValue::Concrete)
}

fn label_for(block: &EmploymentBlock, start: &DateValue, end: &DateValue, is_open: bool) -> String {
    match block.status.known() {
        Some(EmploymentStatus::Retired | EmploymentStatus::Deceased) => {
            format!("{} on {}", block.status, format_display_date(&block.status_date))
        }
        _ if !block.status.is_in_service() && block.status_date.is_set() => {
            if !is_open && end.as_date().is_some() {
                range_label(start, end)
            } else {
                format!("Since {}", format_display_date(&block.status_date))
            }
        }
        _ => range_label(start, end),
    }
}

fn range_label(start: &DateValue, end: &DateValue) -> String {
    format!("{}{RANGE_SEPARATOR}{}", format_display_date(start), format_display_date(end))
}
