//! Display ordering of a history
//!
//! Blocks are grouped, never dropped: the current posting first, then
//! retirement or death, then a single unresolved exit, then everything else.
//! Stored order is kept inside each group.

use hrms_domain::EmploymentBlock;
use serde::Serialize;

use super::classifier::BlockClassification;

/// Display group of a block, in render priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineCategory {
    /// The in-service posting currently being worked
    Current,
    /// Retirement or death
    Terminal,
    /// The first exit nobody returned from
    UnresolvedExit,
    /// Everything else, in stored order
    Other,
}

impl TimelineCategory {
    /// Wire name, as serialized
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Terminal => "terminal",
            Self::UnresolvedExit => "unresolved_exit",
            Self::Other => "other",
        }
    }
}

/// Categorize every block and return stored indices in render order
///
/// Only the first unresolved exit in stored order is promoted; any further
/// ones stay in [`TimelineCategory::Other`].
pub fn order_history(
    history: &[EmploymentBlock],
    classifications: &[BlockClassification],
) -> Vec<(usize, TimelineCategory)> {
    let mut exit_promoted = false;
    let mut ordered: Vec<(usize, TimelineCategory)> = history
        .iter()
        .zip(classifications)
        .enumerate()
        .map(|(index, (block, classification))| {
            let category = if block.is_currently_working && block.status.is_in_service() {
                TimelineCategory::Current
            } else if classification.is_terminal {
                TimelineCategory::Terminal
            } else if !exit_promoted
                && classification.is_exit_status
                && !block.is_currently_working
                && !classification.is_rejoin_case
            {
                exit_promoted = true;
                TimelineCategory::UnresolvedExit
            } else {
                TimelineCategory::Other
            };
            (index, category)
        })
        .collect();

    // stable: equal categories keep stored order
    ordered.sort_by_key(|(_, category)| *category);
    ordered
}
