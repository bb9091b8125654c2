//! Chronological neighbours within a stored history
//!
//! Stored order is not trusted to be chronological. The successor of a block
//! is found by ordering every block that has a concrete effective start by
//! that start, ties kept in stored order.

use chrono::NaiveDate;
use hrms_domain::EmploymentBlock;

use super::classifier::effective_start;

/// For each stored position, the stored position of its chronological successor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chronology {
    successors: Vec<Option<usize>>,
}

impl Chronology {
    pub fn of(history: &[EmploymentBlock]) -> Self {
        let mut dated: Vec<(NaiveDate, usize)> = history
            .iter()
            .enumerate()
            .filter_map(|(index, block)| effective_start(block).as_date().map(|date| (date, index)))
            .collect();
        dated.sort_unstable();

        let mut successors = vec![None; history.len()];
        for pair in dated.windows(2) {
            successors[pair[0].1] = Some(pair[1].1);
        }

        Self { successors }
    }

    /// Stored index of the block that follows `index` in time
    pub fn successor(&self, index: usize) -> Option<usize> {
        self.successors.get(index).copied().flatten()
    }
}
