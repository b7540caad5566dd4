//! Re-ordering of results arriving from parallel workers
//!
//! Results are released strictly in (year, day, part) order. Two min-heaps
//! drive this: the keys still expected, and the results received ahead of
//! their turn.

use crate::executor::SolverResult;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Position of a result in the output order
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// A buffered result, ordered by its key only
struct Queued(ResultKey, SolverResult);

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Queued {}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<Reverse<Queued>>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Buffer `result` and return every result that is now next in line
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending
            .push(Reverse(Queued(ResultKey::from(&result), result)));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(Reverse(Queued(next_pending, _)))) =
            (self.expected.peek(), self.pending.peek())
        {
            if next_pending != next_expected {
                break;
            }
            self.expected.pop();
            if let Some(Reverse(Queued(_, result))) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Everything still buffered, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut queued: Vec<Queued> = self.pending.drain().map(|Reverse(q)| q).collect();
        queued.sort();
        queued.into_iter().map(|Queued(_, result)| result).collect()
    }

    /// Whether every expected result has been released
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
