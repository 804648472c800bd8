//! Trace-emitting sorting algorithms
//!
//! Every algorithm sorts a slice of [`Element`]s in place and returns the
//! [`Trace`] of every state it passed through:
//! - [`bubble`]: adjacent swaps with early exit
//! - [`insertion`]: right shifts into a growing sorted prefix
//! - [`selection`]: minimum search and one swap per position
//! - [`merge`]: top-down, stable merge
//! - [`quick`]: rightmost pivot, Lomuto partition
//! - [`heap`]: bottom-up max-heap build, then extraction
//!
//! # Trace shape
//!
//! A trace always opens with the untouched input and closes with every index
//! labeled [`State::Sorted`], so even empty and single-element inputs produce
//! at least two steps. Runs are deterministic: the same input yields the same
//! snapshots and descriptions.
//!
//! [`State::Sorted`]: crate::model::State::Sorted

pub mod bubble;
pub mod heap;
pub mod info;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use info::{AlgorithmInfo, TimeComplexity};

use crate::model::Element;
use crate::snapshot::Trace;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn info(self) -> AlgorithmInfo {
        info::info(self)
    }

    /// Sort `elements` in place and return the trace of the run
    pub fn sort(self, elements: &mut [Element]) -> Trace {
        let trace = match self {
            Algorithm::Bubble => bubble::sort(elements),
            Algorithm::Insertion => insertion::sort(elements),
            Algorithm::Selection => selection::sort(elements),
            Algorithm::Merge => merge::sort(elements),
            Algorithm::Quick => quick::sort(elements),
            Algorithm::Heap => heap::sort(elements),
        };
        tracing::debug!(
            algorithm = self.name(),
            elements = elements.len(),
            steps = trace.len(),
            "trace recorded"
        );
        trace
    }

    /// Run on a private copy of `input`, leaving the caller's slice untouched
    pub fn trace(self, input: &[Element]) -> Trace {
        let mut working = input.to_vec();
        self.sort(&mut working)
    }

    /// Next algorithm in menu order, wrapping around
    pub fn next(self) -> Self {
        let i = self.index();
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order, wrapping around
    pub fn prev(self) -> Self {
        let i = self.index();
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Position in [`Algorithm::ALL`], which follows declaration order
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
