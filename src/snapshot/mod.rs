// Snapshot history recorded by the sorting algorithms

use crate::model::{Element, State};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Immutable copy of the whole labeled sequence at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    elements: Box<[Element]>,
}

impl Snapshot {
    /// Copy every element of `working` into a fresh snapshot
    pub fn capture(working: &[Element]) -> Self {
        Snapshot {
            elements: working.into(),
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn values(&self) -> Vec<u32> {
        self.elements.iter().map(|e| e.value).collect()
    }

    pub fn labels(&self) -> Vec<State> {
        self.elements.iter().map(|e| e.label).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether values are non-decreasing
    pub fn is_sorted(&self) -> bool {
        self.elements.windows(2).all(|w| w[0].value <= w[1].value)
    }

    /// Largest value, used to scale bars
    pub fn max_value(&self) -> u32 {
        self.elements.iter().map(|e| e.value).max().unwrap_or(0)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", element.value)?;
        }
        f.write_str("]")
    }
}

/// One recorded event: the snapshot plus its caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub snapshot: Snapshot,
    pub description: String,
}

/// Errors found when checking a finished trace against its input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("trace has no steps")]
    Empty,

    #[error("final snapshot is out of order at index {index}")]
    NotSorted { index: usize },

    #[error("final snapshot is not a permutation of the input values")]
    NotPermutation,
}

/// Ordered, append-only record of one algorithm run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TraceStep> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }

    pub fn first(&self) -> Option<&TraceStep> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.last()
    }

    pub fn final_snapshot(&self) -> Option<&Snapshot> {
        self.steps.last().map(|step| &step.snapshot)
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.description.as_str())
    }

    /// Check that the final snapshot is a sorted permutation of `input`
    pub fn verify(&self, input: &[u32]) -> Result<(), TraceError> {
        let last = self.final_snapshot().ok_or(TraceError::Empty)?;

        if let Some(index) = last
            .elements()
            .windows(2)
            .position(|w| w[0].value > w[1].value)
        {
            return Err(TraceError::NotSorted { index: index + 1 });
        }

        let mut counts: FxHashMap<u32, isize> = FxHashMap::default();
        for &value in input {
            *counts.entry(value).or_insert(0) += 1;
        }
        for element in last.elements() {
            *counts.entry(element.value).or_insert(0) -= 1;
        }
        if counts.values().any(|&c| c != 0) {
            return Err(TraceError::NotPermutation);
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Builds a [`Trace`] during one algorithm run
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Vec<TraceStep>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        TraceRecorder { steps: Vec::new() }
    }

    /// Append a copy of `working` with its description.
    ///
    /// Call at the exact moment the event happens so transient labels are
    /// captured before they are cleared.
    pub fn record(&mut self, working: &[Element], description: impl Into<String>) {
        self.steps.push(TraceStep {
            snapshot: Snapshot::capture(working),
            description: description.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Hand the finished trace to the caller
    pub fn finish(self) -> Trace {
        Trace { steps: self.steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::from_values;

    #[test]
    fn test_record_copies_working_array() {
        let mut working = from_values(&[3, 1, 2]);
        let mut recorder = TraceRecorder::new();
        recorder.record(&working, "before");

        working[0].value = 99;
        working[0].label = State::Pivot;
        recorder.record(&working, "after");

        let trace = recorder.finish();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.steps()[0].snapshot.values(), vec![3, 1, 2]);
        assert_eq!(trace.steps()[0].snapshot.labels()[0], State::Default);
        assert_eq!(trace.steps()[1].snapshot.values(), vec![99, 1, 2]);
        assert_eq!(trace.steps()[1].description, "after");
    }

    #[test]
    fn test_snapshot_display() {
        let snapshot = Snapshot::capture(&from_values(&[4, 10, 2]));
        assert_eq!(snapshot.to_string(), "[4 10 2]");
        assert_eq!(Snapshot::capture(&[]).to_string(), "[]");
    }

    #[test]
    fn test_verify_accepts_sorted_permutation() {
        let mut recorder = TraceRecorder::new();
        recorder.record(&from_values(&[1, 2, 2, 5]), "done");
        assert_eq!(recorder.finish().verify(&[2, 5, 1, 2]), Ok(()));
    }

    #[test]
    fn test_verify_rejects_unsorted() {
        let mut recorder = TraceRecorder::new();
        recorder.record(&from_values(&[1, 3, 2]), "done");
        assert_eq!(
            recorder.finish().verify(&[1, 2, 3]),
            Err(TraceError::NotSorted { index: 2 })
        );
    }

    #[test]
    fn test_verify_rejects_changed_values() {
        let mut recorder = TraceRecorder::new();
        recorder.record(&from_values(&[1, 2, 2]), "done");
        assert_eq!(
            recorder.finish().verify(&[1, 2, 3]),
            Err(TraceError::NotPermutation)
        );
    }

    #[test]
    fn test_verify_empty_trace() {
        assert_eq!(Trace::default().verify(&[]), Err(TraceError::Empty));
    }
}
