//! Quick sort with the rightmost element as pivot (Lomuto partition)
//!
//! Recursion depth is linear on already-sorted input.

use crate::model::{mark_all, Element, State};
use crate::snapshot::{Trace, TraceRecorder};

pub fn sort(elements: &mut [Element]) -> Trace {
    let mut rec = TraceRecorder::new();

    rec.record(
        elements,
        "Starting quick sort. A pivot is chosen and the array is partitioned around it.",
    );

    if !elements.is_empty() {
        let high = elements.len() - 1;
        quick_sort_range(elements, 0, high, &mut rec);
    }

    mark_all(elements, State::Sorted);
    rec.record(elements, "Quick sort complete! The array is fully sorted.");

    rec.finish()
}

/// Sort the inclusive range `low..=high`
pub fn quick_sort_range(
    elements: &mut [Element],
    low: usize,
    high: usize,
    rec: &mut TraceRecorder,
) {
    assert!(
        high < elements.len(),
        "quick sort range {}..={} out of bounds for length {}",
        low,
        high,
        elements.len()
    );

    if low == high {
        elements[low].label = State::Sorted;
        rec.record(
            elements,
            format!("Single element at position {} is already sorted", low),
        );
        return;
    }
    if low > high {
        return;
    }

    let pivot = partition(elements, low, high, rec);

    if pivot > low {
        quick_sort_range(elements, low, pivot - 1, rec);
    }
    if pivot < high {
        quick_sort_range(elements, pivot + 1, high, rec);
    }
}

/// Partition `low..=high` around `elements[high]` and return the pivot's
/// final index. The pivot's slot is left `Sorted`.
pub fn partition(
    elements: &mut [Element],
    low: usize,
    high: usize,
    rec: &mut TraceRecorder,
) -> usize {
    assert!(
        low < high && high < elements.len(),
        "partition range {}..={} invalid for length {}",
        low,
        high,
        elements.len()
    );

    let pivot_value = elements[high].value;
    elements[high].label = State::Pivot;
    rec.record(
        elements,
        format!("Selected pivot {} at position {}", pivot_value, high),
    );

    for element in &mut elements[low..high] {
        element.label = State::Current;
    }
    rec.record(
        elements,
        format!("Partitioning subarray from index {} to {}", low, high),
    );
    for element in &mut elements[low..high] {
        element.label = State::Default;
    }

    // Next slot for an element <= pivot
    let mut store = low;

    for j in low..high {
        elements[j].label = State::Comparing;
        rec.record(
            elements,
            format!(
                "Comparing {} at position {} with pivot {}",
                elements[j].value, j, pivot_value
            ),
        );

        if elements[j].value <= pivot_value {
            if store != j {
                elements[store].label = State::Comparing;
                rec.record(
                    elements,
                    format!("Swapping elements at positions {} and {}", store, j),
                );
                elements.swap(store, j);
            } else {
                rec.record(
                    elements,
                    format!(
                        "Element at position {} is already in the correct partition",
                        j
                    ),
                );
            }
            elements[store].label = State::Default;
            store += 1;
        }

        elements[j].label = State::Default;
    }

    if store != high {
        elements[store].label = State::Comparing;
        rec.record(
            elements,
            format!("Swapping element at position {} with the pivot", store),
        );
        elements.swap(store, high);
        elements[high].label = State::Default;
    }
    elements[store].label = State::Sorted;
    rec.record(
        elements,
        format!(
            "Pivot {} is now in its final position at index {}",
            pivot_value, store
        ),
    );

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::from_values;

    #[test]
    fn test_partition_smallest_pivot() {
        let mut elements = from_values(&[5, 3, 8, 4, 2]);
        let mut rec = TraceRecorder::new();
        let pivot = partition(&mut elements, 0, 4, &mut rec);
        assert_eq!(pivot, 0);
        assert_eq!(elements[0].value, 2);
        assert_eq!(elements[0].label, State::Sorted);
        assert!(elements[1..].iter().all(|e| e.label == State::Default));
    }

    #[test]
    fn test_partition_largest_pivot_stays() {
        let mut elements = from_values(&[1, 2, 9]);
        let mut rec = TraceRecorder::new();
        let pivot = partition(&mut elements, 0, 2, &mut rec);
        assert_eq!(pivot, 2);
        assert_eq!(elements[2].origin, 2);
        let trace = rec.finish();
        assert!(!trace
            .descriptions()
            .any(|d| d.contains("with the pivot")));
        assert_eq!(
            trace
                .descriptions()
                .filter(|d| d.contains("already in the correct partition"))
                .count(),
            2
        );
    }

    #[test]
    fn test_pivot_highlight_step() {
        let mut elements = from_values(&[3, 1, 2]);
        let mut rec = TraceRecorder::new();
        partition(&mut elements, 0, 2, &mut rec);
        let trace = rec.finish();
        assert_eq!(
            trace.steps()[0].snapshot.labels(),
            vec![State::Default, State::Default, State::Pivot]
        );
        assert_eq!(
            trace.steps()[1].snapshot.labels(),
            vec![State::Current, State::Current, State::Pivot]
        );
    }

    #[test]
    fn test_single_element_side_is_marked_sorted() {
        // Pivot 3 stays at the end, then pivot 1 leaves index 1 on its own
        let mut elements = from_values(&[2, 1, 3]);
        let mut rec = TraceRecorder::new();
        quick_sort_range(&mut elements, 0, 2, &mut rec);
        let trace = rec.finish();

        let single = trace
            .iter()
            .find(|s| s.description == "Single element at position 1 is already sorted")
            .expect("single element step");
        assert_eq!(single.snapshot.values(), vec![1, 2, 3]);
        assert_eq!(single.snapshot.labels()[1], State::Sorted);
    }
}
