//! Top-down merge sort
//!
//! Merged subarrays are flashed `Current` and then return to `Default`; only
//! the closing step marks the array `Sorted`. The merge takes from the left
//! run on ties, which keeps equal values in input order.

use crate::model::{mark_all, mark_range, Element, State};
use crate::snapshot::{Trace, TraceRecorder};

pub fn sort(elements: &mut [Element]) -> Trace {
    let mut rec = TraceRecorder::new();

    rec.record(
        elements,
        "Starting merge sort. The array is split in halves which are merged back in order.",
    );

    if !elements.is_empty() {
        let right = elements.len() - 1;
        merge_sort_range(elements, 0, right, &mut rec);
    }

    mark_all(elements, State::Sorted);
    rec.record(elements, "Merge sort complete! The array is fully sorted.");

    rec.finish()
}

/// Sort the inclusive range `left..=right`
pub fn merge_sort_range(
    elements: &mut [Element],
    left: usize,
    right: usize,
    rec: &mut TraceRecorder,
) {
    assert!(
        right < elements.len(),
        "merge sort range {}..={} out of bounds for length {}",
        left,
        right,
        elements.len()
    );

    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;

    mark_range(elements, left..=right, State::Current);
    rec.record(
        elements,
        format!(
            "Dividing array from index {} to {} at midpoint {}",
            left, right, mid
        ),
    );
    mark_range(elements, left..=right, State::Default);

    merge_sort_range(elements, left, mid, rec);
    merge_sort_range(elements, mid + 1, right, rec);
    merge(elements, left, mid, right, rec);
}

/// Merge the sorted runs `left..=mid` and `mid+1..=right`
pub fn merge(
    elements: &mut [Element],
    left: usize,
    mid: usize,
    right: usize,
    rec: &mut TraceRecorder,
) {
    assert!(
        left <= mid && mid < right && right < elements.len(),
        "merge bounds {}..={}..={} invalid for length {}",
        left,
        mid,
        right,
        elements.len()
    );

    let left_run: Vec<Element> = elements[left..=mid].to_vec();
    let right_run: Vec<Element> = elements[mid + 1..=right].to_vec();

    mark_range(elements, left..=right, State::Comparing);
    rec.record(
        elements,
        format!(
            "Merging subarrays from index {} to {} and from {} to {}",
            left,
            mid,
            mid + 1,
            right
        ),
    );
    mark_range(elements, left..=right, State::Default);

    let (mut i, mut j) = (0, 0);
    let mut k = left;

    while i < left_run.len() && j < right_run.len() {
        let from_left = left_run[i].value <= right_run[j].value;
        let side = if from_left {
            elements[k].take_value_from(&left_run[i]);
            i += 1;
            "left"
        } else {
            elements[k].take_value_from(&right_run[j]);
            j += 1;
            "right"
        };
        place(elements, k, side, rec);
        k += 1;
    }

    for remaining in &left_run[i..] {
        elements[k].take_value_from(remaining);
        place(elements, k, "remaining left", rec);
        k += 1;
    }

    for remaining in &right_run[j..] {
        elements[k].take_value_from(remaining);
        place(elements, k, "remaining right", rec);
        k += 1;
    }

    mark_range(elements, left..=right, State::Current);
    rec.record(
        elements,
        format!(
            "Subarray from index {} to {} is now merged and sorted",
            left, right
        ),
    );
    mark_range(elements, left..=right, State::Default);
}

fn place(elements: &mut [Element], k: usize, side: &str, rec: &mut TraceRecorder) {
    elements[k].label = State::Current;
    rec.record(
        elements,
        format!(
            "Placing {} from the {} subarray at position {}",
            elements[k].value, side, k
        ),
    );
    elements[k].label = State::Default;
}
