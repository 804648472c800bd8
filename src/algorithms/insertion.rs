//! Insertion sort
//!
//! Values are shifted right one slot at a time while labels stay attached to
//! indices, so the trace shows the gap travelling left toward the insertion
//! point.

use crate::model::{mark_all, mark_range, Element, State};
use crate::snapshot::{Trace, TraceRecorder};

pub fn sort(elements: &mut [Element]) -> Trace {
    let mut rec = TraceRecorder::new();
    let n = elements.len();

    rec.record(
        elements,
        "Starting insertion sort. The sorted portion grows by one element at a time.",
    );

    if n > 0 {
        elements[0].label = State::Sorted;
        rec.record(elements, "The first element is trivially sorted.");
    }

    for i in 1..n {
        let key = elements[i];
        elements[i].label = State::Current;
        rec.record(
            elements,
            format!("Inserting element at position {} into the sorted portion", i),
        );

        // `slot` is the gap the key will land in; the candidate is `slot - 1`
        let mut slot = i;
        while slot > 0 && elements[slot - 1].value > key.value {
            let j = slot - 1;
            elements[j].label = State::Comparing;
            rec.record(
                elements,
                format!(
                    "{} at position {} is greater than {}, shifting it right",
                    elements[j].value, j, key.value
                ),
            );

            let shifted = elements[j];
            elements[slot].take_value_from(&shifted);
            elements[j].label = State::Default;
            slot = j;

            rec.record(
                elements,
                "Shifted element to the right to make room for the current element",
            );
        }

        elements[slot].take_value_from(&key);
        mark_range(elements, 0..=i, State::Sorted);
        rec.record(
            elements,
            format!("Placed {} at position {}", key.value, slot),
        );
    }

    mark_all(elements, State::Sorted);
    rec.record(elements, "Insertion sort complete! The array is fully sorted.");

    rec.finish()
}
