//! Selection sort
//!
//! While scanning, exactly one index carries `Current`: the smallest value
//! found so far. A newly found minimum always demotes the previous one.

use crate::model::{Element, State};
use crate::snapshot::{Trace, TraceRecorder};

pub fn sort(elements: &mut [Element]) -> Trace {
    let mut rec = TraceRecorder::new();
    let n = elements.len();

    rec.record(
        elements,
        "Starting selection sort. The smallest remaining element is moved to the front each round.",
    );

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        elements[i].label = State::Current;
        rec.record(
            elements,
            format!(
                "Finding the minimum of the unsorted portion starting at position {}",
                i
            ),
        );

        for j in i + 1..n {
            elements[j].label = State::Comparing;
            rec.record(
                elements,
                format!(
                    "Comparing {} with current minimum {}",
                    elements[j].value, elements[min_idx].value
                ),
            );

            if elements[j].value < elements[min_idx].value {
                elements[min_idx].label = State::Default;
                min_idx = j;
                elements[min_idx].label = State::Current;
                rec.record(
                    elements,
                    format!(
                        "Found new minimum {} at position {}",
                        elements[min_idx].value, min_idx
                    ),
                );
            } else {
                elements[j].label = State::Default;
            }
        }

        if min_idx != i {
            elements[min_idx].label = State::Comparing;
            elements[i].label = State::Comparing;
            rec.record(
                elements,
                format!(
                    "Swapping minimum {} at position {} with {} at position {}",
                    elements[min_idx].value, min_idx, elements[i].value, i
                ),
            );
            elements.swap(i, min_idx);
            elements[min_idx].label = State::Default;
        }

        elements[i].label = State::Sorted;
        rec.record(
            elements,
            format!("Element at position {} is in its final position", i),
        );
    }

    if let Some(last) = elements.last_mut() {
        last.label = State::Sorted;
    }
    rec.record(elements, "Selection sort complete! The array is fully sorted.");

    rec.finish()
}
