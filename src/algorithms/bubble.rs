//! Bubble sort with early exit

use crate::model::{mark_all, mark_range, Element, State};
use crate::snapshot::{Trace, TraceRecorder};

pub fn sort(elements: &mut [Element]) -> Trace {
    let mut rec = TraceRecorder::new();
    let n = elements.len();

    rec.record(
        elements,
        "Starting bubble sort. Adjacent elements are compared and swapped when out of order.",
    );

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        let last = n - pass - 1;

        for j in 0..last {
            elements[j].label = State::Comparing;
            elements[j + 1].label = State::Comparing;
            rec.record(
                elements,
                format!("Comparing elements at positions {} and {}", j, j + 1),
            );

            if elements[j].value > elements[j + 1].value {
                elements.swap(j, j + 1);
                swapped = true;
                rec.record(
                    elements,
                    format!(
                        "Swapped positions {} and {} since {} > {}",
                        j,
                        j + 1,
                        elements[j + 1].value,
                        elements[j].value
                    ),
                );
            } else {
                rec.record(
                    elements,
                    format!(
                        "No swap needed: {} <= {}",
                        elements[j].value,
                        elements[j + 1].value
                    ),
                );
            }

            elements[j].label = State::Default;
            elements[j + 1].label = State::Default;
        }

        elements[last].label = State::Sorted;
        rec.record(
            elements,
            format!("Element at position {} is in its final position", last),
        );

        if !swapped {
            if last > 0 {
                mark_range(elements, 0..=last - 1, State::Sorted);
            }
            rec.record(
                elements,
                "No swaps in this pass, so the remaining elements are already sorted",
            );
            break;
        }
    }

    mark_all(elements, State::Sorted);
    rec.record(elements, "Bubble sort complete! The array is fully sorted.");

    rec.finish()
}
