//! Heap sort over an implicit max-heap
//!
//! The heap occupies the prefix `0..len`; every index past the prefix already
//! holds its final value and is labeled `Sorted`.

use crate::model::{Element, State};
use crate::snapshot::{Trace, TraceRecorder};

pub fn sort(elements: &mut [Element]) -> Trace {
    let mut rec = TraceRecorder::new();
    let n = elements.len();

    rec.record(
        elements,
        "Starting heap sort. First a max heap is built from the array.",
    );

    for root in (0..n / 2).rev() {
        heapify(elements, n, root, &mut rec);
    }
    rec.record(
        elements,
        "Max heap built. The largest element is now extracted one at a time.",
    );

    for end in (1..n).rev() {
        elements[0].label = State::Comparing;
        elements[end].label = State::Comparing;
        rec.record(
            elements,
            format!(
                "Swapping root (max element) {} with last unsorted element {}",
                elements[0].value, elements[end].value
            ),
        );

        elements.swap(0, end);
        elements[end].label = State::Sorted;
        elements[0].label = State::Default;
        rec.record(
            elements,
            format!(
                "Element {} is now in its final position at index {}",
                elements[end].value, end
            ),
        );

        heapify(elements, end, 0, &mut rec);
    }

    if let Some(first) = elements.first_mut() {
        first.label = State::Sorted;
    }
    rec.record(elements, "Heap sort complete! The array is fully sorted.");

    rec.finish()
}

/// Sift `root` down within the heap prefix `0..len`
pub fn heapify(elements: &mut [Element], len: usize, root: usize, rec: &mut TraceRecorder) {
    assert!(
        root < len && len <= elements.len(),
        "heapify root {} outside heap of size {} (array length {})",
        root,
        len,
        elements.len()
    );

    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    elements[root].label = State::Current;
    rec.record(
        elements,
        format!("Heapifying subtree with root at index {}", root),
    );

    for (child, side, side_title) in [(left, "left", "Left"), (right, "right", "Right")] {
        if child >= len {
            continue;
        }

        elements[child].label = State::Comparing;
        rec.record(
            elements,
            format!(
                "Comparing {} child {} at index {} with current largest {} at index {}",
                side,
                elements[child].value,
                child,
                elements[largest].value,
                largest
            ),
        );

        if elements[child].value > elements[largest].value {
            if largest != root {
                elements[largest].label = State::Default;
            }
            largest = child;
            rec.record(
                elements,
                format!(
                    "{} child is larger, new largest is {} at index {}",
                    side_title, elements[largest].value, largest
                ),
            );
        }

        if largest != child {
            elements[child].label = State::Default;
        }
    }

    if largest != root {
        elements[root].label = State::Comparing;
        elements[largest].label = State::Comparing;
        rec.record(
            elements,
            format!(
                "Swapping root {} with largest {}",
                elements[root].value, elements[largest].value
            ),
        );

        elements.swap(root, largest);
        elements[root].label = State::Default;
        elements[largest].label = State::Default;

        heapify(elements, len, largest, rec);
    } else {
        elements[root].label = State::Default;
    }
}
