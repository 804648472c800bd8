// Integration tests for the trace-emitting sorting algorithms

use sortty::algorithms::{bubble, heap, quick, Algorithm};
use sortty::model::{from_values, State};
use sortty::snapshot::Snapshot;

fn all_sorted(snapshot: &Snapshot) -> bool {
    snapshot.labels().iter().all(|&l| l == State::Sorted)
}

#[test]
fn test_bubble_three_one_two() {
    let mut elements = from_values(&[3, 1, 2]);
    let trace = bubble::sort(&mut elements);

    // First comparison marks indices 0 and 1
    let first_compare = &trace.steps()[1].snapshot;
    assert_eq!(
        first_compare.labels(),
        vec![State::Comparing, State::Comparing, State::Default]
    );
    assert_eq!(first_compare.values(), vec![3, 1, 2]);

    // The swap record shows [1, 3, 2]
    let swap = &trace.steps()[2];
    assert!(swap.description.starts_with("Swapped"));
    assert_eq!(swap.snapshot.values(), vec![1, 3, 2]);

    let last = trace.final_snapshot().expect("non-empty trace");
    assert_eq!(last.values(), vec![1, 2, 3]);
    assert!(all_sorted(last));
}

#[test]
fn test_quick_rightmost_pivot_scenario() {
    let mut elements = from_values(&[5, 3, 8, 4, 2]);
    let trace = quick::sort(&mut elements);

    let pivot_step = &trace.steps()[1];
    assert_eq!(
        pivot_step.snapshot.labels()[4],
        State::Pivot,
        "{}",
        pivot_step.description
    );
    assert!(pivot_step.description.contains("pivot 2"));

    let placed = trace
        .iter()
        .find(|s| s.description.starts_with("Pivot 2 is now in its final position"))
        .expect("pivot placement step");
    assert!(placed.description.ends_with("index 0"));
    assert_eq!(placed.snapshot.values()[0], 2);
    assert_eq!(placed.snapshot.labels()[0], State::Sorted);

    let last = trace.final_snapshot().expect("non-empty trace");
    assert_eq!(last.values(), vec![2, 3, 4, 5, 8]);
    assert!(all_sorted(last));
}

#[test]
fn test_quick_partition_index_for_scenario() {
    let mut elements = from_values(&[5, 3, 8, 4, 2]);
    let mut rec = sortty::snapshot::TraceRecorder::new();
    assert_eq!(quick::partition(&mut elements, 0, 4, &mut rec), 0);
}

#[test]
fn test_heap_single_element() {
    let mut elements = from_values(&[1]);
    let trace = heap::sort(&mut elements);

    assert_eq!(trace.len(), 3);
    assert!(trace.steps()[1].description.starts_with("Max heap built"));
    assert_eq!(
        trace
            .descriptions()
            .filter(|d| d.starts_with("Heap sort complete"))
            .count(),
        1
    );
    let last = trace.final_snapshot().expect("non-empty trace");
    assert_eq!(last.values(), vec![1]);
    assert!(all_sorted(last));
}

#[test]
fn test_trivial_inputs() {
    let cases: [&[u32]; 2] = [&[], &[42]];
    for algorithm in Algorithm::ALL {
        for values in cases {
            let trace = algorithm.trace(&from_values(values));
            assert!(trace.len() >= 2, "{} on {:?}", algorithm, values);
            assert!(trace.iter().all(|s| s.snapshot.is_sorted()));
            assert!(trace
                .last()
                .is_some_and(|s| s.description.contains("complete")));
            assert_eq!(trace.verify(values), Ok(()));
        }
    }
}

#[test]
fn test_every_trace_starts_with_input_and_ends_sorted() {
    let input = from_values(&[9, 4, 7, 1, 8, 2, 2, 6]);
    for algorithm in Algorithm::ALL {
        let trace = algorithm.trace(&input);
        let first = trace.first().expect("non-empty trace");
        assert_eq!(first.snapshot.elements(), &input[..], "{}", algorithm);
        assert!(first.description.starts_with("Starting"));

        let last = trace.final_snapshot().expect("non-empty trace");
        assert_eq!(last.values(), vec![1, 2, 2, 4, 6, 7, 8, 9], "{}", algorithm);
        assert!(all_sorted(last), "{}", algorithm);
    }
}

#[test]
fn test_snapshots_survive_working_array_mutation() {
    for algorithm in Algorithm::ALL {
        let mut working = from_values(&[4, 2, 5, 1, 3]);
        let trace = algorithm.sort(&mut working);
        let before = trace.clone();

        for element in working.iter_mut() {
            element.value = 0;
            element.label = State::Pivot;
        }

        assert_eq!(trace, before, "{}", algorithm);
        assert_eq!(
            trace.final_snapshot().map(|s| s.values()),
            Some(vec![1, 2, 3, 4, 5])
        );
    }
}

#[test]
fn test_sort_mutates_working_array_in_place() {
    let mut working = from_values(&[3, 2, 1]);
    Algorithm::Heap.sort(&mut working);
    let values: Vec<u32> = working.iter().map(|e| e.value).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_runs_are_deterministic() {
    let values = [12, 5, 5, 30, 1, 17, 5, 9];
    for algorithm in Algorithm::ALL {
        let a = algorithm.trace(&from_values(&values));
        let b = algorithm.trace(&from_values(&values));
        assert_eq!(a, b, "{}", algorithm);
    }
}

#[test]
fn test_merge_sort_is_stable() {
    let input = from_values(&[3, 1, 3, 2, 1, 3]);
    let trace = Algorithm::Merge.trace(&input);
    let last = trace.final_snapshot().expect("non-empty trace");
    let pairs: Vec<(u32, usize)> = last.elements().iter().map(|e| (e.value, e.origin)).collect();
    assert_eq!(
        pairs,
        vec![(1, 1), (1, 4), (2, 3), (3, 0), (3, 2), (3, 5)]
    );
}

#[test]
fn test_quick_sorted_input_worst_case() {
    let values: Vec<u32> = (1..=60).collect();
    let trace = Algorithm::Quick.trace(&from_values(&values));
    assert_eq!(trace.verify(&values), Ok(()));
    assert_eq!(
        trace
            .descriptions()
            .filter(|d| d.starts_with("Selected pivot"))
            .count(),
        59
    );
}
