// Reference card shown in the info pane

use super::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComplexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time: TimeComplexity,
    pub space: &'static str,
    pub description: &'static str,
    pub use_cases: &'static [&'static str],
}

pub fn info(algorithm: Algorithm) -> AlgorithmInfo {
    match algorithm {
        Algorithm::Bubble => AlgorithmInfo {
            name: "Bubble Sort",
            time: TimeComplexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
            },
            space: "O(1)",
            description: "Repeatedly steps through the list, compares adjacent elements and \
                          swaps them when they are in the wrong order.",
            use_cases: &[
                "Teaching basic sorting concepts",
                "Tiny inputs where simplicity matters more than speed",
                "Nearly sorted arrays (with the early-exit check)",
            ],
        },
        Algorithm::Insertion => AlgorithmInfo {
            name: "Insertion Sort",
            time: TimeComplexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
            },
            space: "O(1)",
            description: "Builds the sorted array one item at a time, inserting each element \
                          from the unsorted part into its place in the sorted part.",
            use_cases: &[
                "Small or nearly sorted inputs",
                "Online sorting where data arrives one item at a time",
                "Finishing pass of hybrid sorts",
            ],
        },
        Algorithm::Selection => AlgorithmInfo {
            name: "Selection Sort",
            time: TimeComplexity {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
            },
            space: "O(1)",
            description: "Repeatedly finds the minimum of the unsorted part and moves it to \
                          the front of that part.",
            use_cases: &[
                "Small inputs where simplicity is valued",
                "Situations where writes are expensive (at most n swaps)",
                "Teaching basic sorting concepts",
            ],
        },
        Algorithm::Merge => AlgorithmInfo {
            name: "Merge Sort",
            time: TimeComplexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
            },
            space: "O(n)",
            description: "Divides the array into halves, sorts each half recursively and \
                          merges the sorted halves. Stable.",
            use_cases: &[
                "Large inputs needing guaranteed O(n log n)",
                "External sorting when data does not fit in memory",
                "Sorting linked lists",
            ],
        },
        Algorithm::Quick => AlgorithmInfo {
            name: "Quick Sort",
            time: TimeComplexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
            },
            space: "O(log n)",
            description: "Picks a pivot, partitions the array around it and sorts the two \
                          partitions recursively.",
            use_cases: &[
                "General-purpose in-memory sorting",
                "Large inputs with good average-case behaviour",
                "In-place sorting with little extra memory",
            ],
        },
        Algorithm::Heap => AlgorithmInfo {
            name: "Heap Sort",
            time: TimeComplexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
            },
            space: "O(1)",
            description: "Builds a max heap, then repeatedly moves the maximum to the end and \
                          restores the heap on the remaining prefix.",
            use_cases: &[
                "Real-time systems needing a guaranteed O(n log n) bound",
                "Memory-constrained environments",
                "Priority queue implementations",
            ],
        },
    }
}
