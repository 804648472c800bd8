// Labeled elements shared by every sorting algorithm

use std::fmt;
use std::ops::RangeInclusive;

/// Visual state of one element at the instant a snapshot is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    #[default]
    Default,
    Comparing,
    Sorted,
    Pivot,
    Current,
}

impl State {
    pub const ALL: [State; 5] = [
        State::Default,
        State::Comparing,
        State::Sorted,
        State::Pivot,
        State::Current,
    ];

    /// Short legend name
    pub fn name(self) -> &'static str {
        match self {
            State::Default => "Unsorted",
            State::Comparing => "Comparing",
            State::Sorted => "Sorted",
            State::Pivot => "Pivot",
            State::Current => "Current",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sortable value with its presentation label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    pub value: u32,
    /// Input index this value started at; travels with the value
    pub origin: usize,
    pub label: State,
}

impl Element {
    pub fn new(value: u32, origin: usize) -> Self {
        Element {
            value,
            origin,
            label: State::Default,
        }
    }

    /// Copy the payload (value and origin) of `other` into this slot, keeping
    /// this slot's label.
    pub fn take_value_from(&mut self, other: &Element) {
        self.value = other.value;
        self.origin = other.origin;
    }
}

/// Build unlabeled elements from raw values, `origin` set to the index
pub fn from_values(values: &[u32]) -> Vec<Element> {
    values
        .iter()
        .enumerate()
        .map(|(origin, &value)| Element::new(value, origin))
        .collect()
}

/// Label every index of an inclusive range
pub fn mark_range(elements: &mut [Element], range: RangeInclusive<usize>, state: State) {
    for element in &mut elements[range] {
        element.label = state;
    }
}

/// Label every element
pub fn mark_all(elements: &mut [Element], state: State) {
    for element in elements.iter_mut() {
        element.label = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_assigns_origins() {
        let elements = from_values(&[7, 3, 9]);
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[1].value, 3);
        assert_eq!(elements[1].origin, 1);
        assert!(elements.iter().all(|e| e.label == State::Default));
    }

    #[test]
    fn test_take_value_keeps_label() {
        let mut a = Element::new(1, 0);
        a.label = State::Current;
        let b = Element::new(5, 4);
        a.take_value_from(&b);
        assert_eq!(a.value, 5);
        assert_eq!(a.origin, 4);
        assert_eq!(a.label, State::Current);
    }

    #[test]
    fn test_mark_range_is_inclusive() {
        let mut elements = from_values(&[1, 2, 3, 4]);
        mark_range(&mut elements, 1..=2, State::Comparing);
        let labels: Vec<State> = elements.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                State::Default,
                State::Comparing,
                State::Comparing,
                State::Default
            ]
        );
    }
}
