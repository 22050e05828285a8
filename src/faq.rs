//! FAQ accordion state
//!
//! The FAQ is rendered on the server, so the set of expanded questions travels
//! in the `open` query parameter (`?open=0,3`). Each question links to the
//! state with that question toggled.

use std::collections::BTreeSet;

/// Indices of the expanded FAQ entries. Any number may be open at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: BTreeSet<usize>,
}

impl FaqAccordion {
    /// Everything collapsed
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the `open` parameter. Entries that are not indices are ignored.
    pub fn from_query(value: Option<&str>) -> Self {
        let open = value
            .unwrap_or("")
            .split(',')
            .filter_map(|part| part.trim().parse::<usize>().ok())
            .collect();
        Self { open }
    }

    /// Open `index` if it is closed, close it if it is open
    pub fn toggle(&mut self, index: usize) {
        if !self.open.remove(&index) {
            self.open.insert(index);
        }
    }

    /// The state after toggling `index`, leaving `self` untouched
    pub fn toggled(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.toggle(index);
        next
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn open_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.open.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Encode for the `open` parameter; `None` when everything is collapsed
    pub fn to_query(&self) -> Option<String> {
        if self.open.is_empty() {
            return None;
        }
        let parts: Vec<String> = self.open.iter().map(usize::to_string).collect();
        Some(parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let accordion = FaqAccordion::new();
        assert!(accordion.is_empty());
        assert!(!accordion.is_open(0));
        assert_eq!(accordion.to_query(), None);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let original = FaqAccordion::from_query(Some("1,4"));
        for index in 0..6 {
            let mut state = original.clone();
            state.toggle(index);
            assert_ne!(state, original);
            state.toggle(index);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn test_several_entries_can_be_open() {
        let mut accordion = FaqAccordion::new();
        accordion.toggle(2);
        accordion.toggle(0);
        accordion.toggle(5);
        assert_eq!(accordion.open_indices().collect::<Vec<_>>(), vec![0, 2, 5]);
        assert_eq!(accordion.to_query().as_deref(), Some("0,2,5"));
    }

    #[test]
    fn test_toggled_leaves_original_untouched() {
        let accordion = FaqAccordion::from_query(Some("3"));
        let next = accordion.toggled(3);
        assert!(accordion.is_open(3));
        assert!(!next.is_open(3));
    }

    #[test]
    fn test_malformed_query_entries_are_ignored() {
        let accordion = FaqAccordion::from_query(Some("2, x,,-1, 7 "));
        assert_eq!(accordion.open_indices().collect::<Vec<_>>(), vec![2, 7]);
        assert_eq!(FaqAccordion::from_query(None), FaqAccordion::new());
    }
}
