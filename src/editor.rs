//! Scheme List Editor
//!
//! Ordered list of scheme entries. Every mutation is an `EditorAction`
//! applied by the pure `reduce` function.

use crate::error::ValidationError;
use crate::models::{SchemeEntry, SchemeType};

/// Edits the user can make to the list
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Append an empty entry
    Add,
    SetType { id: String, value: SchemeType },
    SetAmount { id: String, value: String },
    Remove { id: String },
    /// Move the entry at `from` so it ends up at index `to`
    Reorder { from: usize, to: usize },
}

/// Editor state: the entries in persisted order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub entries: Vec<SchemeEntry>,
}

impl EditorState {
    /// Apply one action and return the resulting state
    pub fn reduce(mut self, action: EditorAction) -> Self {
        match action {
            EditorAction::Add => self.add(),
            EditorAction::SetType { id, value } => {
                self.update_entry(&id, |entry| entry.scheme_type = value)
            }
            EditorAction::SetAmount { id, value } => {
                self.update_entry(&id, |entry| entry.amount = value)
            }
            EditorAction::Remove { id } => self.remove(&id),
            EditorAction::Reorder { from, to } => self.reorder(from, to),
        }
        self
    }

    fn add(&mut self) {
        let mut entry = SchemeEntry::new();
        // UUID collisions are not expected, but the list must stay unique
        while self.entries.iter().any(|e| e.id == entry.id) {
            entry = SchemeEntry::new();
        }
        self.entries.push(entry);
    }

    /// Unknown ids are ignored
    fn update_entry(&mut self, id: &str, apply: impl FnOnce(&mut SchemeEntry)) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            apply(entry);
        }
    }

    fn remove(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
    }

    /// Out-of-range indices leave the list unchanged
    fn reorder(&mut self, from: usize, to: usize) {
        let len = self.entries.len();
        if from >= len || to >= len || from == to {
            return;
        }
        let moved = self.entries.remove(from);
        self.entries.insert(to, moved);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: &str) -> Option<&SchemeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Submit is offered once the list is non-empty and the last entry has a type
    pub fn can_submit(&self) -> bool {
        self.entries
            .last()
            .map(|last| last.scheme_type.is_set())
            .unwrap_or(false)
    }
}

/// Parse a user-entered amount; only finite numbers above zero pass
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}

/// Coerce every amount, failing on the first non-positive or non-numeric one
pub fn validate_amounts(entries: &[SchemeEntry]) -> Result<Vec<f64>, ValidationError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            parse_amount(&entry.amount).ok_or_else(|| ValidationError {
                position: index + 1,
                amount: entry.amount.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn with_entries(n: usize) -> EditorState {
        (0..n).fold(EditorState::default(), |state, _| state.reduce(EditorAction::Add))
    }

    fn ids(state: &EditorState) -> Vec<String> {
        state.entries.iter().map(|e| e.id.clone()).collect()
    }

    fn assert_unique(state: &EditorState) {
        let unique: HashSet<_> = state.entries.iter().map(|e| &e.id).collect();
        assert_eq!(unique.len(), state.len());
    }

    #[test]
    fn test_add_appends_unset_entry() {
        let state = with_entries(2);
        assert_eq!(state.len(), 2);
        assert!(state.entries.iter().all(|e| e.scheme_type == SchemeType::Unset));
        assert!(state.entries.iter().all(|e| e.amount.is_empty()));
        assert_unique(&state);
    }

    #[test]
    fn test_ids_stay_unique_across_edits() {
        let mut state = with_entries(3);
        let first = state.entries[0].id.clone();
        let second = state.entries[1].id.clone();
        state = state
            .reduce(EditorAction::Remove { id: first })
            .reduce(EditorAction::Add)
            .reduce(EditorAction::SetType { id: second.clone(), value: SchemeType::Fixed })
            .reduce(EditorAction::SetAmount { id: second, value: "4".into() })
            .reduce(EditorAction::Add)
            .reduce(EditorAction::Add);
        assert_eq!(state.len(), 5);
        assert_unique(&state);
    }

    #[test]
    fn test_update_field_by_id() {
        let state = with_entries(2);
        let id = state.entries[1].id.clone();
        let state = state
            .reduce(EditorAction::SetType { id: id.clone(), value: SchemeType::Variable })
            .reduce(EditorAction::SetAmount { id: id.clone(), value: "2.5".into() });

        let entry = state.get(&id).unwrap();
        assert_eq!(entry.scheme_type, SchemeType::Variable);
        assert_eq!(entry.amount, "2.5");
        assert!(entry.amount_visible());
        assert_eq!(state.entries[0].scheme_type, SchemeType::Unset);
    }

    #[test]
    fn test_update_unknown_id_is_ignored() {
        let state = with_entries(2);
        let before = state.clone();
        let after = state.reduce(EditorAction::SetAmount { id: "missing".into(), value: "9".into() });
        assert_eq!(after, before);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let state = with_entries(3);
        let id = state.entries[1].id.clone();
        let once = state.reduce(EditorAction::Remove { id: id.clone() });
        let twice = once.clone().reduce(EditorAction::Remove { id });
        assert_eq!(once.len(), 2);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reorder_moves_entry() {
        let state = with_entries(4);
        let original = ids(&state);
        let state = state.reduce(EditorAction::Reorder { from: 0, to: 2 });
        assert_eq!(
            ids(&state),
            vec![original[1].clone(), original[2].clone(), original[0].clone(), original[3].clone()]
        );
    }

    #[test]
    fn test_reorder_round_trip_restores_order() {
        let state = with_entries(5);
        let original = ids(&state);
        for (i, j) in [(0, 4), (4, 0), (1, 3), (2, 2), (3, 1)] {
            let moved = state
                .clone()
                .reduce(EditorAction::Reorder { from: i, to: j })
                .reduce(EditorAction::Reorder { from: j, to: i });
            assert_eq!(ids(&moved), original, "reorder({}, {}) did not round-trip", i, j);
        }
    }

    #[test]
    fn test_reorder_out_of_range_is_rejected() {
        let state = with_entries(3);
        let before = state.clone();
        assert_eq!(state.clone().reduce(EditorAction::Reorder { from: 3, to: 0 }), before);
        assert_eq!(state.reduce(EditorAction::Reorder { from: 0, to: 7 }), before);
    }

    #[test]
    fn test_can_submit_checks_last_entry() {
        let state = EditorState::default();
        assert!(!state.can_submit());

        let state = with_entries(2);
        assert!(!state.can_submit());

        let last = state.entries[1].id.clone();
        let state = state.reduce(EditorAction::SetType { id: last, value: SchemeType::Fixed });
        // First entry is still unset; only the last one gates submit
        assert!(state.can_submit());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("5"), Some(5.0));
        assert_eq!(parse_amount(" 2.5 "), Some(2.5));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_validate_reports_first_bad_position() {
        let state = with_entries(3);
        let ids = ids(&state);
        let state = state
            .reduce(EditorAction::SetAmount { id: ids[0].clone(), value: "1".into() })
            .reduce(EditorAction::SetAmount { id: ids[1].clone(), value: "abc".into() })
            .reduce(EditorAction::SetAmount { id: ids[2].clone(), value: "0".into() });

        let err = validate_amounts(&state.entries).unwrap_err();
        assert_eq!(err.position, 2);
        assert_eq!(err.amount, "abc");
    }

    #[test]
    fn test_validate_coerces_amounts() {
        let state = with_entries(2);
        let ids = ids(&state);
        let state = state
            .reduce(EditorAction::SetAmount { id: ids[0].clone(), value: "5".into() })
            .reduce(EditorAction::SetAmount { id: ids[1].clone(), value: "2.5".into() });
        assert_eq!(validate_amounts(&state.entries).unwrap(), vec![5.0, 2.5]);
    }
}
