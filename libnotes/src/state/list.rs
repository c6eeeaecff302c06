//! Notes list reducer

use crate::types::{Note, NoteKey};

/// Notes collection plus the note targeted by the last `Get`
///
/// `selected` is not required to stay in `items`: when a `SetData` drops the
/// selected note it dangles until `Clear` is dispatched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteListState {
    /// Server or search response order
    pub items: Vec<Note>,
    pub selected: Option<Note>,
}

impl NoteListState {
    pub fn new(items: Vec<Note>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    pub fn find(&self, key: NoteKey) -> Option<&Note> {
        self.items.iter().find(|note| note.key == key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    /// Replace `items` wholesale after a full fetch or search
    SetData(Vec<Note>),

    /// Select the item with this key (or nothing if absent)
    Get(NoteKey),

    /// Append a newly created note
    Add(Note),

    /// Replace the item with the same key
    Edit(Note),

    /// Remove the item with this key
    Delete(NoteKey),

    /// Drop the selection
    Clear,
}

impl ListAction {
    pub fn name(&self) -> &'static str {
        match self {
            ListAction::SetData(_) => "SET_DATA",
            ListAction::Get(_) => "GET",
            ListAction::Add(_) => "ADD",
            ListAction::Edit(_) => "EDIT",
            ListAction::Delete(_) => "DELETE",
            ListAction::Clear => "CLEAR",
        }
    }
}

/// Pure reducer for the notes list
pub fn reduce(state: NoteListState, action: ListAction) -> NoteListState {
    match action {
        ListAction::SetData(items) => NoteListState { items, ..state },

        ListAction::Get(key) => {
            let selected = state.find(key).cloned();
            NoteListState { selected, ..state }
        }

        ListAction::Add(note) => {
            let mut items = state.items;
            items.push(note);
            NoteListState { items, ..state }
        }

        ListAction::Edit(note) => {
            let Some(pos) = state.items.iter().position(|n| n.key == note.key) else {
                tracing::debug!(key = note.key, "Edit for unknown note ignored");
                return state;
            };
            let mut items = state.items;
            items[pos] = note;
            NoteListState { items, ..state }
        }

        ListAction::Delete(key) => {
            let items = state.items.into_iter().filter(|n| n.key != key).collect();
            let selected = state.selected.filter(|n| n.key != key);
            NoteListState { items, selected }
        }

        ListAction::Clear => NoteListState {
            selected: None,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn note(key: NoteKey, name: &str) -> Note {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Note::new(key, name, "description", created)
    }

    fn keys(state: &NoteListState) -> Vec<NoteKey> {
        state.items.iter().map(|n| n.key).collect()
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = NoteListState::new(vec![note(1, "one")]);
        let original = state.clone();

        let new_state = reduce(state.clone(), ListAction::Add(note(2, "two")));

        assert_eq!(state, original);
        assert_eq!(new_state.items.len(), 2);
    }

    #[test]
    fn test_set_data_keeps_selection() {
        let state = reduce(NoteListState::new(vec![note(1, "one")]), ListAction::Get(1));
        let state = reduce(state, ListAction::SetData(vec![note(5, "five")]));

        assert_eq!(keys(&state), vec![5]);
        assert_eq!(state.selected.map(|n| n.key), Some(1));
    }

    #[test]
    fn test_get_unknown_key_clears_selection() {
        let state = reduce(NoteListState::new(vec![note(1, "one")]), ListAction::Get(1));
        let state = reduce(state, ListAction::Get(42));

        assert!(state.selected.is_none());
    }

    #[test]
    fn test_get_then_clear() {
        let state = NoteListState::new(vec![note(1, "one"), note(2, "two")]);
        let state = reduce(state, ListAction::Get(2));
        let state = reduce(state, ListAction::Clear);

        assert!(state.selected.is_none());
        assert_eq!(keys(&state), vec![1, 2]);
    }

    #[test]
    fn test_add_appends() {
        let state = NoteListState::new(vec![note(3, "three")]);
        let state = reduce(state, ListAction::Add(note(1, "one")));

        assert_eq!(keys(&state), vec![3, 1]);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let state = NoteListState::new(vec![note(1, "one"), note(2, "two"), note(3, "three")]);
        let state = reduce(state, ListAction::Edit(note(2, "renamed")));

        assert_eq!(keys(&state), vec![1, 2, 3]);
        assert_eq!(state.items[1].name, "renamed");
    }

    #[test]
    fn test_edit_unknown_key_is_noop() {
        let state = NoteListState::new(vec![note(1, "one")]);
        let new_state = reduce(state.clone(), ListAction::Edit(note(9, "ghost")));

        assert_eq!(new_state, state);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let state = NoteListState::new(vec![note(1, "one"), note(2, "two")]);
        let state = reduce(state, ListAction::Get(2));
        let state = reduce(state, ListAction::Delete(2));

        assert_eq!(keys(&state), vec![1]);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_delete_other_key_keeps_selection() {
        let state = NoteListState::new(vec![note(1, "one"), note(2, "two")]);
        let state = reduce(state, ListAction::Get(2));
        let state = reduce(state, ListAction::Delete(1));

        assert_eq!(keys(&state), vec![2]);
        assert_eq!(state.selected.map(|n| n.key), Some(2));
    }

    #[test]
    fn test_selection_may_dangle_after_set_data() {
        let state = NoteListState::new(vec![note(1, "one")]);
        let state = reduce(state, ListAction::Get(1));
        let state = reduce(state, ListAction::SetData(Vec::new()));

        assert!(state.items.is_empty());
        assert_eq!(state.selected.map(|n| n.key), Some(1));
    }

    #[test]
    fn test_order_survives_mixed_sequence() {
        let mut state = NoteListState::default();
        state = reduce(state, ListAction::SetData(vec![note(4, "a"), note(2, "b")]));
        state = reduce(state, ListAction::Add(note(9, "c")));
        state = reduce(state, ListAction::Edit(note(2, "b2")));
        state = reduce(state, ListAction::Add(note(1, "d")));
        state = reduce(state, ListAction::Delete(4));
        state = reduce(state, ListAction::Edit(note(77, "missing")));

        assert_eq!(keys(&state), vec![2, 9, 1]);
    }

    #[test]
    fn test_select_then_delete_scenario() {
        let state = NoteListState::default();
        let state = reduce(state, ListAction::SetData(vec![note(1, "one"), note(2, "two")]));

        let state = reduce(state, ListAction::Get(2));
        assert_eq!(state.selected.as_ref().map(|n| n.key), Some(2));

        let state = reduce(state, ListAction::Delete(2));
        assert_eq!(state.items.len(), 1);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_action_names() {
        assert_eq!(ListAction::SetData(Vec::new()).name(), "SET_DATA");
        assert_eq!(ListAction::Clear.name(), "CLEAR");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn named(key: NoteKey, tag: u32) -> Note {
            note(key, &format!("n{}", tag))
        }

        fn action_strategy() -> impl Strategy<Value = ListAction> {
            let key = 0i64..6;
            let tag = 0u32..1000;
            prop_oneof![
                prop::collection::vec((key.clone(), tag.clone()), 0..5).prop_map(|notes| {
                    ListAction::SetData(notes.into_iter().map(|(k, t)| named(k, t)).collect())
                }),
                (key.clone(), tag.clone()).prop_map(|(k, t)| ListAction::Add(named(k, t))),
                (key.clone(), tag).prop_map(|(k, t)| ListAction::Edit(named(k, t))),
                key.clone().prop_map(ListAction::Delete),
                key.prop_map(ListAction::Get),
                Just(ListAction::Clear),
            ]
        }

        /// Expected `(key, name)` sequence after one action
        fn model(items: &[(NoteKey, String)], action: &ListAction) -> Vec<(NoteKey, String)> {
            let mut items = items.to_vec();
            match action {
                ListAction::SetData(notes) => {
                    items = notes.iter().map(|n| (n.key, n.name.clone())).collect();
                }
                ListAction::Add(n) => items.push((n.key, n.name.clone())),
                ListAction::Edit(n) => {
                    if let Some(slot) = items.iter_mut().find(|(k, _)| *k == n.key) {
                        slot.1 = n.name.clone();
                    }
                }
                ListAction::Delete(key) => items.retain(|(k, _)| k != key),
                ListAction::Get(_) | ListAction::Clear => {}
            }
            items
        }

        fn pairs(state: &NoteListState) -> Vec<(NoteKey, String)> {
            state.items.iter().map(|n| (n.key, n.name.clone())).collect()
        }

        proptest! {
            #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

            #[test]
            fn order_follows_insertion_and_server_order(
                actions in prop::collection::vec(action_strategy(), 0..40)
            ) {
                let mut state = NoteListState::default();
                let mut expected = Vec::new();

                for action in actions {
                    expected = model(&expected, &action);
                    let deleted = match &action {
                        ListAction::Delete(key) => Some(*key),
                        _ => None,
                    };

                    state = reduce(state, action);
                    prop_assert_eq!(pairs(&state), expected.clone());

                    if let Some(key) = deleted {
                        prop_assert!(state.selected.as_ref().map_or(true, |n| n.key != key));
                    }
                }
            }

            #[test]
            fn get_then_clear_always_unselects(
                actions in prop::collection::vec(action_strategy(), 0..20),
                key in 0i64..6
            ) {
                let state = actions.into_iter().fold(NoteListState::default(), reduce);

                let state = reduce(state, ListAction::Get(key));
                let state = reduce(state, ListAction::Clear);

                prop_assert!(state.selected.is_none());
            }

            #[test]
            fn edit_of_unknown_key_leaves_items(
                actions in prop::collection::vec(action_strategy(), 0..20),
                tag in 0u32..1000
            ) {
                let state = actions.into_iter().fold(NoteListState::default(), reduce);
                let before = state.items.clone();

                // Generated keys stay below 6
                let state = reduce(state, ListAction::Edit(named(99, tag)));

                prop_assert_eq!(state.items, before);
            }
        }
    }
}
