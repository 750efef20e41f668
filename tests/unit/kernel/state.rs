use super::*;
use crate::models::EntrySnapshot;

const ORDERED: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

fn tree() -> Tree<()> {
    Tree::from_snapshot(EntrySnapshot::node(
        "root",
        "root",
        (),
        vec![
            EntrySnapshot::node("a", "a", (), vec![EntrySnapshot::leaf("b", "b", ())]),
            EntrySnapshot::leaf("c", "c", ()),
        ],
    ))
    .unwrap()
}

fn ids(state: &SelectionState) -> Vec<&str> {
    state.selected().iter().map(EntryId::as_str).collect()
}

fn shift(state: &SelectionState, id: &str) -> SelectionState {
    state.after_shift_click(&ORDERED, id, MissingEndpointPolicy::Empty)
}

#[test]
fn test_click_replaces_selection() {
    let state = SelectionState::new().after_click("a").after_meta_click("b");
    let state = state.after_click("c");
    assert_eq!(ids(&state), vec!["c"]);
    assert_eq!(state.focused(), Some("c"));
    assert!(state.previous_shift_click().is_empty());
}

#[test]
fn test_meta_click_toggles_membership() {
    let state = SelectionState::new().after_click("a").after_meta_click("b");
    assert_eq!(ids(&state), vec!["a", "b"]);
    assert_eq!(state.focused(), Some("b"));

    // Deselecting the focused entry hands focus to the last one left.
    let state = state.after_meta_click("b");
    assert_eq!(ids(&state), vec!["a"]);
    assert_eq!(state.focused(), Some("a"));

    let state = state.after_meta_click("a");
    assert!(state.selected().is_empty());
    assert_eq!(state.focused(), None);
    assert!(state.is_empty());
}

#[test]
fn test_meta_click_unfocused_entry_keeps_focus() {
    let state = SelectionState::new().after_click("a").after_meta_click("b");
    let state = state.after_meta_click("a");
    assert_eq!(ids(&state), vec!["b"]);
    assert_eq!(state.focused(), Some("b"));
}

#[test]
fn test_shift_click_selects_range_and_keeps_focus() {
    let state = shift(&SelectionState::new().after_click("b"), "d");
    assert_eq!(ids(&state), vec!["b", "c", "d"]);
    assert_eq!(state.focused(), Some("b"));
    assert_eq!(state.previous_shift_click().len(), 3);

    // A second shift-click redefines the range around the same anchor.
    let state = shift(&state, "a");
    assert_eq!(ids(&state), vec!["a", "b"]);
    assert_eq!(state.focused(), Some("b"));
}

#[test]
fn test_shift_click_after_meta_click_keeps_earlier_picks() {
    let state = SelectionState::new().after_click("f").after_meta_click("a");
    let state = shift(&state, "c");
    assert_eq!(ids(&state), vec!["f", "a", "b", "c"]);
    assert_eq!(state.focused(), Some("a"));
}

#[test]
fn test_meta_click_clears_previous_shift_range() {
    let state = shift(&SelectionState::new().after_click("a"), "c");
    let state = state.after_meta_click("e");
    assert!(state.previous_shift_click().is_empty());

    // The old range is no longer replaced by the next shift-click.
    let state = shift(&state, "f");
    assert_eq!(ids(&state), vec!["a", "b", "c", "e", "f"]);
}

#[test]
fn test_shift_click_without_focus_anchors_on_first_entry() {
    let state = shift(&SelectionState::new(), "c");
    assert_eq!(ids(&state), vec!["a", "b", "c"]);
    assert_eq!(state.focused(), Some("a"));
}

#[test]
fn test_shift_click_on_empty_order_is_noop() {
    let empty: [&str; 0] = [];
    let state = SelectionState::new().after_click("x");
    let next = state.after_shift_click(&empty, "x", MissingEndpointPolicy::Empty);
    assert_eq!(next, state);
    let blank = SelectionState::new();
    assert_eq!(
        blank.after_shift_click(&empty, "x", MissingEndpointPolicy::Empty),
        blank
    );
}

#[test]
fn test_shift_click_with_hidden_focus() {
    let state = SelectionState::new().after_click("hidden");

    let next = shift(&state, "c");
    assert_eq!(ids(&next), vec!["hidden"]);
    assert!(next.previous_shift_click().is_empty());

    let next = state.after_shift_click(&ORDERED, "c", MissingEndpointPolicy::ClampToStart);
    assert_eq!(ids(&next), vec!["hidden", "a", "b", "c"]);
    assert_eq!(next.focused(), Some("hidden"));
}

#[test]
fn test_selection_retain_existing() {
    let tree = tree();
    let state = SelectionState::new()
        .after_click("gone")
        .after_meta_click("b")
        .after_meta_click("c");
    let state = state.retain_existing(&tree);
    assert_eq!(ids(&state), vec!["b", "c"]);
    assert_eq!(state.focused(), Some("c"));

    let state = SelectionState::new().after_click("gone").retain_existing(&tree);
    assert!(state.is_empty());
}

#[test]
fn test_expanded_nodes_only_hold_folders() {
    let tree = tree();
    let mut expanded = ExpandedNodes::new();
    assert!(!expanded.expand(&tree, "b"));
    assert!(!expanded.expand(&tree, "missing"));
    assert!(expanded.expand(&tree, "a"));
    assert!(!expanded.expand(&tree, "a"));
    assert!(expanded.contains("a"));
    assert_eq!(expanded.len(), 1);

    assert!(expanded.toggle(&tree, "a"));
    assert!(!expanded.contains("a"));
    assert!(expanded.toggle(&tree, "a"));
    assert!(expanded.collapse("a"));
    assert!(!expanded.collapse("a"));
    assert!(expanded.is_empty());
}

#[test]
fn test_expanded_nodes_retain_existing() {
    let tree = tree();
    let mut expanded = ExpandedNodes::from_ids(["a", "gone"]);
    assert!(expanded.retain_existing(&tree));
    assert_eq!(expanded.iter().collect::<Vec<_>>(), vec!["a"]);
    assert!(!expanded.retain_existing(&tree));
    assert!(expanded.clear());
    assert!(!expanded.clear());
}
