//! Selection engine: visual ordering of the tree, shift-click ranges and
//! drag-move filtering.
//!
//! Everything here is pure and compares entries by id only.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::state::ExpandedNodes;
use crate::models::{sort_entries, ColumnsConfig, Entry, EntryId, Tree};

pub trait Identified {
    fn entry_id(&self) -> &str;
}

impl<T> Identified for Entry<T> {
    fn entry_id(&self) -> &str {
        self.id()
    }
}

impl Identified for EntryId {
    fn entry_id(&self) -> &str {
        self.as_str()
    }
}

impl Identified for str {
    fn entry_id(&self) -> &str {
        self
    }
}

impl Identified for String {
    fn entry_id(&self) -> &str {
        self.as_str()
    }
}

impl<E: Identified + ?Sized> Identified for &E {
    fn entry_id(&self) -> &str {
        (**self).entry_id()
    }
}

pub fn entries_includes<E: Identified>(entries: &[E], id: &str) -> bool {
    entries.iter().any(|e| e.entry_id() == id)
}

pub fn entries_index_of<E: Identified>(entries: &[E], id: &str) -> Option<usize> {
    entries.iter().position(|e| e.entry_id() == id)
}

/// What a shift-click range does when one endpoint is not in the visual
/// order (e.g. it sits inside a folder collapsed since it was focused).
/// A range with both endpoints missing is always empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEndpointPolicy {
    #[default]
    Empty,
    ClampToStart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    DraggedEntryNotSelected { id: EntryId },
    UnknownEntry { id: EntryId },
    TargetNotNode { id: EntryId },
    MoveIntoDescendant { id: EntryId, target: EntryId },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::DraggedEntryNotSelected { id } => {
                write!(f, "dragged entry {id} was not in selected entries")
            }
            SelectionError::UnknownEntry { id } => write!(f, "unknown entry {id}"),
            SelectionError::TargetNotNode { id } => {
                write!(f, "cannot move entries into {id}: not a folder")
            }
            SelectionError::MoveIntoDescendant { id, target } => {
                write!(f, "cannot move {id} into its own subtree ({target})")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Depth-first walk of the tree in visual order. Siblings are sorted per
/// level, and only expanded nodes have their children spliced in after them.
pub struct OrderedEntries<'a, T> {
    tree: &'a Tree<T>,
    config: &'a ColumnsConfig<T>,
    expanded: &'a ExpandedNodes,
    stack: Vec<std::vec::IntoIter<&'a Entry<T>>>,
}

impl<'a, T> OrderedEntries<'a, T> {
    fn sorted_children(&self, entry: &'a Entry<T>) -> std::vec::IntoIter<&'a Entry<T>> {
        let mut children: Vec<&'a Entry<T>> = self.tree.children(entry).collect();
        sort_entries(&mut children, self.config);
        children.into_iter()
    }
}

impl<'a, T> Iterator for OrderedEntries<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(entry) => {
                    if entry.is_node() && self.expanded.contains(entry.id()) {
                        let children = self.sorted_children(entry);
                        self.stack.push(children);
                    }
                    return Some(entry);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

pub fn ordered_entries<'a, T>(
    tree: &'a Tree<T>,
    config: &'a ColumnsConfig<T>,
    expanded: &'a ExpandedNodes,
) -> OrderedEntries<'a, T> {
    let mut walk = OrderedEntries {
        tree,
        config,
        expanded,
        stack: Vec::new(),
    };
    let top = walk.sorted_children(tree.root());
    walk.stack.push(top);
    walk
}

pub fn ordered_ids<T>(
    tree: &Tree<T>,
    config: &ColumnsConfig<T>,
    expanded: &ExpandedNodes,
) -> Vec<EntryId> {
    ordered_entries(tree, config, expanded)
        .map(|entry| EntryId::from(entry.id()))
        .collect()
}

/// Irreflexive; ids missing from the tree are never descendants.
pub fn is_descendant_of<T>(tree: &Tree<T>, candidate: &str, ancestor: &str) -> bool {
    tree.is_descendant_of(candidate, ancestor)
}

/// Inclusive run of `ordered` between the two endpoints, whichever comes
/// first.
pub fn shift_click_range<E: Identified + Clone>(
    ordered: &[E],
    previously_focused: &str,
    newly_focused: &str,
    policy: MissingEndpointPolicy,
) -> Vec<E> {
    let from = entries_index_of(ordered, previously_focused);
    let to = entries_index_of(ordered, newly_focused);

    let bounds = match (from, to) {
        (Some(a), Some(b)) => Some((a.min(b), a.max(b))),
        (Some(found), None) | (None, Some(found)) => match policy {
            MissingEndpointPolicy::Empty => None,
            MissingEndpointPolicy::ClampToStart => Some((0, found)),
        },
        (None, None) => None,
    };

    match bounds {
        Some((start, end)) => ordered[start..=end].to_vec(),
        None => Vec::new(),
    }
}

/// Replaces the previous shift-click range with the new one. Entries of
/// `current` outside both ranges keep their relative order in front.
pub fn new_selection_from_shift_click<E: Identified + Clone>(
    previous_range: &[E],
    new_range: &[E],
    current: &[E],
) -> Vec<E> {
    let superseded: FxHashSet<&str> = previous_range
        .iter()
        .chain(new_range)
        .map(Identified::entry_id)
        .collect();

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut out = Vec::with_capacity(current.len() + new_range.len());

    for entry in current {
        let id = entry.entry_id();
        if !superseded.contains(id) && seen.insert(id) {
            out.push(entry.clone());
        }
    }
    for entry in new_range {
        if seen.insert(entry.entry_id()) {
            out.push(entry.clone());
        }
    }
    out
}

/// Top-most selected entries for a drag of `dragged_id`: anything below
/// another selected entry moves with it and is left out.
pub fn ids_of_entries_to_move<T, E: Identified>(
    tree: &Tree<T>,
    selected: &[E],
    dragged_id: &str,
) -> Result<Vec<EntryId>, SelectionError> {
    if !entries_includes(selected, dragged_id) {
        return Err(SelectionError::DraggedEntryNotSelected {
            id: dragged_id.into(),
        });
    }

    let selected_ids: FxHashSet<&str> = selected.iter().map(Identified::entry_id).collect();

    Ok(selected
        .iter()
        .filter(|entry| {
            !tree
                .ancestors(entry.entry_id())
                .any(|ancestor| selected_ids.contains(ancestor.id()))
        })
        .map(|entry| EntryId::from(entry.entry_id()))
        .collect())
}

pub fn validate_move_target<T>(
    tree: &Tree<T>,
    ids: &[EntryId],
    target: &str,
) -> Result<(), SelectionError> {
    let target_entry = tree.get(target).ok_or_else(|| SelectionError::UnknownEntry {
        id: target.into(),
    })?;
    if !target_entry.is_node() {
        return Err(SelectionError::TargetNotNode { id: target.into() });
    }

    for id in ids {
        if !tree.contains(id) {
            return Err(SelectionError::UnknownEntry { id: id.clone() });
        }
        if id.as_str() == target || tree.is_descendant_of(target, id) {
            return Err(SelectionError::MoveIntoDescendant {
                id: id.clone(),
                target: target.into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/selection.rs"]
mod tests;
