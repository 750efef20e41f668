use rustc_hash::FxHashSet;

use super::selection::{
    entries_includes, new_selection_from_shift_click, ordered_ids, shift_click_range,
    Identified, MissingEndpointPolicy,
};
use crate::models::{
    default_columns_config, ColumnsConfig, EntryId, Tree, Workspace, WorkspaceEntry,
};
use crate::settings::Settings;

/// Folders currently open in the browser, by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedNodes {
    ids: FxHashSet<EntryId>,
}

impl ExpandedNodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EntryId>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(EntryId::as_str)
    }

    /// Leaves and unknown ids are ignored.
    pub fn expand<T>(&mut self, tree: &Tree<T>, id: &str) -> bool {
        if !tree.is_node(id) {
            return false;
        }
        self.ids.insert(id.into())
    }

    pub fn collapse(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn toggle<T>(&mut self, tree: &Tree<T>, id: &str) -> bool {
        if self.contains(id) {
            self.collapse(id)
        } else {
            self.expand(tree, id)
        }
    }

    pub fn retain_existing<T>(&mut self, tree: &Tree<T>) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| tree.is_node(id));
        self.ids.len() != before
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.ids.is_empty();
        self.ids.clear();
        changed
    }
}

/// Selected entries in selection order, the focused entry and the range
/// produced by the last shift-click. Gestures return a new state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Vec<EntryId>,
    focused: Option<EntryId>,
    previous_shift_click: Vec<EntryId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[EntryId] {
        &self.selected
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn previous_shift_click(&self) -> &[EntryId] {
        &self.previous_shift_click
    }

    pub fn is_selected(&self, id: &str) -> bool {
        entries_includes(&self.selected, id)
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.focused.is_none()
    }

    #[must_use]
    pub fn after_click(&self, id: &str) -> Self {
        Self {
            selected: vec![id.into()],
            focused: Some(id.into()),
            previous_shift_click: Vec::new(),
        }
    }

    #[must_use]
    pub fn after_meta_click(&self, id: &str) -> Self {
        if self.is_selected(id) {
            let selected: Vec<EntryId> = self
                .selected
                .iter()
                .filter(|e| e.as_str() != id)
                .cloned()
                .collect();
            // 取消选中的正好是焦点：焦点回到最后一个仍被选中的条目
            let focused = if self.is_focused(id) {
                selected.last().cloned()
            } else {
                self.focused.clone()
            };
            Self {
                selected,
                focused,
                previous_shift_click: Vec::new(),
            }
        } else {
            let mut selected = self.selected.clone();
            selected.push(id.into());
            Self {
                selected,
                focused: Some(id.into()),
                previous_shift_click: Vec::new(),
            }
        }
    }

    /// Focus stays where it was so the range can be redefined by the next
    /// shift-click. Without focus the first visible entry becomes the anchor.
    #[must_use]
    pub fn after_shift_click<E: Identified>(
        &self,
        ordered: &[E],
        id: &str,
        policy: MissingEndpointPolicy,
    ) -> Self {
        let anchor: EntryId = match (&self.focused, ordered.first()) {
            (Some(focused), _) => focused.clone(),
            (None, Some(first)) => first.entry_id().into(),
            (None, None) => return self.clone(),
        };

        let ordered: Vec<&str> = ordered.iter().map(Identified::entry_id).collect();
        let range: Vec<EntryId> = shift_click_range(&ordered, &anchor, id, policy)
            .into_iter()
            .map(EntryId::from)
            .collect();
        let selected =
            new_selection_from_shift_click(&self.previous_shift_click, &range, &self.selected);

        Self {
            selected,
            focused: Some(anchor),
            previous_shift_click: range,
        }
    }

    /// Drops ids that disappeared from a re-fetched tree.
    #[must_use]
    pub fn retain_existing<T>(&self, tree: &Tree<T>) -> Self {
        let keep = |ids: &[EntryId]| -> Vec<EntryId> {
            ids.iter().filter(|id| tree.contains(id)).cloned().collect()
        };
        let selected = keep(&self.selected);
        let focused = self
            .focused
            .as_ref()
            .filter(|id| tree.contains(id))
            .cloned();
        Self {
            selected,
            focused,
            previous_shift_click: keep(&self.previous_shift_click),
        }
    }
}

pub struct AppState {
    pub workspace: Workspace,
    pub columns: ColumnsConfig<WorkspaceEntry>,
    pub expanded: ExpandedNodes,
    pub selection: SelectionState,
    /// Row the last gesture landed on; keyboard stepping starts here.
    pub cursor: Option<EntryId>,
    pub entry_being_renamed: Option<EntryId>,
    pub missing_endpoint: MissingEndpointPolicy,
}

impl AppState {
    pub fn new(workspace: Workspace, settings: &Settings) -> Self {
        let mut columns = default_columns_config();
        if columns.has_column(&settings.sort_column) {
            columns.sort_column = settings.sort_column.clone();
        } else {
            tracing::warn!(column = %settings.sort_column, "unknown sort column in settings");
        }
        columns.sort_descending = settings.sort_descending;

        Self {
            workspace,
            columns,
            expanded: ExpandedNodes::default(),
            selection: SelectionState::default(),
            cursor: None,
            entry_being_renamed: None,
            missing_endpoint: settings.missing_endpoint,
        }
    }

    pub fn tree(&self) -> &Tree<WorkspaceEntry> {
        &self.workspace.tree
    }

    /// Visual order of the browser as currently rendered.
    pub fn ordered_ids(&self) -> Vec<EntryId> {
        ordered_ids(&self.workspace.tree, &self.columns, &self.expanded)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
