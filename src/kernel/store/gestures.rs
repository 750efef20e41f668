use crate::kernel::selection::entries_index_of;
use crate::kernel::{Action, Effect, Modifiers, SelectionState};
use crate::models::EntryId;

impl super::Store {
    pub(super) fn reduce_gesture(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::Click { id, modifiers } => self.click(&id, modifiers),
            Action::FocusAdjacent { delta, modifiers } => self.focus_adjacent(delta, modifiers),
            Action::Expand { id } => {
                let changed = self.state.expanded.expand(&self.state.workspace.tree, &id);
                super::DispatchResult::changed(changed)
            }
            Action::Collapse { id } => {
                super::DispatchResult::changed(self.state.expanded.collapse(&id))
            }
            Action::ToggleExpanded { id } => {
                let changed = self.state.expanded.toggle(&self.state.workspace.tree, &id);
                super::DispatchResult::changed(changed)
            }
            Action::Activate { id } => self.activate(&id),
            Action::ClearFocus => {
                self.state.cursor = None;
                self.replace_selection(SelectionState::default())
            }
            Action::SortBy { column } => {
                let changed = self.state.columns.click_column(&column);
                if !changed {
                    tracing::warn!(column = %column, "sort by unknown column");
                }
                super::DispatchResult::changed(changed)
            }
            _ => super::DispatchResult::unchanged(),
        }
    }

    fn click(&mut self, id: &str, modifiers: Modifiers) -> super::DispatchResult {
        if !self.state.workspace.tree.contains(id) {
            tracing::debug!(id, "click on unknown entry ignored");
            return super::DispatchResult::unchanged();
        }

        let current = &self.state.selection;
        let mut effects = Vec::new();
        let next = if modifiers.meta {
            current.after_meta_click(id)
        } else if modifiers.shift {
            let ordered = self.state.ordered_ids();
            current.after_shift_click(&ordered, id, self.state.missing_endpoint)
        } else {
            effects.push(Effect::FocusChanged { id: id.into() });
            current.after_click(id)
        };

        self.state.cursor = Some(id.into());
        let mut result = self.replace_selection(next);
        result.effects = effects;
        result
    }

    // 键盘上下移动：以上一次手势所在行为起点（没有则用焦点），在可见顺序中取相邻条目
    fn focus_adjacent(&mut self, delta: isize, modifiers: Modifiers) -> super::DispatchResult {
        let ordered = self.state.ordered_ids();
        if ordered.is_empty() {
            return super::DispatchResult::unchanged();
        }

        let origin = self
            .state
            .cursor
            .as_deref()
            .or_else(|| self.state.selection.focused())
            .and_then(|row| entries_index_of(&ordered, row));

        let target = match origin {
            Some(index) => index as isize + delta,
            None => 0,
        };
        if target < 0 || target as usize >= ordered.len() {
            return super::DispatchResult::unchanged();
        }
        if origin == Some(target as usize) {
            return super::DispatchResult::unchanged();
        }

        let id: EntryId = ordered[target as usize].clone();
        self.click(&id, modifiers)
    }

    fn activate(&mut self, id: &str) -> super::DispatchResult {
        let Some(entry) = self.state.workspace.tree.get(id) else {
            return super::DispatchResult::unchanged();
        };

        if entry.is_node() {
            let changed = self.state.expanded.toggle(&self.state.workspace.tree, id);
            return super::DispatchResult::changed(changed);
        }

        if self.state.entry_being_renamed.is_some() {
            return super::DispatchResult::unchanged();
        }

        match entry.data().as_leaf() {
            Some(leaf) => super::DispatchResult {
                effects: vec![Effect::OpenViewer {
                    uri: leaf.uri.clone(),
                }],
                state_changed: false,
            },
            None => super::DispatchResult::unchanged(),
        }
    }

    pub(super) fn replace_selection(&mut self, next: SelectionState) -> super::DispatchResult {
        let changed = next != self.state.selection;
        self.state.selection = next;
        super::DispatchResult::changed(changed)
    }
}
