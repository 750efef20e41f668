use crate::kernel::selection::{ids_of_entries_to_move, validate_move_target};
use crate::kernel::{Action, Effect, SelectionState};
use crate::models::Workspace;

impl super::Store {
    pub(super) fn reduce_workspace_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::Drop {
                dragged_id,
                target_id,
            } => {
                let tree = &self.state.workspace.tree;
                let ids = match ids_of_entries_to_move(
                    tree,
                    self.state.selection.selected(),
                    &dragged_id,
                ) {
                    Ok(ids) => ids,
                    Err(error) => {
                        tracing::error!(error = %error, "drop ignored");
                        return super::DispatchResult::unchanged();
                    }
                };

                if let Err(error) = validate_move_target(tree, &ids, &target_id) {
                    tracing::warn!(error = %error, target = %target_id, "invalid drop target");
                    return super::DispatchResult::unchanged();
                }

                tracing::debug!(count = ids.len(), target = %target_id, "move entries");
                super::DispatchResult {
                    effects: vec![Effect::MoveEntries {
                        ids,
                        new_parent_id: target_id,
                    }],
                    state_changed: false,
                }
            }
            Action::BeginRename { id } => {
                if !self.state.workspace.tree.contains(&id)
                    || id.as_str() == self.state.workspace.tree.root_id()
                {
                    return super::DispatchResult::unchanged();
                }
                let changed = self.state.entry_being_renamed.as_ref() != Some(&id);
                self.state.entry_being_renamed = Some(id);
                super::DispatchResult::changed(changed)
            }
            Action::FinishRename { name } => {
                let Some(id) = self.state.entry_being_renamed.take() else {
                    return super::DispatchResult::unchanged();
                };

                let name = name.trim();
                let unchanged_name = self
                    .state
                    .workspace
                    .tree
                    .get(&id)
                    .map_or(true, |entry| entry.name() == name);
                if name.is_empty() || unchanged_name {
                    return super::DispatchResult::changed(true);
                }

                super::DispatchResult {
                    effects: vec![Effect::RenameEntry {
                        id,
                        name: name.to_string(),
                    }],
                    state_changed: true,
                }
            }
            Action::CancelRename => {
                super::DispatchResult::changed(self.state.entry_being_renamed.take().is_some())
            }
            Action::CreateFolder { name } => self.create_folder(&name),
            Action::Remove { id } => {
                if !self.state.workspace.tree.contains(&id)
                    || id.as_str() == self.state.workspace.tree.root_id()
                {
                    return super::DispatchResult::unchanged();
                }
                self.state.cursor = None;
                let mut result = self.replace_selection(SelectionState::default());
                result.effects.push(Effect::RemoveEntry { id });
                result
            }
            Action::ReplaceWorkspace(workspace) => self.replace_workspace(*workspace),
            Action::Tick => {
                if !self.state.workspace.has_processing_files() {
                    return super::DispatchResult::unchanged();
                }
                super::DispatchResult {
                    effects: vec![Effect::RefreshWorkspace {
                        workspace_id: self.state.workspace.id().to_string(),
                    }],
                    state_changed: false,
                }
            }
            _ => super::DispatchResult::unchanged(),
        }
    }

    fn create_folder(&mut self, name: &str) -> super::DispatchResult {
        let name = name.trim();
        if name.is_empty() || self.state.selection.selected().len() > 1 {
            return super::DispatchResult::unchanged();
        }

        let tree = &self.state.workspace.tree;
        let parent = match self.state.selection.focused().and_then(|id| tree.get(id)) {
            Some(entry) if entry.is_node() => Some(entry),
            Some(entry) => tree.parent(entry.id()),
            None => None,
        }
        .unwrap_or_else(|| tree.root());

        tracing::debug!(parent = %parent.id(), name, "create folder");
        super::DispatchResult {
            effects: vec![Effect::CreateFolder {
                parent_id: parent.id().into(),
                name: name.to_string(),
            }],
            state_changed: false,
        }
    }

    fn replace_workspace(&mut self, workspace: Workspace) -> super::DispatchResult {
        if workspace.id() != self.state.workspace.id() {
            tracing::info!(
                from = %self.state.workspace.id(),
                to = %workspace.id(),
                "workspace changed, resetting selection"
            );
            self.state.selection = SelectionState::default();
            self.state.cursor = None;
            self.state.expanded.clear();
            self.state.entry_being_renamed = None;
        } else {
            let tree = &workspace.tree;
            self.state.selection = self.state.selection.retain_existing(tree);
            self.state.expanded.retain_existing(tree);
            if self.state.cursor.as_ref().is_some_and(|id| !tree.contains(id)) {
                self.state.cursor = None;
            }
            if self
                .state
                .entry_being_renamed
                .as_ref()
                .is_some_and(|id| !tree.contains(id))
            {
                self.state.entry_being_renamed = None;
            }
        }

        self.state.workspace = workspace;
        super::DispatchResult::changed(true)
    }
}
