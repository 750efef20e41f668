use crate::models::Workspace;
use crate::settings::Settings;

use super::{Action, AppState, Effect};

mod gestures;
mod workspace;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(workspace: Workspace, settings: &Settings) -> Self {
        Self {
            state: AppState::new(workspace, settings),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::Click { .. }
            | Action::FocusAdjacent { .. }
            | Action::Expand { .. }
            | Action::Collapse { .. }
            | Action::ToggleExpanded { .. }
            | Action::Activate { .. }
            | Action::ClearFocus
            | Action::SortBy { .. } => self.reduce_gesture(action),
            Action::Drop { .. }
            | Action::BeginRename { .. }
            | Action::FinishRename { .. }
            | Action::CancelRename
            | Action::CreateFolder { .. }
            | Action::Remove { .. }
            | Action::ReplaceWorkspace(_)
            | Action::Tick => self.reduce_workspace_action(action),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
