use crate::models::{EntryId, Workspace};

/// Modifier keys held during a pointer or keyboard gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        meta: false,
        shift: false,
    };
    pub const META: Modifiers = Modifiers {
        meta: true,
        shift: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        meta: false,
        shift: true,
    };
}

#[derive(Debug, Clone)]
pub enum Action {
    Click {
        id: EntryId,
        modifiers: Modifiers,
    },
    FocusAdjacent {
        delta: isize,
        modifiers: Modifiers,
    },
    Expand {
        id: EntryId,
    },
    Collapse {
        id: EntryId,
    },
    ToggleExpanded {
        id: EntryId,
    },
    Activate {
        id: EntryId,
    },
    ClearFocus,
    SortBy {
        column: String,
    },
    Drop {
        dragged_id: EntryId,
        target_id: EntryId,
    },
    BeginRename {
        id: EntryId,
    },
    FinishRename {
        name: String,
    },
    CancelRename,
    /// New folder under the focused folder (or the focused file's folder).
    CreateFolder {
        name: String,
    },
    Remove {
        id: EntryId,
    },
    ReplaceWorkspace(Box<Workspace>),
    Tick,
}
