use crate::models::EntryId;

/// Requests for collaborators outside the engine (router, REST client).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FocusChanged {
        id: EntryId,
    },
    OpenViewer {
        uri: String,
    },
    MoveEntries {
        ids: Vec<EntryId>,
        new_parent_id: EntryId,
    },
    RenameEntry {
        id: EntryId,
        name: String,
    },
    RemoveEntry {
        id: EntryId,
    },
    CreateFolder {
        parent_id: EntryId,
        name: String,
    },
    RefreshWorkspace {
        workspace_id: String,
    },
}
