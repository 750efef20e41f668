//! 数据模型层

pub mod columns;
pub mod tree;
pub mod workspace;

pub use columns::{compare_names, sort_entries, Align, Column, ColumnsConfig, Comparator};
pub use tree::{
    Entry, EntryId, EntryKey, EntryKind, EntrySnapshot, LeafSnapshot, NodeSnapshot, Tree,
    TreeError,
};
pub use workspace::{
    default_columns_config, workspace_columns, PartialUser, ProcessingStage, Workspace,
    WorkspaceEntry, WorkspaceEntryKind, WorkspaceError, WorkspaceLeaf, WorkspaceMetadata,
    WorkspaceNode, WorkspaceSnapshot,
};
