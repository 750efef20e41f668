//! 工作区：服务端返回的元数据 + 文件树，以及工作区文件浏览器的列定义

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::columns::{compare_names, Align, Column, ColumnsConfig};
use super::tree::{Entry, EntrySnapshot, Tree, TreeError};

pub const NAME_COLUMN: &str = "Name";
pub const ADDED_BY_COLUMN: &str = "Added By";
pub const ADDED_ON_COLUMN: &str = "Added On";
pub const FILE_TYPE_COLUMN: &str = "File Type";
pub const PROCESSING_STAGE_COLUMN: &str = "Processing Stage";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialUser {
    pub username: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ProcessingStage {
    Processing {
        #[serde(rename = "tasksRemaining")]
        tasks_remaining: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Processed,
    Failed,
}

impl ProcessingStage {
    pub fn is_processing(&self) -> bool {
        matches!(self, ProcessingStage::Processing { .. })
    }
}

impl fmt::Display for ProcessingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingStage::Processing {
                tasks_remaining,
                note,
            } => {
                if *tasks_remaining == 1 {
                    write!(f, "processing (1 task remaining)")?;
                } else {
                    write!(f, "processing ({tasks_remaining} tasks remaining)")?;
                }
                match note.as_deref() {
                    Some(note) if !note.is_empty() => write!(f, " - {note}"),
                    _ => Ok(()),
                }
            }
            ProcessingStage::Processed => write!(f, "processed"),
            ProcessingStage::Failed => write!(f, "processed (with errors)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceLeaf {
    pub processing_stage: ProcessingStage,
    pub uri: String,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceNode {
    #[serde(default)]
    pub descendants_leaf_count: u64,
    #[serde(default)]
    pub descendants_node_count: u64,
    #[serde(default)]
    pub descendants_processing_task_count: u64,
    #[serde(default)]
    pub descendants_failed_count: u64,
}

/// A leaf is recognised by its `uri`; everything else is folder data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkspaceEntryKind {
    Leaf(WorkspaceLeaf),
    Node(WorkspaceNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceEntry {
    pub added_by: PartialUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_on: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maybe_parent_id: Option<String>,
    #[serde(flatten)]
    pub kind: WorkspaceEntryKind,
}

impl WorkspaceEntry {
    pub fn as_leaf(&self) -> Option<&WorkspaceLeaf> {
        match &self.kind {
            WorkspaceEntryKind::Leaf(leaf) => Some(leaf),
            WorkspaceEntryKind::Node(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMetadata {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub tag_color: String,
    pub owner: PartialUser,
    pub creator: PartialUser,
    #[serde(default)]
    pub followers: Vec<PartialUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    #[serde(flatten)]
    pub metadata: WorkspaceMetadata,
    pub root_node: EntrySnapshot<WorkspaceEntry>,
}

#[derive(Debug)]
pub enum WorkspaceError {
    Json(serde_json::Error),
    Tree(TreeError),
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceError::Json(e) => write!(f, "invalid workspace json: {e}"),
            WorkspaceError::Tree(e) => write!(f, "invalid workspace tree: {e}"),
        }
    }
}

impl std::error::Error for WorkspaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorkspaceError::Json(e) => Some(e),
            WorkspaceError::Tree(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for WorkspaceError {
    fn from(e: serde_json::Error) -> Self {
        WorkspaceError::Json(e)
    }
}

impl From<TreeError> for WorkspaceError {
    fn from(e: TreeError) -> Self {
        WorkspaceError::Tree(e)
    }
}

#[derive(Debug, Clone)]
pub struct Workspace {
    pub metadata: WorkspaceMetadata,
    pub tree: Tree<WorkspaceEntry>,
}

impl Workspace {
    pub fn from_snapshot(snapshot: WorkspaceSnapshot) -> Result<Self, TreeError> {
        Ok(Self {
            metadata: snapshot.metadata,
            tree: Tree::from_snapshot(snapshot.root_node)?,
        })
    }

    pub fn from_json(data: &str) -> Result<Self, WorkspaceError> {
        let snapshot: WorkspaceSnapshot = serde_json::from_str(data)?;
        Ok(Self::from_snapshot(snapshot)?)
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    /// Any leaf still being processed by the backend; decides whether the
    /// workspace should be re-fetched.
    pub fn has_processing_files(&self) -> bool {
        self.tree.iter().any(|entry| {
            entry.is_leaf()
                && entry
                    .data()
                    .as_leaf()
                    .is_some_and(|leaf| leaf.processing_stage.is_processing())
        })
    }
}

// 空值（空字符串 / 0）统一排在有值条目之后，保证比较是全序
fn string_sort(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare_names(a, b),
    }
}

fn number_sort(a: u64, b: u64) -> Ordering {
    match (a == 0, b == 0) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.cmp(&b),
    }
}

fn leaf_mime_type(entry: &Entry<WorkspaceEntry>) -> &str {
    match entry.data().as_leaf() {
        Some(leaf) if entry.is_leaf() => &leaf.mime_type,
        _ => "",
    }
}

fn leaf_stage(entry: &Entry<WorkspaceEntry>) -> String {
    match entry.data().as_leaf() {
        Some(leaf) if entry.is_leaf() => leaf.processing_stage.to_string(),
        _ => String::new(),
    }
}

fn sort_by_name(a: &Entry<WorkspaceEntry>, b: &Entry<WorkspaceEntry>) -> Ordering {
    // Folders grouped before files.
    match (a.is_node(), b.is_node()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => string_sort(a.name(), b.name()),
    }
}

fn sort_by_added_by(a: &Entry<WorkspaceEntry>, b: &Entry<WorkspaceEntry>) -> Ordering {
    string_sort(
        &a.data().added_by.display_name,
        &b.data().added_by.display_name,
    )
}

fn sort_by_added_on(a: &Entry<WorkspaceEntry>, b: &Entry<WorkspaceEntry>) -> Ordering {
    number_sort(
        a.data().added_on.unwrap_or(0),
        b.data().added_on.unwrap_or(0),
    )
}

fn sort_by_file_type(a: &Entry<WorkspaceEntry>, b: &Entry<WorkspaceEntry>) -> Ordering {
    string_sort(leaf_mime_type(a), leaf_mime_type(b))
}

fn sort_by_processing_stage(a: &Entry<WorkspaceEntry>, b: &Entry<WorkspaceEntry>) -> Ordering {
    string_sort(&leaf_stage(a), &leaf_stage(b))
}

pub fn workspace_columns() -> Vec<Column<WorkspaceEntry>> {
    vec![
        Column::new(NAME_COLUMN, Align::Left, sort_by_name),
        Column::new(ADDED_BY_COLUMN, Align::Left, sort_by_added_by),
        Column::new(ADDED_ON_COLUMN, Align::Left, sort_by_added_on),
        Column::new(FILE_TYPE_COLUMN, Align::Center, sort_by_file_type),
        Column::new(
            PROCESSING_STAGE_COLUMN,
            Align::Center,
            sort_by_processing_stage,
        ),
    ]
}

pub fn default_columns_config() -> ColumnsConfig<WorkspaceEntry> {
    ColumnsConfig::new(workspace_columns(), NAME_COLUMN)
}

#[cfg(test)]
#[path = "../../tests/unit/models/workspace.rs"]
mod tests;
