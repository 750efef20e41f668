//! 工作区树数据模型：按 id 索引的 arena
//!
//! 服务端返回的是嵌套的 `EntrySnapshot`，这里把它展平成 arena，
//! 所有相等/包含判断都按 id 进行（重新拉取的快照会生成新对象）。

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use std::fmt;

new_key_type! { pub struct EntryKey; }

pub type EntryId = CompactString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    DuplicateId(EntryId),
    RootNotNode(EntryId),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::DuplicateId(id) => write!(f, "duplicate entry id: {id}"),
            TreeError::RootNotNode(id) => write!(f, "root entry {id} is not a node"),
        }
    }
}

impl std::error::Error for TreeError {}

/// Wire form of a tree entry. An object carrying `children` (even `[]`) is a
/// node, anything else is a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntrySnapshot<T> {
    Node(NodeSnapshot<T>),
    Leaf(LeafSnapshot<T>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot<T> {
    pub id: EntryId,
    pub name: String,
    pub data: T,
    pub children: Vec<EntrySnapshot<T>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafSnapshot<T> {
    pub id: EntryId,
    pub name: String,
    pub data: T,
    /// The server has children for this entry that were not fetched yet.
    #[serde(default)]
    pub is_expandable: bool,
}

impl<T> EntrySnapshot<T> {
    pub fn node(
        id: impl Into<EntryId>,
        name: impl Into<String>,
        data: T,
        children: Vec<EntrySnapshot<T>>,
    ) -> Self {
        EntrySnapshot::Node(NodeSnapshot {
            id: id.into(),
            name: name.into(),
            data,
            children,
        })
    }

    pub fn leaf(id: impl Into<EntryId>, name: impl Into<String>, data: T) -> Self {
        EntrySnapshot::Leaf(LeafSnapshot {
            id: id.into(),
            name: name.into(),
            data,
            is_expandable: false,
        })
    }

    pub fn id(&self) -> &str {
        match self {
            EntrySnapshot::Node(n) => &n.id,
            EntrySnapshot::Leaf(l) => &l.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Node { children: Vec<EntryKey> },
    Leaf { is_expandable: bool },
}

#[derive(Debug, Clone)]
pub struct Entry<T> {
    id: EntryId,
    name: String,
    data: T,
    parent: Option<EntryKey>,
    kind: EntryKind,
}

impl<T> Entry<T> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    pub fn is_node(&self) -> bool {
        matches!(self.kind, EntryKind::Node { .. })
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_node()
    }

    pub fn is_expandable(&self) -> bool {
        match self.kind {
            EntryKind::Node { .. } => true,
            EntryKind::Leaf { is_expandable } => is_expandable,
        }
    }

    fn child_keys(&self) -> &[EntryKey] {
        match &self.kind {
            EntryKind::Node { children } => children,
            EntryKind::Leaf { .. } => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Tree<T> {
    arena: SlotMap<EntryKey, Entry<T>>,
    root: EntryKey,
    index: FxHashMap<EntryId, EntryKey>,
}

impl<T> Tree<T> {
    pub fn from_snapshot(snapshot: EntrySnapshot<T>) -> Result<Self, TreeError> {
        let root = match snapshot {
            EntrySnapshot::Node(node) => node,
            EntrySnapshot::Leaf(leaf) => return Err(TreeError::RootNotNode(leaf.id)),
        };

        let NodeSnapshot {
            id,
            name,
            data,
            children,
        } = root;

        let mut arena = SlotMap::with_key();
        let root_key = arena.insert(Entry {
            id: id.clone(),
            name,
            data,
            parent: None,
            kind: EntryKind::Node {
                children: Vec::new(),
            },
        });
        let mut index = FxHashMap::default();
        index.insert(id, root_key);

        let mut tree = Self {
            arena,
            root: root_key,
            index,
        };

        let mut stack = vec![(root_key, children)];
        while let Some((parent, children)) = stack.pop() {
            for child in children {
                let (key, grandchildren) = tree.insert_child(parent, child)?;
                if let Some(grandchildren) = grandchildren {
                    stack.push((key, grandchildren));
                }
            }
        }

        Ok(tree)
    }

    fn insert_child(
        &mut self,
        parent: EntryKey,
        snapshot: EntrySnapshot<T>,
    ) -> Result<(EntryKey, Option<Vec<EntrySnapshot<T>>>), TreeError> {
        let (id, name, data, kind, children) = match snapshot {
            EntrySnapshot::Node(n) => (
                n.id,
                n.name,
                n.data,
                EntryKind::Node {
                    children: Vec::new(),
                },
                Some(n.children),
            ),
            EntrySnapshot::Leaf(l) => (
                l.id,
                l.name,
                l.data,
                EntryKind::Leaf {
                    is_expandable: l.is_expandable,
                },
                None,
            ),
        };

        if self.index.contains_key(&id) {
            return Err(TreeError::DuplicateId(id));
        }

        let key = self.arena.insert(Entry {
            id: id.clone(),
            name,
            data,
            parent: Some(parent),
            kind,
        });
        self.index.insert(id, key);

        if let Some(EntryKind::Node { children }) =
            self.arena.get_mut(parent).map(|entry| &mut entry.kind)
        {
            children.push(key);
        }

        Ok((key, children))
    }

    pub fn root(&self) -> &Entry<T> {
        &self.arena[self.root]
    }

    pub fn root_id(&self) -> &str {
        self.root().id()
    }

    pub fn get(&self, id: &str) -> Option<&Entry<T>> {
        self.index.get(id).and_then(|key| self.arena.get(*key))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn is_node(&self, id: &str) -> bool {
        self.get(id).is_some_and(Entry::is_node)
    }

    /// Number of entries including the root.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// True when the root folder has nothing in it.
    pub fn is_empty(&self) -> bool {
        self.arena.len() <= 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.arena.values()
    }

    /// Children in the order the server sent them.
    pub fn children<'a>(&'a self, entry: &'a Entry<T>) -> impl Iterator<Item = &'a Entry<T>> + 'a {
        entry
            .child_keys()
            .iter()
            .filter_map(move |key| self.arena.get(*key))
    }

    pub fn parent(&self, id: &str) -> Option<&Entry<T>> {
        self.get(id)
            .and_then(|entry| entry.parent)
            .and_then(|key| self.arena.get(key))
    }

    /// Ancestors of `id`, nearest first. The entry itself is not included.
    pub fn ancestors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Entry<T>> + 'a {
        let first = self.parent(id);
        std::iter::successors(first, move |entry| {
            entry.parent.and_then(|key| self.arena.get(key))
        })
    }

    pub fn is_descendant_of(&self, candidate: &str, ancestor: &str) -> bool {
        self.ancestors(candidate).any(|entry| entry.id() == ancestor)
    }

    pub fn depth(&self, id: &str) -> usize {
        self.ancestors(id).count()
    }

    /// Path from the root down to `id`. A node target is the last element;
    /// a leaf target stops at its parent folder.
    pub fn path_to(&self, id: &str) -> Option<Vec<&Entry<T>>> {
        let target = self.get(id)?;
        let mut path: Vec<&Entry<T>> = self.ancestors(id).collect();
        path.reverse();
        if target.is_node() {
            path.push(target);
        }
        Some(path)
    }

    pub fn display_relative_path(&self, id: &str) -> String {
        match self.path_to(id) {
            Some(path) => {
                let mut out = path
                    .iter()
                    .map(|entry| entry.name())
                    .collect::<Vec<_>>()
                    .join("/");
                out.push('/');
                out
            }
            None => String::new(),
        }
    }
}

impl<T: Clone> Tree<T> {
    pub fn to_snapshot(&self) -> EntrySnapshot<T> {
        self.snapshot_of(self.root())
    }

    fn snapshot_of(&self, entry: &Entry<T>) -> EntrySnapshot<T> {
        match entry.kind {
            EntryKind::Node { .. } => EntrySnapshot::Node(NodeSnapshot {
                id: entry.id.clone(),
                name: entry.name.clone(),
                data: entry.data.clone(),
                children: self
                    .children(entry)
                    .map(|child| self.snapshot_of(child))
                    .collect(),
            }),
            EntryKind::Leaf { is_expandable } => EntrySnapshot::Leaf(LeafSnapshot {
                id: entry.id.clone(),
                name: entry.name.clone(),
                data: entry.data.clone(),
                is_expandable,
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/tree.rs"]
mod tests;
