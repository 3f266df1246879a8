//! Read-only snapshot of the i3 container tree.
//!
//! i3 hands us one JSON tree per `GET_TREE` request.  The resolver never
//! mutates it, so the snapshot is flattened once into an id-indexed
//! [`Tree`] and addressed by [`NodeId`] from then on.  One [`Tree`] lives
//! for exactly one focus resolution and is discarded afterwards.
//!
//! Construction goes through the recursive [`NodeData`] value, which the
//! IPC layer fills from JSON and which tests build by hand.

use crate::geometry::Rect;
use std::collections::HashMap;

/// Stable identity of a container within one snapshot.
pub type NodeId = i64;

/// Container type, from i3's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Output,
    Dockarea,
    Workspace,
    Container,
    FloatingContainer,
}

/// Recursive build-time representation of one container and its subtree.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub id: NodeId,
    pub kind: NodeKind,
    pub name: Option<String>,
    pub rect: Rect,
    /// Whether i3 reports this container as the focused one.
    pub focused: bool,
    /// Ids of direct children, most recently focused first.
    pub focus: Vec<NodeId>,
    pub children: Vec<NodeData>,
}

/// One flattened container in a [`Tree`].
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub name: Option<String>,
    pub rect: Rect,
    pub focused: bool,
    pub focus: Vec<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    /// A leaf is an actual window: a (floating) container without children.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Container | NodeKind::FloatingContainer
        ) && self.children.is_empty()
    }

    fn is_workspace(&self) -> bool {
        self.kind == NodeKind::Workspace
    }

    /// Internal workspaces like `__i3_scratch` never take part in
    /// directional navigation.
    fn is_internal(&self) -> bool {
        self.name
            .as_deref()
            .map(|n| n.starts_with("__i3"))
            .unwrap_or(false)
    }
}

/// An id-indexed, immutable snapshot of the container tree.
#[derive(Debug)]
pub struct Tree {
    root: NodeId,
    index: HashMap<NodeId, Node>,
    parents: HashMap<NodeId, NodeId>,
    focused: Option<NodeId>,
}

impl Tree {
    /// Flatten a recursive [`NodeData`] tree into an indexed snapshot.
    pub fn from_root(root: NodeData) -> Self {
        let mut tree = Tree {
            root: root.id,
            index: HashMap::new(),
            parents: HashMap::new(),
            focused: None,
        };
        tree.insert(root, None);
        tree
    }

    fn insert(&mut self, data: NodeData, parent: Option<NodeId>) {
        if let Some(p) = parent {
            self.parents.insert(data.id, p);
        }
        if data.focused {
            self.focused = Some(data.id);
        }
        let node = Node {
            id: data.id,
            kind: data.kind,
            name: data.name,
            rect: data.rect,
            focused: data.focused,
            focus: data.focus,
            children: data.children.iter().map(|c| c.id).collect(),
        };
        let id = node.id;
        self.index.insert(id, node);
        for child in data.children {
            self.insert(child, Some(id));
        }
    }

    /// Id of the root container.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id)
    }

    /// The container i3 reports as focused, if any.
    pub fn find_focused(&self) -> Option<&Node> {
        self.focused.and_then(|id| self.get(id))
    }

    /// The workspace that owns `id`, walking up through parents.
    ///
    /// A workspace owns itself.  Returns `None` for nodes above the
    /// workspace level (outputs, the root) and for unknown ids.
    pub fn workspace_of(&self, id: NodeId) -> Option<&Node> {
        let mut current = self.get(id)?;
        loop {
            if current.is_workspace() {
                return Some(current);
            }
            let parent = *self.parents.get(&current.id)?;
            current = self.get(parent)?;
        }
    }

    /// Every regular workspace in the snapshot, in tree order.
    pub fn workspaces(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect(self.root, &mut |n| n.is_workspace() && !n.is_internal(), &mut out);
        out
    }

    /// Every leaf window under the given workspace, in tree order.
    pub fn leaves_of(&self, workspace: NodeId) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect(workspace, &mut |n| n.is_leaf(), &mut out);
        out
    }

    fn collect<'a>(
        &'a self,
        from: NodeId,
        keep: &mut dyn FnMut(&Node) -> bool,
        out: &mut Vec<&'a Node>,
    ) {
        let Some(node) = self.get(from) else {
            return;
        };
        if keep(node) {
            out.push(node);
        }
        for &child in &node.children {
            self.collect(child, keep, out);
        }
    }
}

//  Tests
