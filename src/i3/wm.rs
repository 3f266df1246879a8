//! [`WindowManager`] implementation backed by i3 IPC.
//!
//! One `GET_TREE` request fetches the container tree as JSON, which is
//! deserialized into the snapshot types from [`tree`](crate::tree).  Focus
//! is issued as a `RUN_COMMAND` with a `con_id` criterion, the same
//! command a user would bind to a key.

use crate::geometry::Rect;
use crate::i3::ipc::{self, I3IpcError};
use crate::traits::WindowManager;
use crate::tree::{NodeData, NodeId, NodeKind, Tree};
use serde::Deserialize;

/// i3-backed window manager.
///
/// No connection is opened eagerly; each method call opens a short-lived
/// IPC request.
pub struct I3Wm;

/// Errors that can occur when talking to i3.
#[derive(Debug, thiserror::Error)]
#[error("i3 error: {0}")]
pub struct I3WmError(String);

impl From<I3IpcError> for I3WmError {
    fn from(e: I3IpcError) -> Self {
        I3WmError(e.to_string())
    }
}

impl Default for I3Wm {
    fn default() -> Self {
        Self
    }
}

impl I3Wm {
    /// Create a new handle.
    pub fn new() -> Self {
        Self
    }
}

//  Minimal serde structs for the JSON we care about

/// Subset of i3's `rect` object.
#[derive(Deserialize)]
struct RectJson {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Subset of one `GET_TREE` container object.
#[derive(Deserialize)]
struct NodeJson {
    id: NodeId,
    #[serde(rename = "type")]
    node_type: String,
    name: Option<String>,
    rect: RectJson,
    #[serde(default)]
    focused: bool,
    #[serde(default)]
    focus: Vec<NodeId>,
    #[serde(default)]
    nodes: Vec<NodeJson>,
    #[serde(default)]
    floating_nodes: Vec<NodeJson>,
}

/// One entry of a `RUN_COMMAND` reply array.
#[derive(Deserialize)]
struct CommandReplyJson {
    success: bool,
    error: Option<String>,
}

impl NodeJson {
    fn into_node_data(self) -> NodeData {
        let kind = match self.node_type.as_str() {
            "root" => NodeKind::Root,
            "output" => NodeKind::Output,
            "dockarea" => NodeKind::Dockarea,
            "workspace" => NodeKind::Workspace,
            "floating_con" => NodeKind::FloatingContainer,
            _ => NodeKind::Container,
        };
        let mut children: Vec<NodeData> = self
            .nodes
            .into_iter()
            .map(NodeJson::into_node_data)
            .collect();
        children.extend(
            self.floating_nodes
                .into_iter()
                .map(NodeJson::into_node_data),
        );
        NodeData {
            id: self.id,
            kind,
            name: self.name,
            rect: Rect::new(self.rect.x, self.rect.y, self.rect.width, self.rect.height),
            focused: self.focused,
            focus: self.focus,
            children,
        }
    }
}

/// Parse a `GET_TREE` reply into a [`Tree`] snapshot.
fn parse_tree(json: &str) -> Result<Tree, I3WmError> {
    let root: NodeJson =
        serde_json::from_str(json).map_err(|e| I3WmError(format!("parse tree: {}", e)))?;
    Ok(Tree::from_root(root.into_node_data()))
}

/// Check a `RUN_COMMAND` reply for per-command failures.
fn check_command_reply(json: &str) -> Result<(), I3WmError> {
    let replies: Vec<CommandReplyJson> =
        serde_json::from_str(json).map_err(|e| I3WmError(format!("parse reply: {}", e)))?;
    match replies.iter().find(|r| !r.success) {
        Some(failed) => Err(I3WmError(format!(
            "command rejected: {}",
            failed.error.as_deref().unwrap_or("unknown reason")
        ))),
        None => Ok(()),
    }
}

//  WindowManager implementation

impl WindowManager for I3Wm {
    type Error = I3WmError;

    fn snapshot(&self) -> Result<Tree, Self::Error> {
        let json = ipc::request(ipc::GET_TREE, "")?;
        parse_tree(&json)
    }

    fn focus(&self, node: NodeId) -> Result<(), Self::Error> {
        let reply = ipc::request(ipc::RUN_COMMAND, &format!("[con_id={}] focus", node))?;
        check_command_reply(&reply)
    }
}
