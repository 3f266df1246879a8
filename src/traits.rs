//! Core traits that decouple the focus resolver from i3 and from the
//! on-disk history file.
//!
//! The resolver ([`FocusSwitcher`](crate::resolver::FocusSwitcher)) only
//! depends on these abstractions; concrete backends live in [`i3`](crate::i3)
//! and [`history`](crate::history).  Test doubles implement the same traits
//! against synthetic snapshots and in-memory history.

use crate::tree::{NodeId, Tree};

/// Abstraction over a window manager that can describe its container tree
/// and focus a container.
///
/// An implementation might talk to i3 via IPC, or it might be a stub
/// serving a hand-built [`Tree`] in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Fetch a fresh snapshot of the container tree.
    ///
    /// Called once per resolution; the snapshot is discarded afterwards.
    fn snapshot(&self) -> Result<Tree, Self::Error>;

    /// Ask the window manager to focus the given container.
    fn focus(&self, node: NodeId) -> Result<(), Self::Error>;
}

/// Persistence for the single last-departed-workspace id.
///
/// Both operations are infallible by contract: a missing or unreadable
/// value reads as `0`, and write failures are swallowed by the
/// implementation.  Losing history only degrades workspace
/// disambiguation; it must never abort a focus operation.
pub trait HistoryStore {
    /// The id of the workspace most recently departed from, or `0` when
    /// nothing usable is stored.
    fn read(&self) -> NodeId;

    /// Record `id` as the last departed workspace, overwriting any
    /// previous value.
    fn write(&self, id: NodeId);
}

impl<H: HistoryStore + ?Sized> HistoryStore for &H {
    fn read(&self) -> NodeId {
        (**self).read()
    }

    fn write(&self, id: NodeId) {
        (**self).write(id)
    }
}
