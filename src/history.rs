//! File-backed last-departed-workspace store.
//!
//! A single decimal integer in a file under the platform temp directory.
//! There is deliberately no format versioning and no error surface: a
//! missing or garbled file reads as `0`, and a failed write is dropped
//! with a debug log.  Concurrent invocations may race on the file; last
//! writer wins.

use crate::traits::HistoryStore;
use crate::tree::NodeId;
use log::debug;
use std::path::{Path, PathBuf};

/// Default file name under [`std::env::temp_dir`].
const FILE_NAME: &str = ".i3-last-workspace";

/// [`HistoryStore`] backed by a single file.
#[derive(Debug, Clone)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    /// Store at the default location, `<temp_dir>/.i3-last-workspace`.
    pub fn new() -> Self {
        Self {
            path: std::env::temp_dir().join(FILE_NAME),
        }
    }

    /// Store at an explicit path (config override, tests).
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for FileHistory {
    fn read(&self) -> NodeId {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents.trim().parse().unwrap_or(0),
            Err(_) => 0,
        }
    }

    fn write(&self, id: NodeId) {
        if let Err(e) = std::fs::write(&self.path, id.to_string()) {
            debug!("history write to {} failed: {}", self.path.display(), e);
        }
    }
}
