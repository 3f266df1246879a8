//! **i3focus** — geometric directional focus switching for i3.
//!
//! Given the currently focused window and a direction, pick the window
//! that is visually in that direction — by on-screen proximity, not by
//! i3's internal tree order.  When no window in the current workspace
//! qualifies, fall back to a workspace positioned in that direction and
//! resume wherever that workspace last had focus.
//!
//! # Architecture
//!
//! The crate is organised around two seams:
//!
//! * [`traits::WindowManager`] — abstracts snapshot fetching and the focus
//!   command, so the resolution logic is not coupled to i3 and tests run
//!   against synthetic trees.
//! * [`traits::HistoryStore`] — abstracts the single persisted
//!   last-departed-workspace id used to disambiguate cross-workspace
//!   moves.
//!
//! The pure selection algorithm lives in [`resolver`]; concrete backends
//! live in [`i3`] (IPC) and [`history`] (temp-dir file).

pub mod config;
pub mod direction;
pub mod geometry;
pub mod history;
pub mod i3;
pub mod resolver;
pub mod traits;
pub mod tree;
