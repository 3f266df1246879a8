//! i3-specific implementations.
//!
//! This module provides the concrete [`WindowManager`](crate::traits::WindowManager)
//! backend, powered by i3's IPC socket.  [`ipc`] handles the binary wire
//! framing, [`wm`] the JSON payloads and the trait implementation.
//!
//! Nothing outside this module should reference i3 directly.

pub mod ipc;
pub mod wm;
