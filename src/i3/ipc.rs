//! i3 IPC wire protocol.
//!
//! Communicates directly with i3 through the Unix socket named by
//! `$I3SOCK` (or `$SWAYSOCK` for sway, which speaks the same protocol),
//! avoiding any shell command invocation for socket discovery.
//!
//! # Wire format
//!
//! Every message and reply is framed as
//!
//! ```text
//! "i3-ipc" <len: u32 le> <type: u32 le> <payload: len bytes of JSON>
//! ```
//!
//! Each [`request`] opens a short-lived connection, sends one message and
//! reads one reply.

use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

/// Protocol magic prefixed to every frame.
const MAGIC: &[u8; 6] = b"i3-ipc";

/// Frame header size: magic + payload length + message type.
const HEADER_LEN: usize = MAGIC.len() + 8;

/// `RUN_COMMAND` message type.
pub const RUN_COMMAND: u32 = 0;

/// `GET_TREE` message type.
pub const GET_TREE: u32 = 4;

/// Errors that can occur when talking to i3.
#[derive(Debug, thiserror::Error)]
pub enum I3IpcError {
    /// The IPC socket could not be located.
    #[error("socket discovery: {0}")]
    Socket(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The reply violated the framing contract.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Resolve the IPC socket path from `$I3SOCK`, falling back to `$SWAYSOCK`.
fn socket_path() -> Result<PathBuf, I3IpcError> {
    std::env::var("I3SOCK")
        .or_else(|_| std::env::var("SWAYSOCK"))
        .map(PathBuf::from)
        .map_err(|_| I3IpcError::Socket("neither I3SOCK nor SWAYSOCK is set".into()))
}

/// Encode one message frame.
fn encode(msg_type: u32, payload: &str) -> Vec<u8> {
    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.extend_from_slice(MAGIC);
    frame.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    frame.extend_from_slice(&msg_type.to_le_bytes());
    frame.extend_from_slice(payload.as_bytes());
    frame
}

/// Decode a reply header into `(payload_len, msg_type)`.
fn decode_header(header: &[u8; HEADER_LEN]) -> Result<(u32, u32), I3IpcError> {
    if &header[..MAGIC.len()] != MAGIC {
        return Err(I3IpcError::Protocol(format!(
            "bad magic: {:?}",
            &header[..MAGIC.len()]
        )));
    }
    let len = u32::from_le_bytes(header[6..10].try_into().unwrap());
    let msg_type = u32::from_le_bytes(header[10..14].try_into().unwrap());
    Ok((len, msg_type))
}

/// Send one message to the i3 socket and return the reply payload.
///
/// The reply type must match the request type; event frames never appear
/// on a connection that has not subscribed to any.
pub fn request(msg_type: u32, payload: &str) -> Result<String, I3IpcError> {
    let path = socket_path()?;
    let mut stream = UnixStream::connect(&path).map_err(|e| {
        I3IpcError::Socket(format!("connect to {}: {}", path.display(), e))
    })?;

    stream.write_all(&encode(msg_type, payload))?;

    let mut header = [0u8; HEADER_LEN];
    stream.read_exact(&mut header)?;
    let (len, reply_type) = decode_header(&header)?;
    if reply_type != msg_type {
        return Err(I3IpcError::Protocol(format!(
            "reply type {} to request type {}",
            reply_type, msg_type
        )));
    }

    let mut reply = vec![0u8; len as usize];
    stream.read_exact(&mut reply)?;
    String::from_utf8(reply).map_err(|e| I3IpcError::Protocol(format!("utf-8: {}", e)))
}
