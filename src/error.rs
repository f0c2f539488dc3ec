use thiserror::Error;

use crate::protocol::{ProtocolError, Value};

/// Errors produced while writing a record to the store
#[derive(Debug, Error)]
pub enum Error {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("connection closed by store before a full reply was received")]
  ConnectionClosed,

  /// The peer sent bytes that are not RESP
  #[error("protocol error: {0}")]
  Protocol(#[from] ProtocolError),

  /// The store answered with a RESP error frame
  #[error("store replied with error: {0}")]
  Server(String),

  #[error("unexpected reply to {command}: {reply:?}")]
  UnexpectedReply { command: &'static str, reply: Value },

  #[error("failed to encode record: {0}")]
  Encode(#[from] serde_json::Error),

  #[error("invalid configuration: {0}")]
  Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
