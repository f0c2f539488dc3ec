//! Redis protocol implementation
//!
//! This module provides RESP (REdis Serialization Protocol) framing and the
//! handful of Redis commands the record writer issues.

pub mod command;
pub mod resp;

pub use command::Command;
pub use resp::{Parser, ProtocolError, Value};
