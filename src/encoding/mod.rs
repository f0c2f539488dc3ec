//! Payload encoding for stored values
//!
//! Records are stored as JSON text restricted to ASCII, with the separator
//! style other agents already write under the same keys.

pub mod json;

pub use json::to_ascii_json;
