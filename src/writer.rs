//! Record writer: build, serialize, connect, set, report.

use std::io::Write;

use tracing::info;

use crate::client::Client;
use crate::config::StoreConfig;
use crate::encoding::to_ascii_json;
use crate::error::Result;
use crate::record::{Record, RecordTemplate};
use crate::util::time::Clock;

/// Outcome of a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub key: String,
    pub payload: String,
}

/// Writes one record per call to the configured store
pub struct RecordWriter {
    store: StoreConfig,
}

impl RecordWriter {
    pub fn new(store: StoreConfig) -> Self {
        Self { store }
    }

    /// Build a record from `template`, store it and print a confirmation
    /// line to `out`.
    ///
    /// The first failure is returned as-is; nothing is printed in that case.
    pub async fn write<C, W>(&self, template: &RecordTemplate, clock: &C, out: &mut W) -> Result<Written>
    where
        C: Clock,
        W: Write,
    {
        let record = Record::stamped(template, clock);
        let payload = to_ascii_json(&record)?;
        let key = record.key();

        let mut client = Client::connect(&self.store).await?;
        client.set(key.as_str(), payload.as_bytes()).await?;
        info!(key = %key, bytes = payload.len(), "Record stored");

        writeln!(out, "stored {} -> {}", key, payload)?;
        Ok(Written { key, payload })
    }
}
