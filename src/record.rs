//! Agent node record and its storage key

use serde::{Deserialize, Serialize};

use crate::util::time::Clock;

/// Namespace every agent key lives under
pub const KEY_NAMESPACE: &str = "v2board_database";

/// Sub-namespace for agent node records
pub const KEY_SUB_NAMESPACE: &str = "AGENT";

pub const DEFAULT_NAME: &str = "移动联通深港IEPL11-X-02";
pub const DEFAULT_ID: i64 = 383;
pub const DEFAULT_TYPE: &str = "trojan";
pub const DEFAULT_ONLINE: i64 = 120;

/// Node status record as stored in the key-value store.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  /// Display label, may contain non-ASCII text
  pub name: String,
  pub id: i64,
  /// Protocol category, e.g. `trojan`
  #[serde(rename = "type")]
  pub kind: String,
  /// Active connections on the node
  pub online: i64,
  /// Unix seconds when the record was built
  pub last_update: i64,
}

/// The fields of a [`Record`] that are fixed before the write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTemplate {
  pub name: String,
  pub id: i64,
  pub kind: String,
  pub online: i64,
}

impl Default for RecordTemplate {
  fn default() -> Self {
    Self {
      name: DEFAULT_NAME.to_string(),
      id: DEFAULT_ID,
      kind: DEFAULT_TYPE.to_string(),
      online: DEFAULT_ONLINE,
    }
  }
}

impl Record {
  /// Build a record from `template`, stamping `last_update` from `clock`
  pub fn stamped(template: &RecordTemplate, clock: &impl Clock) -> Self {
    Self {
      name: template.name.clone(),
      id: template.id,
      kind: template.kind.clone(),
      online: template.online,
      last_update: clock.now_secs(),
    }
  }

  /// Storage key: `<namespace>_<sub-namespace>_<name>`.
  ///
  /// The name is used verbatim, so records sharing a name share a key.
  pub fn key(&self) -> String {
    key_for(&self.name)
  }
}

/// Storage key for a node name
pub fn key_for(name: &str) -> String {
  format!("{}_{}_{}", KEY_NAMESPACE, KEY_SUB_NAMESPACE, name)
}
