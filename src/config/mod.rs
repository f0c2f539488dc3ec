use clap::Parser;

use crate::error::{Error, Result};
use crate::record::{DEFAULT_ID, DEFAULT_NAME, DEFAULT_ONLINE, DEFAULT_TYPE, RecordTemplate};

/// Key-value store connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
  pub host: String,
  pub port: u16,
  /// Database index selected after connecting
  pub db: u32,
  /// Password for AUTH, `None` skips authentication
  pub password: Option<String>,
}

impl StoreConfig {
  /// `host:port` as passed to the socket connect
  pub fn addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: DEFAULT_PORT,
      db: 0,
      password: None,
    }
  }
}

/// Default store port (Redis default port)
const DEFAULT_PORT: u16 = 6379;

fn default_host() -> String {
  "127.0.0.1".to_string()
}

/// Log configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
  /// Filter used when `RUST_LOG` is not set
  pub level: String,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: "info".to_string(),
    }
  }
}

/// Write one agent node record to a Redis-compatible store
#[derive(Debug, Parser)]
#[command(name = "agent-writer", version)]
pub struct Cli {
  /// Store host
  #[arg(long, env = "REDIS_HOST", default_value = "127.0.0.1")]
  pub host: String,

  /// Store port
  #[arg(long, env = "REDIS_PORT", default_value_t = DEFAULT_PORT)]
  pub port: u16,

  /// Database index
  #[arg(long, env = "REDIS_DB", default_value_t = 0)]
  pub db: u32,

  /// Store password; empty means no AUTH
  #[arg(long, env = "REDIS_PASSWORD", hide_env_values = true)]
  pub password: Option<String>,

  /// Node display name, also the key suffix
  #[arg(long, default_value = DEFAULT_NAME)]
  pub name: String,

  /// Node id
  #[arg(long, default_value_t = DEFAULT_ID)]
  pub id: i64,

  /// Node protocol type
  #[arg(long = "type", default_value = DEFAULT_TYPE)]
  pub kind: String,

  /// Active connection count
  #[arg(long, default_value_t = DEFAULT_ONLINE)]
  pub online: i64,

  /// Log filter used when RUST_LOG is unset
  #[arg(long, default_value = "info")]
  pub log_level: String,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
  pub store: StoreConfig,
  pub record: RecordTemplate,
  pub log: LogConfig,
}

impl Config {
  /// Build and validate the configuration from parsed CLI arguments
  pub fn from_cli(cli: Cli) -> Result<Self> {
    let config = Config {
      store: StoreConfig {
        host: cli.host,
        port: cli.port,
        db: cli.db,
        password: cli.password.filter(|p| !p.is_empty()),
      },
      record: RecordTemplate {
        name: cli.name,
        id: cli.id,
        kind: cli.kind,
        online: cli.online,
      },
      log: LogConfig {
        level: cli.log_level,
      },
    };
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if self.store.host.trim().is_empty() {
      return Err(Error::Config("store host must not be empty".to_string()));
    }
    if self.store.port == 0 {
      return Err(Error::Config("store port must not be 0".to_string()));
    }
    Ok(())
  }
}
