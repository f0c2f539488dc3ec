use crate::protocol::resp::Value;

/// Commands the record writer sends to the store
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// AUTH password
    Auth { password: String },
    /// SELECT index
    Select { db: u32 },
    /// PING
    Ping,
    /// SET key value, unconditional overwrite
    Set { key: String, value: Vec<u8> },
}

impl Command {
    /// Upper-case command name, used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::Auth { .. } => "AUTH",
            Command::Select { .. } => "SELECT",
            Command::Ping => "PING",
            Command::Set { .. } => "SET",
        }
    }

    /// Encode the command as a RESP array of bulk strings
    pub fn into_frame(self) -> Value {
        let name = Value::bulk(self.name());
        let items = match self {
            Command::Auth { password } => vec![name, Value::bulk(password)],
            Command::Select { db } => vec![name, Value::bulk(db.to_string())],
            Command::Ping => vec![name],
            Command::Set { key, value } => vec![name, Value::bulk(key), Value::bulk(value)],
        };
        Value::Array(Some(items))
    }
}
