use atoi::FromRadix10SignedChecked;
use thiserror::Error;

/// RESP (REdis Serialization Protocol) data types
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  /// Simple strings, used for status replies like "OK" and "PONG"
  SimpleString(String),
  /// Errors
  Error(String),
  /// Integers
  Integer(i64),
  /// Bulk strings, used for binary-safe strings (can be null)
  BulkString(Option<Vec<u8>>),
  /// Arrays of other values (can be null)
  Array(Option<Vec<Value>>),
}

impl Value {
  /// Create a simple OK response
  #[cfg(test)]
  pub fn ok() -> Self {
    Value::SimpleString("OK".to_string())
  }

  /// Create an error response
  #[cfg(test)]
  pub fn error(msg: impl Into<String>) -> Self {
    Value::Error(msg.into())
  }

  /// Create a non-null bulk string
  pub fn bulk(data: impl Into<Vec<u8>>) -> Self {
    Value::BulkString(Some(data.into()))
  }

  /// True for a `+<status>` reply with the given text
  pub fn is_status(&self, status: &str) -> bool {
    matches!(self, Value::SimpleString(s) if s == status)
  }

  /// Encode Value to RESP bytes
  pub fn encode(&self) -> Vec<u8> {
    let mut buf = Vec::new();
    self.encode_to(&mut buf);
    buf
  }

  fn encode_to(&self, buf: &mut Vec<u8>) {
    match self {
      Value::SimpleString(s) => {
        buf.push(b'+');
        buf.extend_from_slice(s.as_bytes());
        buf.extend_from_slice(b"\r\n");
      }
      Value::Error(e) => {
        buf.push(b'-');
        buf.extend_from_slice(e.as_bytes());
        buf.extend_from_slice(b"\r\n");
      }
      Value::Integer(i) => {
        buf.push(b':');
        buf.extend_from_slice(i.to_string().as_bytes());
        buf.extend_from_slice(b"\r\n");
      }
      Value::BulkString(None) => {
        buf.extend_from_slice(b"$-1\r\n");
      }
      Value::BulkString(Some(data)) => {
        buf.push(b'$');
        buf.extend_from_slice(data.len().to_string().as_bytes());
        buf.extend_from_slice(b"\r\n");
        buf.extend_from_slice(data);
        buf.extend_from_slice(b"\r\n");
      }
      Value::Array(None) => {
        buf.extend_from_slice(b"*-1\r\n");
      }
      Value::Array(Some(items)) => {
        buf.push(b'*');
        buf.extend_from_slice(items.len().to_string().as_bytes());
        buf.extend_from_slice(b"\r\n");
        for item in items {
          item.encode_to(buf);
        }
      }
    }
  }
}

/// Deepest array nesting accepted in a single frame
const MAX_DEPTH: usize = 32;

/// Longest header or simple-string line accepted, excluding CRLF
const MAX_LINE_LEN: usize = 64 * 1024;

/// Largest bulk string accepted (Redis' own proto-max-bulk-len)
const MAX_BULK_LEN: i64 = 512 * 1024 * 1024;

/// Bytes that can never form a valid RESP frame
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
  #[error("invalid frame type byte 0x{0:02x}")]
  InvalidType(u8),
  #[error("invalid number in frame header: {0:?}")]
  InvalidNumber(String),
  #[error("invalid length {0}")]
  InvalidLength(i64),
  #[error("bulk string not terminated by CRLF")]
  MissingTerminator,
  #[error("line longer than {} bytes", MAX_LINE_LEN)]
  LineTooLong,
  #[error("arrays nested deeper than {}", MAX_DEPTH)]
  TooDeep,
}

type ParseResult<T> = Result<Option<T>, ProtocolError>;

/// Incremental parser for RESP frames
pub struct Parser;

impl Parser {
  /// Parse one frame from the front of `buffer`.
  ///
  /// `Ok(Some((value, consumed)))` for a complete frame, `Ok(None)` while
  /// more bytes are needed, `Err` once the bytes can never form a frame.
  pub fn parse(buffer: &[u8]) -> ParseResult<(Value, usize)> {
    if buffer.is_empty() {
      return Ok(None);
    }

    let mut pos = 0;
    Ok(Self::parse_value(buffer, &mut pos, 0)?.map(|value| (value, pos)))
  }

  fn parse_value(buffer: &[u8], pos: &mut usize, depth: usize) -> ParseResult<Value> {
    if *pos >= buffer.len() {
      return Ok(None);
    }

    let type_byte = buffer[*pos];
    *pos += 1;

    match type_byte {
      b'+' => Ok(Self::read_line(buffer, pos)?
        .map(|line| Value::SimpleString(String::from_utf8_lossy(line).to_string()))),
      b'-' => Ok(Self::read_line(buffer, pos)?
        .map(|line| Value::Error(String::from_utf8_lossy(line).to_string()))),
      b':' => Self::parse_integer(buffer, pos),
      b'$' => Self::parse_bulk_string(buffer, pos),
      b'*' => Self::parse_array(buffer, pos, depth),
      other => Err(ProtocolError::InvalidType(other)),
    }
  }

  fn parse_integer(buffer: &[u8], pos: &mut usize) -> ParseResult<Value> {
    match Self::read_line(buffer, pos)? {
      Some(line) => Ok(Some(Value::Integer(Self::parse_number(line)?))),
      None => Ok(None),
    }
  }

  fn parse_bulk_string(buffer: &[u8], pos: &mut usize) -> ParseResult<Value> {
    let len = match Self::read_line(buffer, pos)? {
      Some(line) => Self::parse_number(line)?,
      None => return Ok(None),
    };

    if len == -1 {
      return Ok(Some(Value::BulkString(None)));
    }

    if !(0..=MAX_BULK_LEN).contains(&len) {
      return Err(ProtocolError::InvalidLength(len));
    }

    let len = len as usize;

    // len bytes of payload plus the trailing \r\n
    if *pos + len + 2 > buffer.len() {
      return Ok(None);
    }

    if &buffer[*pos + len..*pos + len + 2] != b"\r\n" {
      return Err(ProtocolError::MissingTerminator);
    }

    let data = buffer[*pos..*pos + len].to_vec();
    *pos += len + 2;

    Ok(Some(Value::BulkString(Some(data))))
  }

  fn parse_array(buffer: &[u8], pos: &mut usize, depth: usize) -> ParseResult<Value> {
    if depth >= MAX_DEPTH {
      return Err(ProtocolError::TooDeep);
    }

    let count = match Self::read_line(buffer, pos)? {
      Some(line) => Self::parse_number(line)?,
      None => return Ok(None),
    };

    if count == -1 {
      return Ok(Some(Value::Array(None)));
    }

    if count < 0 {
      return Err(ProtocolError::InvalidLength(count));
    }

    let count = count as usize;
    let mut items = Vec::with_capacity(count.min(64));

    for _ in 0..count {
      match Self::parse_value(buffer, pos, depth + 1)? {
        Some(item) => items.push(item),
        None => return Ok(None),
      }
    }

    Ok(Some(Value::Array(Some(items))))
  }

  /// Parse a whole line as a signed decimal; trailing garbage is rejected
  fn parse_number(line: &[u8]) -> Result<i64, ProtocolError> {
    match i64::from_radix_10_signed_checked(line) {
      (Some(n), used) if used == line.len() && used > 0 => Ok(n),
      _ => Err(ProtocolError::InvalidNumber(
        String::from_utf8_lossy(line).to_string(),
      )),
    }
  }

  fn read_line<'a>(buffer: &'a [u8], pos: &mut usize) -> ParseResult<&'a [u8]> {
    let start = *pos;

    for i in start..buffer.len().saturating_sub(1) {
      if buffer[i] == b'\r' && buffer[i + 1] == b'\n' {
        *pos = i + 2;
        return Ok(Some(&buffer[start..i]));
      }
    }

    if buffer.len() - start > MAX_LINE_LEN {
      return Err(ProtocolError::LineTooLong);
    }

    Ok(None)
  }
}
