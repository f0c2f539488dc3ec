use bytes::{Buf, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::protocol::{Command, Parser, Value};

/// Read buffer size for replies
const READ_BUFFER_SIZE: usize = 4096;

/// Single connection to a Redis-compatible store
pub struct Client {
    stream: TcpStream,
    buffer: BytesMut,
}

impl Client {
    /// Connect to the store, authenticate, select the database and ping it.
    ///
    /// No timeout is applied; the connect blocks until the OS reports
    /// success or failure.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let addr = config.addr();
        let stream = TcpStream::connect(&addr).await?;
        info!("Connected to store at {}", addr);

        let mut client = Self {
            stream,
            buffer: BytesMut::with_capacity(READ_BUFFER_SIZE),
        };

        if let Some(password) = &config.password {
            let reply = client
                .request(Command::Auth {
                    password: password.clone(),
                })
                .await?;
            expect_status("AUTH", reply, "OK")?;
            debug!("Authenticated with {}", addr);
        }

        if config.db != 0 {
            let reply = client.request(Command::Select { db: config.db }).await?;
            expect_status("SELECT", reply, "OK")?;
            debug!("Selected database {}", config.db);
        }

        client.ping().await?;
        info!("Store connection ready [{}] db:{}", addr, config.db);

        Ok(client)
    }

    /// PING the store, expecting PONG
    pub async fn ping(&mut self) -> Result<()> {
        let reply = self.request(Command::Ping).await?;
        expect_status("PING", reply, "PONG")
    }

    /// Unconditionally set `key` to `value`
    pub async fn set(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Result<()> {
        let reply = self
            .request(Command::Set {
                key: key.into(),
                value: value.into(),
            })
            .await?;
        expect_status("SET", reply, "OK")
    }

    /// Send one command and wait for its reply.
    ///
    /// Error replies are returned as [`Error::Server`].
    pub async fn request(&mut self, command: Command) -> Result<Value> {
        let name = command.name();
        let frame = command.into_frame().encode();
        debug!("Sending {} ({} bytes)", name, frame.len());
        self.stream.write_all(&frame).await?;

        match self.read_reply().await? {
            Value::Error(msg) => Err(Error::Server(msg)),
            reply => Ok(reply),
        }
    }

    async fn read_reply(&mut self) -> Result<Value> {
        loop {
            if let Some((value, consumed)) = Parser::parse(&self.buffer)? {
                self.buffer.advance(consumed);
                return Ok(value);
            }

            if self.stream.read_buf(&mut self.buffer).await? == 0 {
                return Err(Error::ConnectionClosed);
            }
        }
    }
}

fn expect_status(command: &'static str, reply: Value, status: &str) -> Result<()> {
    if reply.is_status(status) {
        Ok(())
    } else {
        Err(Error::UnexpectedReply { command, reply })
    }
}
