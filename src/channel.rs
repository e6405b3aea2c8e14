//! Request/response plumbing to the browser peer.
//!
//! A [`Transport`] turns one [`Command`] into an ordered stream of [`ResultChunk`]s.
//! [`CommandChannel::dispatch`] drains that stream completely and reduces it to a
//! single [`Outcome`]; nothing is decided before the last chunk has been seen.

use std::path::PathBuf;
use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use thiserror::Error;

use crate::model::{Command, ResultChunk};

mod frame;
#[cfg(unix)]
mod socket;

pub use self::frame::{
    DEFAULT_MAX_FRAME_BYTES, WireFrame, decode_frame, encode_frame, read_frame_line,
};
#[cfg(unix)]
pub use self::socket::SocketTransport;

pub type ChunkStream = BoxStream<'static, Result<ResultChunk, ChannelError>>;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("browser peer unavailable at {path}: {reason}")]
    Unavailable { path: PathBuf, reason: String },
    #[error("channel io: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed response frame: {0}")]
    Protocol(String),
}

/// Carries commands to the peer. Implementations must be lazy: nothing is sent until
/// the returned stream is polled.
pub trait Transport: Send + Sync {
    fn send(&self, command: Command) -> ChunkStream;
}

/// Aggregated result of one command.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outcome {
    failed: bool,
    chunks: Vec<ResultChunk>,
}

impl Outcome {
    fn absorb(&mut self, chunk: ResultChunk) {
        if chunk.data.is_some() && chunk.signals_error() {
            self.failed = true;
        }
        self.chunks.push(chunk);
    }

    pub fn is_success(&self) -> bool {
        !self.failed
    }

    pub fn chunks(&self) -> &[ResultChunk] {
        &self.chunks
    }

    /// Human-readable text of the first error indicator, if any.
    pub fn error_message(&self) -> Option<String> {
        let chunk = self.chunks.iter().find(|c| c.signals_error())?;
        let data = chunk.data.as_ref()?;
        let err = data
            .get("error")
            .filter(|e| !e.is_null())
            .or_else(|| data.get("data").and_then(|d| d.get("error")))
            .filter(|e| !e.is_null());
        Some(match err {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "command reported failure".to_string(),
        })
    }
}

#[derive(Clone)]
pub struct CommandChannel {
    transport: Arc<dyn Transport>,
}

impl CommandChannel {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Channel backed by the local socket of the native host.
    pub fn connect(path: PathBuf) -> Result<Self, ChannelError> {
        #[cfg(unix)]
        {
            let transport = SocketTransport::connect(path)?;
            Ok(Self::new(Arc::new(transport)))
        }
        #[cfg(not(unix))]
        {
            Err(ChannelError::Unavailable {
                path,
                reason: "local sockets are not supported on this platform".to_string(),
            })
        }
    }

    /// Send `command` and drain every chunk of the response.
    ///
    /// Any chunk carrying an error indicator fails the outcome, but draining continues
    /// so every side effect of the peer's response is observed. A transport error is
    /// reported only after the stream has ended.
    pub async fn dispatch(&self, command: Command) -> Result<Outcome, ChannelError> {
        let name = command.command.clone();
        let mut stream = self.transport.send(command);
        let mut outcome = Outcome::default();
        let mut transport_err = None;

        while let Some(item) = stream.next().await {
            match item {
                Ok(chunk) => outcome.absorb(chunk),
                Err(err) => {
                    tracing::warn!(command = %name, error = %err, "chunk stream error");
                    transport_err.get_or_insert(err);
                }
            }
        }

        if let Some(err) = transport_err {
            return Err(err);
        }
        tracing::debug!(
            command = %name,
            chunks = outcome.chunks.len(),
            ok = outcome.is_success(),
            "command drained"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
pub(crate) mod scripted;

#[cfg(test)]
#[path = "tests/channel/channel_tests.rs"]
mod tests;
