use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use futures_util::stream;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::UnixStream;

use super::{
    ChannelError, ChunkStream, DEFAULT_MAX_FRAME_BYTES, Transport, WireFrame, decode_frame,
    encode_frame, read_frame_line,
};
use crate::model::{Command, ResultChunk};

/// Talks to the native host over a Unix socket, one connection per command.
pub struct SocketTransport {
    path: PathBuf,
    max_frame_bytes: usize,
}

enum ReadState {
    Connect { path: PathBuf, command: Command, max: usize },
    Reading { reader: BufReader<UnixStream>, max: usize },
}

impl SocketTransport {
    /// Fails with [`ChannelError::Unavailable`] unless something accepts connections
    /// at `path`. A socket file left behind by a dead host is refused here.
    pub fn connect(path: PathBuf) -> Result<Self, ChannelError> {
        if !path.exists() {
            return Err(ChannelError::Unavailable {
                path,
                reason: "socket not found (is the browser extension running?)".to_string(),
            });
        }
        if let Err(err) = std::os::unix::net::UnixStream::connect(&path) {
            return Err(ChannelError::Unavailable {
                path,
                reason: err.to_string(),
            });
        }
        Ok(Self {
            path,
            max_frame_bytes: DEFAULT_MAX_FRAME_BYTES,
        })
    }
}

impl Transport for SocketTransport {
    fn send(&self, command: Command) -> ChunkStream {
        let init = ReadState::Connect {
            path: self.path.clone(),
            command,
            max: self.max_frame_bytes,
        };
        stream::try_unfold(init, next_chunk).boxed()
    }
}

async fn next_chunk(state: ReadState) -> Result<Option<(ResultChunk, ReadState)>, ChannelError> {
    let (mut reader, max) = match state {
        ReadState::Connect { path, command, max } => (open(&path, &command, max).await?, max),
        ReadState::Reading { reader, max } => (reader, max),
    };
    while let Some(line) = read_frame_line(&mut reader, max).await? {
        if line.trim().is_empty() {
            continue;
        }
        let frame: WireFrame = decode_frame(&line, max)?;
        if frame.end {
            return Ok(None);
        }
        let chunk = ResultChunk { data: frame.data };
        return Ok(Some((chunk, ReadState::Reading { reader, max })));
    }
    Ok(None)
}

async fn open(
    path: &Path,
    command: &Command,
    max: usize,
) -> Result<BufReader<UnixStream>, ChannelError> {
    let mut stream = UnixStream::connect(path)
        .await
        .map_err(|err| ChannelError::Unavailable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    let request = encode_frame(command, max)?;
    stream.write_all(&request).await?;
    stream.flush().await?;
    tracing::debug!(command = %command.command, args = %command.args, "request sent");
    Ok(BufReader::new(stream))
}
