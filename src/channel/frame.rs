use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use super::ChannelError;

pub const DEFAULT_MAX_FRAME_BYTES: usize = 4 * 1024 * 1024;

/// One newline-delimited JSON line read from the peer.
///
/// `{"data": ...}` is a result chunk; `{"end": true}` closes the response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WireFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub end: bool,
}

impl WireFrame {
    pub fn chunk(data: Value) -> Self {
        Self {
            data: Some(data),
            end: false,
        }
    }
}

pub fn encode_frame<T: Serialize>(value: &T, max_frame_bytes: usize) -> Result<Vec<u8>, ChannelError> {
    let mut encoded =
        serde_json::to_vec(value).map_err(|err| ChannelError::Protocol(err.to_string()))?;
    if encoded.len() > max_frame_bytes {
        return Err(ChannelError::Protocol(format!(
            "frame of {} bytes exceeds limit of {}",
            encoded.len(),
            max_frame_bytes
        )));
    }
    encoded.push(b'\n');
    Ok(encoded)
}

pub fn decode_frame<T: DeserializeOwned>(line: &str, max_frame_bytes: usize) -> Result<T, ChannelError> {
    let raw = line.trim_end_matches(['\n', '\r']);
    if raw.len() > max_frame_bytes {
        return Err(ChannelError::Protocol(format!(
            "frame of {} bytes exceeds limit of {}",
            raw.len(),
            max_frame_bytes
        )));
    }
    serde_json::from_str(raw).map_err(|err| ChannelError::Protocol(err.to_string()))
}

/// Reads one newline-terminated line, buffering at most `max_frame_bytes` plus the
/// line ending. `None` at end of stream.
pub async fn read_frame_line<R>(reader: &mut R, max_frame_bytes: usize) -> Result<Option<String>, ChannelError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let limit = max_frame_bytes as u64 + 2;
    let n = (&mut *reader).take(limit).read_until(b'\n', &mut buf).await?;
    if n == 0 {
        return Ok(None);
    }
    if buf.last() != Some(&b'\n') && buf.len() > max_frame_bytes {
        return Err(ChannelError::Protocol(format!(
            "frame exceeds limit of {} bytes",
            max_frame_bytes
        )));
    }
    String::from_utf8(buf)
        .map(Some)
        .map_err(|err| ChannelError::Protocol(err.to_string()))
}
