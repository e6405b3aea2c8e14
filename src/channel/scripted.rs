use std::collections::VecDeque;
use std::sync::Mutex;

use futures_util::StreamExt;
use futures_util::stream;

use super::{ChannelError, ChunkStream, Transport};
use crate::model::{Command, ResultChunk};

pub(crate) type ScriptedReply = Vec<Result<ResultChunk, ChannelError>>;

/// Answers each command with the next queued reply and records what was sent.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<ScriptedReply>>,
    sent: Mutex<Vec<Command>>,
}

impl ScriptedTransport {
    pub(crate) fn with_replies(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn sent(&self) -> Vec<Command> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, command: Command) -> ChunkStream {
        self.sent.lock().unwrap().push(command);
        let reply = self.replies.lock().unwrap().pop_front().unwrap_or_default();
        stream::iter(reply).boxed()
    }
}
