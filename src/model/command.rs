use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const GET_TABS: &str = "get-tabs";
pub const ACTIVATE_TAB: &str = "activate-tab";
pub const SWITCH_TAB: &str = "switch-tab";

/// One request to the browser peer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub command: String,
    #[serde(default)]
    pub args: String,
}

impl Command {
    pub fn new(command: &str, args: impl Into<String>) -> Self {
        Self {
            command: command.to_string(),
            args: args.into(),
        }
    }
}

/// One streamed unit of a command response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultChunk {
    #[serde(default)]
    pub data: Option<Value>,
}

impl ResultChunk {
    pub fn with_data(data: Value) -> Self {
        Self { data: Some(data) }
    }

    /// True when the payload embeds an application-level error: a non-null `error`
    /// member at the top level or under `data`, or `data.success == false`.
    pub fn signals_error(&self) -> bool {
        let Some(data) = &self.data else {
            return false;
        };
        if has_error_member(data) {
            return true;
        }
        match data.get("data") {
            Some(inner) => {
                has_error_member(inner)
                    || inner.get("success").and_then(Value::as_bool) == Some(false)
            }
            None => false,
        }
    }
}

fn has_error_member(v: &Value) -> bool {
    v.get("error").is_some_and(|e| !e.is_null())
}
