//! Sends activation and switch commands and raises the browser afterwards.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::channel::{CommandChannel, Outcome};
use crate::model::{ACTIVATE_TAB, Command, ResultChunk, SWITCH_TAB, TabRef};
use crate::raise::WindowRaiser;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activated {
    pub tab: TabRef,
    /// Title of the browser window now showing the tab, when the peer reports it.
    pub window_title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ActivateResponse {
    #[serde(default)]
    data: ActivateData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivateData {
    #[serde(default)]
    title: String,
}

#[derive(Clone)]
pub struct Activator {
    channel: CommandChannel,
    raiser: Arc<dyn WindowRaiser>,
}

impl Activator {
    pub fn new(channel: CommandChannel, raiser: Arc<dyn WindowRaiser>) -> Self {
        Self { channel, raiser }
    }

    /// Activates `tab` and waits for every response chunk. Fails if any chunk
    /// reports an error; the window raise that follows a success is best effort.
    pub async fn activate(&self, tab: TabRef) -> Result<Activated> {
        let outcome = self
            .channel
            .dispatch(Command::new(ACTIVATE_TAB, tab.to_string()))
            .await
            .with_context(|| format!("activate {}", tab))?;
        ensure_success(&outcome, "activate", tab)?;

        let window_title = outcome.chunks().iter().filter_map(window_title).last();
        tracing::info!(%tab, ?window_title, "tab activated");
        self.raise(window_title.clone()).await;
        Ok(Activated { tab, window_title })
    }

    /// Switches to `tab` without the window lookup; raises the browser app only when
    /// asked to.
    pub async fn switch(&self, tab: TabRef, open_browser: bool) -> Result<()> {
        let outcome = self
            .channel
            .dispatch(Command::new(SWITCH_TAB, tab.to_string()))
            .await
            .with_context(|| format!("switch {}", tab))?;
        ensure_success(&outcome, "switch", tab)?;

        tracing::info!(%tab, "tab switched");
        if open_browser {
            self.raise(None).await;
        }
        Ok(())
    }

    async fn raise(&self, title: Option<String>) {
        let raiser = self.raiser.clone();
        let joined = tokio::task::spawn_blocking(move || raiser.raise(title.as_deref())).await;
        if let Err(err) = joined {
            tracing::warn!(error = %err, "window raise task failed");
        }
    }
}

fn ensure_success(outcome: &Outcome, verb: &str, tab: TabRef) -> Result<()> {
    if outcome.is_success() {
        return Ok(());
    }
    let reason = outcome
        .error_message()
        .unwrap_or_else(|| "browser reported an error".to_string());
    anyhow::bail!("{} {}: {}", verb, tab, reason)
}

fn window_title(chunk: &ResultChunk) -> Option<String> {
    let data = chunk.data.clone()?;
    let resp: ActivateResponse = serde_json::from_value(data).ok()?;
    Some(resp.data.title).filter(|t| !t.is_empty())
}

#[cfg(test)]
#[path = "tests/activate/activate_tests.rs"]
mod tests;
