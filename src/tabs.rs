//! Where the picker's tab list comes from.

use anyhow::{Context, Result};
use serde_json::Value;

use crate::channel::CommandChannel;
use crate::model::{Command, GET_TABS, ResultChunk, Tab, sort_by_recency};

#[derive(Clone)]
pub enum TabSource {
    /// Ask the browser peer.
    Live(CommandChannel),
    /// Hand-authored tabs for demos and tests; no peer needed.
    Fixture,
}

impl TabSource {
    pub async fn fetch(&self) -> Result<Vec<Tab>> {
        match self {
            TabSource::Live(channel) => fetch_live(channel).await,
            TabSource::Fixture => Ok(demo_tabs()),
        }
    }
}

async fn fetch_live(channel: &CommandChannel) -> Result<Vec<Tab>> {
    let outcome = channel
        .dispatch(Command::new(GET_TABS, ""))
        .await
        .context("list tabs")?;
    if !outcome.is_success() {
        anyhow::bail!(
            "list tabs: {}",
            outcome
                .error_message()
                .unwrap_or_else(|| "browser reported an error".to_string())
        );
    }

    let mut tabs = Vec::new();
    for chunk in outcome.chunks() {
        tabs.extend(tabs_from_chunk(chunk)?);
    }
    sort_by_recency(&mut tabs);
    tracing::debug!(count = tabs.len(), "tabs fetched");
    Ok(tabs)
}

/// A chunk carries either `{"data": [tab, ...]}` or a bare array of tabs.
fn tabs_from_chunk(chunk: &ResultChunk) -> Result<Vec<Tab>> {
    let items = match &chunk.data {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(_)) => chunk.data.clone(),
        Some(v) => v.get("data").cloned(),
    };
    match items {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items).context("parse tabs"),
    }
}

pub fn demo_tabs() -> Vec<Tab> {
    let rows: [(u64, u64, &str, &str); 12] = [
        (1, 1, "GitHub - charmbracelet/bubbletea", "github.com"),
        (2, 1, "Google Search - golang tui", "google.com"),
        (3, 1, "Stack Overflow - How to build CLI apps", "stackoverflow.com"),
        (4, 1, "Hacker News", "news.ycombinator.com"),
        (5, 1, "Reddit - r/golang", "reddit.com"),
        (6, 2, "YouTube - Charm CLI Tools Tutorial", "youtube.com"),
        (7, 2, "Twitter / X - @chaborel", "x.com"),
        (8, 2, "Gmail - Inbox", "mail.google.com"),
        (9, 2, "Notion - Project Notes", "notion.so"),
        (10, 2, "Figma - UI Design", "figma.com"),
        (11, 1, "MDN Web Docs - JavaScript", "developer.mozilla.org"),
        (12, 1, "Go Documentation", "go.dev"),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (id, window_id, title, domain))| Tab {
            id: *id,
            window_id: *window_id,
            title: title.to_string(),
            domain: domain.to_string(),
            active: *id == 1,
            last_accessed: 1000 - i as u64,
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/tabs/tabs_tests.rs"]
mod tests;
