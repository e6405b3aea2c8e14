use std::fmt;
use std::str::FromStr;

use anyhow::Context;

/// Address of a tab: `{windowId}:{tabId}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TabRef {
    pub window_id: u64,
    pub tab_id: u64,
}

impl fmt::Display for TabRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.window_id, self.tab_id)
    }
}

impl FromStr for TabRef {
    type Err = anyhow::Error;

    /// Accepts only the canonical form: two unsigned decimal ids, no whitespace or sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (window, tab) = s
            .split_once(':')
            .with_context(|| format!("invalid tab reference '{}' (expected windowId:tabId)", s))?;
        let window_id = parse_id(window).with_context(|| format!("invalid window id '{}'", window))?;
        let tab_id = parse_id(tab).with_context(|| format!("invalid tab id '{}'", tab))?;
        Ok(TabRef { window_id, tab_id })
    }
}

fn parse_id(s: &str) -> anyhow::Result<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        anyhow::bail!("expected decimal digits");
    }
    Ok(s.parse::<u64>()?)
}
