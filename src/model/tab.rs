use serde::{Deserialize, Serialize};

use super::ids::TabRef;

/// A snapshot of one open browser tab as reported by the extension.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: u64,
    pub window_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub active: bool,
    /// Epoch millis; larger means more recently used.
    #[serde(default)]
    pub last_accessed: u64,
}

impl Tab {
    pub fn tab_ref(&self) -> TabRef {
        TabRef {
            window_id: self.window_id,
            tab_id: self.id,
        }
    }
}

/// Most recently accessed first. Stable, so equal timestamps keep source order.
pub fn sort_by_recency(tabs: &mut [Tab]) {
    tabs.sort_by(|a, b| b.last_accessed.cmp(&a.last_accessed));
}
