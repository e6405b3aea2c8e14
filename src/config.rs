use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const SOCKET_ENV: &str = "TABHOP_SOCKET";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Unix socket the native host listens on.
    pub socket_path: PathBuf,
    /// Application name handed to the window raiser.
    pub browser_app: String,
    /// Pause between activation and raise so the browser can retitle its window.
    pub raise_delay_ms: u64,
    /// Window titles are matched on this many leading chars.
    pub title_match_len: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            browser_app: "Firefox".to_string(),
            raise_delay_ms: 100,
            title_match_len: 50,
        }
    }
}

impl Settings {
    /// Reads `<config dir>/tabhop/config.json`; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))
    }

    /// `--socket` wins over `$TABHOP_SOCKET`, which wins over the config file.
    pub fn resolve_socket(&self, flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
        flag.or_else(|| env.filter(|s| !s.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| self.socket_path.clone())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tabhop").join("config.json"))
}

fn default_socket_path() -> PathBuf {
    dirs::runtime_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tabhop.sock")
}

#[cfg(test)]
#[path = "tests/config/config_tests.rs"]
mod tests;
