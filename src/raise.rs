//! Bringing the browser window to the foreground after an activation.
//!
//! Raising is best effort: failures are logged and never fail the command. Only
//! [`platform_raiser`] looks at the host platform.

use crate::config::Settings;

#[cfg(target_os = "macos")]
mod macos;

pub trait WindowRaiser: Send + Sync {
    /// Raise the browser window whose title contains `title`, or just the
    /// browser application when no title is known.
    fn raise(&self, title: Option<&str>);
}

/// Does nothing; used where the platform has no raise support and in demo mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRaiser;

impl WindowRaiser for NoopRaiser {
    fn raise(&self, title: Option<&str>) {
        tracing::debug!(?title, "window raise not supported here");
    }
}

pub fn platform_raiser(settings: &Settings) -> Box<dyn WindowRaiser> {
    #[cfg(target_os = "macos")]
    {
        Box::new(macos::AppleScriptRaiser {
            app: settings.browser_app.clone(),
            delay: std::time::Duration::from_millis(settings.raise_delay_ms),
            title_match_len: settings.title_match_len,
        })
    }
    #[cfg(not(target_os = "macos"))]
    {
        let _ = settings;
        Box::new(NoopRaiser)
    }
}

/// Prepares a window title for embedding in a quoted script string: keeps the first
/// `max_chars` chars and escapes backslashes and double quotes.
pub fn escape_script_string(s: &str, max_chars: usize) -> String {
    let head: String = s.chars().take(max_chars).collect();
    head.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
#[path = "tests/raise/raise_tests.rs"]
mod tests;
