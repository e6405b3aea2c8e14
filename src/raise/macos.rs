use std::process::{Command, Stdio};
use std::time::Duration;

use super::{WindowRaiser, escape_script_string};

/// Uses `osascript` to activate the browser and move the matching window to the front.
pub(super) struct AppleScriptRaiser {
    pub(super) app: String,
    pub(super) delay: Duration,
    pub(super) title_match_len: usize,
}

impl AppleScriptRaiser {
    fn script(&self, title: Option<&str>) -> String {
        let app = escape_script_string(&self.app, usize::MAX);
        match title.filter(|t| !t.is_empty()) {
            // activate first, then reorder; windows without a valid id throw inside the loop
            Some(title) => format!(
                r#"
tell application "{app}"
    activate
    delay 0.1
    repeat with w in (every window)
        try
            if (name of w) contains "{title}" then
                try
                    set index of w to 1
                    return
                end try
            end if
        end try
    end repeat
end tell
"#,
                app = app,
                title = escape_script_string(title, self.title_match_len),
            ),
            None => format!(r#"tell application "{}" to activate"#, app),
        }
    }
}

impl WindowRaiser for AppleScriptRaiser {
    fn raise(&self, title: Option<&str>) {
        std::thread::sleep(self.delay);
        let status = Command::new("osascript")
            .arg("-e")
            .arg(self.script(title))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(s) if s.success() => tracing::debug!(?title, "browser window raised"),
            Ok(s) => tracing::warn!(?title, status = ?s, "osascript failed"),
            Err(err) => tracing::warn!(?title, error = %err, "could not run osascript"),
        }
    }
}
