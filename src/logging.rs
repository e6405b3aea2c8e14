use std::io;

use tracing_subscriber::EnvFilter;

pub const STDERR_ENV: &str = "TABHOP_LOG_STDERR";

/// Logs are discarded unless `TABHOP_LOG_STDERR` is set, so the full-screen picker
/// is never painted over. `RUST_LOG` selects levels (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_enabled = matches!(
        std::env::var(STDERR_ENV).ok().as_deref(),
        Some("1") | Some("true") | Some("TRUE") | Some("yes") | Some("YES")
    );
    if stderr_enabled {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .try_init();
    }
}
