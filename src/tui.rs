use anyhow::Result;

pub use crate::tui_shell::{PickerBackend, PickerExit};

#[derive(Clone, Copy, Debug, Default)]
pub struct PickerOptions {
    /// Keep the picker open after a successful activation.
    pub loop_mode: bool,
}

/// Runs the interactive picker until the user quits or, outside loop mode, a tab
/// has been activated.
pub async fn run(opts: PickerOptions, backend: PickerBackend) -> Result<PickerExit> {
    crate::tui_shell::run_with_options(opts, backend).await
}
