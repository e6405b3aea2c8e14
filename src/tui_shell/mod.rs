use anyhow::Result;

mod app;
mod input;
mod view;

pub use app::{PickerBackend, PickerExit};

pub async fn run_with_options(
    opts: crate::tui::PickerOptions,
    backend: PickerBackend,
) -> Result<PickerExit> {
    app::run(opts, backend).await
}
