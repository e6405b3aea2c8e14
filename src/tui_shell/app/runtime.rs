use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::*;

pub(in crate::tui_shell) async fn run(
    opts: crate::tui::PickerOptions,
    backend: PickerBackend,
) -> Result<PickerExit> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("the tab picker requires an interactive terminal (TTY)");
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(opts.loop_mode);
    if let Ok(size) = terminal.size() {
        app.height = size.height;
    }
    let res = event_loop::run_loop(&mut terminal, &mut app, &backend).await;

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}
