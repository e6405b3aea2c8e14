use futures_util::StreamExt;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::mpsc;

use super::*;

pub(super) async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    backend: &PickerBackend,
) -> Result<PickerExit> {
    let (tx, mut rx) = mpsc::unbounded_channel::<PickerEvent>();
    let mut terminal_events = crossterm::event::EventStream::new();

    if let Some(effect) = app.launch() {
        spawn_effect(effect, backend, tx.clone());
    }

    loop {
        terminal
            .draw(|f| render::draw(f, app))
            .context("draw")?;
        if let Some(exit) = app.exit() {
            return Ok(exit.clone());
        }

        let event = tokio::select! {
            Some(event) = rx.recv() => event,
            maybe_event = terminal_events.next() => match maybe_event {
                Some(Ok(Event::Key(k))) if k.kind == KeyEventKind::Press => PickerEvent::Key(k),
                Some(Ok(Event::Resize(w, h))) => PickerEvent::Resize(w, h),
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(err).context("read terminal event"),
                None => return Ok(PickerExit::Cancelled),
            },
        };

        if let Some(effect) = app.handle(event) {
            spawn_effect(effect, backend, tx.clone());
        }
    }
}

/// Runs `effect` on a tokio task that reports back with exactly one event.
pub(in crate::tui_shell) fn spawn_effect(
    effect: Effect,
    backend: &PickerBackend,
    tx: mpsc::UnboundedSender<PickerEvent>,
) {
    match effect {
        Effect::Fetch => {
            let source = backend.source.clone();
            tokio::spawn(async move {
                let result = source.fetch().await;
                // the receiver is gone once the picker has quit
                let _ = tx.send(PickerEvent::TabsLoaded(result));
            });
        }
        Effect::Activate(tab) => {
            let activator = backend.activator.clone();
            tokio::spawn(async move {
                let result = match activator {
                    Some(activator) => activator.activate(tab).await.map(|_| ()),
                    None => {
                        tracing::info!(%tab, "demo mode: activation simulated");
                        Ok(())
                    }
                };
                let _ = tx.send(PickerEvent::ActivationDone(result));
            });
        }
    }
}
