use super::*;

/// Work running outside the event loop. One slot: a refresh or confirm issued
/// while the slot is busy is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Background {
    Idle,
    Fetching,
    Activating(TabRef),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Lifecycle {
    Running,
    /// Terminal: every later event is discarded.
    Finished(PickerExit),
}

/// Inputs to the state machine, processed one at a time in arrival order.
#[derive(Debug)]
pub(in crate::tui_shell) enum PickerEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    TabsLoaded(Result<Vec<Tab>>),
    ActivationDone(Result<()>),
}

/// Background work the loop must start after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Effect {
    Fetch,
    Activate(TabRef),
}

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) input: Input,
    pub(in crate::tui_shell) tabs: Vec<Tab>,
    pub(in crate::tui_shell) view: Filtered,
    pub(in crate::tui_shell) cursor: usize,
    pub(in crate::tui_shell) loop_mode: bool,
    pub(in crate::tui_shell) background: Background,
    pub(in crate::tui_shell) last_error: Option<String>,
    pub(in crate::tui_shell) lifecycle: Lifecycle,
    pub(in crate::tui_shell) selected: Option<Tab>,
    pub(in crate::tui_shell) height: u16,
    filter: TabFilter,
}

impl App {
    pub(in crate::tui_shell) fn new(loop_mode: bool) -> Self {
        Self {
            input: Input::default(),
            tabs: Vec::new(),
            view: Filtered::default(),
            cursor: 0,
            loop_mode,
            background: Background::Idle,
            last_error: None,
            lifecycle: Lifecycle::Running,
            selected: None,
            height: 0,
            filter: TabFilter::default(),
        }
    }

    /// First transition: start loading tabs.
    pub(in crate::tui_shell) fn launch(&mut self) -> Option<Effect> {
        self.request_fetch()
    }

    pub(in crate::tui_shell) fn handle(&mut self, event: PickerEvent) -> Option<Effect> {
        if self.exit().is_some() {
            tracing::debug!(?event, "picker finished; event discarded");
            return None;
        }
        match event {
            PickerEvent::Key(key) => self.handle_key(key),
            PickerEvent::Resize(_, height) => {
                self.height = height;
                None
            }
            PickerEvent::TabsLoaded(result) => {
                self.on_tabs_loaded(result);
                None
            }
            PickerEvent::ActivationDone(result) => self.on_activation_done(result),
        }
    }

    pub(in crate::tui_shell) fn exit(&self) -> Option<&PickerExit> {
        match &self.lifecycle {
            Lifecycle::Running => None,
            Lifecycle::Finished(exit) => Some(exit),
        }
    }

    pub(in crate::tui_shell) fn is_refreshing(&self) -> bool {
        self.background == Background::Fetching
    }

    pub(in crate::tui_shell) fn finish(&mut self, exit: PickerExit) {
        self.lifecycle = Lifecycle::Finished(exit);
    }

    pub(in crate::tui_shell) fn request_fetch(&mut self) -> Option<Effect> {
        if self.background != Background::Idle {
            tracing::debug!(background = ?self.background, "refresh rejected; slot busy");
            return None;
        }
        self.background = Background::Fetching;
        Some(Effect::Fetch)
    }

    pub(in crate::tui_shell) fn confirm(&mut self) -> Option<Effect> {
        let tab = self.view.tabs.get(self.cursor)?.clone();
        if self.background != Background::Idle {
            tracing::debug!(background = ?self.background, "activation rejected; slot busy");
            return None;
        }
        let tab_ref = tab.tab_ref();
        self.selected = Some(tab);
        self.background = Background::Activating(tab_ref);
        Some(Effect::Activate(tab_ref))
    }

    pub(in crate::tui_shell) fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(in crate::tui_shell) fn move_down(&mut self) {
        if self.cursor + 1 < self.view.len() {
            self.cursor += 1;
        }
    }

    /// Re-runs the filter. The cursor goes back to the top only when the number of
    /// candidates changed.
    pub(in crate::tui_shell) fn refilter(&mut self) {
        let next = self.filter.apply(self.input.value(), &self.tabs);
        if next.len() != self.view.len() {
            self.cursor = 0;
        }
        self.view = next;
    }

    pub(in crate::tui_shell) fn clamp_cursor(&mut self) {
        if self.cursor >= self.view.len() {
            self.cursor = self.view.len().saturating_sub(1);
        }
    }

    fn on_tabs_loaded(&mut self, result: Result<Vec<Tab>>) {
        self.background = Background::Idle;
        match result {
            Ok(tabs) => {
                tracing::debug!(count = tabs.len(), "tab list replaced");
                self.tabs = tabs;
                self.refilter();
                self.clamp_cursor();
            }
            Err(err) => {
                tracing::warn!(error = %format!("{:#}", err), "tab fetch failed");
                self.last_error = Some(format!("{:#}", err));
            }
        }
    }

    fn on_activation_done(&mut self, result: Result<()>) -> Option<Effect> {
        match std::mem::replace(&mut self.background, Background::Idle) {
            Background::Activating(tab) => {
                tracing::debug!(%tab, ok = result.is_ok(), "activation completed");
            }
            other => tracing::warn!(background = ?other, "activation result without a pending activation"),
        }
        match result {
            Ok(()) if self.loop_mode => {
                self.last_error = None;
                self.request_fetch()
            }
            Ok(()) => {
                let exit = match self.selected.clone() {
                    Some(tab) => PickerExit::Activated(tab),
                    None => PickerExit::Cancelled,
                };
                self.finish(exit);
                None
            }
            Err(err) => {
                self.last_error = Some(format!("{:#}", err));
                None
            }
        }
    }
}
