use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::activate::Activator;
use crate::filter::{Filtered, TabFilter};
use crate::model::{Tab, TabRef};
use crate::tabs::TabSource;

use super::input::{Input, PLACEHOLDER};
use super::view::{
    MAX_DOMAIN, MAX_TITLE, footer_text, highlight_spans, max_visible, title_padding, truncate,
    visible_window,
};

mod event_loop;
mod key_dispatch;
mod render;
mod runtime;
mod state;

pub(super) use self::runtime::run;
pub(super) use self::state::{App, Effect, PickerEvent};

/// How the picker ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerExit {
    /// Quit key, or the terminal went away.
    Cancelled,
    /// A tab was activated and the picker was not in loop mode.
    Activated(Tab),
}

/// The collaborators background tasks run against.
#[derive(Clone)]
pub struct PickerBackend {
    pub source: TabSource,
    /// `None` in demo mode: activations succeed without a peer.
    pub activator: Option<Activator>,
}

#[cfg(test)]
#[path = "../tests/tui_shell/picker_tests.rs"]
mod picker_tests;

#[cfg(test)]
#[path = "../tests/tui_shell/render_tests.rs"]
mod render_tests;
