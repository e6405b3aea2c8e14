use std::ops::Range;

use ratatui::style::Style;
use ratatui::text::Span;

pub(super) const MAX_TITLE: usize = 50;
pub(super) const TITLE_COLUMN: usize = 55;
pub(super) const MAX_DOMAIN: usize = 30;

/// Rows available for the tab list: the terminal height minus header and footer,
/// falling back to 10 on very small or unknown terminals.
pub(super) fn max_visible(height: u16) -> usize {
    let rows = height as i32 - 6;
    if rows < 5 { 10 } else { rows as usize }
}

/// Rows to draw so the cursor stays visible. The window only scrolls once the
/// cursor passes its bottom edge.
pub(super) fn visible_window(cursor: usize, len: usize, max_visible: usize) -> Range<usize> {
    let max_visible = max_visible.max(1);
    let start = if cursor >= max_visible {
        cursor + 1 - max_visible
    } else {
        0
    };
    let start = start.min(len);
    start..(start + max_visible).min(len)
}

/// Shortens `s` to at most `max` chars, ending in `…` when cut.
pub(super) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Spaces between the title and the domain column.
pub(super) fn title_padding(title: &str) -> usize {
    let shown = title.chars().count().min(MAX_TITLE);
    TITLE_COLUMN.saturating_sub(shown).max(2)
}

pub(super) fn footer_text(filtered: usize, total: usize, loop_mode: bool) -> String {
    let mut s = format!(
        "{}/{} tabs • ↑↓/jk navigate • Enter select • R refresh • Esc quit",
        filtered, total
    );
    if loop_mode {
        s.push_str(" • loop mode");
    }
    s
}

/// Splits `text` into spans, styling the chars at `positions` with `emphasis`.
pub(super) fn highlight_spans(
    text: &str,
    positions: &[usize],
    base: Style,
    emphasis: Style,
) -> Vec<Span<'static>> {
    if positions.is_empty() {
        return vec![Span::styled(text.to_string(), base)];
    }

    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_hit = false;
    for (i, c) in text.chars().enumerate() {
        let hit = positions.contains(&i);
        if hit != run_hit && !run.is_empty() {
            let style = if run_hit { emphasis } else { base };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_hit = hit;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, if run_hit { emphasis } else { base }));
    }
    spans
}

#[cfg(test)]
#[path = "../tests/tui_shell/view_tests.rs"]
mod tests;
