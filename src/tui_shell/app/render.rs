use super::*;

const SEARCH_PROMPT: &str = "🔍 ";

fn active_marker_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

fn match_style() -> Style {
    Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD)
}

fn dim_style() -> Style {
    Style::default().fg(Color::Gray)
}

fn selected_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub(in crate::tui_shell) fn draw(frame: &mut ratatui::Frame, app: &App) {
    if app.exit().is_some() {
        return;
    }
    let area = frame.area();
    frame.render_widget(Paragraph::new(picker_lines(app)), area);

    if app.input.focused {
        let x = area.x.saturating_add(cursor_column(app));
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
    }
}

/// Terminal column of the query cursor, counting display width so wide chars
/// take two cells.
pub(in crate::tui_shell) fn cursor_column(app: &App) -> u16 {
    let typed: String = app.input.value().chars().take(app.input.cursor).collect();
    let width = Span::raw(SEARCH_PROMPT).width() + Span::raw(typed).width();
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// The whole screen, top to bottom.
pub(in crate::tui_shell) fn picker_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut search = vec![Span::raw(SEARCH_PROMPT)];
    if app.input.value().is_empty() {
        search.push(Span::styled(PLACEHOLDER, dim_style()));
    } else {
        search.push(Span::raw(app.input.value().to_string()));
    }
    lines.push(Line::from(search));
    lines.push(Line::from(""));

    if let Some(err) = &app.last_error {
        lines.push(Line::from(Span::styled(
            format!("Error: {}", err),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    if app.is_refreshing() {
        lines.push(Line::from(Span::styled("Refreshing...", dim_style())));
        lines.push(Line::from(""));
    }

    if app.tabs.is_empty() && !app.is_refreshing() {
        lines.push(Line::from(Span::styled(
            "No tabs found. Press Esc to exit.",
            dim_style(),
        )));
    } else {
        let rows = visible_window(app.cursor, app.view.len(), max_visible(app.height));
        for i in rows {
            lines.push(tab_row(app, i));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        footer_text(app.view.len(), app.tabs.len(), app.loop_mode),
        dim_style(),
    )));
    lines
}

fn tab_row(app: &App, i: usize) -> Line<'static> {
    let tab = &app.view.tabs[i];
    let mut spans = Vec::new();

    if tab.active {
        spans.push(Span::styled("● ", active_marker_style()));
    } else {
        spans.push(Span::raw("  "));
    }

    let title = truncate(&tab.title, MAX_TITLE);
    let positions = app
        .view
        .match_at(i)
        .map(|m| m.title_positions(&tab.title, MAX_TITLE - 1))
        .unwrap_or_default();
    spans.extend(highlight_spans(
        &title,
        &positions,
        Style::default(),
        match_style(),
    ));

    spans.push(Span::raw(" ".repeat(title_padding(&tab.title))));
    spans.push(Span::styled(truncate(&tab.domain, MAX_DOMAIN), dim_style()));

    let line = Line::from(spans);
    if i == app.cursor {
        line.style(selected_style())
    } else {
        line
    }
}
