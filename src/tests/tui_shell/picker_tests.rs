use super::state::{Background, Lifecycle};
use super::*;
use crate::tabs::demo_tabs;

fn press(code: KeyCode) -> PickerEvent {
    PickerEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> PickerEvent {
    PickerEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_query(app: &mut App, q: &str) {
    for c in q.chars() {
        assert_eq!(app.handle(press(KeyCode::Char(c))), None);
    }
}

/// Launched picker with the fixture loaded.
fn loaded(loop_mode: bool) -> App {
    let mut app = App::new(loop_mode);
    assert_eq!(app.launch(), Some(Effect::Fetch));
    app.handle(PickerEvent::TabsLoaded(Ok(demo_tabs())));
    app
}

#[test]
fn launch_fetches_and_completion_fills_the_view() {
    let mut app = App::new(false);
    assert!(app.view.is_empty());
    assert_eq!(app.launch(), Some(Effect::Fetch));
    assert!(app.is_refreshing());

    app.handle(PickerEvent::TabsLoaded(Ok(demo_tabs())));
    assert!(!app.is_refreshing());
    assert_eq!(app.view.tabs, demo_tabs());
    assert!(app.view.matches.is_none());
    assert_eq!(app.cursor, 0);
}

#[test]
fn quit_keys_finish_even_with_work_in_flight() {
    for quit in [press(KeyCode::Esc), ctrl('c')] {
        let mut app = App::new(false);
        app.launch();
        assert_eq!(app.handle(quit), None);
        assert_eq!(app.exit(), Some(&PickerExit::Cancelled));

        // late completions are discarded
        app.handle(PickerEvent::TabsLoaded(Ok(demo_tabs())));
        assert!(app.tabs.is_empty());
    }
}

#[test]
fn cursor_moves_with_both_binding_pairs_and_clamps() {
    let mut app = loaded(false);
    app.handle(press(KeyCode::Up));
    assert_eq!(app.cursor, 0);

    app.handle(press(KeyCode::Down));
    app.handle(press(KeyCode::Char('j')));
    assert_eq!(app.cursor, 2);
    app.handle(press(KeyCode::Char('k')));
    assert_eq!(app.cursor, 1);

    for _ in 0..50 {
        app.handle(press(KeyCode::Down));
    }
    assert_eq!(app.cursor, 11);
}

#[test]
fn cursor_stays_in_range_for_any_key_sequence() {
    let mut app = loaded(false);
    let keys = [
        KeyCode::Down,
        KeyCode::Char('g'),
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Char('o'),
        KeyCode::Up,
        KeyCode::Char('z'),
        KeyCode::Down,
        KeyCode::Backspace,
        KeyCode::Down,
        KeyCode::Backspace,
        KeyCode::Backspace,
        KeyCode::Down,
        KeyCode::Down,
    ];
    for code in keys {
        app.handle(press(code));
        if app.view.is_empty() {
            assert_eq!(app.cursor, 0);
        } else {
            assert!(app.cursor < app.view.len());
        }
    }
}

#[test]
fn cursor_is_kept_when_candidate_count_is_unchanged() {
    let mut app = loaded(false);
    app.cursor = 5;
    app.refilter();
    assert_eq!(app.cursor, 5);
}

#[test]
fn cursor_is_kept_when_a_longer_query_matches_the_same_tabs() {
    let mut app = loaded(false);
    type_query(&mut app, "google");
    let count = app.view.len();
    assert_eq!(count, 2);
    app.handle(press(KeyCode::Down));
    assert_eq!(app.cursor, 1);

    type_query(&mut app, ".");
    assert_eq!(app.input.value(), "google.");
    assert_eq!(app.view.len(), count);
    assert_eq!(app.cursor, 1);
}

#[test]
fn activation_completion_frees_the_slot() {
    let mut app = loaded(true);
    app.handle(press(KeyCode::Enter));
    assert!(matches!(app.background, Background::Activating(_)));
    app.handle(PickerEvent::ActivationDone(Err(anyhow::anyhow!("gone"))));
    assert_eq!(app.background, Background::Idle);
    assert_eq!(app.handle(press(KeyCode::Char('R'))), Some(Effect::Fetch));
}

#[test]
fn cursor_resets_when_candidate_count_changes() {
    let mut app = loaded(false);
    app.handle(press(KeyCode::Down));
    app.handle(press(KeyCode::Down));
    type_query(&mut app, "golang");
    assert!(app.view.len() < 12);
    assert_eq!(app.cursor, 0);
    assert!(app.view.matches.is_some());
}

#[test]
fn golang_query_through_the_engine() {
    let mut app = loaded(false);
    type_query(&mut app, "golang");
    let titles: Vec<&str> = app.view.tabs.iter().map(|t| t.title.as_str()).collect();
    assert!(titles.contains(&"Reddit - r/golang"));
    assert!(titles.contains(&"Google Search - golang tui"));
    assert!(!titles.contains(&"GitHub - charmbracelet/bubbletea"));
}

#[test]
fn lowercase_r_is_text_while_input_is_focused() {
    let mut app = loaded(false);
    assert_eq!(app.handle(press(KeyCode::Char('r'))), None);
    assert_eq!(app.input.value(), "r");
    assert!(!app.is_refreshing());

    assert_eq!(app.handle(press(KeyCode::Char('R'))), Some(Effect::Fetch));
    assert!(app.is_refreshing());
    assert_eq!(app.input.value(), "r");
}

#[test]
fn lowercase_r_refreshes_when_list_has_focus() {
    let mut app = loaded(false);
    app.handle(press(KeyCode::Tab));
    assert!(!app.input.focused);
    assert_eq!(app.handle(press(KeyCode::Char('r'))), Some(Effect::Fetch));
    assert_eq!(app.input.value(), "");

    // text keys are ignored without focus
    app.handle(press(KeyCode::Char('x')));
    assert_eq!(app.input.value(), "");
}

#[test]
fn second_refresh_is_rejected_while_fetching() {
    let mut app = loaded(false);
    assert_eq!(app.handle(press(KeyCode::Char('R'))), Some(Effect::Fetch));
    assert_eq!(app.handle(press(KeyCode::Char('R'))), None);
    app.handle(PickerEvent::TabsLoaded(Ok(demo_tabs())));
    assert_eq!(app.handle(press(KeyCode::Char('R'))), Some(Effect::Fetch));
}

#[test]
fn confirm_on_empty_view_is_a_noop() {
    let mut app = App::new(false);
    app.launch();
    app.handle(PickerEvent::TabsLoaded(Ok(Vec::new())));
    assert_eq!(app.handle(press(KeyCode::Enter)), None);
    assert!(app.selected.is_none());
    assert!(app.exit().is_none());

    let mut app = loaded(false);
    type_query(&mut app, "zzqqxx");
    assert!(app.view.is_empty());
    assert_eq!(app.handle(press(KeyCode::Enter)), None);
}

#[test]
fn confirm_activates_the_cursor_row() {
    let mut app = loaded(false);
    app.handle(press(KeyCode::Down));
    let effect = app.handle(press(KeyCode::Enter));
    let expected = demo_tabs()[1].clone();
    assert_eq!(effect, Some(Effect::Activate(expected.tab_ref())));
    assert_eq!(app.selected, Some(expected.clone()));
    assert_eq!(app.background, Background::Activating(expected.tab_ref()));

    // refresh is rejected while the activation is outstanding
    assert_eq!(app.handle(press(KeyCode::Char('R'))), None);
}

#[test]
fn activation_success_without_loop_finishes() {
    let mut app = loaded(false);
    app.handle(press(KeyCode::Enter));
    assert_eq!(app.handle(PickerEvent::ActivationDone(Ok(()))), None);
    assert_eq!(
        app.exit(),
        Some(&PickerExit::Activated(demo_tabs()[0].clone()))
    );
}

#[test]
fn activation_success_in_loop_mode_refetches_and_stays_open() {
    let mut app = loaded(true);
    app.handle(press(KeyCode::Enter));
    assert_eq!(
        app.handle(PickerEvent::ActivationDone(Ok(()))),
        Some(Effect::Fetch)
    );
    assert!(app.exit().is_none());
    assert!(app.is_refreshing());
}

#[test]
fn activation_failure_is_recorded_and_picker_stays_open() {
    let mut app = loaded(true);
    app.handle(press(KeyCode::Enter));
    let effect = app.handle(PickerEvent::ActivationDone(Err(anyhow::anyhow!(
        "activate 1:1: No tab with id: 1"
    ))));
    assert_eq!(effect, None);
    assert!(app.exit().is_none());
    assert_eq!(app.background, Background::Idle);
    assert!(app.last_error.as_deref().unwrap().contains("No tab with id"));
}

#[test]
fn fetch_failure_keeps_previous_tabs() {
    let mut app = loaded(false);
    app.handle(press(KeyCode::Char('R')));
    app.handle(PickerEvent::TabsLoaded(Err(anyhow::anyhow!("peer went away"))));
    assert_eq!(app.tabs.len(), 12);
    assert_eq!(app.last_error.as_deref(), Some("peer went away"));
    assert!(!app.is_refreshing());
    assert_eq!(app.lifecycle, Lifecycle::Running);
}

#[tokio::test]
async fn background_tasks_report_back_as_single_events() {
    let backend = PickerBackend {
        source: TabSource::Fixture,
        activator: None,
    };
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    event_loop::spawn_effect(Effect::Fetch, &backend, tx.clone());
    match rx.recv().await {
        Some(PickerEvent::TabsLoaded(Ok(tabs))) => assert_eq!(tabs.len(), 12),
        other => panic!("unexpected event {:?}", other),
    }

    let tab_ref = demo_tabs()[0].tab_ref();
    event_loop::spawn_effect(Effect::Activate(tab_ref), &backend, tx);
    match rx.recv().await {
        Some(PickerEvent::ActivationDone(Ok(()))) => {}
        other => panic!("unexpected event {:?}", other),
    }
}
