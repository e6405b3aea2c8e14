use super::*;

use ratatui::style::{Color, Modifier};

#[test]
fn max_visible_falls_back_on_small_terminals() {
    assert_eq!(max_visible(40), 34);
    assert_eq!(max_visible(11), 5);
    assert_eq!(max_visible(10), 10);
    assert_eq!(max_visible(0), 10);
}

#[test]
fn window_scrolls_only_enough_to_show_cursor() {
    assert_eq!(visible_window(0, 12, 5), 0..5);
    assert_eq!(visible_window(4, 12, 5), 0..5);
    assert_eq!(visible_window(5, 12, 5), 1..6);
    assert_eq!(visible_window(11, 12, 5), 7..12);
    assert_eq!(visible_window(0, 3, 10), 0..3);
    assert_eq!(visible_window(0, 0, 10), 0..0);
}

#[test]
fn window_always_contains_cursor() {
    for len in 1..30 {
        for cursor in 0..len {
            let w = visible_window(cursor, len, 7);
            assert!(w.contains(&cursor), "cursor {} len {} window {:?}", cursor, len, w);
            assert!(w.len() <= 7);
        }
    }
}

#[test]
fn truncate_marks_cut_text() {
    assert_eq!(truncate("short", 30), "short");
    assert_eq!(truncate("abcdef", 4), "abc…");
    assert_eq!(truncate("développeur", 5), "déve…");
}

#[test]
fn padding_aligns_domain_column() {
    assert_eq!(title_padding("Hacker News"), 44);
    assert_eq!(title_padding(&"x".repeat(80)), 5);
}

#[test]
fn footer_reports_counts_and_loop_mode() {
    assert!(footer_text(0, 0, false).starts_with("0/0 tabs"));
    assert!(!footer_text(3, 12, false).contains("loop mode"));
    assert!(footer_text(3, 12, true).ends_with(" • loop mode"));
}

#[test]
fn highlight_groups_adjacent_hits() {
    let base = Style::default();
    let hit = Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD);
    let spans = highlight_spans("golang", &[0, 1, 4], base, hit);
    let parts: Vec<(&str, bool)> = spans
        .iter()
        .map(|s| (s.content.as_ref(), s.style == hit))
        .collect();
    assert_eq!(
        parts,
        vec![("go", true), ("la", false), ("n", true), ("g", false)]
    );

    let plain = highlight_spans("golang", &[], base, hit);
    assert_eq!(plain.len(), 1);
}
