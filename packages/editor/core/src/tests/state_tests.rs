use crate::{config::EditorConfig, state::EditorState, types::Platform};
use pretty_assertions::assert_eq;

#[test]
fn test_default_state() {
    let state = EditorState::default();

    assert_eq!(state.text, "");
    assert!(!state.focused);
    assert_eq!(state.metrics.reference_line_height, None);
    assert_eq!(state.metrics.content_height, None);
    assert_eq!(state.line_count, None);
    assert!(!state.limit_hit);
}

#[test]
fn test_placeholder_visible_only_when_empty() {
    assert!(EditorState::default().placeholder_visible());
    assert!(!EditorState::with_text(" ").placeholder_visible());
    assert!(!EditorState::with_text("\n").placeholder_visible());
}

#[test]
fn test_char_count_without_limit_is_plain() {
    let config = EditorConfig::new("");
    let state = EditorState::with_text("héllo");

    let count = state.char_count(&config);
    assert_eq!(count.count, 5);
    assert_eq!(count.limit, None);
    assert!(!count.exceeded);
    assert_eq!(count.label(), "5");
}

#[test]
fn test_char_count_with_limit() {
    let config = EditorConfig::new("").char_limit(10);
    let state = EditorState::with_text("👍🏽ok");

    assert_eq!(state.char_count(&config).label(), "3/10");
}

#[test]
fn test_visible_height_follows_content() {
    let config = EditorConfig::new("").max_height(50.0).platform(Platform::Other);
    let mut state = EditorState::default();
    assert_eq!(state.visible_height(&config), None);
    assert!(!state.is_scrolling(&config));

    state.metrics.record_content(40.0);
    assert_eq!(state.visible_height(&config), Some(40.0));
    assert!(!state.is_scrolling(&config));

    state.metrics.record_content(90.0);
    assert_eq!(state.visible_height(&config), Some(50.0));
    assert!(state.is_scrolling(&config));
}
