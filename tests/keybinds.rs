//! Keybind file loading and dispatch tests
//!
//! Drives the stock controls through real keybind files on disk.

mod common;

use common::{key_down, key_up, viewer_with_keybinds, write_file};
use freelook::keymap::{keycode_from_name, KeybindError, Keycode};
use freelook::startup::{bind_keys, DEFAULT_KEYBINDS};
use freelook::InputEvent;
use glam::DVec3;

// ========================================================================
// Parsing Scenarios
// ========================================================================

#[test]
fn test_comments_and_blank_lines_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "k.txt", "w forward\n# comment\n\ns backward  \n");

    let mut pairs: Vec<(Keycode, String)> = Vec::new();
    let count = freelook::keymap::load_keybinds_file(&path, &mut pairs).unwrap();
    assert_eq!(count, 2);
    assert_eq!(
        pairs,
        [
            (Keycode(87), "forward".to_string()),
            (Keycode(83), "backward".to_string())
        ]
    );
}

#[test]
fn test_missing_target_reports_line_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "k.txt", "w\n");

    let mut pairs: Vec<(Keycode, String)> = Vec::new();
    let err = freelook::keymap::load_keybinds_file(&path, &mut pairs).unwrap_err();
    assert!(matches!(err, KeybindError::MissingTarget { line: 1, .. }));
    assert!(pairs.is_empty());
    assert!(err.to_string().contains("k.txt:1"));
}

#[test]
fn test_key_names_case_insensitive() {
    assert_eq!(keycode_from_name("W"), keycode_from_name("w"));
    assert_eq!(keycode_from_name("Left_Shift"), Some(Keycode::LEFT_SHIFT));
    assert_eq!(keycode_from_name("no_such_key"), None);
}

// ========================================================================
// Stock Controls Through Files
// ========================================================================

#[test]
fn test_shipped_defaults_have_no_dead_bindings() {
    let dir = tempfile::tempdir().unwrap();
    let (table, _) = viewer_with_keybinds(dir.path(), DEFAULT_KEYBINDS, None);
    assert!(table.dead_bindings().is_empty());
}

#[test]
fn test_walk_forward_then_undo() {
    let dir = tempfile::tempdir().unwrap();
    let (mut table, mut viewer) = viewer_with_keybinds(dir.path(), DEFAULT_KEYBINDS, None);
    let mut dispatcher = freelook::Dispatcher::default();
    viewer.camera.set_theta(0.0);
    viewer.camera.set_phi(std::f32::consts::FRAC_PI_2);

    dispatcher.push(key_down(Keycode(87)));
    dispatcher.frame_update(&mut table, &mut viewer, 0.25);
    dispatcher.push(key_up(Keycode(87)));
    dispatcher.frame_update(&mut table, &mut viewer, 0.0);
    assert!(viewer.camera.eye().abs_diff_eq(DVec3::new(2.0, 0.0, 0.0), 1e-4));

    // A frame hitch does not produce a long step
    dispatcher.push(key_down(Keycode(87)));
    dispatcher.frame_update(&mut table, &mut viewer, 5.0);
    dispatcher.push(key_up(Keycode(87)));
    dispatcher.frame_update(&mut table, &mut viewer, 0.0);
    let hitch_step = 8.0 / 15.0;
    assert!(viewer
        .camera
        .eye()
        .abs_diff_eq(DVec3::new(2.0 + hitch_step, 0.0, 0.0), 1e-4));

    // z pops the pose saved when the second walk started
    dispatcher.push(key_down(Keycode(90)));
    dispatcher.frame_update(&mut table, &mut viewer, 0.0);
    assert!(viewer.camera.eye().abs_diff_eq(DVec3::new(2.0, 0.0, 0.0), 1e-4));
}

#[test]
fn test_user_file_extends_default_chain() {
    let dir = tempfile::tempdir().unwrap();
    let (table, _) = viewer_with_keybinds(
        dir.path(),
        "w forward\n",
        Some("w sprint   # fallback\n"),
    );
    assert_eq!(table.chain(Keycode(87)), ["forward", "sprint"]);
}

#[test]
fn test_scroll_reaches_vertical_scroll() {
    let dir = tempfile::tempdir().unwrap();
    let (mut table, mut viewer) = viewer_with_keybinds(dir.path(), DEFAULT_KEYBINDS, None);
    let mut dispatcher = freelook::Dispatcher::default();
    viewer.camera.set_phi(1.0);

    dispatcher.push(InputEvent::Scroll { dx: 0.0, dy: -2.0 });
    dispatcher.frame_update(&mut table, &mut viewer, 0.0);
    assert!((viewer.camera.phi() - 1.1).abs() < 1e-6);
}

// ========================================================================
// Two-File Policy
// ========================================================================

#[test]
fn test_malformed_default_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let default = write_file(dir.path(), "default.txt", "w forward extra\n");

    let mut pairs: Vec<(Keycode, String)> = Vec::new();
    let err = bind_keys(&mut pairs, &default, None).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_unreadable_user_path_exits_3() {
    let dir = tempfile::tempdir().unwrap();
    let default = write_file(dir.path(), "default.txt", "w forward\n");

    // A directory exists but is not a readable keybinds file
    let mut pairs: Vec<(Keycode, String)> = Vec::new();
    let err = bind_keys(&mut pairs, &default, Some(dir.path())).unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(!err.keybind_error().is_not_found());
}
