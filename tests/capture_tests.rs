//! Tests for the two interactive capture machines: the full-screen
//! hotzone picker and the shortcut recorder.

use hotzone::capture::{CaptureError, CaptureOutcome, HotzoneCapture, ShortcutRecorder};
use hotzone::capture::RECORDER_PLACEHOLDER;
use hotzone::model::constants::KC_C;
use hotzone::model::{DisplayBounds, HotzonePoint, Modifiers};

fn two_displays() -> Vec<DisplayBounds> {
    vec![
        DisplayBounds::new(0.0, 0.0, 1440.0, 900.0),
        DisplayBounds::new(1440.0, 0.0, 1920.0, 1080.0),
    ]
}

// === Hotzone Capture Tests ===

#[test]
fn capture_begins_with_one_surface_per_display() {
    let capture = HotzoneCapture::begin(&two_displays()).expect("displays connected");
    assert_eq!(capture.surface_count(), 2);
    assert!(!capture.is_finished());
}

#[test]
fn capture_refuses_to_begin_without_displays() {
    let result = HotzoneCapture::begin(&[]);
    assert_eq!(result.err(), Some(CaptureError::NoScreensAvailable));
}

#[test]
fn first_click_selects_the_point() {
    let mut capture = HotzoneCapture::begin(&two_displays()).expect("displays connected");
    let outcome = capture.click(HotzonePoint::new(812.0, 413.0));
    assert_eq!(
        outcome,
        Some(CaptureOutcome::PointSelected(HotzonePoint::new(812.0, 413.0)))
    );
    assert!(capture.is_finished());
    assert_eq!(capture.surface_count(), 0);
}

#[test]
fn second_click_is_ignored() {
    let mut capture = HotzoneCapture::begin(&two_displays()).expect("displays connected");
    capture.click(HotzonePoint::new(10.0, 10.0));
    assert_eq!(capture.click(HotzonePoint::new(99.0, 99.0)), None);
}

#[test]
fn escape_cancels_the_session() {
    let mut capture = HotzoneCapture::begin(&two_displays()).expect("displays connected");
    assert_eq!(capture.escape(), Some(CaptureOutcome::Cancelled));
    assert!(capture.is_finished());
    assert_eq!(capture.surface_count(), 0);
}

#[test]
fn escape_after_click_is_ignored() {
    let mut capture = HotzoneCapture::begin(&two_displays()).expect("displays connected");
    capture.click(HotzonePoint::new(10.0, 10.0));
    assert_eq!(capture.escape(), None);
}

#[test]
fn click_after_escape_is_ignored() {
    let mut capture = HotzoneCapture::begin(&two_displays()).expect("displays connected");
    capture.escape();
    assert_eq!(capture.click(HotzonePoint::new(10.0, 10.0)), None);
}

#[test]
fn click_on_secondary_display_wins_too() {
    // Clicks arrive in global coordinates; a point on the second display
    // finishes the session exactly like one on the first.
    let mut capture = HotzoneCapture::begin(&two_displays()).expect("displays connected");
    let outcome = capture.click(HotzonePoint::new(2000.0, 500.0));
    assert_eq!(
        outcome,
        Some(CaptureOutcome::PointSelected(HotzonePoint::new(2000.0, 500.0)))
    );
}

// === Shortcut Recorder Tests ===

#[test]
fn recorder_starts_with_placeholder_text() {
    let recorder = ShortcutRecorder::new();
    assert_eq!(recorder.display_text(), RECORDER_PLACEHOLDER);
    assert!(!recorder.is_locked());
    assert_eq!(recorder.captured(), None);
}

#[test]
fn recorder_shows_held_modifier_glyphs() {
    let mut recorder = ShortcutRecorder::new();
    recorder.set_modifiers(Modifiers {
        control: true,
        option: true,
        ..Modifiers::NONE
    });
    assert_eq!(recorder.display_text(), "⌃⌥");
}

#[test]
fn recorder_returns_to_placeholder_when_modifiers_released() {
    let mut recorder = ShortcutRecorder::new();
    recorder.set_modifiers(Modifiers {
        command: true,
        ..Modifiers::NONE
    });
    recorder.set_modifiers(Modifiers::NONE);
    assert_eq!(recorder.display_text(), RECORDER_PLACEHOLDER);
}

#[test]
fn key_without_modifiers_is_ignored() {
    let mut recorder = ShortcutRecorder::new();
    assert_eq!(recorder.key_down(KC_C), None);
    assert!(!recorder.is_locked());
}

#[test]
fn key_with_modifiers_completes_the_recording() {
    let mut recorder = ShortcutRecorder::new();
    let mods = Modifiers {
        control: true,
        option: true,
        ..Modifiers::NONE
    };
    recorder.set_modifiers(mods);
    let shortcut = recorder.key_down(KC_C).expect("recording completes");
    assert_eq!(shortcut.key_code, KC_C);
    assert_eq!(shortcut.modifiers, mods);
    assert!(recorder.is_locked());
    assert_eq!(recorder.captured(), Some(shortcut));
}

#[test]
fn completed_recorder_ignores_further_keys() {
    let mut recorder = ShortcutRecorder::new();
    recorder.set_modifiers(Modifiers {
        command: true,
        ..Modifiers::NONE
    });
    recorder.key_down(KC_C).expect("recording completes");
    assert_eq!(recorder.key_down(0), None);
}

#[test]
fn completed_recorder_ignores_modifier_changes() {
    let mut recorder = ShortcutRecorder::new();
    recorder.set_modifiers(Modifiers {
        control: true,
        option: true,
        ..Modifiers::NONE
    });
    recorder.key_down(KC_C).expect("recording completes");
    recorder.set_modifiers(Modifiers::NONE);
    assert_eq!(recorder.display_text(), "⌃⌥C");
}

#[test]
fn recorder_display_text_walks_through_the_session() {
    let mut recorder = ShortcutRecorder::new();
    assert_eq!(recorder.display_text(), RECORDER_PLACEHOLDER);

    recorder.set_modifiers(Modifiers {
        control: true,
        ..Modifiers::NONE
    });
    assert_eq!(recorder.display_text(), "⌃");

    recorder.set_modifiers(Modifiers {
        control: true,
        option: true,
        ..Modifiers::NONE
    });
    assert_eq!(recorder.display_text(), "⌃⌥");

    recorder.key_down(KC_C);
    assert_eq!(recorder.display_text(), "⌃⌥C");
}
