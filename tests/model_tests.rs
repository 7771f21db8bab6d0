//! Tests for the domain model: shortcuts, modifier encodings, screen
//! geometry and the persisted settings snapshot.

use hotzone::flip_screen_y;
use hotzone::model::constants::*;
use hotzone::model::{DisplayBounds, HotkeySettings, HotzonePoint, Modifiers, ShortcutDefinition};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Modifier Encoding Tests ===

#[test]
fn modifier_storage_bits_are_stable() {
    let control = Modifiers {
        control: true,
        ..Modifiers::NONE
    };
    let option = Modifiers {
        option: true,
        ..Modifiers::NONE
    };
    let shift = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };
    let command = Modifiers {
        command: true,
        ..Modifiers::NONE
    };
    assert_eq!(control.bits(), 1);
    assert_eq!(option.bits(), 2);
    assert_eq!(shift.bits(), 4);
    assert_eq!(command.bits(), 8);
}

#[test]
fn modifier_bits_roundtrip_every_combination() {
    for bits in 0..16u32 {
        let mods = Modifiers::from_bits(bits);
        assert_eq!(mods.bits(), bits);
    }
}

#[test]
fn modifier_bits_ignore_unknown_bits() {
    let mods = Modifiers::from_bits(0xFFFF_FFF0);
    assert_eq!(mods, Modifiers::NONE);
    assert_eq!(Modifiers::from_bits(0x10 | 1).bits(), 1);
}

#[test]
fn modifiers_is_empty_only_when_nothing_held() {
    assert!(Modifiers::NONE.is_empty());
    let mods = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };
    assert!(!mods.is_empty());
}

#[test]
fn ns_flags_map_to_modifiers() {
    let flags = (1u64 << 18) | (1u64 << 19);
    let mods = Modifiers::from_ns_flags(flags);
    assert!(mods.control);
    assert!(mods.option);
    assert!(!mods.shift);
    assert!(!mods.command);
}

#[test]
fn ns_flags_ignore_non_modifier_bits() {
    // Caps lock (1 << 16) and function (1 << 23) are not shortcut modifiers.
    let mods = Modifiers::from_ns_flags((1 << 16) | (1 << 23));
    assert!(mods.is_empty());
}

// === Shortcut Tests ===

#[test]
fn default_shortcut_is_control_option_c() {
    let shortcut = ShortcutDefinition::default();
    assert_eq!(shortcut.key_code, KC_C);
    assert!(shortcut.modifiers.control);
    assert!(shortcut.modifiers.option);
    assert!(!shortcut.modifiers.shift);
    assert!(!shortcut.modifiers.command);
}

#[test]
fn shortcut_without_modifiers_is_not_registrable() {
    let shortcut = ShortcutDefinition::new(KC_C, Modifiers::NONE);
    assert!(!shortcut.is_registrable());
}

#[test]
fn shortcut_with_one_modifier_is_registrable() {
    let mods = Modifiers {
        command: true,
        ..Modifiers::NONE
    };
    assert!(ShortcutDefinition::new(KC_C, mods).is_registrable());
}

// === Hotzone Point Tests ===

#[test]
fn hotzone_label_formats_whole_coordinates() {
    let point = HotzonePoint::new(812.0, 413.0);
    assert_eq!(point.label(), "812, 413");
}

#[test]
fn hotzone_label_rounds_fractional_coordinates() {
    let point = HotzonePoint::new(812.6, 412.2);
    assert_eq!(point.label(), "813, 412");
}

// === Display Bounds Tests ===

#[test]
fn display_center_is_midpoint() {
    let display = DisplayBounds::new(0.0, 0.0, 1440.0, 900.0);
    let center = display.center();
    assert!(approx_eq(center.x, 720.0));
    assert!(approx_eq(center.y, 450.0));
}

#[test]
fn display_center_respects_origin_offset() {
    let display = DisplayBounds::new(1440.0, -200.0, 1920.0, 1080.0);
    let center = display.center();
    assert!(approx_eq(center.x, 1440.0 + 960.0));
    assert!(approx_eq(center.y, -200.0 + 540.0));
}

#[test]
fn display_contains_interior_point() {
    let display = DisplayBounds::new(0.0, 0.0, 1440.0, 900.0);
    assert!(display.contains(&HotzonePoint::new(1.0, 1.0)));
    assert!(display.contains(&HotzonePoint::new(1439.9, 899.9)));
}

#[test]
fn display_contains_top_left_edge_but_not_bottom_right() {
    let display = DisplayBounds::new(0.0, 0.0, 1440.0, 900.0);
    assert!(display.contains(&HotzonePoint::new(0.0, 0.0)));
    assert!(!display.contains(&HotzonePoint::new(1440.0, 450.0)));
    assert!(!display.contains(&HotzonePoint::new(720.0, 900.0)));
}

#[test]
fn display_does_not_contain_outside_point() {
    let display = DisplayBounds::new(1440.0, 0.0, 1920.0, 1080.0);
    assert!(!display.contains(&HotzonePoint::new(100.0, 100.0)));
}

// === Settings Tests ===

#[test]
fn default_settings_enable_the_hotkey() {
    let settings = HotkeySettings::default();
    assert!(settings.enabled);
    assert_eq!(settings.shortcut, ShortcutDefinition::default());
    assert_eq!(settings.hotzone, None);
}

#[test]
fn default_settings_want_registration() {
    assert!(HotkeySettings::default().wants_registration());
}

#[test]
fn disabled_settings_do_not_want_registration() {
    let settings = HotkeySettings {
        enabled: false,
        ..HotkeySettings::default()
    };
    assert!(!settings.wants_registration());
}

#[test]
fn modifier_less_shortcut_does_not_want_registration() {
    let settings = HotkeySettings {
        shortcut: ShortcutDefinition::new(KC_C, Modifiers::NONE),
        ..HotkeySettings::default()
    };
    assert!(!settings.wants_registration());
}

// === Coordinate Flip Tests ===

#[test]
fn flip_screen_y_mirrors_around_primary_height() {
    assert!(approx_eq(flip_screen_y(0.0, 900.0), 900.0));
    assert!(approx_eq(flip_screen_y(900.0, 900.0), 0.0));
    assert!(approx_eq(flip_screen_y(413.0, 900.0), 487.0));
}

#[test]
fn flip_screen_y_is_its_own_inverse() {
    let y = 327.5;
    assert!(approx_eq(flip_screen_y(flip_screen_y(y, 1080.0), 1080.0), y));
}
