//! Shortcut display strings and native modifier masks.
//!
//! Pure mapping between `ShortcutDefinition` and the two representations
//! the rest of the app needs: the glyph string shown in the menu and the
//! recorder, and the Carbon modifier mask handed to the registration call.

use crate::model::{Modifiers, ShortcutDefinition};

// Carbon Event Manager modifier bits (HIToolbox/Events.h).
const CARBON_CMD_KEY: u32 = 1 << 8;
const CARBON_SHIFT_KEY: u32 = 1 << 9;
const CARBON_OPTION_KEY: u32 = 1 << 11;
const CARBON_CONTROL_KEY: u32 = 1 << 12;

/// Modifier glyphs in the order macOS renders them: Control, Option,
/// Shift, Command.
pub fn modifier_glyphs(mods: Modifiers) -> String {
    let mut out = String::new();
    if mods.control {
        out.push('⌃');
    }
    if mods.option {
        out.push('⌥');
    }
    if mods.shift {
        out.push('⇧');
    }
    if mods.command {
        out.push('⌘');
    }
    out
}

/// Label for a hardware key code (ANSI layout). Returns None for keys the
/// table has no name for.
pub fn key_label(key_code: u16) -> Option<&'static str> {
    let label = match key_code {
        0 => "A",
        1 => "S",
        2 => "D",
        3 => "F",
        4 => "H",
        5 => "G",
        6 => "Z",
        7 => "X",
        8 => "C",
        9 => "V",
        11 => "B",
        12 => "Q",
        13 => "W",
        14 => "E",
        15 => "R",
        16 => "Y",
        17 => "T",
        18 => "1",
        19 => "2",
        20 => "3",
        21 => "4",
        22 => "6",
        23 => "5",
        24 => "=",
        25 => "9",
        26 => "7",
        27 => "-",
        28 => "8",
        29 => "0",
        30 => "]",
        31 => "O",
        32 => "U",
        33 => "[",
        34 => "I",
        35 => "P",
        36 => "Return",
        37 => "L",
        38 => "J",
        39 => "'",
        40 => "K",
        41 => ";",
        42 => "\\",
        43 => ",",
        44 => "/",
        45 => "N",
        46 => "M",
        47 => ".",
        48 => "Tab",
        49 => "Space",
        50 => "`",
        51 => "Delete",
        53 => "Esc",
        123 => "←",
        124 => "→",
        125 => "↓",
        126 => "↑",
        _ => return None,
    };
    Some(label)
}

/// Full display string for a shortcut, e.g. "⌃⌥C". Key codes outside the
/// label table fall back to the raw number so the menu never goes blank.
pub fn display_string(shortcut: &ShortcutDefinition) -> String {
    let mut out = modifier_glyphs(shortcut.modifiers);
    match key_label(shortcut.key_code) {
        Some(label) => out.push_str(label),
        None => out.push_str(&format!("Key {}", shortcut.key_code)),
    }
    out
}

/// Carbon modifier mask for RegisterEventHotKey.
pub fn native_modifier_mask(mods: Modifiers) -> u32 {
    let mut mask = 0;
    if mods.control {
        mask |= CARBON_CONTROL_KEY;
    }
    if mods.option {
        mask |= CARBON_OPTION_KEY;
    }
    if mods.shift {
        mask |= CARBON_SHIFT_KEY;
    }
    if mods.command {
        mask |= CARBON_CMD_KEY;
    }
    mask
}

/// Inverse of `native_modifier_mask`.
pub fn modifiers_from_native_mask(mask: u32) -> Modifiers {
    Modifiers {
        control: mask & CARBON_CONTROL_KEY != 0,
        option: mask & CARBON_OPTION_KEY != 0,
        shift: mask & CARBON_SHIFT_KEY != 0,
        command: mask & CARBON_CMD_KEY != 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_order_is_control_option_shift_command() {
        let mods = Modifiers {
            control: true,
            option: true,
            shift: true,
            command: true,
        };
        assert_eq!(modifier_glyphs(mods), "⌃⌥⇧⌘");
    }

    #[test]
    fn test_known_key_labels() {
        assert_eq!(key_label(8), Some("C"));
        assert_eq!(key_label(49), Some("Space"));
        assert_eq!(key_label(126), Some("↑"));
    }

    #[test]
    fn test_unknown_key_has_no_label() {
        assert_eq!(key_label(200), None);
    }

    #[test]
    fn test_display_string_falls_back_to_key_code() {
        let shortcut = ShortcutDefinition::new(
            200,
            Modifiers {
                command: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(display_string(&shortcut), "⌘Key 200");
    }

    #[test]
    fn test_native_mask_roundtrip() {
        let mods = Modifiers {
            control: true,
            option: true,
            ..Modifiers::NONE
        };
        assert_eq!(modifiers_from_native_mask(native_modifier_mask(mods)), mods);
    }
}
