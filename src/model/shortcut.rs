//! Keyboard shortcut definitions.
//!
//! `Modifiers` and `ShortcutDefinition` are plain data passed between the
//! recorder UI, the settings store and the hotkey registration path. The
//! mapping to platform-specific modifier masks lives in `crate::hotkey::codec`;
//! this module only knows the persisted encoding and the AppKit event flags.

use crate::model::constants::KC_C;

// Storage bit assignments for the persisted modifier mask. These are stable
// across releases; changing them would corrupt saved shortcuts.
const BIT_CONTROL: u32 = 1 << 0;
const BIT_OPTION: u32 = 1 << 1;
const BIT_SHIFT: u32 = 1 << 2;
const BIT_COMMAND: u32 = 1 << 3;

// Device-independent NSEvent.modifierFlags bits.
const NS_FLAG_SHIFT: u64 = 1 << 17;
const NS_FLAG_CONTROL: u64 = 1 << 18;
const NS_FLAG_OPTION: u64 = 1 << 19;
const NS_FLAG_COMMAND: u64 = 1 << 20;

/// The modifier keys participating in a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub control: bool,
    pub option: bool,
    pub shift: bool,
    pub command: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Modifiers = Modifiers {
        control: false,
        option: false,
        shift: false,
        command: false,
    };

    /// True when no modifier is set.
    pub fn is_empty(&self) -> bool {
        !(self.control || self.option || self.shift || self.command)
    }

    /// Encode as the persisted bitmask.
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.control {
            bits |= BIT_CONTROL;
        }
        if self.option {
            bits |= BIT_OPTION;
        }
        if self.shift {
            bits |= BIT_SHIFT;
        }
        if self.command {
            bits |= BIT_COMMAND;
        }
        bits
    }

    /// Decode the persisted bitmask. Unknown bits are ignored.
    pub fn from_bits(bits: u32) -> Modifiers {
        Modifiers {
            control: bits & BIT_CONTROL != 0,
            option: bits & BIT_OPTION != 0,
            shift: bits & BIT_SHIFT != 0,
            command: bits & BIT_COMMAND != 0,
        }
    }

    /// Extract the four shortcut-relevant modifiers from an
    /// `NSEvent.modifierFlags` value.
    pub fn from_ns_flags(flags: u64) -> Modifiers {
        Modifiers {
            control: flags & NS_FLAG_CONTROL != 0,
            option: flags & NS_FLAG_OPTION != 0,
            shift: flags & NS_FLAG_SHIFT != 0,
            command: flags & NS_FLAG_COMMAND != 0,
        }
    }
}

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutDefinition {
    /// Hardware key code as reported by the keyboard event.
    pub key_code: u16,
    /// Modifiers required alongside the key.
    pub modifiers: Modifiers,
}

impl ShortcutDefinition {
    pub fn new(key_code: u16, modifiers: Modifiers) -> ShortcutDefinition {
        ShortcutDefinition {
            key_code,
            modifiers,
        }
    }

    /// Whether this shortcut may be handed to the OS. A bare key without
    /// modifiers would shadow normal typing in every application, so the
    /// registration path refuses it.
    pub fn is_registrable(&self) -> bool {
        !self.modifiers.is_empty()
    }
}

impl Default for ShortcutDefinition {
    /// Control + Option + C.
    fn default() -> ShortcutDefinition {
        ShortcutDefinition {
            key_code: KC_C,
            modifiers: Modifiers {
                control: true,
                option: true,
                ..Modifiers::NONE
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_bits_roundtrip() {
        let mods = Modifiers {
            control: true,
            shift: true,
            ..Modifiers::NONE
        };
        assert_eq!(Modifiers::from_bits(mods.bits()), mods);
    }

    #[test]
    fn test_modifier_bits_ignore_unknown() {
        let decoded = Modifiers::from_bits(0xFFFF_FFF0);
        assert_eq!(decoded, Modifiers::NONE);
    }

    #[test]
    fn test_empty_modifiers_encode_to_zero() {
        assert_eq!(Modifiers::NONE.bits(), 0);
        assert!(Modifiers::from_bits(0).is_empty());
    }

    #[test]
    fn test_from_ns_flags_picks_known_bits() {
        let flags = (1 << 18) | (1 << 19) | (1 << 16);
        let mods = Modifiers::from_ns_flags(flags);
        assert!(mods.control);
        assert!(mods.option);
        assert!(!mods.shift);
        assert!(!mods.command);
    }

    #[test]
    fn test_default_shortcut_is_control_option_c() {
        let shortcut = ShortcutDefinition::default();
        assert_eq!(shortcut.key_code, KC_C);
        assert!(shortcut.modifiers.control);
        assert!(shortcut.modifiers.option);
        assert!(!shortcut.modifiers.shift);
        assert!(!shortcut.modifiers.command);
    }
}
