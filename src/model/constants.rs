//! Configuration constants and default values.
//!
//! This module contains all application constants including the
//! NSUserDefaults keys for persisted settings and the identity our
//! hotkey registration carries at the OS level.

// === NSUserDefaults Keys ===

/// Key for the "hotkey active" flag.
pub const PREF_ENABLED: &str = "isHotkeyEnabled";

/// Key for the shortcut's hardware key code.
pub const PREF_KEY_CODE: &str = "hotkeyKeyCode";

/// Key for the shortcut's modifier bitmask.
pub const PREF_MODIFIERS: &str = "hotkeyModifiers";

/// Key for the human-readable hotzone label.
pub const PREF_HOTZONE_DESC: &str = "hotzoneDescription";

/// Key for the hotzone x coordinate (global display space).
pub const PREF_HOTZONE_X: &str = "hotzoneX";

/// Key for the hotzone y coordinate (global display space).
pub const PREF_HOTZONE_Y: &str = "hotzoneY";

// === Defaults ===

/// The hotkey starts enabled on a fresh install.
pub const DEFAULT_ENABLED: bool = true;

// === Key Codes ===

/// Hardware key code for the "C" key (ANSI layout).
pub const KC_C: u16 = 8;

/// Hardware key code for the Escape key.
pub const KC_ESCAPE: u16 = 53;

// === Hotkey Identity ===

/// Four-character signature ('htzn') stamped on our registration so the
/// event handler can tell our hotkey events from other apps'.
pub const HOTKEY_SIGNATURE: u32 = 0x6874_7A6E;

/// Registration id for the single jump hotkey.
pub const HOTKEY_ID_JUMP: u32 = 1;
