//! Persisted settings snapshot.

use crate::model::constants::DEFAULT_ENABLED;
use crate::model::hotzone::HotzonePoint;
use crate::model::shortcut::ShortcutDefinition;

/// Everything the app persists: the shortcut, the enabled flag and the
/// saved hotzone (if one has been defined yet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotkeySettings {
    pub shortcut: ShortcutDefinition,
    pub enabled: bool,
    pub hotzone: Option<HotzonePoint>,
}

impl HotkeySettings {
    /// Whether the app should currently hold an OS registration: the user
    /// wants the hotkey active and the shortcut is actually registrable.
    pub fn wants_registration(&self) -> bool {
        self.enabled && self.shortcut.is_registrable()
    }
}

impl Default for HotkeySettings {
    fn default() -> HotkeySettings {
        HotkeySettings {
            shortcut: ShortcutDefinition::default(),
            enabled: DEFAULT_ENABLED,
            hotzone: None,
        }
    }
}
