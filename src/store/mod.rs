//! Settings persistence and change notification.
//!
//! `SettingsStore` keeps an in-memory snapshot of the persisted settings,
//! writes every mutation through a `SettingsBackend`, and notifies
//! subscribed observers synchronously before the mutating call returns.
//! The store applies no validation; policy (like refusing modifier-less
//! shortcuts) belongs to the registration path.
//!
//! The macOS backend wraps NSUserDefaults; `MemoryBackend` backs tests.

pub mod memory;

pub use memory::MemoryBackend;

use crate::model::constants::{
    PREF_ENABLED, PREF_HOTZONE_DESC, PREF_HOTZONE_X, PREF_HOTZONE_Y, PREF_KEY_CODE, PREF_MODIFIERS,
};
use crate::model::{HotkeySettings, HotzonePoint, Modifiers, ShortcutDefinition};

/// Which part of the settings a notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    Shortcut,
    Enabled,
    Hotzone,
}

/// Key/value storage the store persists through.
pub trait SettingsBackend {
    fn bool_value(&self, key: &str) -> Option<bool>;
    fn set_bool(&mut self, key: &str, value: bool);

    fn int_value(&self, key: &str) -> Option<i64>;
    fn set_int(&mut self, key: &str, value: i64);

    fn float_value(&self, key: &str) -> Option<f64>;
    fn set_float(&mut self, key: &str, value: f64);

    fn string_value(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: &str);
}

/// Callback invoked after every persisted mutation. Observers must not
/// call back into the store.
pub type SettingsObserver = Box<dyn FnMut(SettingsChange, &HotkeySettings)>;

pub struct SettingsStore<B: SettingsBackend> {
    backend: B,
    settings: HotkeySettings,
    observers: Vec<SettingsObserver>,
}

impl<B: SettingsBackend> SettingsStore<B> {
    /// Read the persisted settings out of `backend`. Absent keys fall back
    /// to the defaults; a hotzone only exists when both coordinates are
    /// present.
    pub fn load(backend: B) -> SettingsStore<B> {
        let defaults = HotkeySettings::default();

        let key_code = backend
            .int_value(PREF_KEY_CODE)
            .map(|v| v as u16)
            .unwrap_or(defaults.shortcut.key_code);
        let modifiers = backend
            .int_value(PREF_MODIFIERS)
            .map(|v| Modifiers::from_bits(v as u32))
            .unwrap_or(defaults.shortcut.modifiers);
        let enabled = backend.bool_value(PREF_ENABLED).unwrap_or(defaults.enabled);
        let hotzone = match (
            backend.float_value(PREF_HOTZONE_X),
            backend.float_value(PREF_HOTZONE_Y),
        ) {
            (Some(x), Some(y)) => Some(HotzonePoint::new(x, y)),
            _ => None,
        };

        SettingsStore {
            backend,
            settings: HotkeySettings {
                shortcut: ShortcutDefinition::new(key_code, modifiers),
                enabled,
                hotzone,
            },
            observers: Vec::new(),
        }
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> &HotkeySettings {
        &self.settings
    }

    /// Register an observer for subsequent mutations.
    pub fn subscribe(&mut self, observer: impl FnMut(SettingsChange, &HotkeySettings) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Persist a new shortcut. Stored as-is, modifier-less or not.
    pub fn set_shortcut(&mut self, shortcut: ShortcutDefinition) {
        self.backend
            .set_int(PREF_KEY_CODE, i64::from(shortcut.key_code));
        self.backend
            .set_int(PREF_MODIFIERS, i64::from(shortcut.modifiers.bits()));
        self.settings.shortcut = shortcut;
        self.notify(SettingsChange::Shortcut);
    }

    /// Persist the enabled flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.backend.set_bool(PREF_ENABLED, enabled);
        self.settings.enabled = enabled;
        self.notify(SettingsChange::Enabled);
    }

    /// Persist a newly captured hotzone, along with its display label.
    pub fn set_hotzone(&mut self, point: HotzonePoint) {
        self.backend.set_float(PREF_HOTZONE_X, point.x);
        self.backend.set_float(PREF_HOTZONE_Y, point.y);
        self.backend.set_string(PREF_HOTZONE_DESC, &point.label());
        self.settings.hotzone = Some(point);
        self.notify(SettingsChange::Hotzone);
    }

    /// Tear the store apart, handing back the backend. Used by tests to
    /// reload and check what was actually persisted.
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn notify(&mut self, change: SettingsChange) {
        // Observers are moved out for the duration of the callbacks so
        // they can be handed &self.settings without aliasing self.
        let mut observers = std::mem::take(&mut self.observers);
        for observer in observers.iter_mut() {
            observer(change, &self.settings);
        }
        observers.append(&mut self.observers);
        self.observers = observers;
    }
}
