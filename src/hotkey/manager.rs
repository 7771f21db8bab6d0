//! Global hotkey registration lifecycle.
//!
//! `HotkeyManager` owns the two OS resources a working hotkey needs: the
//! registration itself and the event handler that receives its presses.
//! The manager is a two-state machine (unregistered / registered) and every
//! transition goes through `start` or `stop`, so at most one registration
//! is ever live regardless of how often settings change.

use crate::hotkey::codec;
use crate::model::ShortcutDefinition;
use thiserror::Error;

/// Why a registration attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HotkeyError {
    /// The OS rejected the registration call with the given status.
    #[error("hotkey registration failed (status {0})")]
    RegistrationFailed(i32),

    /// The hotkey registered but its event handler could not be installed.
    /// The registration is rolled back before this is returned.
    #[error("hotkey handler installation failed (status {0})")]
    HandlerInstallFailed(i32),

    /// The shortcut has no modifiers. Registering it would shadow a plain
    /// key in every application, so the manager refuses.
    #[error("shortcut has no modifier keys")]
    NotRegistrable,
}

/// Observable side of the manager's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationState {
    Unregistered,
    Registered,
}

/// OS surface the manager drives. The macOS implementation wraps the
/// Carbon Event Manager; tests substitute a recording fake.
pub trait HotkeyBackend {
    type HotkeyHandle;
    type HandlerHandle;

    /// Reserve `key_code` + `native_mask` system-wide.
    fn register_hotkey(
        &mut self,
        key_code: u16,
        native_mask: u32,
    ) -> Result<Self::HotkeyHandle, HotkeyError>;

    /// Install the callback that receives presses of registered hotkeys.
    fn install_handler(&mut self) -> Result<Self::HandlerHandle, HotkeyError>;

    fn unregister_hotkey(&mut self, hotkey: Self::HotkeyHandle);

    fn remove_handler(&mut self, handler: Self::HandlerHandle);
}

struct Registration<B: HotkeyBackend> {
    hotkey: B::HotkeyHandle,
    handler: B::HandlerHandle,
    shortcut: ShortcutDefinition,
}

pub struct HotkeyManager<B: HotkeyBackend> {
    backend: B,
    active: Option<Registration<B>>,
}

impl<B: HotkeyBackend> HotkeyManager<B> {
    pub fn new(backend: B) -> HotkeyManager<B> {
        HotkeyManager {
            backend,
            active: None,
        }
    }

    pub fn state(&self) -> RegistrationState {
        if self.active.is_some() {
            RegistrationState::Registered
        } else {
            RegistrationState::Unregistered
        }
    }

    pub fn is_registered(&self) -> bool {
        self.active.is_some()
    }

    /// Shortcut currently held with the OS, if any.
    pub fn registered_shortcut(&self) -> Option<ShortcutDefinition> {
        self.active.as_ref().map(|reg| reg.shortcut)
    }

    /// Register `shortcut`, replacing whatever registration was live
    /// before. Any previous registration is torn down first, so a failure
    /// leaves the manager cleanly unregistered rather than holding a stale
    /// shortcut.
    pub fn start(&mut self, shortcut: ShortcutDefinition) -> Result<(), HotkeyError> {
        self.stop();
        if !shortcut.is_registrable() {
            return Err(HotkeyError::NotRegistrable);
        }

        let mask = codec::native_modifier_mask(shortcut.modifiers);
        let hotkey = self.backend.register_hotkey(shortcut.key_code, mask)?;
        let handler = match self.backend.install_handler() {
            Ok(handler) => handler,
            Err(err) => {
                // Roll back: a registered hotkey with no handler would be
                // invisible to the user yet still swallow the key.
                self.backend.unregister_hotkey(hotkey);
                return Err(err);
            }
        };

        // The keepalive path lands here once a minute.
        log::debug!(
            "registered global hotkey {}",
            codec::display_string(&shortcut)
        );
        self.active = Some(Registration {
            hotkey,
            handler,
            shortcut,
        });
        Ok(())
    }

    /// Release the current registration. Safe to call when nothing is
    /// registered.
    pub fn stop(&mut self) {
        if let Some(reg) = self.active.take() {
            self.backend.unregister_hotkey(reg.hotkey);
            self.backend.remove_handler(reg.handler);
            log::debug!(
                "unregistered global hotkey {}",
                codec::display_string(&reg.shortcut)
            );
        }
    }
}
