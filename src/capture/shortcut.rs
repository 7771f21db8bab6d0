//! Shortcut recording session.
//!
//! Models the capture field in the recorder panel: it mirrors the
//! modifiers currently held and completes on the first non-modifier
//! key-down that arrives while at least one modifier is down. A completed
//! session locks and ignores further input.

use crate::hotkey::codec;
use crate::model::{Modifiers, ShortcutDefinition};

/// Field text shown before any modifier goes down.
pub const RECORDER_PLACEHOLDER: &str = "Type shortcut";

#[derive(Debug, Default)]
pub struct ShortcutRecorder {
    held: Modifiers,
    captured: Option<ShortcutDefinition>,
}

impl ShortcutRecorder {
    pub fn new() -> ShortcutRecorder {
        ShortcutRecorder::default()
    }

    /// Current text for the capture field: the captured combo once the
    /// session completed, the held modifier glyphs while recording, the
    /// placeholder otherwise.
    pub fn display_text(&self) -> String {
        if let Some(shortcut) = &self.captured {
            return codec::display_string(shortcut);
        }
        if self.held.is_empty() {
            return RECORDER_PLACEHOLDER.to_string();
        }
        codec::modifier_glyphs(self.held)
    }

    /// Modifier state changed (a flagsChanged event).
    pub fn set_modifiers(&mut self, mods: Modifiers) {
        if self.captured.is_some() {
            return;
        }
        self.held = mods;
    }

    /// A non-modifier key went down. Returns the completed shortcut on the
    /// press that finalizes the session; None when the press is ignored
    /// because no modifier is held or the session already completed.
    pub fn key_down(&mut self, key_code: u16) -> Option<ShortcutDefinition> {
        if self.captured.is_some() {
            return None;
        }
        if self.held.is_empty() {
            return None;
        }
        let shortcut = ShortcutDefinition::new(key_code, self.held);
        self.captured = Some(shortcut);
        Some(shortcut)
    }

    /// Whether the session has completed and stopped accepting input.
    pub fn is_locked(&self) -> bool {
        self.captured.is_some()
    }

    pub fn captured(&self) -> Option<ShortcutDefinition> {
        self.captured
    }
}
