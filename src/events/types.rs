//! Event type definitions.

use crate::model::{HotzonePoint, ShortcutDefinition};

/// Events flowing through the application's event bus.
///
/// Produced by OS callbacks (the hotkey handler, event monitors), by the
/// status menu, and by the settings store's observers; consumed on the
/// main thread by the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// The registered global hotkey was pressed.
    HotkeyActivated,

    /// The user asked to pick a new hotzone point.
    DefineHotzone,

    /// The user asked to record a replacement shortcut.
    RecordShortcut,

    /// A capture session ended with this point.
    HotzoneSelected(HotzonePoint),

    /// A capture session ended without a point.
    HotzoneCaptureCancelled,

    /// A recording session completed with this shortcut.
    ShortcutRecorded(ShortcutDefinition),

    /// A recording session was abandoned with a bare Escape.
    ShortcutRecordingCancelled,

    /// The user toggled the enabled flag.
    SetEnabled(bool),

    /// The OS registration should be torn down and rebuilt against the
    /// current settings (settings changed, or the machine woke up).
    ReregisterHotkey,

    /// The user chose Quit.
    RequestQuit,
}

impl AppEvent {
    /// Short name for logging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::HotkeyActivated => "hotkey activated",
            AppEvent::DefineHotzone => "define hotzone",
            AppEvent::RecordShortcut => "record shortcut",
            AppEvent::HotzoneSelected(_) => "hotzone selected",
            AppEvent::HotzoneCaptureCancelled => "hotzone capture cancelled",
            AppEvent::ShortcutRecorded(_) => "shortcut recorded",
            AppEvent::ShortcutRecordingCancelled => "shortcut recording cancelled",
            AppEvent::SetEnabled(_) => "set enabled",
            AppEvent::ReregisterHotkey => "reregister hotkey",
            AppEvent::RequestQuit => "request quit",
        }
    }
}
