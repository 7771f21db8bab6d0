//! Local NSEvent monitors feeding the shortcut recorder.
//!
//! Installed while the recorder panel is up. flagsChanged events drive the
//! live modifier display; keyDown events either complete the session or,
//! for a bare Escape, abandon it. Key-downs are consumed so recording
//! keystrokes never beep or reach other responders.

use block2::RcBlock;

use crate::model::Modifiers;
use crate::platform::macos::app;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil};

const KEY_DOWN_MASK: u64 = 1 << 10;
const FLAGS_CHANGED_MASK: u64 = 1 << 12;

/// Handles for the two recorder monitors so they can be removed when the
/// panel goes away.
pub struct RecorderMonitors {
    key_down: id,
    flags_changed: id,
}

/// Install monitors for the lifetime of one recorder panel.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn install_recorder_monitors() -> RecorderMonitors {
    let key_block = RcBlock::new(move |event: id| -> id {
        unsafe {
            let keycode: u16 = msg_send![event, keyCode];
            let flags: u64 = msg_send![event, modifierFlags];
            app::recorder_key_down(keycode, Modifiers::from_ns_flags(flags));
        }
        // Swallow the keystroke.
        nil
    });
    let key_down: id = msg_send![
        get_class("NSEvent"),
        addLocalMonitorForEventsMatchingMask: KEY_DOWN_MASK,
        handler: &*key_block
    ];

    let flags_block = RcBlock::new(move |event: id| -> id {
        unsafe {
            let flags: u64 = msg_send![event, modifierFlags];
            app::recorder_modifiers_changed(Modifiers::from_ns_flags(flags));
        }
        event
    });
    let flags_changed: id = msg_send![
        get_class("NSEvent"),
        addLocalMonitorForEventsMatchingMask: FLAGS_CHANGED_MASK,
        handler: &*flags_block
    ];

    RecorderMonitors {
        key_down,
        flags_changed,
    }
}

/// Remove both monitors.
///
/// # Safety
/// Must be called from the main thread, at most once per install.
pub unsafe fn remove_recorder_monitors(monitors: RecorderMonitors) {
    let _: () = msg_send![get_class("NSEvent"), removeMonitor: monitors.key_down];
    let _: () = msg_send![get_class("NSEvent"), removeMonitor: monitors.flags_changed];
}
