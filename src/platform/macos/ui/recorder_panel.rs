//! Small panel shown while recording a replacement shortcut.
//!
//! The panel itself is passive. A pair of local NSEvent monitors feeds
//! keystrokes to the app layer, which runs the recording session and
//! pushes updated text back through `set_recorder_text`. The window has
//! no close button; a bare Escape tears the session down.

use crate::capture::RECORDER_PLACEHOLDER;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, NSPoint, NSRect, NSSize, NO, YES,
};
use crate::platform::macos::input::{
    install_recorder_monitors, remove_recorder_monitors, RecorderMonitors,
};
use crate::platform::macos::ui::overlay_window_level;

const PANEL_WIDTH: f64 = 380.0;
const PANEL_HEIGHT: f64 = 140.0;

const HINT_TEXT: &str = "Press a key combination. Esc cancels.";

/// One recorder panel and the monitors that feed it.
pub struct RecorderPanel {
    pub window: id,
    pub shortcut_label: id,
    monitors: RecorderMonitors,
}

/// Open the panel centered on the screen under the mouse and start
/// monitoring keystrokes.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn present_recorder_panel() -> RecorderPanel {
    // NSTitledWindowMask = 1; deliberately not closable, Escape is the
    // only way out of an unfinished recording.
    let style: u64 = 1;

    let window: id = msg_send![get_class("NSWindow"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: NSRect::new(
            NSPoint::new(0.0, 0.0),
            NSSize::new(PANEL_WIDTH, PANEL_HEIGHT)
        ),
        styleMask: style,
        backing: 2u64,  // NSBackingStoreBuffered
        defer: NO
    ];
    let _: () = msg_send![window, setTitle: nsstring_id("Record Shortcut")];

    // The panel must stay visible over fullscreen apps on any Space.
    let _: () = msg_send![window, setLevel: overlay_window_level()];
    // 257 = CanJoinAllSpaces | FullScreenAuxiliary
    let _: () = msg_send![window, setCollectionBehavior: 257u64];
    let _: () = msg_send![window, setReleasedWhenClosed: NO];

    center_on_mouse_screen(window);

    let content: id = msg_send![window, contentView];

    let shortcut_label = make_centered_label(RECORDER_PLACEHOLDER, 56.0, 36.0);
    let big_font: id = msg_send![get_class("NSFont"), boldSystemFontOfSize: 26.0f64];
    let _: () = msg_send![shortcut_label, setFont: big_font];
    let _: () = msg_send![content, addSubview: shortcut_label];

    let hint_label = make_centered_label(HINT_TEXT, 18.0, 18.0);
    let hint_font: id = msg_send![get_class("NSFont"), systemFontOfSize: 12.0f64];
    let _: () = msg_send![hint_label, setFont: hint_font];
    let grey: id = msg_send![get_class("NSColor"), secondaryLabelColor];
    let _: () = msg_send![hint_label, setTextColor: grey];
    let _: () = msg_send![content, addSubview: hint_label];

    let app: id = msg_send![get_class("NSApplication"), sharedApplication];
    let _: () = msg_send![app, activateIgnoringOtherApps: YES];
    let _: () = msg_send![window, makeKeyAndOrderFront: nil];

    let monitors = install_recorder_monitors();

    RecorderPanel {
        window,
        shortcut_label,
        monitors,
    }
}

/// Replace the text of the big shortcut label.
///
/// # Safety
/// The label must come from a live `RecorderPanel`.
pub unsafe fn set_recorder_text(label: id, text: &str) {
    let _: () = msg_send![label, setStringValue: nsstring_id(text)];
}

/// Remove the monitors and close the panel.
///
/// # Safety
/// Must be called from the main thread, at most once per panel.
pub unsafe fn dismiss_recorder_panel(panel: RecorderPanel) {
    remove_recorder_monitors(panel.monitors);
    let _: () = msg_send![panel.window, orderOut: nil];
    let _: () = msg_send![panel.window, close];
    let _: () = msg_send![panel.window, release];
}

/// Non-interactive centered label spanning the panel width.
unsafe fn make_centered_label(text: &str, y: f64, height: f64) -> id {
    let label: id = msg_send![get_class("NSTextField"), alloc];
    let label: id = msg_send![
        label,
        initWithFrame: NSRect::new(NSPoint::new(0.0, y), NSSize::new(PANEL_WIDTH, height))
    ];
    let _: () = msg_send![label, setBezeled: NO];
    let _: () = msg_send![label, setDrawsBackground: NO];
    let _: () = msg_send![label, setEditable: NO];
    let _: () = msg_send![label, setSelectable: NO];
    let _: () = msg_send![label, setStringValue: nsstring_id(text)];
    // NSTextAlignmentCenter = 2 on macOS
    let _: () = msg_send![label, setAlignment: 2i64];
    label
}

/// Center on the screen where the cursor is (not just main screen).
unsafe fn center_on_mouse_screen(window: id) {
    let mouse_loc: NSPoint = msg_send![get_class("NSEvent"), mouseLocation];
    let screens: id = msg_send![get_class("NSScreen"), screens];
    let screen_count: usize = msg_send![screens, count];
    let mut target_screen: id = msg_send![get_class("NSScreen"), mainScreen];

    for i in 0..screen_count {
        let scr: id = msg_send![screens, objectAtIndex: i];
        let frame: NSRect = msg_send![scr, frame];
        if mouse_loc.x >= frame.origin.x
            && mouse_loc.x < frame.origin.x + frame.size.width
            && mouse_loc.y >= frame.origin.y
            && mouse_loc.y < frame.origin.y + frame.size.height
        {
            target_screen = scr;
            break;
        }
    }
    if target_screen == nil {
        return;
    }

    let screen_frame: NSRect = msg_send![target_screen, frame];
    let window_frame: NSRect = msg_send![window, frame];
    let centered = NSPoint {
        x: screen_frame.origin.x + (screen_frame.size.width - window_frame.size.width) / 2.0,
        y: screen_frame.origin.y + (screen_frame.size.height - window_frame.size.height) / 2.0,
    };
    let _: () = msg_send![window, setFrameOrigin: centered];
}
