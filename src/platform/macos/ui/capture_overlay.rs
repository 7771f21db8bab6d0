//! Full-screen overlays for picking a hotzone point.
//!
//! One dimmed borderless window is presented per display. Clicks and key
//! presses anywhere on them funnel into the app layer, which owns the
//! capture session; this module only builds and tears down the windows.

use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
use objc2::sel;

use crate::model::constants::KC_ESCAPE;
use crate::platform::macos::app;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, NSPoint, NSRect, NSSize, NO, YES,
};
use crate::platform::macos::ui::overlay_window_level;

const INSTRUCTION_TEXT: &str = "Click to set the hotzone. Press Esc to cancel.";

/// The overlay windows of one capture session. Kept alive until the
/// session ends, then handed back to `dismiss_capture_overlays`.
pub struct OverlayWindows {
    windows: Vec<id>,
}

impl OverlayWindows {
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Present one overlay per screen and make the one under the mouse key so
/// it receives Escape.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn present_capture_overlays() -> OverlayWindows {
    let screens: id = msg_send![get_class("NSScreen"), screens];
    let count: usize = msg_send![screens, count];

    let mouse_loc: NSPoint = msg_send![get_class("NSEvent"), mouseLocation];
    let mut key_window: id = nil;

    let mut windows: Vec<id> = Vec::with_capacity(count);
    for i in 0..count {
        let screen: id = msg_send![screens, objectAtIndex: i];
        let frame: NSRect = msg_send![screen, frame];
        let window = make_overlay_window(frame);
        let _: () = msg_send![window, orderFrontRegardless];
        if frame.origin.x <= mouse_loc.x
            && mouse_loc.x < frame.origin.x + frame.size.width
            && frame.origin.y <= mouse_loc.y
            && mouse_loc.y < frame.origin.y + frame.size.height
        {
            key_window = window;
        }
        windows.push(window);
    }

    if key_window == nil {
        key_window = windows.first().copied().unwrap_or(nil);
    }
    if key_window != nil {
        let app: id = msg_send![get_class("NSApplication"), sharedApplication];
        let _: () = msg_send![app, activateIgnoringOtherApps: YES];
        let _: () = msg_send![key_window, makeKeyAndOrderFront: nil];
    }

    OverlayWindows { windows }
}

/// Close every window of a finished session.
///
/// # Safety
/// Must be called from the main thread, at most once per session.
pub unsafe fn dismiss_capture_overlays(overlays: OverlayWindows) {
    for window in overlays.windows {
        let _: () = msg_send![window, orderOut: nil];
        let _: () = msg_send![window, close];
        let _: () = msg_send![window, release];
    }
}

/// Build one dimmed overlay window covering `frame`.
unsafe fn make_overlay_window(frame: NSRect) -> id {
    let style_mask: u64 = 0; // borderless
    let backing: u64 = 2; // NSBackingStoreBuffered

    let window: id = msg_send![capture_window_class(), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: frame,
        styleMask: style_mask,
        backing: backing,
        defer: NO
    ];

    let _: () = msg_send![window, setOpaque: NO];
    let black: id = msg_send![get_class("NSColor"), blackColor];
    let dim: id = msg_send![black, colorWithAlphaComponent: 0.35f64];
    let _: () = msg_send![window, setBackgroundColor: dim];
    let _: () = msg_send![window, setHasShadow: NO];

    // The whole point of these windows is to receive the click.
    let _: () = msg_send![window, setIgnoresMouseEvents: NO];
    let _: () = msg_send![window, setLevel: overlay_window_level()];

    // CanJoinAllSpaces | Stationary | FullScreenAuxiliary
    let collection_behavior: u64 = 1 | 16 | 256;
    let _: () = msg_send![window, setCollectionBehavior: collection_behavior];

    // Closed by hand in dismiss_capture_overlays.
    let _: () = msg_send![window, setReleasedWhenClosed: NO];

    let view: id = msg_send![capture_view_class(), alloc];
    let content_rect = NSRect::new(
        NSPoint::new(0.0, 0.0),
        NSSize::new(frame.size.width, frame.size.height),
    );
    let view: id = msg_send![view, initWithFrame: content_rect];
    let _: () = msg_send![window, setContentView: view];

    add_instruction_label(view, frame.size.width, frame.size.height);

    window
}

/// Centered instruction label, subview of the content view.
unsafe fn add_instruction_label(view: id, width: f64, height: f64) {
    let label: id = msg_send![get_class("NSTextField"), alloc];
    let label: id = msg_send![
        label,
        initWithFrame: NSRect::new(
            NSPoint::new(0.0, height * 0.45),
            NSSize::new(width, 32.0)
        )
    ];
    let _: () = msg_send![label, setBezeled: NO];
    let _: () = msg_send![label, setDrawsBackground: NO];
    let _: () = msg_send![label, setEditable: NO];
    let _: () = msg_send![label, setSelectable: NO];
    let _: () = msg_send![label, setStringValue: nsstring_id(INSTRUCTION_TEXT)];
    let white: id = msg_send![get_class("NSColor"), whiteColor];
    let _: () = msg_send![label, setTextColor: white];
    let font: id = msg_send![get_class("NSFont"), systemFontOfSize: 22.0f64];
    let _: () = msg_send![label, setFont: font];
    // NSTextAlignmentCenter = 2 on macOS
    let _: () = msg_send![label, setAlignment: 2i64];
    let _: () = msg_send![view, addSubview: label];
}

// ============================================================================
// Window and view subclasses
// ============================================================================

/// Borderless windows refuse key status by default; this subclass accepts
/// it so Escape reaches the overlay. Clicks that no subview claims bubble
/// up the responder chain and land in `mouseDown:` here, so the click is
/// caught no matter where on the screen it happens.
unsafe fn capture_window_class() -> &'static AnyClass {
    let class_name = c"HotzoneCaptureWindow";
    if let Some(cls) = AnyClass::get(class_name) {
        return cls;
    }
    let superclass = AnyClass::get(c"NSWindow").unwrap();
    let mut builder = ClassBuilder::new(class_name, superclass).unwrap();
    builder.add_method(
        sel!(canBecomeKeyWindow),
        can_become_key_window as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.add_method(
        sel!(mouseDown:),
        overlay_mouse_down as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(keyDown:),
        overlay_key_down as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.register()
}

/// Content view that takes the first click even when the app was inactive.
unsafe fn capture_view_class() -> &'static AnyClass {
    let class_name = c"HotzoneCaptureView";
    if let Some(cls) = AnyClass::get(class_name) {
        return cls;
    }
    let superclass = AnyClass::get(c"NSView").unwrap();
    let mut builder = ClassBuilder::new(class_name, superclass).unwrap();
    builder.add_method(
        sel!(acceptsFirstMouse:),
        accepts_first_mouse as unsafe extern "C-unwind" fn(_, _, _) -> _,
    );
    builder.register()
}

unsafe extern "C-unwind" fn can_become_key_window(_this: &mut AnyObject, _cmd: Sel) -> Bool {
    YES
}

unsafe extern "C-unwind" fn accepts_first_mouse(
    _this: &mut AnyObject,
    _cmd: Sel,
    _event: id,
) -> Bool {
    YES
}

unsafe extern "C-unwind" fn overlay_mouse_down(_this: &mut AnyObject, _cmd: Sel, _event: id) {
    unsafe {
        let p: NSPoint = msg_send![get_class("NSEvent"), mouseLocation];
        app::capture_click(p.x, p.y);
    }
}

unsafe extern "C-unwind" fn overlay_key_down(_this: &mut AnyObject, _cmd: Sel, event: id) {
    unsafe {
        let key_code: u16 = msg_send![event, keyCode];
        if key_code == KC_ESCAPE {
            app::capture_escape();
        }
        // Other keys are swallowed so the overlay never beeps.
    }
}
