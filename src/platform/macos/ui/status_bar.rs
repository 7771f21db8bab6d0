//! The menu bar item and its dropdown.
//!
//! Two read-only rows at the top show the current shortcut and hotzone;
//! the action rows below publish events that the main-loop dispatcher
//! picks up. The menu is rebuilt from the settings snapshot every time
//! something it shows changes.

use crate::hotkey::codec;
use crate::model::HotkeySettings;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, Sel, NO, YES,
};

// The status item vanishes from the bar if it is ever released, so the
// installed one is retained and parked here for the process lifetime.
static mut STATUS_ITEM: id = std::ptr::null_mut();

/// Install the status bar item with its menu.
///
/// # Safety
/// Must be called from main thread, after the app is initialized. The
/// target must respond to the status menu action selectors.
pub unsafe fn install_status_bar(target: id, settings: &HotkeySettings, allow_custom: bool) {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    // -1.0 is NSVariableStatusItemLength
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];

    let _: id = msg_send![status_item, retain];
    STATUS_ITEM = status_item;

    let button: id = msg_send![status_item, button];
    if button != nil {
        let _: () = msg_send![button, setTitle: nsstring_id("\u{2316}")];
    }

    let menu = create_status_menu(target, settings, allow_custom);
    let _: () = msg_send![status_item, setMenu: menu];
}

/// Rebuild the dropdown from a fresh settings snapshot.
///
/// # Safety
/// Main thread only. No-op until `install_status_bar` has run.
pub unsafe fn refresh_status_menu(target: id, settings: &HotkeySettings, allow_custom: bool) {
    if STATUS_ITEM == nil {
        return;
    }

    let menu = create_status_menu(target, settings, allow_custom);
    let _: () = msg_send![STATUS_ITEM, setMenu: menu];
}

/// Build the dropdown from a settings snapshot.
unsafe fn create_status_menu(target: id, settings: &HotkeySettings, allow_custom: bool) -> id {
    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];
    // Manual enabling: the info rows have no action to validate against.
    let _: () = msg_send![menu, setAutoenablesItems: NO];

    // Read-only info rows
    let shortcut_text = format!("Shortcut: {}", codec::display_string(&settings.shortcut));
    add_info_row(menu, &shortcut_text);

    let hotzone_text = match &settings.hotzone {
        Some(point) => format!("Hotzone: {}", point.label()),
        None => "Hotzone: not set".to_string(),
    };
    add_info_row(menu, &hotzone_text);

    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];

    // Action rows
    add_action_row(menu, target, "Jump to Hotzone", sel!(statusJump:));
    add_action_row(menu, target, "Set Hotzone...", sel!(statusDefineHotzone:));
    if allow_custom {
        add_action_row(menu, target, "Record Shortcut...", sel!(statusRecordShortcut:));
    }

    let toggle = add_action_row(menu, target, "Enabled", sel!(statusToggleEnabled:));
    // NSControlStateValueOn = 1, Off = 0
    let state: i64 = if settings.enabled { 1 } else { 0 };
    let _: () = msg_send![toggle, setState: state];

    let separator2: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator2];

    add_action_row(menu, target, "Quit", sel!(statusQuit:));

    menu
}

/// Greyed-out row used for the shortcut and hotzone summaries.
unsafe fn add_info_row(menu: id, title: &str) {
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![item, init];
    let _: () = msg_send![item, setTitle: nsstring_id(title)];
    let _: () = msg_send![item, setEnabled: NO];
    let _: () = msg_send![menu, addItem: item];
}

unsafe fn add_action_row(menu: id, target: id, title: &str, action: Sel) -> id {
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: nsstring_id(title),
        action: action,
        keyEquivalent: nsstring_id("")
    ];
    let _: () = msg_send![item, setTarget: target];
    let _: () = msg_send![item, setEnabled: YES];
    let _: () = msg_send![menu, addItem: item];
    item
}
