//! Carbon Event Manager declarations.
//!
//! The legacy Carbon API is still the sanctioned way to claim a global
//! hotkey without an event tap. Only the slice needed to register one
//! hotkey and receive its presses is declared; everything else in the
//! framework stays unbound.

use std::ffi::c_void;

pub type EventTargetRef = *mut c_void;
pub type EventRef = *mut c_void;
pub type EventHotKeyRef = *mut c_void;
pub type EventHandlerRef = *mut c_void;
pub type EventHandlerCallRef = *mut c_void;

/// Callback signature InstallEventHandler expects.
pub type EventHandlerUPP = extern "C" fn(EventHandlerCallRef, EventRef, *mut c_void) -> i32;

/// (class, kind) pair selecting which events a handler receives.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct EventTypeSpec {
    pub event_class: u32,
    pub event_kind: u32,
}

/// Identity stamped on a registration and echoed in its press events.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct EventHotKeyID {
    pub signature: u32,
    pub id: u32,
}

pub const NO_ERR: i32 = 0;

// Four-character codes from HIToolbox/CarbonEvents.h.
pub const K_EVENT_CLASS_KEYBOARD: u32 = 0x6B65_7962; // 'keyb'
pub const K_EVENT_HOTKEY_PRESSED: u32 = 6;
pub const K_EVENT_PARAM_DIRECT_OBJECT: u32 = 0x2D2D_2D2D; // '----'
pub const TYPE_EVENT_HOTKEY_ID: u32 = 0x686B_6964; // 'hkid'

#[link(name = "Carbon", kind = "framework")]
extern "C" {
    pub fn RegisterEventHotKey(
        key_code: u32,
        modifiers: u32,
        hotkey_id: EventHotKeyID,
        target: EventTargetRef,
        options: u32,
        out_hotkey: *mut EventHotKeyRef,
    ) -> i32;

    pub fn UnregisterEventHotKey(hotkey: EventHotKeyRef) -> i32;

    pub fn InstallEventHandler(
        target: EventTargetRef,
        handler: EventHandlerUPP,
        num_types: u32,
        type_list: *const EventTypeSpec,
        user_data: *mut c_void,
        out_handler: *mut EventHandlerRef,
    ) -> i32;

    pub fn RemoveEventHandler(handler: EventHandlerRef) -> i32;

    pub fn GetApplicationEventTarget() -> EventTargetRef;

    pub fn GetEventClass(event: EventRef) -> u32;

    pub fn GetEventKind(event: EventRef) -> u32;

    pub fn GetEventParameter(
        event: EventRef,
        name: u32,
        desired_type: u32,
        out_actual_type: *mut u32,
        buffer_size: u32,
        out_actual_size: *mut u32,
        out_data: *mut c_void,
    ) -> i32;
}
