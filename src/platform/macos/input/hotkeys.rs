//! Carbon-backed hotkey registration.
//!
//! Implements `HotkeyBackend` against the Carbon Event Manager. The
//! handles Carbon gives out are returned to the `HotkeyManager`, which
//! owns their lifecycle; nothing here keeps state of its own. The event
//! handler runs inside the Carbon dispatch and must not touch application
//! state, so it only publishes to the event bus.

use crate::events::{publish, AppEvent};
use crate::hotkey::{HotkeyBackend, HotkeyError};
use crate::model::constants::{HOTKEY_ID_JUMP, HOTKEY_SIGNATURE};
use crate::platform::macos::ffi::{
    EventHandlerCallRef, EventHandlerRef, EventHotKeyID, EventHotKeyRef, EventRef, EventTypeSpec,
    GetApplicationEventTarget, GetEventClass, GetEventKind, GetEventParameter, InstallEventHandler,
    RegisterEventHotKey, RemoveEventHandler, UnregisterEventHotKey, K_EVENT_CLASS_KEYBOARD,
    K_EVENT_HOTKEY_PRESSED, K_EVENT_PARAM_DIRECT_OBJECT, NO_ERR, TYPE_EVENT_HOTKEY_ID,
};

/// Backend talking to Carbon. Main thread only.
pub struct CarbonHotkeyBackend;

impl HotkeyBackend for CarbonHotkeyBackend {
    type HotkeyHandle = EventHotKeyRef;
    type HandlerHandle = EventHandlerRef;

    fn register_hotkey(
        &mut self,
        key_code: u16,
        native_mask: u32,
    ) -> Result<EventHotKeyRef, HotkeyError> {
        let hk_id = EventHotKeyID {
            signature: HOTKEY_SIGNATURE,
            id: HOTKEY_ID_JUMP,
        };
        let mut out_ref: EventHotKeyRef = std::ptr::null_mut();
        let status = unsafe {
            RegisterEventHotKey(
                u32::from(key_code),
                native_mask,
                hk_id,
                GetApplicationEventTarget(),
                0,
                &mut out_ref,
            )
        };
        if status != NO_ERR || out_ref.is_null() {
            return Err(HotkeyError::RegistrationFailed(status));
        }
        Ok(out_ref)
    }

    fn install_handler(&mut self) -> Result<EventHandlerRef, HotkeyError> {
        let types = [EventTypeSpec {
            event_class: K_EVENT_CLASS_KEYBOARD,
            event_kind: K_EVENT_HOTKEY_PRESSED,
        }];
        let mut handler_ref: EventHandlerRef = std::ptr::null_mut();
        let status = unsafe {
            InstallEventHandler(
                GetApplicationEventTarget(),
                hotkey_pressed_handler,
                types.len() as u32,
                types.as_ptr(),
                std::ptr::null_mut(),
                &mut handler_ref,
            )
        };
        if status != NO_ERR || handler_ref.is_null() {
            return Err(HotkeyError::HandlerInstallFailed(status));
        }
        Ok(handler_ref)
    }

    fn unregister_hotkey(&mut self, hotkey: EventHotKeyRef) {
        unsafe {
            let _ = UnregisterEventHotKey(hotkey);
        }
    }

    fn remove_handler(&mut self, handler: EventHandlerRef) {
        unsafe {
            let _ = RemoveEventHandler(handler);
        }
    }
}

/// Carbon event callback for hotkey presses.
///
/// Called by the Carbon runtime whenever a registered hotkey fires. Checks
/// that the event really is ours (signature and id) before publishing, so
/// hotkeys belonging to other apps sharing the event class pass through
/// untouched. Must not panic.
extern "C" fn hotkey_pressed_handler(
    _call_ref: EventHandlerCallRef,
    event: EventRef,
    _user_data: *mut std::ffi::c_void,
) -> i32 {
    unsafe {
        if GetEventClass(event) == K_EVENT_CLASS_KEYBOARD
            && GetEventKind(event) == K_EVENT_HOTKEY_PRESSED
        {
            let mut hot_id = EventHotKeyID {
                signature: 0,
                id: 0,
            };
            let status = GetEventParameter(
                event,
                K_EVENT_PARAM_DIRECT_OBJECT,
                TYPE_EVENT_HOTKEY_ID,
                std::ptr::null_mut(),
                std::mem::size_of::<EventHotKeyID>() as u32,
                std::ptr::null_mut(),
                &mut hot_id as *mut _ as *mut std::ffi::c_void,
            );
            if status == NO_ERR
                && hot_id.signature == HOTKEY_SIGNATURE
                && hot_id.id == HOTKEY_ID_JUMP
            {
                // Processed on the main loop; never handle here.
                publish(AppEvent::HotkeyActivated);
            }
        }
        NO_ERR
    }
}
