//! Application state and the main-loop event dispatcher.
//!
//! All state lives in a thread-local `MacApp`: the settings store, the
//! hotkey registration, the cursor dispatcher and at most one open
//! capture or recorder session. OS callbacks never mutate it directly;
//! they publish events (or call the thin session entry points below) and
//! the timer-driven `dispatch_pending_events` does the real work.
//!
//! Window and monitor teardown happens only inside the dispatch tick,
//! never inside the AppKit callback that produced the final event, so a
//! monitor is never removed from its own handler and a window is never
//! released under its own `mouseDown:`.

use std::cell::RefCell;

use log::{debug, info, warn};
use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};

use crate::capture::{CaptureOutcome, HotzoneCapture, ShortcutRecorder};
use crate::cursor::CursorDispatcher;
use crate::events::{publish, take_event, AppEvent};
use crate::hotkey::{codec, HotkeyManager};
use crate::model::constants::KC_ESCAPE;
use crate::model::Modifiers;
use crate::platform::macos::display::{connected_displays, to_global_point, SystemCursorHost};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, sel, NSApp};
use crate::platform::macos::input::CarbonHotkeyBackend;
use crate::platform::macos::storage::UserDefaultsBackend;
use crate::platform::macos::ui;
use crate::store::SettingsStore;

/// One in-flight hotzone capture: the session machine plus its windows.
struct CaptureSession {
    machine: HotzoneCapture,
    overlays: ui::OverlayWindows,
}

/// One in-flight shortcut recording. `closing` flips when the final
/// event has been published and the panel merely awaits dismissal.
struct RecorderSession {
    machine: ShortcutRecorder,
    panel: ui::RecorderPanel,
    closing: bool,
}

/// Everything the main loop owns.
pub struct MacApp {
    pub store: SettingsStore<UserDefaultsBackend>,
    manager: HotkeyManager<CarbonHotkeyBackend>,
    dispatcher: CursorDispatcher<SystemCursorHost>,
    capture: Option<CaptureSession>,
    recorder: Option<RecorderSession>,
    allow_custom_shortcut: bool,
    quit_requested: bool,
}

thread_local! {
    static APP: RefCell<Option<MacApp>> = const { RefCell::new(None) };
}

impl MacApp {
    pub fn new(store: SettingsStore<UserDefaultsBackend>, allow_custom_shortcut: bool) -> MacApp {
        MacApp {
            store,
            manager: HotkeyManager::new(CarbonHotkeyBackend),
            dispatcher: CursorDispatcher::new(SystemCursorHost),
            capture: None,
            recorder: None,
            allow_custom_shortcut,
            quit_requested: false,
        }
    }

    /// Bring the OS registration in line with the current settings.
    /// Always tears down and rebuilds, because a registration that looks
    /// live can have been silently dropped across sleep or a Space
    /// switch.
    pub fn apply_registration(&mut self) {
        let settings = *self.store.settings();
        if settings.wants_registration() {
            if let Err(err) = self.manager.start(settings.shortcut) {
                warn!(
                    "could not register {}: {err}",
                    codec::display_string(&settings.shortcut)
                );
            }
        } else {
            self.manager.stop();
            if settings.enabled {
                warn!("saved shortcut has no modifiers, leaving hotkey unregistered");
            }
        }
    }

    unsafe fn handle_event(&mut self, event: AppEvent) {
        debug!("dispatching event: {}", event.description());
        match event {
            AppEvent::HotkeyActivated => {
                self.dispatcher.activate(self.store.settings());
            }

            AppEvent::DefineHotzone => self.begin_hotzone_capture(),

            AppEvent::RecordShortcut => self.begin_shortcut_recording(),

            AppEvent::HotzoneSelected(point) => {
                if let Some(session) = self.capture.take() {
                    ui::dismiss_capture_overlays(session.overlays);
                }
                self.store.set_hotzone(point);
                info!("hotzone saved at {}", point.label());
            }

            AppEvent::HotzoneCaptureCancelled => {
                if let Some(session) = self.capture.take() {
                    ui::dismiss_capture_overlays(session.overlays);
                }
                info!("hotzone capture cancelled");
            }

            AppEvent::ShortcutRecorded(shortcut) => {
                if let Some(session) = self.recorder.take() {
                    ui::dismiss_recorder_panel(session.panel);
                }
                self.store.set_shortcut(shortcut);
                info!("shortcut recorded: {}", codec::display_string(&shortcut));
            }

            AppEvent::ShortcutRecordingCancelled => {
                if let Some(session) = self.recorder.take() {
                    ui::dismiss_recorder_panel(session.panel);
                }
                info!("shortcut recording cancelled");
            }

            AppEvent::SetEnabled(enabled) => {
                self.store.set_enabled(enabled);
                info!("hotkey {}", if enabled { "enabled" } else { "disabled" });
            }

            AppEvent::ReregisterHotkey => self.apply_registration(),

            AppEvent::RequestQuit => {
                self.quit_requested = true;
                info!("quit requested");
            }
        }
    }

    unsafe fn begin_hotzone_capture(&mut self) {
        if self.recorder.is_some() {
            debug!("ignoring capture request while recording a shortcut");
            return;
        }
        // A repeated request replaces the running session outright. The
        // replaced session ends without an outcome.
        if let Some(session) = self.capture.take() {
            debug!("restarting hotzone capture");
            ui::dismiss_capture_overlays(session.overlays);
        }
        let displays = connected_displays();
        match HotzoneCapture::begin(&displays) {
            Ok(machine) => {
                let overlays = ui::present_capture_overlays();
                info!(
                    "hotzone capture started across {} displays",
                    machine.surface_count()
                );
                self.capture = Some(CaptureSession { machine, overlays });
            }
            Err(err) => {
                warn!("hotzone capture not started: {err}");
                publish(AppEvent::HotzoneCaptureCancelled);
            }
        }
    }

    unsafe fn begin_shortcut_recording(&mut self) {
        if !self.allow_custom_shortcut {
            info!("custom shortcuts are disabled by configuration");
            return;
        }
        if self.capture.is_some() || self.recorder.is_some() {
            debug!("ignoring record request, a session is already open");
            return;
        }
        let panel = ui::present_recorder_panel();
        info!("shortcut recording started");
        self.recorder = Some(RecorderSession {
            machine: ShortcutRecorder::new(),
            panel,
            closing: false,
        });
    }

    /// Feed a click or an Escape (None) into the capture session. The
    /// machine publishes at most one outcome per session; the windows
    /// stay up until the dispatch tick takes them down.
    fn feed_capture(&mut self, click: Option<(f64, f64)>) {
        let Some(session) = self.capture.as_mut() else {
            return;
        };
        let outcome = match click {
            Some((x, y)) => session.machine.click(to_global_point(x, y)),
            None => session.machine.escape(),
        };
        match outcome {
            Some(CaptureOutcome::PointSelected(point)) => {
                publish(AppEvent::HotzoneSelected(point));
            }
            Some(CaptureOutcome::Cancelled) => {
                publish(AppEvent::HotzoneCaptureCancelled);
            }
            None => {}
        }
    }

    unsafe fn feed_recorder_modifiers(&mut self, mods: Modifiers) {
        let Some(session) = self.recorder.as_mut() else {
            return;
        };
        if session.closing {
            return;
        }
        session.machine.set_modifiers(mods);
        ui::set_recorder_text(session.panel.shortcut_label, &session.machine.display_text());
    }

    unsafe fn feed_recorder_key(&mut self, key_code: u16, mods: Modifiers) {
        let Some(session) = self.recorder.as_mut() else {
            return;
        };
        if session.closing {
            return;
        }
        if key_code == KC_ESCAPE && mods.is_empty() {
            session.closing = true;
            publish(AppEvent::ShortcutRecordingCancelled);
            return;
        }
        session.machine.set_modifiers(mods);
        if let Some(shortcut) = session.machine.key_down(key_code) {
            // Show the final combo for the moment the panel remains up.
            ui::set_recorder_text(session.panel.shortcut_label, &session.machine.display_text());
            session.closing = true;
            publish(AppEvent::ShortcutRecorded(shortcut));
        }
    }

    fn take_quit_request(&mut self) -> bool {
        std::mem::take(&mut self.quit_requested)
    }
}

/// Move the application state into the thread-local slot. Called once
/// from `run`.
pub fn install_app(app: MacApp) {
    APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        assert!(slot.is_none(), "application state installed twice");
        *slot = Some(app);
    });
}

/// Run a closure against the installed state. Returns None before
/// installation, and also under re-entrant access (an OS callback firing
/// inside the dispatch tick), where skipping beats panicking.
pub fn with_app<R>(f: impl FnOnce(&mut MacApp) -> R) -> Option<R> {
    APP.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

/// Drain the event bus and act on every pending event. Runs on the main
/// loop timer.
///
/// # Safety
/// Main thread only, with a valid autorelease pool.
pub unsafe fn dispatch_pending_events() {
    let quit = with_app(|app| {
        while let Some(event) = take_event() {
            unsafe { app.handle_event(event) };
        }
        app.take_quit_request()
    })
    .unwrap_or(false);

    if quit {
        // Outside the borrow: terminate fires the termination observer,
        // which re-enters the state through shutdown().
        let app: id = NSApp();
        let _: () = msg_send![app, terminate: nil];
    }
}

/// A click landed on a capture overlay, in AppKit screen coordinates.
///
/// # Safety
/// Main thread only.
pub unsafe fn capture_click(x: f64, y: f64) {
    with_app(|app| app.feed_capture(Some((x, y))));
}

/// Escape was pressed on a capture overlay.
///
/// # Safety
/// Main thread only.
pub unsafe fn capture_escape() {
    with_app(|app| app.feed_capture(None));
}

/// Modifier state changed while the recorder panel is up.
///
/// # Safety
/// Main thread only.
pub unsafe fn recorder_modifiers_changed(mods: Modifiers) {
    with_app(|app| unsafe { app.feed_recorder_modifiers(mods) });
}

/// A key went down while the recorder panel is up.
///
/// # Safety
/// Main thread only.
pub unsafe fn recorder_key_down(key_code: u16, mods: Modifiers) {
    with_app(|app| unsafe { app.feed_recorder_key(key_code, mods) });
}

/// Tear down the registration and any open session. Called by the
/// termination observer.
///
/// # Safety
/// Main thread only.
pub unsafe fn shutdown() {
    let sessions = with_app(|app| {
        app.manager.stop();
        (app.capture.take(), app.recorder.take())
    });
    if let Some((capture, recorder)) = sessions {
        if let Some(session) = capture {
            ui::dismiss_capture_overlays(session.overlays);
        }
        if let Some(session) = recorder {
            ui::dismiss_recorder_panel(session.panel);
        }
    }
    info!("hotkey unregistered, shutting down");
}

// ============================================================================
// Menu and timer target
// ============================================================================

/// Create the NSObject subclass instance that the status menu and the
/// timers message. Every action just publishes an event.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_app_target() -> id {
    let class_name = c"HotzoneAppTarget";
    let target_class = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = AnyClass::get(c"NSObject").unwrap();
        let mut builder = ClassBuilder::new(class_name, superclass).unwrap();
        builder.add_method(
            sel!(processEvents),
            process_events as unsafe extern "C-unwind" fn(_, _),
        );
        builder.add_method(
            sel!(keepAlive),
            keep_alive as unsafe extern "C-unwind" fn(_, _),
        );
        builder.add_method(
            sel!(statusJump:),
            status_jump as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(statusDefineHotzone:),
            status_define_hotzone as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(statusRecordShortcut:),
            status_record_shortcut as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(statusToggleEnabled:),
            status_toggle_enabled as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(statusQuit:),
            status_quit as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.register()
    };

    let target: id = msg_send![target_class, alloc];
    let target: id = msg_send![target, init];
    // Menu target and timer target for the process lifetime.
    let _: id = msg_send![target, retain];
    target
}

unsafe extern "C-unwind" fn process_events(_this: &mut AnyObject, _cmd: Sel) {
    dispatch_pending_events();
}

unsafe extern "C-unwind" fn keep_alive(_this: &mut AnyObject, _cmd: Sel) {
    publish(AppEvent::ReregisterHotkey);
}

unsafe extern "C-unwind" fn status_jump(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::HotkeyActivated);
}

unsafe extern "C-unwind" fn status_define_hotzone(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::DefineHotzone);
}

unsafe extern "C-unwind" fn status_record_shortcut(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::RecordShortcut);
}

unsafe extern "C-unwind" fn status_toggle_enabled(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    if let Some(enabled) = with_app(|app| app.store.settings().enabled) {
        publish(AppEvent::SetEnabled(!enabled));
    }
}

unsafe extern "C-unwind" fn status_quit(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::RequestQuit);
}
