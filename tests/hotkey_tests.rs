//! Tests for the hotkey registration lifecycle and the cursor dispatcher,
//! run against recording fakes in place of the Carbon and CoreGraphics
//! backends.

use std::cell::RefCell;
use std::rc::Rc;

use hotzone::hotkey::{HotkeyBackend, HotkeyError, HotkeyManager, RegistrationState};
use hotzone::model::constants::KC_C;
use hotzone::model::{DisplayBounds, HotkeySettings, HotzonePoint, Modifiers, ShortcutDefinition};
use hotzone::{CursorDispatcher, CursorHost};

// === Fakes ===

#[derive(Debug, Clone, PartialEq, Eq)]
enum BackendCall {
    Register { key_code: u16, mask: u32 },
    InstallHandler,
    Unregister(u32),
    RemoveHandler(u32),
}

/// Stand-in for the Carbon backend. Handles are sequence numbers, so the
/// call log pins down exactly which resource each teardown released.
#[derive(Default)]
struct FakeBackend {
    calls: Rc<RefCell<Vec<BackendCall>>>,
    fail_register: Option<i32>,
    fail_install: Option<i32>,
    next_handle: u32,
}

impl FakeBackend {
    fn new() -> (FakeBackend, Rc<RefCell<Vec<BackendCall>>>) {
        let backend = FakeBackend::default();
        let calls = Rc::clone(&backend.calls);
        (backend, calls)
    }
}

impl HotkeyBackend for FakeBackend {
    type HotkeyHandle = u32;
    type HandlerHandle = u32;

    fn register_hotkey(&mut self, key_code: u16, native_mask: u32) -> Result<u32, HotkeyError> {
        if let Some(status) = self.fail_register {
            return Err(HotkeyError::RegistrationFailed(status));
        }
        self.next_handle += 1;
        self.calls.borrow_mut().push(BackendCall::Register {
            key_code,
            mask: native_mask,
        });
        Ok(self.next_handle)
    }

    fn install_handler(&mut self) -> Result<u32, HotkeyError> {
        if let Some(status) = self.fail_install {
            return Err(HotkeyError::HandlerInstallFailed(status));
        }
        self.next_handle += 1;
        self.calls.borrow_mut().push(BackendCall::InstallHandler);
        Ok(self.next_handle)
    }

    fn unregister_hotkey(&mut self, hotkey: u32) {
        self.calls.borrow_mut().push(BackendCall::Unregister(hotkey));
    }

    fn remove_handler(&mut self, handler: u32) {
        self.calls.borrow_mut().push(BackendCall::RemoveHandler(handler));
    }
}

struct FakeCursorHost {
    warps: Rc<RefCell<Vec<HotzonePoint>>>,
    primary: Option<DisplayBounds>,
}

impl FakeCursorHost {
    fn new(primary: Option<DisplayBounds>) -> (FakeCursorHost, Rc<RefCell<Vec<HotzonePoint>>>) {
        let warps = Rc::new(RefCell::new(Vec::new()));
        let host = FakeCursorHost {
            warps: Rc::clone(&warps),
            primary,
        };
        (host, warps)
    }
}

impl CursorHost for FakeCursorHost {
    fn warp_to(&mut self, point: HotzonePoint) {
        self.warps.borrow_mut().push(point);
    }

    fn primary_display(&self) -> Option<DisplayBounds> {
        self.primary
    }
}

fn command_a() -> ShortcutDefinition {
    ShortcutDefinition::new(
        0,
        Modifiers {
            command: true,
            ..Modifiers::NONE
        },
    )
}

// === Registration Lifecycle Tests ===

#[test]
fn start_registers_before_installing_the_handler() {
    let (backend, calls) = FakeBackend::new();
    let mut manager = HotkeyManager::new(backend);

    manager
        .start(ShortcutDefinition::default())
        .expect("registration succeeds");

    assert_eq!(
        *calls.borrow(),
        vec![
            BackendCall::Register {
                key_code: KC_C,
                mask: (1 << 12) | (1 << 11),
            },
            BackendCall::InstallHandler,
        ]
    );
    assert_eq!(manager.state(), RegistrationState::Registered);
    assert_eq!(
        manager.registered_shortcut(),
        Some(ShortcutDefinition::default())
    );
}

#[test]
fn start_refuses_a_modifier_less_shortcut() {
    let (backend, calls) = FakeBackend::new();
    let mut manager = HotkeyManager::new(backend);

    let result = manager.start(ShortcutDefinition::new(KC_C, Modifiers::NONE));

    assert_eq!(result, Err(HotkeyError::NotRegistrable));
    assert!(calls.borrow().is_empty());
    assert!(!manager.is_registered());
}

#[test]
fn start_replaces_a_live_registration() {
    let (backend, calls) = FakeBackend::new();
    let mut manager = HotkeyManager::new(backend);

    manager
        .start(ShortcutDefinition::default())
        .expect("first registration succeeds");
    manager.start(command_a()).expect("replacement succeeds");

    // The first registration (handles 1 and 2) comes down before the
    // replacement goes up.
    assert_eq!(
        calls.borrow()[2..],
        [
            BackendCall::Unregister(1),
            BackendCall::RemoveHandler(2),
            BackendCall::Register {
                key_code: 0,
                mask: 1 << 8,
            },
            BackendCall::InstallHandler,
        ]
    );
    assert_eq!(manager.registered_shortcut(), Some(command_a()));
}

#[test]
fn stop_releases_both_resources() {
    let (backend, calls) = FakeBackend::new();
    let mut manager = HotkeyManager::new(backend);

    manager
        .start(ShortcutDefinition::default())
        .expect("registration succeeds");
    manager.stop();

    assert_eq!(
        calls.borrow()[2..],
        [BackendCall::Unregister(1), BackendCall::RemoveHandler(2)]
    );
    assert_eq!(manager.state(), RegistrationState::Unregistered);
    assert_eq!(manager.registered_shortcut(), None);
}

#[test]
fn stop_without_a_registration_is_a_no_op() {
    let (backend, calls) = FakeBackend::new();
    let mut manager = HotkeyManager::new(backend);

    manager.stop();
    assert!(calls.borrow().is_empty());

    manager
        .start(ShortcutDefinition::default())
        .expect("registration succeeds");
    manager.stop();
    let len_after_first_stop = calls.borrow().len();
    manager.stop();
    assert_eq!(calls.borrow().len(), len_after_first_stop);
}

#[test]
fn registration_failure_reports_the_status() {
    let (mut backend, calls) = FakeBackend::new();
    backend.fail_register = Some(-9878);
    let mut manager = HotkeyManager::new(backend);

    let result = manager.start(ShortcutDefinition::default());

    assert_eq!(result, Err(HotkeyError::RegistrationFailed(-9878)));
    assert!(calls.borrow().is_empty());
    assert!(!manager.is_registered());
}

#[test]
fn handler_failure_rolls_back_the_registration() {
    let (mut backend, calls) = FakeBackend::new();
    backend.fail_install = Some(-50);
    let mut manager = HotkeyManager::new(backend);

    let result = manager.start(ShortcutDefinition::default());

    assert_eq!(result, Err(HotkeyError::HandlerInstallFailed(-50)));
    assert_eq!(
        calls.borrow()[1..],
        [BackendCall::Unregister(1)],
        "the orphaned registration must be released"
    );
    assert!(!manager.is_registered());
}

// === Cursor Dispatch Tests ===

fn settings_with(enabled: bool, hotzone: Option<HotzonePoint>) -> HotkeySettings {
    HotkeySettings {
        enabled,
        hotzone,
        ..HotkeySettings::default()
    }
}

fn primary() -> DisplayBounds {
    DisplayBounds::new(0.0, 0.0, 1440.0, 900.0)
}

#[test]
fn activation_warps_to_the_saved_hotzone() {
    let (host, warps) = FakeCursorHost::new(Some(primary()));
    let mut dispatcher = CursorDispatcher::new(host);
    let point = HotzonePoint::new(812.0, 413.0);

    let target = dispatcher.activate(&settings_with(true, Some(point)));

    assert_eq!(target, Some(point));
    assert_eq!(*warps.borrow(), vec![point]);
}

#[test]
fn activation_centers_on_the_primary_display_without_a_hotzone() {
    let (host, warps) = FakeCursorHost::new(Some(primary()));
    let mut dispatcher = CursorDispatcher::new(host);

    let target = dispatcher.activate(&settings_with(true, None));

    assert_eq!(target, Some(HotzonePoint::new(720.0, 450.0)));
    assert_eq!(*warps.borrow(), vec![HotzonePoint::new(720.0, 450.0)]);
}

#[test]
fn disabled_activation_does_not_warp() {
    let (host, warps) = FakeCursorHost::new(Some(primary()));
    let mut dispatcher = CursorDispatcher::new(host);

    let target = dispatcher.activate(&settings_with(false, Some(HotzonePoint::new(10.0, 10.0))));

    assert_eq!(target, None);
    assert!(warps.borrow().is_empty());
}

#[test]
fn activation_without_any_display_does_not_warp() {
    let (host, warps) = FakeCursorHost::new(None);
    let mut dispatcher = CursorDispatcher::new(host);

    let target = dispatcher.activate(&settings_with(true, None));

    assert_eq!(target, None);
    assert!(warps.borrow().is_empty());
}
