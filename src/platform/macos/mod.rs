//! macOS implementation: AppKit UI and run loop, Carbon hotkey
//! registration, CoreGraphics cursor control, NSUserDefaults storage.

pub mod app;
pub mod display;
pub mod ffi;
pub mod input;
pub mod storage;
pub mod ui;

use log::info;

use crate::config;
use crate::events::{publish, AppEvent};
use crate::hotkey::codec;
use crate::store::{SettingsChange, SettingsStore};

use app::MacApp;
use ffi::bridge::{autoreleasepool, get_class, id, msg_send, nil, nsstring_id, sel, NSApp, YES};
use storage::UserDefaultsBackend;

/// Bring up the whole macOS tier and hand control to the AppKit run loop.
/// Never returns short of app termination.
pub fn run() {
    // Logging and the event bus are already initialized by main()

    autoreleasepool(|| {
        unsafe {
            let app = NSApp();
            // Accessory policy (1): menu bar item only, no Dock icon
            let _: bool = msg_send![app, setActivationPolicy: 1i64];

            let config = config::load();
            let allow_custom = config.allow_custom_shortcut;

            let mut store = SettingsStore::load(UserDefaultsBackend::new());
            let target = app::create_app_target();

            ui::install_status_bar(target, store.settings(), allow_custom);

            // Rebuild the menu and kick re-registration whenever the
            // settings change underneath it.
            store.subscribe(move |change, settings| {
                if matches!(change, SettingsChange::Shortcut | SettingsChange::Enabled) {
                    publish(AppEvent::ReregisterHotkey);
                }
                unsafe { ui::refresh_status_menu(target, settings, allow_custom) };
            });

            info!(
                "starting with shortcut {}, hotkey {}",
                codec::display_string(&store.settings().shortcut),
                if store.settings().enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );

            app::install_app(MacApp::new(store, allow_custom));
            app::with_app(|state| state.apply_registration());

            // Teardown on quit, re-registration on wake/space change
            input::install_termination_observer();
            input::install_wakeup_space_observers();
            input::start_registration_keepalive(target);

            // ~60 FPS timer draining the event bus
            create_dispatch_timer(target, 0.016);

            let _: () = msg_send![app, run];
        }
    });
}

/// Create an AppKit timer that fires even while a menu is being tracked.
///
/// # Safety
/// The target must be a valid NSObject that responds to `processEvents`.
unsafe fn create_dispatch_timer(target: id, interval: f64) {
    // Built unscheduled, then added for NSRunLoopCommonModes by hand; a
    // timer scheduled in the default mode stalls while a menu is open.
    let timer_class = get_class("NSTimer");
    let timer: id = msg_send![
        timer_class,
        timerWithTimeInterval: interval,
        target: target,
        selector: sel!(processEvents),
        userInfo: nil,
        repeats: YES
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let common_modes = nsstring_id("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];
}
