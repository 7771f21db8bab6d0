//! System observers that keep the hotkey registration healthy.
//!
//! Carbon registrations are known to get dropped across sleep/wake, fast
//! user switching and Space changes. Each of those publishes a
//! re-registration request; a slow keepalive timer catches anything the
//! notifications miss. A termination observer tears the registration down
//! when the app exits.

use block2::RcBlock;

use crate::events::{publish, AppEvent};
use crate::platform::macos::app;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, sel, YES};

/// Release OS resources when the application terminates.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn install_termination_observer() {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    let block = RcBlock::new(move |_note: id| {
        app::shutdown();
    });

    let name: id = msg_send![
        get_class("NSString"),
        stringWithUTF8String: c"NSApplicationWillTerminateNotification".as_ptr()
    ];
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}

/// Observe the workspace notifications that tend to invalidate a Carbon
/// registration (wake from sleep, session unlock, Space change) and
/// request a rebuild each time one fires.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn install_wakeup_space_observers() {
    let workspace: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let center: id = msg_send![workspace, notificationCenter];

    let observe = |notification: &std::ffi::CStr| {
        let name: id = msg_send![
            get_class("NSString"),
            stringWithUTF8String: notification.as_ptr()
        ];
        let block = RcBlock::new(move |_note: id| {
            publish(AppEvent::ReregisterHotkey);
        });
        let _: id =
            msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
    };

    observe(c"NSWorkspaceDidWakeNotification");
    observe(c"NSWorkspaceSessionDidBecomeActiveNotification");
    observe(c"NSWorkspaceActiveSpaceDidChangeNotification");
}

/// Start the repeating keepalive timer. Fires `keepAlive` on `target`
/// every minute; the handler re-registers against current settings, which
/// is idempotent when the registration is already healthy.
///
/// # Safety
/// `target` must be a valid object responding to `keepAlive`. Must be
/// called from the main thread.
pub unsafe fn start_registration_keepalive(target: id) {
    let timer_class = get_class("NSTimer");
    let _: id = msg_send![
        timer_class,
        scheduledTimerWithTimeInterval: 60.0f64,
        target: target,
        selector: sel!(keepAlive),
        userInfo: nil,
        repeats: YES
    ];
}
