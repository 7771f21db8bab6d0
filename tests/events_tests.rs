//! Tests for the global event bus.
//!
//! The bus is a process-wide singleton, so everything lives in a single
//! test function; separate #[test] functions would race on the shared
//! channel.

use hotzone::events::{drain_events, init_event_bus, publish, take_event, AppEvent};
use hotzone::model::HotzonePoint;

#[test]
fn event_bus_full_pass() {
    // Publishing before initialization drops the event rather than
    // panicking, so OS callbacks are safe during early startup.
    publish(AppEvent::RequestQuit);

    init_event_bus();
    assert_eq!(take_event(), None, "dropped pre-init event must not appear");

    // Events come back in publish order.
    publish(AppEvent::HotkeyActivated);
    publish(AppEvent::HotzoneSelected(HotzonePoint::new(812.0, 413.0)));
    publish(AppEvent::SetEnabled(false));

    assert_eq!(take_event(), Some(AppEvent::HotkeyActivated));
    assert_eq!(
        take_event(),
        Some(AppEvent::HotzoneSelected(HotzonePoint::new(812.0, 413.0)))
    );
    assert_eq!(take_event(), Some(AppEvent::SetEnabled(false)));
    assert_eq!(take_event(), None, "queue must be empty after the drain");

    // drain_events empties the whole queue in one call.
    publish(AppEvent::ReregisterHotkey);
    publish(AppEvent::RequestQuit);
    assert_eq!(
        drain_events(),
        vec![AppEvent::ReregisterHotkey, AppEvent::RequestQuit]
    );
    assert_eq!(take_event(), None);
}
