//! Global event bus.
//!
//! A single mpsc channel shared through `OnceLock` statics. Producers call
//! `publish()` from anywhere (Carbon handler, NSEvent monitor blocks, menu
//! actions); the main-thread dispatch loop drains with `take_event()`.
//! `init_event_bus()` must run once at startup before any producer fires.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use crate::events::types::AppEvent;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();
static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Create the channel. Panics if called twice.
pub fn init_event_bus() {
    let (sender, receiver) = channel();
    SENDER
        .set(sender)
        .expect("event bus already initialized");
    RECEIVER
        .set(Mutex::new(receiver))
        .expect("event bus already initialized");
}

/// Queue an event for the dispatch loop. Silently drops the event if the
/// bus was never initialized, which only happens in stripped-down tests.
pub fn publish(event: AppEvent) {
    if let Some(sender) = SENDER.get() {
        let _ = sender.send(event);
    }
}

/// Pop one pending event, if any.
pub fn take_event() -> Option<AppEvent> {
    let receiver = RECEIVER.get()?;
    let guard = receiver.lock().ok()?;
    guard.try_recv().ok()
}

/// Drain everything currently queued.
pub fn drain_events() -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Some(event) = take_event() {
        events.push(event);
    }
    events
}
