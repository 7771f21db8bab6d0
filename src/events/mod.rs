//! Event bus connecting OS callbacks to application logic.
//!
//! Everything interesting happens in callbacks that must not re-enter
//! application state: the Carbon hotkey handler, NSEvent monitor blocks,
//! menu actions. Each of them just publishes an `AppEvent`; a timer on the
//! main run loop drains the queue and dispatches with full access to the
//! app.
//!
//! # Architecture
//!
//! ```text
//! Carbon handler ──┐
//! NSEvent blocks ──┼─ publish() ──> mpsc channel ──> take_event() ── dispatch
//! menu actions  ───┤                                  (main-thread timer)
//! store observer ──┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use hotzone::events::{init_event_bus, publish, take_event, AppEvent};
//!
//! init_event_bus();
//! publish(AppEvent::HotkeyActivated);
//! while let Some(event) = take_event() {
//!     // handle event
//! }
//! ```
//!
//! # Module Structure
//!
//! - `types`: the `AppEvent` enum
//! - `bus`: the global channel and its publish/drain API

pub mod bus;
pub mod types;

pub use bus::{drain_events, init_event_bus, publish, take_event};
pub use types::AppEvent;
