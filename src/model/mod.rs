//! Application domain model.
//!
//! Pure data types shared by every tier: shortcut definitions, screen
//! geometry and the persisted settings snapshot. Nothing here touches FFI,
//! so the whole module is testable on any platform.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod constants;
pub mod hotzone;
pub mod settings;
pub mod shortcut;

pub use constants::*;
pub use hotzone::{DisplayBounds, HotzonePoint};
pub use settings::HotkeySettings;
pub use shortcut::{Modifiers, ShortcutDefinition};
