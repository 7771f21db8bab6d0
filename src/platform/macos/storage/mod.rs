//! Persistence layer for macOS.

pub mod preferences;

pub use preferences::UserDefaultsBackend;
