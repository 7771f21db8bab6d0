//! Platform-specific code.
//!
//! Everything below this module talks to the OS. Only macOS is supported;
//! the binary refuses to start elsewhere while the pure core still
//! compiles and tests everywhere.

#[cfg(target_os = "macos")]
pub mod macos;
