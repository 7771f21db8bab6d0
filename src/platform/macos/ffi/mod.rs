//! FFI declarations and Objective-C helpers.

pub mod bridge;
pub mod carbon;

pub use carbon::*;
