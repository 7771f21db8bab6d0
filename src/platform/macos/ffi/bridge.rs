//! Thin helpers over the objc2 ecosystem.
//!
//! Shared aliases and small functions used by every file that speaks
//! Objective-C. UI code works with raw `id` pointers plus `msg_send!`,
//! reaching for the typed objc2 wrappers only where they pay for
//! themselves (geometry types, NSString construction).

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel};

pub use objc2_foundation::{NSPoint, NSRect, NSSize};

use objc2::rc::Retained;
use objc2_app_kit::NSApplication;
use objc2_foundation::NSString;

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL constants (u8-backed, not Rust bool).
pub const YES: Bool = Bool::YES;
pub const NO: Bool = Bool::NO;

/// The shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString and return it as a raw id pointer. The pointer is
/// retained; ownership passes to the receiver it is handed to.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Look up a class by name, panicking if it is missing. Only used for
/// AppKit classes that are guaranteed present at runtime.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("class '{}' not found", name))
}

/// Run a closure inside a fresh autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
