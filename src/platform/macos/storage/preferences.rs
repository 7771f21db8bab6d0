//! Settings persistence through NSUserDefaults.
//!
//! `UserDefaultsBackend` plugs the standard user defaults into
//! `SettingsStore`. Every getter probes `objectForKey:` first so an
//! absent key reads as `None` rather than Cocoa's zero default.

use std::ffi::{c_char, CStr};

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id};
use crate::store::SettingsBackend;

/// NSUserDefaults-backed key/value storage.
///
/// Main thread only, like the rest of the Cocoa layer.
#[derive(Default)]
pub struct UserDefaultsBackend;

impl UserDefaultsBackend {
    pub fn new() -> UserDefaultsBackend {
        UserDefaultsBackend
    }
}

unsafe fn standard_defaults() -> id {
    msg_send![get_class("NSUserDefaults"), standardUserDefaults]
}

unsafe fn has_key(ud: id, key: id) -> bool {
    let obj: id = msg_send![ud, objectForKey: key];
    obj != nil
}

impl SettingsBackend for UserDefaultsBackend {
    fn bool_value(&self, key: &str) -> Option<bool> {
        unsafe {
            let ud = standard_defaults();
            let k = nsstring_id(key);
            if !has_key(ud, k) {
                return None;
            }
            let value: bool = msg_send![ud, boolForKey: k];
            Some(value)
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        unsafe {
            let ud = standard_defaults();
            let _: () = msg_send![ud, setBool: value, forKey: nsstring_id(key)];
        }
    }

    fn int_value(&self, key: &str) -> Option<i64> {
        unsafe {
            let ud = standard_defaults();
            let k = nsstring_id(key);
            if !has_key(ud, k) {
                return None;
            }
            // NSInteger is i64 on 64-bit macOS
            let value: i64 = msg_send![ud, integerForKey: k];
            Some(value)
        }
    }

    fn set_int(&mut self, key: &str, value: i64) {
        unsafe {
            let ud = standard_defaults();
            let _: () = msg_send![ud, setInteger: value, forKey: nsstring_id(key)];
        }
    }

    fn float_value(&self, key: &str) -> Option<f64> {
        unsafe {
            let ud = standard_defaults();
            let k = nsstring_id(key);
            if !has_key(ud, k) {
                return None;
            }
            let value: f64 = msg_send![ud, doubleForKey: k];
            Some(value)
        }
    }

    fn set_float(&mut self, key: &str, value: f64) {
        unsafe {
            let ud = standard_defaults();
            let _: () = msg_send![ud, setDouble: value, forKey: nsstring_id(key)];
        }
    }

    fn string_value(&self, key: &str) -> Option<String> {
        unsafe {
            let ud = standard_defaults();
            let k = nsstring_id(key);
            let obj: id = msg_send![ud, stringForKey: k];
            if obj == nil {
                return None;
            }
            let cstr_ptr: *const c_char = msg_send![obj, UTF8String];
            if cstr_ptr.is_null() {
                return None;
            }
            Some(CStr::from_ptr(cstr_ptr).to_string_lossy().into_owned())
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        unsafe {
            let ud = standard_defaults();
            let _: () = msg_send![ud, setObject: nsstring_id(value), forKey: nsstring_id(key)];
        }
    }
}
