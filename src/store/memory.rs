//! In-memory settings backend for tests.

use std::collections::HashMap;

use crate::store::SettingsBackend;

/// Backend holding values in plain maps. Starts empty, so a fresh
/// instance behaves like a first launch.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    bools: HashMap<String, bool>,
    ints: HashMap<String, i64>,
    floats: HashMap<String, f64>,
    strings: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> MemoryBackend {
        MemoryBackend::default()
    }
}

impl SettingsBackend for MemoryBackend {
    fn bool_value(&self, key: &str) -> Option<bool> {
        self.bools.get(key).copied()
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.bools.insert(key.to_string(), value);
    }

    fn int_value(&self, key: &str) -> Option<i64> {
        self.ints.get(key).copied()
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.ints.insert(key.to_string(), value);
    }

    fn float_value(&self, key: &str) -> Option<f64> {
        self.floats.get(key).copied()
    }

    fn set_float(&mut self, key: &str, value: f64) {
        self.floats.insert(key.to_string(), value);
    }

    fn string_value(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_string(), value.to_string());
    }
}
