//! String key-value store abstraction
//!
//! Version properties persist a version's canonical string form under a
//! domain-scoped key. The store itself only deals in strings; parsing and
//! defaulting policy live in the property layer.

use std::collections::HashMap;

/// A synchronous string key-value store
///
/// Implement this over whatever backs your settings storage: a settings
/// file, a database table, a process-wide cache. The property accessors
/// never interpret a missing key as an error.
pub trait StringStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str);

    /// Remove the value stored under `key`, if any
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
