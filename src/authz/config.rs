//! Structured configuration source boundary.
//!
//! The host owns the real option store; the engine only reads raw string
//! values through [`ConfigSource`]. [`MemoryConfig`] is the in-process
//! implementation used by tests and embedding hosts.

use std::collections::HashMap;

/// Read-only key/value configuration store.
pub trait ConfigSource: Send + Sync {
    /// Raw value for a key, if configured.
    fn get(&self, key: &str) -> Option<String>;

    /// Value parsed as an unsigned integer. A present but non-numeric
    /// value is treated as unset, with a warning.
    fn get_u32(&self, key: &str) -> Option<u32> {
        let raw = self.get(key)?;
        match raw.trim().parse::<u32>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(
                    target: "warden::config",
                    key,
                    value = %raw,
                    "ignoring non-numeric config value"
                );
                None
            }
        }
    }
}

/// A HashMap-backed config source.
#[derive(Clone, Debug, Default)]
pub struct MemoryConfig {
    values: HashMap<String, String>,
}

impl MemoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl ConfigSource for MemoryConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
