//! Identifier newtypes for accounts and caller sessions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of an already-authenticated account.
///
/// The engine trusts this value; authentication happens upstream.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u32);

impl AccountId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AccountId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Opaque identity of a caller session.
///
/// Stable and comparable for the session's lifetime; never an object
/// identity, so the correlation table stays bounded by the number of
/// concurrently active callers.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(u64);

impl CallerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CallerId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
