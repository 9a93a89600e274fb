//! Privilege level ordering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal privilege rank gating command visibility and execution.
///
/// [`Level::FLOOR`] denotes "no special privilege required"; commands at
/// that rank are open to everyone and bypass whitelist checks entirely.
/// Configured ranks are clamped into `[FLOOR, MAX]`; ranks reported by the
/// host for individual commands are stored as-is.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Level(u32);

impl Level {
    /// No special privilege.
    pub const FLOOR: Level = Level(0);
    /// Highest configurable rank.
    pub const MAX: Level = Level(3);

    pub const fn new(rank: u32) -> Self {
        Self(rank)
    }

    pub const fn rank(self) -> u32 {
        self.0
    }

    /// Whether a raw configured rank lies above the configurable maximum.
    pub const fn exceeds_max(raw: u32) -> bool {
        raw > Self::MAX.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
