//! Reload outcome reporting.
//!
//! Every degraded configuration entry is kept as a structured
//! [`ReloadWarning`] on the [`ReloadSummary`] and emitted once through
//! `tracing` at the point it is observed. No warning ever aborts a reload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::authz::id::AccountId;
use crate::authz::level::Level;

/// A configuration entry that was degraded during a reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReloadWarning {
    /// A list entry that failed to parse as an account identifier.
    MalformedAccountToken { token: String },
    /// An account referenced a preset name that was never registered.
    UnknownPreset { account: AccountId, name: String },
    /// A configured privilege rank above the maximum, clamped down.
    ClampedLevel {
        context: String,
        configured: u32,
        max: u32,
    },
    /// A later preset assignment replaced an earlier one for the account.
    DuplicateAssignment {
        account: AccountId,
        previous: String,
        replacement: String,
    },
}

/// Outcome of one reload epoch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReloadSummary {
    pub epoch: Uuid,
    pub reloaded_at: DateTime<Utc>,
    pub managed_accounts: usize,
    pub presets: usize,
    pub warnings: Vec<ReloadWarning>,
}

impl ReloadSummary {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("serialize")
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Collects warnings during a reload, logging each once on arrival.
#[derive(Debug, Default)]
pub struct WarningSink {
    warnings: Vec<ReloadWarning>,
}

impl WarningSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: ReloadWarning) {
        match &warning {
            ReloadWarning::MalformedAccountToken { token } => {
                tracing::warn!(target: "warden::reload", token = %token, "ignoring invalid account id token");
            }
            ReloadWarning::UnknownPreset { account, name } => {
                tracing::warn!(
                    target: "warden::reload",
                    account = %account,
                    preset = %name,
                    "dropping assignment to unknown preset"
                );
            }
            ReloadWarning::ClampedLevel {
                context,
                configured,
                max,
            } => {
                tracing::warn!(
                    target: "warden::reload",
                    context = %context,
                    configured,
                    max,
                    "clamping configured level to maximum"
                );
            }
            ReloadWarning::DuplicateAssignment {
                account,
                previous,
                replacement,
            } => {
                tracing::warn!(
                    target: "warden::reload",
                    account = %account,
                    previous = %previous,
                    replacement = %replacement,
                    "replacing earlier preset assignment"
                );
            }
        }
        self.warnings.push(warning);
    }

    /// Clamps a configured rank into range, recording a warning when the
    /// raw value lies above the maximum.
    pub fn clamp_level(&mut self, raw: u32, context: &str) -> Level {
        if Level::exceeds_max(raw) {
            self.push(ReloadWarning::ClampedLevel {
                context: context.to_string(),
                configured: raw,
                max: Level::MAX.rank(),
            });
            Level::MAX
        } else {
            Level::new(raw)
        }
    }

    pub fn warnings(&self) -> &[ReloadWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ReloadWarning> {
        self.warnings
    }
}
