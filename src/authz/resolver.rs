//! Three-layer merge of defaults, presets and per-account overrides.
//!
//! Presets are profiles: an assignment replaces both fields of the
//! defaults wholesale. Per-account overrides are patches: each field
//! replaces independently, leaving the other inherited. The merge runs
//! once per reload; queries only ever read the materialized result.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::authz::account::AccountRegistry;
use crate::authz::id::AccountId;
use crate::authz::level::Level;
use crate::authz::preset::PresetRegistry;

/// Process-wide fallback applied when no preset or override matches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Defaults {
    pub level: Level,
    pub commands: HashSet<String>,
}

/// Which layers produced an account's effective configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Provenance {
    Defaults,
    Preset { name: String },
    PresetWithOverrides { name: String },
    Overrides,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Defaults => write!(f, "defaults"),
            Provenance::Preset { name } => write!(f, "preset '{name}'"),
            Provenance::PresetWithOverrides { name } => write!(f, "preset '{name}' + overrides"),
            Provenance::Overrides => write!(f, "overrides"),
        }
    }
}

/// Fully resolved configuration for one managed account.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveConfig {
    pub level: Level,
    pub commands: HashSet<String>,
    pub provenance: Provenance,
}

/// Materializes the effective configuration for every managed account.
pub fn build_effective_configs(
    defaults: &Defaults,
    presets: &PresetRegistry,
    registry: &AccountRegistry,
) -> HashMap<AccountId, EffectiveConfig> {
    let mut configs = HashMap::with_capacity(registry.accounts.len());

    for &account in &registry.accounts {
        let mut level = defaults.level;
        let mut commands = defaults.commands.clone();

        // Registered assignments always point at existing presets; the
        // account registry rejects unknown names before storing them.
        let assigned = registry
            .assignments
            .get(&account)
            .and_then(|name| presets.lookup(name).map(|preset| (name.as_str(), preset)));
        if let Some((_, preset)) = assigned {
            level = preset.level;
            commands = preset.commands.clone();
        }

        let overridden = match registry.overrides.get(&account) {
            Some(patch) => {
                if let Some(patched) = patch.level {
                    level = patched;
                }
                if let Some(patched) = &patch.commands {
                    commands = patched.clone();
                }
                true
            }
            None => false,
        };

        let provenance = match (assigned, overridden) {
            (Some((name, _)), false) => Provenance::Preset {
                name: name.to_string(),
            },
            (Some((name, _)), true) => Provenance::PresetWithOverrides {
                name: name.to_string(),
            },
            (None, true) => Provenance::Overrides,
            (None, false) => Provenance::Defaults,
        };

        tracing::info!(
            target: "warden::reload",
            account = %account,
            level = level.rank(),
            commands = ?sorted_commands(&commands),
            provenance = %provenance,
            "resolved account"
        );

        configs.insert(
            account,
            EffectiveConfig {
                level,
                commands,
                provenance,
            },
        );
    }

    configs
}

/// Deterministic ordering for logging a command set.
pub(crate) fn sorted_commands(commands: &HashSet<String>) -> Vec<&str> {
    let mut sorted: Vec<&str> = commands.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}
