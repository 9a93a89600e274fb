//! Named preset bundles of privilege level and command whitelist.

use std::collections::{HashMap, HashSet};

use crate::authz::config::ConfigSource;
use crate::authz::constants::{preset_commands_key, preset_level_key, PRESETS_KEY};
use crate::authz::level::Level;
use crate::authz::normalize::{normalize, normalized_tokens};
use crate::authz::report::WarningSink;

/// A reusable bundle of privilege level and command whitelist.
///
/// Presets supersede the defaults wholesale when assigned: an absent
/// `Level` key registers at the floor, an absent `Commands` key registers
/// an empty set. Neither inherits from the defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Preset {
    pub level: Level,
    pub commands: HashSet<String>,
}

/// Registry of presets keyed by normalized name.
///
/// Rebuilt from scratch on every reload; re-registration under the same
/// name simply replaces prior state.
#[derive(Clone, Debug, Default)]
pub struct PresetRegistry {
    presets: HashMap<String, Preset>,
}

impl PresetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from the `Warden.Presets` list plus the
    /// per-preset `Level`/`Commands` keys.
    pub fn from_config(config: &dyn ConfigSource, sink: &mut WarningSink) -> Self {
        let mut registry = Self::new();

        let names = match config.get(PRESETS_KEY) {
            Some(names) => names,
            None => return registry,
        };

        for name in normalized_tokens(&names) {
            let level_key = preset_level_key(&name);
            let level = match config.get_u32(&level_key) {
                Some(raw) => sink.clamp_level(raw, &level_key),
                None => Level::FLOOR,
            };

            let commands: HashSet<String> = config
                .get(&preset_commands_key(&name))
                .map(|list| normalized_tokens(&list).into_iter().collect())
                .unwrap_or_default();

            tracing::debug!(
                target: "warden::reload",
                preset = %name,
                level = level.rank(),
                commands = commands.len(),
                "registered preset"
            );
            registry.register(name, Preset { level, commands });
        }

        registry
    }

    /// Stores a preset keyed by the normalized form of `name`.
    pub fn register(&mut self, name: impl Into<String>, preset: Preset) {
        let name = normalize(&name.into());
        if name.is_empty() {
            return;
        }
        self.presets.insert(name, preset);
    }

    pub fn lookup(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
