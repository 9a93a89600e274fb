//! Managed-account registry built from configuration.
//!
//! Built by iterating the configured account-id list. A malformed token
//! degrades that single entry; processing always continues.

use std::collections::{HashMap, HashSet};

use crate::authz::config::ConfigSource;
use crate::authz::constants::{
    account_commands_key, account_level_key, account_preset_key, ACCOUNT_IDS_KEY,
};
use crate::authz::file_overrides::FileOverride;
use crate::authz::id::AccountId;
use crate::authz::level::Level;
use crate::authz::normalize::{normalize, normalized_tokens};
use crate::authz::preset::PresetRegistry;
use crate::authz::report::{ReloadWarning, WarningSink};

/// Per-account override patch. Both fields independently optional;
/// absence means "inherit from the layer below", not "empty".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountOverride {
    pub level: Option<Level>,
    pub commands: Option<HashSet<String>>,
}

/// The set of managed accounts plus their preset assignments and
/// override patches, as read from one configuration epoch.
#[derive(Clone, Debug, Default)]
pub struct AccountRegistry {
    pub accounts: HashSet<AccountId>,
    pub assignments: HashMap<AccountId, String>,
    pub overrides: HashMap<AccountId, AccountOverride>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from the `Warden.AccountIds` token list, the
    /// per-account structured keys, and the file-sourced fallback values.
    /// Structured values win over file values per individual field.
    pub fn from_config(
        config: &dyn ConfigSource,
        presets: &PresetRegistry,
        file_overrides: &HashMap<AccountId, FileOverride>,
        sink: &mut WarningSink,
    ) -> Self {
        let mut registry = Self::new();

        let ids = config.get(ACCOUNT_IDS_KEY).unwrap_or_default();
        for token in ids.split(',') {
            let trimmed = normalize(token);
            if trimmed.is_empty() {
                continue;
            }

            let account = match trimmed.parse::<u32>() {
                Ok(raw) => AccountId::new(raw),
                Err(_) => {
                    sink.push(ReloadWarning::MalformedAccountToken {
                        token: token.trim().to_string(),
                    });
                    continue;
                }
            };

            // First occurrence wins; duplicates are skipped silently.
            if !registry.accounts.insert(account) {
                continue;
            }

            let file_entry = file_overrides.get(&account);

            let assigned = config
                .get(&account_preset_key(account))
                .or_else(|| file_entry.and_then(|entry| entry.preset.clone()));
            if let Some(name) = assigned {
                registry.assign_preset(account, name, presets, sink);
            }

            let level_key = account_level_key(account);
            let level = match config.get_u32(&level_key) {
                Some(raw) => Some(sink.clamp_level(raw, &level_key)),
                None => file_entry
                    .and_then(|entry| entry.level)
                    .map(|raw| sink.clamp_level(raw, &level_key)),
            };

            let commands_list = match config.get(&account_commands_key(account)) {
                Some(list) if !list.trim().is_empty() => Some(list),
                _ => file_entry.and_then(|entry| entry.commands.clone()),
            };
            let commands = commands_list
                .map(|list| {
                    normalized_tokens(&list)
                        .into_iter()
                        .collect::<HashSet<String>>()
                })
                .filter(|set| !set.is_empty());

            if level.is_some() || commands.is_some() {
                tracing::debug!(
                    target: "warden::reload",
                    account = %account,
                    has_level = level.is_some(),
                    has_commands = commands.is_some(),
                    "configured account override"
                );
                registry
                    .overrides
                    .insert(account, AccountOverride { level, commands });
            }
        }

        registry
    }

    /// Resolves a preset assignment for `account`. Unknown preset names
    /// are dropped with a warning; the account stays managed under the
    /// defaults. A later assignment replaces an earlier one, also with a
    /// warning.
    pub fn assign_preset(
        &mut self,
        account: AccountId,
        name: impl Into<String>,
        presets: &PresetRegistry,
        sink: &mut WarningSink,
    ) {
        let name = normalize(&name.into());
        if name.is_empty() {
            return;
        }

        if presets.lookup(&name).is_none() {
            sink.push(ReloadWarning::UnknownPreset { account, name });
            return;
        }

        if let Some(previous) = self.assignments.insert(account, name.clone()) {
            sink.push(ReloadWarning::DuplicateAssignment {
                account,
                previous,
                replacement: name,
            });
        }
    }
}
