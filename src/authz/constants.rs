//! Configuration key namespace and fixed strings.

use crate::authz::id::AccountId;

/// Comma-separated list of account identifiers to manage.
pub const ACCOUNT_IDS_KEY: &str = "Warden.AccountIds";
/// Privilege level applied when no preset or override applies.
pub const DEFAULT_LEVEL_KEY: &str = "Warden.DefaultLevel";
/// Comma-separated command whitelist applied by default.
pub const DEFAULT_COMMANDS_KEY: &str = "Warden.DefaultCommands";
/// Comma-separated list of preset names to register.
pub const PRESETS_KEY: &str = "Warden.Presets";

/// Key prefix shared by all per-account options.
pub const ACCOUNT_KEY_PREFIX: &str = "Warden.Account.";

/// Distributed-defaults override file, read first.
pub const OVERRIDE_DIST_FILE: &str = "warden.conf.dist";
/// Local override file, read second; wins per field.
pub const OVERRIDE_FILE: &str = "warden.conf";

/// Fixed denial message. Never reveals why access was denied.
pub const DENIAL_MESSAGE: &str = "You are not allowed to use this command.";

pub fn preset_level_key(name: &str) -> String {
    format!("Warden.Preset.{name}.Level")
}

pub fn preset_commands_key(name: &str) -> String {
    format!("Warden.Preset.{name}.Commands")
}

pub fn account_preset_key(account: AccountId) -> String {
    format!("{ACCOUNT_KEY_PREFIX}{account}.Preset")
}

pub fn account_level_key(account: AccountId) -> String {
    format!("{ACCOUNT_KEY_PREFIX}{account}.Level")
}

pub fn account_commands_key(account: AccountId) -> String {
    format!("{ACCOUNT_KEY_PREFIX}{account}.Commands")
}
