//! Reload orchestration and the query engine.
//!
//! One writer, many readers: `reload` builds a fresh [`ResolvedState`]
//! off-lock and swaps it in atomically, so queries never observe a
//! half-built epoch. The two tracking maps are written from arbitrary
//! caller contexts and carry their own locks, independent of the swap.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::authz::account::AccountRegistry;
use crate::authz::config::ConfigSource;
use crate::authz::constants::{DEFAULT_COMMANDS_KEY, DEFAULT_LEVEL_KEY};
use crate::authz::file_overrides::read_file_overrides;
use crate::authz::id::{AccountId, CallerId};
use crate::authz::level::Level;
use crate::authz::normalize::{normalize, normalized_tokens};
use crate::authz::preset::PresetRegistry;
use crate::authz::report::{ReloadSummary, WarningSink};
use crate::authz::resolver::{build_effective_configs, sorted_commands, Defaults, EffectiveConfig};

/// Reload lifecycle phase.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnginePhase {
    Unloaded,
    Loading,
    Ready,
}

#[derive(Debug, Default)]
struct ResolvedState {
    defaults: Defaults,
    accounts: HashSet<AccountId>,
    effective: HashMap<AccountId, EffectiveConfig>,
}

/// The authorization engine.
///
/// Construct one instance per process, hand it by reference to whatever
/// owns the host-framework callback registration, and call [`reload`]
/// whenever configuration is (re)loaded. All queries are safe to call
/// concurrently with each other and with an in-progress reload.
///
/// [`reload`]: Warden::reload
#[derive(Debug)]
pub struct Warden {
    state: RwLock<Arc<ResolvedState>>,
    phase: RwLock<EnginePhase>,
    command_permissions: Mutex<HashMap<String, Level>>,
    last_command_by_caller: Mutex<HashMap<CallerId, String>>,
}

impl Warden {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Arc::new(ResolvedState::default())),
            phase: RwLock::new(EnginePhase::Unloaded),
            command_permissions: Mutex::new(HashMap::new()),
            last_command_by_caller: Mutex::new(HashMap::new()),
        }
    }

    pub fn phase(&self) -> EnginePhase {
        *self.phase.read().unwrap()
    }

    /// Tears down and rebuilds every structure from `config`, with the
    /// override file pair under `overrides_dir` as the per-account
    /// fallback source (`None` disables the fallback).
    ///
    /// Fully destructive: nothing from the previous epoch survives, the
    /// tracking maps included. Never fails; degraded entries surface as
    /// warnings on the returned summary.
    pub fn reload(
        &self,
        config: &dyn ConfigSource,
        overrides_dir: Option<&Path>,
    ) -> ReloadSummary {
        *self.phase.write().unwrap() = EnginePhase::Loading;
        self.command_permissions.lock().unwrap().clear();
        self.last_command_by_caller.lock().unwrap().clear();

        let mut sink = WarningSink::new();

        let level = match config.get_u32(DEFAULT_LEVEL_KEY) {
            Some(raw) => sink.clamp_level(raw, DEFAULT_LEVEL_KEY),
            None => Level::FLOOR,
        };
        let commands: HashSet<String> = config
            .get(DEFAULT_COMMANDS_KEY)
            .map(|list| normalized_tokens(&list).into_iter().collect())
            .unwrap_or_default();
        let defaults = Defaults { level, commands };
        tracing::info!(
            target: "warden::reload",
            level = defaults.level.rank(),
            commands = ?sorted_commands(&defaults.commands),
            "defaults loaded"
        );

        let presets = PresetRegistry::from_config(config, &mut sink);
        let file_overrides = match overrides_dir {
            Some(dir) => read_file_overrides(dir),
            None => HashMap::new(),
        };
        let registry = AccountRegistry::from_config(config, &presets, &file_overrides, &mut sink);
        let effective = build_effective_configs(&defaults, &presets, &registry);

        let state = ResolvedState {
            defaults,
            accounts: registry.accounts,
            effective,
        };
        let summary = ReloadSummary {
            epoch: Uuid::new_v4(),
            reloaded_at: Utc::now(),
            managed_accounts: state.accounts.len(),
            presets: presets.len(),
            warnings: sink.into_warnings(),
        };

        *self.state.write().unwrap() = Arc::new(state);
        *self.phase.write().unwrap() = EnginePhase::Ready;

        tracing::info!(
            target: "warden::reload",
            epoch = %summary.epoch,
            accounts = summary.managed_accounts,
            presets = summary.presets,
            warnings = summary.warnings.len(),
            "reload complete"
        );
        summary
    }

    /// Whether `account` is managed by this engine.
    pub fn is_account_allowed(&self, account: AccountId) -> bool {
        self.snapshot().accounts.contains(&account)
    }

    /// The effective privilege level for `account`; the default level for
    /// unmanaged accounts.
    pub fn account_level(&self, account: AccountId) -> Level {
        let state = self.snapshot();
        if !state.accounts.contains(&account) {
            return state.defaults.level;
        }
        state
            .effective
            .get(&account)
            .map(|config| config.level)
            .unwrap_or(state.defaults.level)
    }

    /// Whether `account` may use `command`.
    ///
    /// Unmanaged accounts and empty-normalized commands are always
    /// denied. A command the host reported as requiring no privilege is
    /// always allowed, regardless of whitelist contents.
    pub fn is_command_allowed(&self, account: AccountId, command: &str) -> bool {
        let state = self.snapshot();
        if !state.accounts.contains(&account) {
            return false;
        }

        let normalized = normalize(command);
        if normalized.is_empty() {
            return false;
        }

        if let Some(required) = self.command_permissions.lock().unwrap().get(&normalized) {
            if *required <= Level::FLOOR {
                return true;
            }
        }

        match state.effective.get(&account) {
            Some(config) => config.commands.contains(&normalized),
            None => state.defaults.commands.contains(&normalized),
        }
    }

    /// Records the privilege level the host says `command` intrinsically
    /// requires. Idempotent upsert; empty-normalized names are ignored.
    pub fn remember_command_metadata(&self, command: &str, required: Level) {
        let normalized = normalize(command);
        if normalized.is_empty() {
            return;
        }
        self.command_permissions
            .lock()
            .unwrap()
            .insert(normalized, required);
    }

    /// Intrinsic required level for `command`, if the host has reported it
    /// this epoch.
    pub fn command_required_level(&self, command: &str) -> Option<Level> {
        let normalized = normalize(command);
        if normalized.is_empty() {
            return None;
        }
        self.command_permissions
            .lock()
            .unwrap()
            .get(&normalized)
            .copied()
    }

    /// Records the last command `caller` attempted, bridging the
    /// visibility and execution callbacks. Overwrites on each attempt.
    pub fn remember_handler_command(&self, caller: CallerId, command: &str) {
        let normalized = normalize(command);
        if normalized.is_empty() {
            return;
        }
        self.last_command_by_caller
            .lock()
            .unwrap()
            .insert(caller, normalized);
    }

    /// The last normalized command `caller` attempted, if any.
    pub fn handler_command(&self, caller: CallerId) -> Option<String> {
        self.last_command_by_caller
            .lock()
            .unwrap()
            .get(&caller)
            .cloned()
    }

    fn snapshot(&self) -> Arc<ResolvedState> {
        self.state.read().unwrap().clone()
    }
}

impl Default for Warden {
    fn default() -> Self {
        Self::new()
    }
}
