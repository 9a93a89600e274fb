//! Decision surface for the host command-dispatch callbacks.
//!
//! The host framework owns the dispatch pipeline and invokes these two
//! narrow methods synchronously: once before a command becomes visible to
//! a caller, and once when a command is about to execute. The engine
//! keeps no reference to the host's object graph; callers are described
//! by a stable identity plus an optional account.

use crate::authz::constants::DENIAL_MESSAGE;
use crate::authz::engine::Warden;
use crate::authz::id::{AccountId, CallerId};
use crate::authz::level::Level;

/// A command invoker as seen by the host framework.
///
/// `account` is `None` for console callers, which always take the
/// standard path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Caller {
    pub id: CallerId,
    pub account: Option<AccountId>,
}

impl Caller {
    pub fn console(id: CallerId) -> Self {
        Self { id, account: None }
    }

    pub fn account(id: CallerId, account: AccountId) -> Self {
        Self {
            id,
            account: Some(account),
        }
    }
}

/// Outcome of the pre-visibility callback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisibilityDecision {
    /// Let the host's standard availability check run.
    Standard,
    /// Whitelisted elevated command: skip the host's availability check.
    Bypass,
}

/// Outcome of the pre-execution callback.
///
/// `Deny` doubles as the error-flag signal; the host forwards the fixed
/// message to the caller and aborts the dispatch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecutionDecision {
    Proceed,
    Deny { message: &'static str },
}

impl Warden {
    /// Pre-visibility callback: `(command, intrinsic required level,
    /// caller)`.
    ///
    /// Always records the command's metadata and the caller's last
    /// attempted command, then decides whether the host's own
    /// availability check may be skipped for a whitelisted elevated
    /// command.
    pub fn visibility_check(
        &self,
        caller: Caller,
        command: &str,
        required: Level,
    ) -> VisibilityDecision {
        self.remember_command_metadata(command, required);
        self.remember_handler_command(caller.id, command);

        let account = match caller.account {
            Some(account) => account,
            None => return VisibilityDecision::Standard,
        };
        if !self.is_account_allowed(account) {
            return VisibilityDecision::Standard;
        }
        if required <= Level::FLOOR {
            return VisibilityDecision::Standard;
        }
        if !self.is_command_allowed(account, command) {
            return VisibilityDecision::Standard;
        }

        VisibilityDecision::Bypass
    }

    /// Pre-execution callback: `(caller, raw command string)`.
    ///
    /// Re-validates the caller's last attempted command after the host's
    /// visibility gate has already run once. The raw command string is
    /// not consulted; the correlation table carries the normalized name
    /// recorded at visibility time.
    pub fn execution_check(&self, caller: Caller, _raw_command: &str) -> ExecutionDecision {
        let account = match caller.account {
            Some(account) => account,
            None => return ExecutionDecision::Proceed,
        };
        if !self.is_account_allowed(account) {
            return ExecutionDecision::Proceed;
        }

        let command = match self.handler_command(caller.id) {
            Some(command) => command,
            None => return ExecutionDecision::Proceed,
        };

        if let Some(required) = self.command_required_level(&command) {
            if required <= Level::FLOOR {
                return ExecutionDecision::Proceed;
            }
        }

        if self.is_command_allowed(account, &command) {
            return ExecutionDecision::Proceed;
        }

        ExecutionDecision::Deny {
            message: DENIAL_MESSAGE,
        }
    }

    /// Level the host should apply to a managed account whose session
    /// level drifted from the configured one; `None` when unmanaged or
    /// already in sync.
    pub fn login_level_sync(&self, account: AccountId, current: Level) -> Option<Level> {
        if !self.is_account_allowed(account) {
            return None;
        }
        let configured = self.account_level(account);
        if configured == current {
            return None;
        }
        Some(configured)
    }

    /// Serverside visibility level to report for a managed account that
    /// is currently hidden; `None` when unmanaged, at the floor, or
    /// already in sync. The host decides whether the caller is hidden
    /// before asking.
    pub fn gm_visibility_level(&self, account: AccountId, current: Level) -> Option<Level> {
        if !self.is_account_allowed(account) {
            return None;
        }
        let configured = self.account_level(account);
        if configured <= Level::FLOOR {
            return None;
        }
        if configured == current {
            return None;
        }
        Some(configured)
    }
}
