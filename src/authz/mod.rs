//! Warden authorization engine
//!
//! Layered authorization and per-command permission resolution for a
//! multi-tenant command surface.
//!
//! ## Features
//!
//! - **Three-tier overrides**: global defaults, named presets, and
//!   per-account patches resolved into one flat effective config
//! - **O(1) queries**: account membership, privilege level, and command
//!   permission against materialized state
//! - **Destructive reload**: every structure rebuilt from configuration,
//!   with a snapshot swap so readers never see a half-built epoch
//! - **Host callbacks**: narrow visibility/execution decision hooks for
//!   the command-dispatch framework
//!
//! # Example
//! ```rust,no_run
//! use warden::authz::prelude::{AccountId, MemoryConfig, Warden};
//!
//! let config = MemoryConfig::new()
//!     .with("Warden.AccountIds", "42")
//!     .with("Warden.DefaultLevel", "1")
//!     .with("Warden.Account.42.Commands", "gm fly");
//!
//! let warden = Warden::new();
//! warden.reload(&config, None);
//!
//! assert!(warden.is_account_allowed(AccountId::new(42)));
//! assert!(warden.is_command_allowed(AccountId::new(42), "GM  Fly"));
//! ```

pub mod account;
pub mod config;
pub mod constants;
pub mod engine;
pub mod file_overrides;
pub mod hooks;
pub mod id;
pub mod level;
pub mod normalize;
pub mod preset;
pub mod report;
pub mod resolver;

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::authz::account::{AccountOverride, AccountRegistry};
    pub use crate::authz::config::{ConfigSource, MemoryConfig};
    pub use crate::authz::constants::DENIAL_MESSAGE;
    pub use crate::authz::engine::{EnginePhase, Warden};
    pub use crate::authz::file_overrides::{read_file_overrides, FileOverride};
    pub use crate::authz::hooks::{Caller, ExecutionDecision, VisibilityDecision};
    pub use crate::authz::id::{AccountId, CallerId};
    pub use crate::authz::level::Level;
    pub use crate::authz::normalize::normalize;
    pub use crate::authz::preset::{Preset, PresetRegistry};
    pub use crate::authz::report::{ReloadSummary, ReloadWarning, WarningSink};
    pub use crate::authz::resolver::{Defaults, EffectiveConfig, Provenance};
}
