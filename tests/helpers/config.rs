use std::path::PathBuf;

use warden::authz::prelude::MemoryConfig;

/// A three-tier sample configuration: defaults, one preset, and accounts
/// exercising every override layer.
///
/// - account 42: preset only
/// - account 7: preset plus a level-only override
/// - account 11: defaults only
/// - account 9: commands-only override
pub fn sample_config() -> MemoryConfig {
    MemoryConfig::new()
        .with("Warden.AccountIds", "42,7,11,9")
        .with("Warden.DefaultLevel", "1")
        .with("Warden.DefaultCommands", "a")
        .with("Warden.Presets", "p")
        .with("Warden.Preset.p.Level", "3")
        .with("Warden.Preset.p.Commands", "b")
        .with("Warden.Account.42.Preset", "p")
        .with("Warden.Account.7.Preset", "p")
        .with("Warden.Account.7.Level", "2")
        .with("Warden.Account.9.Commands", "c")
}

/// Creates a unique scratch directory under the system temp dir.
pub fn temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}
