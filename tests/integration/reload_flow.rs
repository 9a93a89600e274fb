use warden::authz::prelude::{
    AccountId, EnginePhase, Level, MemoryConfig, ReloadWarning, Warden,
};

use crate::helpers::config::sample_config;

#[test]
fn reload_resolves_every_override_layer() {
    let warden = Warden::new();
    assert_eq!(warden.phase(), EnginePhase::Unloaded);

    let summary = warden.reload(&sample_config(), None);
    assert_eq!(warden.phase(), EnginePhase::Ready);
    assert_eq!(summary.managed_accounts, 4);
    assert_eq!(summary.presets, 1);
    assert!(summary.warnings.is_empty());

    // Preset replaces the defaults wholesale.
    let preset_only = AccountId::new(42);
    assert_eq!(warden.account_level(preset_only), Level::new(3));
    assert!(!warden.is_command_allowed(preset_only, "a"));
    assert!(warden.is_command_allowed(preset_only, "b"));

    // Level-only override patches the preset without touching commands.
    let patched = AccountId::new(7);
    assert_eq!(warden.account_level(patched), Level::new(2));
    assert!(warden.is_command_allowed(patched, "b"));
    assert!(!warden.is_command_allowed(patched, "a"));

    // Defaults-only account mirrors the defaults exactly.
    let plain = AccountId::new(11);
    assert_eq!(warden.account_level(plain), Level::new(1));
    assert!(warden.is_command_allowed(plain, "a"));
    assert!(!warden.is_command_allowed(plain, "b"));

    // Commands-only override keeps the inherited default level.
    let listed = AccountId::new(9);
    assert_eq!(warden.account_level(listed), Level::new(1));
    assert!(warden.is_command_allowed(listed, "c"));
    assert!(!warden.is_command_allowed(listed, "a"));
}

#[test]
fn degraded_entries_surface_as_warnings_without_aborting() {
    let warden = Warden::new();
    let summary = warden.reload(
        &MemoryConfig::new()
            .with("Warden.AccountIds", "1, bogus ,2")
            .with("Warden.Account.1.Preset", "ghost")
            .with("Warden.Account.2.Level", "999"),
        None,
    );

    // Both parseable accounts stay managed.
    assert!(warden.is_account_allowed(AccountId::new(1)));
    assert!(warden.is_account_allowed(AccountId::new(2)));
    assert_eq!(warden.account_level(AccountId::new(2)), Level::MAX);

    assert_eq!(summary.warnings.len(), 3);
    assert!(summary
        .warnings
        .iter()
        .any(|warning| matches!(warning, ReloadWarning::MalformedAccountToken { .. })));
    assert!(summary
        .warnings
        .iter()
        .any(|warning| matches!(warning, ReloadWarning::UnknownPreset { .. })));
    assert!(summary
        .warnings
        .iter()
        .any(|warning| matches!(warning, ReloadWarning::ClampedLevel { configured: 999, .. })));
}

#[test]
fn reload_discards_the_previous_epoch_entirely() {
    let warden = Warden::new();
    warden.reload(&sample_config(), None);
    warden.remember_command_metadata("look", Level::FLOOR);

    let summary = warden.reload(
        &MemoryConfig::new()
            .with("Warden.AccountIds", "100")
            .with("Warden.DefaultCommands", "d"),
        None,
    );

    assert_eq!(summary.managed_accounts, 1);
    assert!(!warden.is_account_allowed(AccountId::new(42)));
    assert!(warden.is_account_allowed(AccountId::new(100)));
    assert!(warden.is_command_allowed(AccountId::new(100), "d"));
    // Command metadata from the previous epoch is gone: the floor rule no
    // longer applies to "look".
    assert!(!warden.is_command_allowed(AccountId::new(100), "look"));
    assert_eq!(warden.command_required_level("look"), None);
}

#[test]
fn summaries_serialize_for_host_consumption() {
    let warden = Warden::new();
    let summary = warden.reload(&sample_config(), None);

    let decoded =
        warden::authz::prelude::ReloadSummary::from_json(summary.to_json()).expect("deserialize");
    assert_eq!(summary, decoded);
}
