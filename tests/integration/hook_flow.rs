use warden::authz::prelude::{
    AccountId, Caller, CallerId, ExecutionDecision, Level, VisibilityDecision, Warden,
    DENIAL_MESSAGE,
};

use crate::helpers::config::sample_config;

fn engine() -> Warden {
    let warden = Warden::new();
    warden.reload(&sample_config(), None);
    warden
}

#[test]
fn visibility_then_execution_denies_an_unlisted_elevated_command() {
    let warden = engine();
    let caller = Caller::account(CallerId::new(1), AccountId::new(11));

    // The host asks about an elevated command outside the whitelist: the
    // standard gate runs, and the attempt is recorded for re-validation.
    assert_eq!(
        warden.visibility_check(caller, "Ban Target", Level::new(3)),
        VisibilityDecision::Standard
    );

    let decision = warden.execution_check(caller, ".ban target someone");
    assert_eq!(
        decision,
        ExecutionDecision::Deny {
            message: DENIAL_MESSAGE
        }
    );
}

#[test]
fn whitelisted_command_bypasses_visibility_and_executes() {
    let warden = engine();
    let caller = Caller::account(CallerId::new(2), AccountId::new(42));

    assert_eq!(
        warden.visibility_check(caller, "b", Level::new(2)),
        VisibilityDecision::Bypass
    );
    assert_eq!(
        warden.execution_check(caller, ".b"),
        ExecutionDecision::Proceed
    );
}

#[test]
fn floor_commands_pass_both_gates_for_everyone() {
    let warden = engine();
    let caller = Caller::account(CallerId::new(3), AccountId::new(42));

    // "look" is not on account 42's whitelist, but the host reports it as
    // requiring no privilege.
    assert_eq!(
        warden.visibility_check(caller, "look", Level::FLOOR),
        VisibilityDecision::Standard
    );
    assert_eq!(
        warden.execution_check(caller, ".look"),
        ExecutionDecision::Proceed
    );
    assert!(warden.is_command_allowed(AccountId::new(42), "look"));
}

#[test]
fn correlation_table_tracks_the_latest_attempt_per_caller() {
    let warden = engine();
    let caller = Caller::account(CallerId::new(4), AccountId::new(11));

    warden.visibility_check(caller, "b", Level::new(2));
    warden.visibility_check(caller, "Ban  Target", Level::new(3));

    assert_eq!(
        warden.handler_command(CallerId::new(4)),
        Some("ban target".to_string())
    );

    // The execution gate re-validates the latest attempt, not the first.
    assert_eq!(
        warden.execution_check(caller, ".ban target"),
        ExecutionDecision::Deny {
            message: DENIAL_MESSAGE
        }
    );
}

#[test]
fn distinct_callers_do_not_share_correlation_entries() {
    let warden = engine();
    let first = Caller::account(CallerId::new(5), AccountId::new(42));
    let second = Caller::account(CallerId::new(6), AccountId::new(42));

    warden.visibility_check(first, "b", Level::new(2));

    assert_eq!(warden.handler_command(CallerId::new(5)), Some("b".to_string()));
    assert_eq!(warden.handler_command(CallerId::new(6)), None);
    assert_eq!(
        warden.execution_check(second, ".b"),
        ExecutionDecision::Proceed
    );
}

#[test]
fn console_callers_are_never_gated() {
    let warden = engine();
    let console = Caller::console(CallerId::new(7));

    assert_eq!(
        warden.visibility_check(console, "b", Level::new(2)),
        VisibilityDecision::Standard
    );
    assert_eq!(
        warden.execution_check(console, ".b"),
        ExecutionDecision::Proceed
    );
}
