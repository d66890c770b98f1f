//! Contract layer: messages, serialized shape, logging, configuration.

use super::common::{capture_logs, checks_on, expect_violation};
use lockstep::contracts::config::{self, AlreadyResolved};
use lockstep::contracts::{catch_violation, install_panic_hook, ContractConfig, ContractKind};
use lockstep::Violation;

// ============================================================================
// MESSAGES
// ============================================================================

#[test]
fn test_contract_message_names_condition_kind_and_location() {
    checks_on();
    let v = expect_violation(|| lockstep::require!(1 + 1 == 3));

    let message = v.to_string();
    assert!(
        message.starts_with("1 + 1 == 3 failed precondition DBC test in "),
        "unexpected message: {}",
        message
    );
    assert!(message.contains("tests/unit/contracts.rs:"));
    assert!(message.ends_with(&format!(":{}", v.line())));
}

#[test]
fn test_each_kind_reports_itself() {
    checks_on();
    let kinds = [
        expect_violation(|| lockstep::require!(false)).kind(),
        expect_violation(|| lockstep::check!(false)).kind(),
        expect_violation(|| lockstep::ensure!(false)).kind(),
    ];
    assert_eq!(
        kinds,
        [
            Some(ContractKind::Precondition),
            Some(ContractKind::Intermediate),
            Some(ContractKind::Postcondition),
        ]
    );
}

#[test]
fn test_stub_messages() {
    let v = expect_violation(|| -> u8 { lockstep::not_implemented!("sparse zip") });
    assert!(v.to_string().starts_with("sparse zip not implemented at tests/unit/contracts.rs:"));
    assert_eq!(v.kind(), None);

    let v = expect_violation(|| -> u8 { lockstep::not_reachable!() });
    assert!(v
        .to_string()
        .starts_with("Logically unreachable code block reached at tests/unit/contracts.rs:"));
}

#[test]
fn test_passing_checks_return_normally() {
    checks_on();
    let result = catch_violation(|| {
        lockstep::require!(true);
        lockstep::check!(2 > 1);
        lockstep::ensure!("abc".len() == 3);
        "done"
    });
    assert_eq!(result, Ok("done"));
}

// ============================================================================
// STRUCTURED OUTPUT
// ============================================================================

#[test]
fn test_violation_serializes_with_tag() {
    checks_on();
    let v = expect_violation(|| lockstep::check!(0 > 1));
    let json = serde_json::to_value(&v).unwrap();

    assert_eq!(json["violation"], "contract");
    assert_eq!(json["condition"], "0 > 1");
    assert_eq!(json["kind"], "intermediate");
    assert_eq!(json["file"], "tests/unit/contracts.rs");
    assert_eq!(json["line"], v.line());
}

#[test]
fn test_stub_violations_serialize() {
    let v = expect_violation(|| -> () { lockstep::not_reachable!() });
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["violation"], "not_reachable");
    assert!(json.get("condition").is_none());

    let v = expect_violation(|| -> () { lockstep::not_implemented!(String::from("owned")) });
    assert!(matches!(v, Violation::NotImplemented { .. }));
    assert_eq!(serde_json::to_value(&v).unwrap()["message"], "owned");
}

#[test]
fn test_violation_is_logged_before_unwinding() {
    checks_on();
    let (result, logs) = capture_logs(|| catch_violation(|| lockstep::require!(false)));

    assert!(result.is_err());
    assert!(logs.contains("ERROR"), "logs: {}", logs);
    assert!(logs.contains("lockstep::contracts"), "logs: {}", logs);
    assert!(logs.contains("precondition"), "logs: {}", logs);
}

// ============================================================================
// HANDLERS AND CONFIGURATION
// ============================================================================

#[test]
fn test_panic_hook_is_idempotent() {
    install_panic_hook();
    install_panic_hook();

    checks_on();
    assert!(catch_violation(|| lockstep::require!(false)).is_err());
}

#[test]
#[should_panic(expected = "not a violation")]
fn test_foreign_panics_are_resumed() {
    let _ = catch_violation(|| panic!("not a violation"));
}

#[test]
fn test_install_after_resolution_is_rejected() {
    checks_on();
    let err = config::install(ContractConfig::disabled()).unwrap_err();
    assert_eq!(
        err,
        AlreadyResolved {
            current: ContractConfig::enabled()
        }
    );
    assert!(err.to_string().contains("already resolved"));
    assert!(lockstep::contracts::enabled());
}
