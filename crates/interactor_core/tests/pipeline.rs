//! Tests for the `execute` lifecycle.
//!
//! These tests verify:
//! - Plain units return their computation's value
//! - Field validation failures and their error map
//! - Before/after validate hooks and their ordering
//! - Before/after execute hooks and value capture


use interactor_core::prelude::*;
use test_utils::{CallLog, rule_message};

// ─────────────────────────────────────────────────────────────────────────────
// Plain units
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Lifecycle, Validate)]
struct Subject {
    a: i64,
}

impl Interaction for Subject {
    type Output = i64;

    fn run(&mut self) -> InteractionResult<i64> {
        Ok(1)
    }
}

#[test]
fn returns_computation_value() {
    let value = execute(&mut Subject { a: 2 }).unwrap();
    assert_eq!(value, 1);
}

#[test]
fn plain_unit_is_left_untouched() {
    let mut subject = Subject { a: 2 };
    execute(&mut subject).unwrap();
    assert_eq!(subject.a, 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Lifecycle, Validate)]
struct SubjectValidate {
    #[validate(gte = 4)]
    a: i64,
    #[validate(gte = 4)]
    b: i64,
}

impl Interaction for SubjectValidate {
    type Output = i64;

    fn run(&mut self) -> InteractionResult<i64> {
        Ok(1)
    }
}

#[test]
fn invalid_unit_returns_error() {
    let result = execute(&mut SubjectValidate { a: 2, b: 0 });
    assert!(result.is_err());
    assert!(result.unwrap_err().is_validation());
}

#[test]
fn invalid_unit_error_detail() {
    let err = execute(&mut SubjectValidate { a: 2, b: 0 }).unwrap_err();
    let map = err.error_map().expect("validation error carries a map");

    assert_eq!(map["a"][0], rule_message("a", "gte"));
    assert_eq!(map["b"][0], rule_message("b", "gte"));
    assert_eq!(map.len(), 2);
}

#[test]
fn only_violated_fields_are_reported() {
    let err = execute(&mut SubjectValidate { a: 9, b: 0 }).unwrap_err();
    let map = err.error_map().unwrap();

    assert!(!map.contains("a"));
    assert_eq!(map.fields().collect::<Vec<_>>(), ["b"]);
}

#[test]
fn valid_unit_runs() {
    assert_eq!(execute(&mut SubjectValidate { a: 4, b: 7 }).unwrap(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Validate hooks
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Lifecycle, Validate)]
struct SubjectBeforeValidate {
    a: i64,
    #[hooks(before = "set_a")]
    validate_hooks: ValidateHooks,
}

impl SubjectBeforeValidate {
    fn set_a(&mut self) {
        self.a = 4;
    }
}

impl Interaction for SubjectBeforeValidate {
    type Output = i64;

    fn run(&mut self) -> InteractionResult<i64> {
        Ok(self.a)
    }
}

#[test]
fn before_validate_hook_runs() {
    let value = execute(&mut SubjectBeforeValidate {
        a: 2,
        validate_hooks: ValidateHooks,
    })
    .unwrap();
    assert_eq!(value, 4);
}

#[derive(Lifecycle, Validate)]
struct SubjectMultipleBeforeValidate {
    #[validate(gte = 4)]
    a: i64,
    #[hooks(before = "set_a|set_b")]
    validate_hooks: ValidateHooks,
}

impl SubjectMultipleBeforeValidate {
    fn set_a(&mut self) {
        self.a += 4;
    }

    fn set_b(&mut self) {
        self.a += 4;
    }
}

impl Interaction for SubjectMultipleBeforeValidate {
    type Output = i64;

    fn run(&mut self) -> InteractionResult<i64> {
        Ok(self.a)
    }
}

#[test]
fn multiple_before_validate_hooks_run_and_fix_validation() {
    let value = execute(&mut SubjectMultipleBeforeValidate {
        a: 2,
        validate_hooks: ValidateHooks,
    })
    .unwrap();
    assert_eq!(value, 10);
}

#[derive(Lifecycle, Validate)]
struct SubjectAfterValidate {
    a: i64,
    #[hooks(after = "set_a")]
    validate_hooks: ValidateHooks,
}

impl SubjectAfterValidate {
    fn set_a(&mut self) {
        self.a += 4;
    }
}

impl Interaction for SubjectAfterValidate {
    type Output = i64;

    fn run(&mut self) -> InteractionResult<i64> {
        Ok(self.a)
    }
}

#[test]
fn after_validate_hook_runs() {
    let value = execute(&mut SubjectAfterValidate {
        a: 2,
        validate_hooks: ValidateHooks,
    })
    .unwrap();
    assert_eq!(value, 6);
}

#[derive(Lifecycle, Validate)]
struct SubjectAfterValidateWithValidation {
    #[validate(gte = 4)]
    a: i64,
    #[hooks(after = "set_a")]
    validate_hooks: ValidateHooks,
}

impl SubjectAfterValidateWithValidation {
    fn set_a(&mut self) {
        self.a += 4;
    }
}

impl Interaction for SubjectAfterValidateWithValidation {
    type Output = i64;

    fn run(&mut self) -> InteractionResult<i64> {
        Ok(self.a)
    }
}

#[test]
fn after_validate_hook_does_not_fix_validation() {
    let mut subject = SubjectAfterValidateWithValidation {
        a: 2,
        validate_hooks: ValidateHooks,
    };
    let result = execute(&mut subject);

    assert!(result.is_err());
    // The after hook never ran.
    assert_eq!(subject.a, 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Execute hooks
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Lifecycle, Validate)]
struct SubjectBeforeExecute {
    a: i64,
    #[hooks(before = "set_a")]
    execute_hooks: ExecuteHooks,
}

impl SubjectBeforeExecute {
    fn set_a(&mut self) {
        self.a += 4;
    }
}

impl Interaction for SubjectBeforeExecute {
    type Output = i64;

    fn run(&mut self) -> InteractionResult<i64> {
        Ok(self.a)
    }
}

#[test]
fn before_execute_hook_runs() {
    let value = execute(&mut SubjectBeforeExecute {
        a: 2,
        execute_hooks: ExecuteHooks,
    })
    .unwrap();
    assert_eq!(value, 6);
}

#[derive(Lifecycle, Validate)]
struct SubjectMultipleBeforeExecutes {
    a: i64,
    #[hooks(before = "set_a|set_b")]
    execute_hooks: ExecuteHooks,
}

impl SubjectMultipleBeforeExecutes {
    fn set_a(&mut self) {
        self.a += 4;
    }

    fn set_b(&mut self) {
        self.a += 4;
    }
}

impl Interaction for SubjectMultipleBeforeExecutes {
    type Output = i64;

    fn run(&mut self) -> InteractionResult<i64> {
        Ok(self.a)
    }
}

#[test]
fn multiple_before_execute_hooks_run() {
    let value = execute(&mut SubjectMultipleBeforeExecutes {
        a: 2,
        execute_hooks: ExecuteHooks,
    })
    .unwrap();
    assert_eq!(value, 10);
}

#[derive(Lifecycle, Validate)]
struct SubjectAfterExecute {
    a: i64,
    #[hooks(after = "set_a")]
    execute_hooks: ExecuteHooks,
    log: CallLog,
}

impl SubjectAfterExecute {
    fn set_a(&mut self) {
        self.log.record("set_a");
        self.a += 4;
    }
}

impl Interaction for SubjectAfterExecute {
    type Output = i64;

    fn run(&mut self) -> InteractionResult<i64> {
        self.log.record("run");
        Ok(self.a)
    }
}

#[test]
fn after_execute_hook_runs_after_value_is_captured() {
    let log = CallLog::new();
    let mut subject = SubjectAfterExecute {
        a: 2,
        execute_hooks: ExecuteHooks,
        log: log.clone(),
    };

    let value = execute(&mut subject).unwrap();

    assert_eq!(log.calls(), ["run", "set_a"]);
    assert_eq!(value, 2);
    assert_eq!(subject.a, 6);
}

// ─────────────────────────────────────────────────────────────────────────────
// Full lifecycle ordering
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Lifecycle, Validate)]
struct Traced {
    #[validate(required)]
    name: String,
    #[hooks(before = "normalize|check_ready", after = "validated")]
    validate_hooks: ValidateHooks,
    #[hooks(before = "prepare", after = "cleanup")]
    execute_hooks: ExecuteHooks,
    log: CallLog,
}

impl Traced {
    fn new(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            validate_hooks: ValidateHooks,
            execute_hooks: ExecuteHooks,
            log: log.clone(),
        }
    }

    fn normalize(&mut self) {
        self.log.record("normalize");
        self.name = self.name.trim().to_string();
    }

    fn check_ready(&mut self) {
        self.log.record("check_ready");
    }

    fn validated(&mut self) {
        self.log.record("validated");
    }

    fn prepare(&mut self) {
        self.log.record("prepare");
    }

    fn cleanup(&mut self) {
        self.log.record("cleanup");
    }
}

impl Interaction for Traced {
    type Output = String;

    fn run(&mut self) -> InteractionResult<String> {
        self.log.record("run");
        Ok(self.name.clone())
    }
}

#[test]
fn lifecycle_runs_in_order() {
    let log = CallLog::new();
    let value = execute(&mut Traced::new("  ada ", &log)).unwrap();

    assert_eq!(value, "ada");
    assert_eq!(
        log.calls(),
        [
            "normalize",
            "check_ready",
            "validated",
            "prepare",
            "run",
            "cleanup"
        ]
    );
}

#[test]
fn validation_failure_stops_after_before_hooks() {
    let log = CallLog::new();
    let err = execute(&mut Traced::new("   ", &log)).unwrap_err();

    assert_eq!(err.error_map().unwrap()["name"][0], rule_message("name", "required"));
    assert_eq!(log.calls(), ["normalize", "check_ready"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Failing computations
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Lifecycle, Validate)]
struct Failing {
    #[hooks(after = "cleanup")]
    execute_hooks: ExecuteHooks,
    log: CallLog,
}

impl Failing {
    fn cleanup(&mut self) {
        self.log.record("cleanup");
    }
}

impl Interaction for Failing {
    type Output = ();

    fn run(&mut self) -> InteractionResult<()> {
        Err(InteractionError::execution("ledger unavailable"))
    }
}

#[test]
fn failing_computation_skips_after_execute_hooks() {
    let log = CallLog::new();
    let err = execute(&mut Failing {
        execute_hooks: ExecuteHooks,
        log: log.clone(),
    })
    .unwrap_err();

    assert_eq!(err, InteractionError::Execution("ledger unavailable".to_string()));
    assert!(err.error_map().is_none());
    assert!(!log.was_called("cleanup"));
}
