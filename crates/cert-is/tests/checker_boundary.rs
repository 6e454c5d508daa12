use cert_is::{check, CertError, Class};

#[test]
fn passing_checks_report_true() {
    assert!(check!("foo").is(["foo"]).unwrap());
    assert!(check!("foo").is_not(["bar"]).unwrap());
    assert!(check!("foo").is_type(["string"]).unwrap());
    assert!(check!(15).is_gt(2.0).unwrap());
    assert!(check!(15).is_range(0.0, 20.0, true, true).unwrap());
}

#[test]
fn assertion_failures_become_false_not_errors() {
    assert!(!check!("foo").is(["bar"]).unwrap());
    assert!(!check!("foo").is_not(["foo"]).unwrap());
    assert!(!check!("foo").is_type(["number"]).unwrap());
    assert!(!check!(1).is_gt(5.0).unwrap());
    assert!(!check!(25).is_range(0.0, 20.0, true, true).unwrap());
}

#[test]
fn class_checks_mirror_the_certifier() {
    let object = Class::base("Object");
    let map = object.derive("Map");
    let set = object.derive("Set");
    assert!(check!(map.construct()).is_type([&map]).unwrap());
    assert!(check!(map.construct()).is_type([&object]).unwrap());
    assert!(!check!(map.construct()).is_type([&set]).unwrap());
}

#[test]
fn argument_errors_still_propagate() {
    let error = check!("foo").is_type(["bar"]).unwrap_err();
    assert!(matches!(error, CertError::TypeArgument { .. }));

    let error = check!("foo").is_gt("").unwrap_err();
    assert!(matches!(error, CertError::TypeArgument { .. }));

    let error = check!(5).is_range(10.0, 0.0, true, true).unwrap_err();
    assert!(matches!(error, CertError::RangeArgument { .. }));
}

#[test]
fn non_numeric_subjects_surface_through_the_checker() {
    let error = check!("foo").is_gt(2.0).unwrap_err();
    match error {
        CertError::TypeArgument { param, .. } => assert_eq!(param, "values[0]"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn checker_is_reusable_across_calls() {
    let checker = check!(15);
    assert!(checker.is_gt(2.0).unwrap());
    assert!(!checker.is_lt(10.0).unwrap());
    assert!(checker.is_lte(15.0).unwrap());
}

#[test]
fn message_is_a_passthrough() {
    let checker = check!("foo");
    assert!(!checker.message("ignored").is(["bar"]).unwrap());
}

#[test]
fn multi_subject_checks_require_all_to_pass() {
    assert!(check!(12, 22, 32).is_gt(2.0).unwrap());
    assert!(!check!(12, 22, 32).is_gt(20.0).unwrap());
}
