use cert_is::{cert, CertError, Value};

#[test]
fn is_accepts_a_member_of_the_allowed_set() {
    cert!("foo").is(["foo"]).unwrap();
    cert!("foo").is(["foo", "bar"]).unwrap();
    cert!("foo", "bar").is(["foo", "bar"]).unwrap();
}

#[test]
fn is_rejects_a_non_member() {
    let error = cert!("foo").is(["bar"]).unwrap_err();
    assert!(matches!(error, CertError::ValueAssertion { .. }));
    assert_eq!(error.to_string(), "[ERR_INVALID_VALUE]: Value is invalid");
}

#[test]
fn is_not_is_the_dual_of_is() {
    cert!("foo").is_not(["bar"]).unwrap();
    let error = cert!("foo").is_not(["foo"]).unwrap_err();
    assert!(matches!(error, CertError::ValueAssertion { .. }));
}

#[test]
fn membership_uses_strict_equality() {
    // "1" is not 1, and NaN never equals itself.
    cert!("1").is_not([1]).unwrap();
    cert!(f64::NAN).is([f64::NAN]).unwrap_err();

    let symbol = Value::symbol("tag");
    cert!(symbol.clone()).is([symbol]).unwrap();
    cert!(Value::symbol("tag")).is([Value::symbol("tag")]).unwrap_err();
}

#[test]
fn all_subjects_must_pass() {
    cert!(1, 2, 3).is([1, 2, 3]).unwrap();
    cert!(1, 2, 9).is([1, 2, 3]).unwrap_err();
    cert!(1, 2, 3).is_not([9]).unwrap();
    cert!(1, 2, 9).is_not([9]).unwrap_err();
}

#[test]
fn empty_subject_list_passes_vacuously() {
    cert_is::cert_all(vec![]).is(["anything"]).unwrap();
    cert_is::cert_all(vec![]).is_not(["anything"]).unwrap();
}

#[test]
fn chains_certify_in_order() {
    let certifier = cert!("foo");
    certifier.is(["foo"]).unwrap().is_not(["bar"]).unwrap();
}

#[test]
fn message_override_applies_to_later_failures() {
    let mut certifier = cert!(123);
    let error = certifier.message("X").is(["y"]).unwrap_err();
    assert_eq!(error.to_string(), "[ERR_INVALID_VALUE]: X");
    assert_eq!(error.code(), "ERR_INVALID_VALUE");
}

#[test]
fn message_override_persists_until_overwritten() {
    let mut certifier = cert!(123);
    certifier.message("first");
    assert_eq!(
        certifier.is(["y"]).unwrap_err().to_string(),
        "[ERR_INVALID_VALUE]: first"
    );
    assert_eq!(
        certifier.is_not([123]).unwrap_err().to_string(),
        "[ERR_INVALID_VALUE]: first"
    );
    certifier.message("second");
    assert_eq!(
        certifier.is(["y"]).unwrap_err().to_string(),
        "[ERR_INVALID_VALUE]: second"
    );
}
