use crate::HttpStatusCode;

/// **VALUE**: Verifies which statuses trigger the credentials hint in failure logs.
#[test]
fn given_status_codes_when_classified_then_only_401_and_403_are_auth_failures() {
    assert!(HttpStatusCode(401).is_auth_failure());
    assert!(HttpStatusCode(403).is_auth_failure());
    assert!(!HttpStatusCode(404).is_auth_failure());
    assert!(!HttpStatusCode(422).is_auth_failure());
    assert!(!HttpStatusCode(500).is_auth_failure());
}

#[test]
fn given_status_code_when_displayed_then_prints_number() {
    assert_eq!(HttpStatusCode::from(422).to_string(), "422");
}
