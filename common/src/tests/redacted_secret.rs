// Unit tests for RedactedSecret
// Secrets come straight from the keyfile and must never reach logs

use crate::RedactedSecret;

/// **VALUE**: Verifies Debug and Display never print the secret.
///
/// **WHY THIS MATTERS**: CredentialEntry is logged with `{:?}` at debug level.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug replacing the manual impl.
#[test]
fn given_secret_when_formatted_then_value_is_hidden() {
    // GIVEN: A secret
    let secret = RedactedSecret::new("hunter2");

    // WHEN: Formatting it both ways
    let debug = format!("{secret:?}");
    let display = format!("{secret}");

    // THEN: Neither output contains the value
    assert!(!debug.contains("hunter2"));
    assert!(!display.contains("hunter2"));
    assert_eq!(secret.expose(), "hunter2");
}

/// **VALUE**: Verifies serialization is refused.
///
/// **BUG THIS CATCHES**: Would catch a derived Serialize leaking the secret into
/// a cart body or a report.
#[test]
fn given_secret_when_serialized_then_refuses() {
    let secret = RedactedSecret::new("hunter2");

    let result = serde_json::to_string(&secret);

    assert!(result.is_err(), "Serialization should be refused");
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Serialization Refused"));
    assert!(!message.contains("hunter2"));
}

/// **VALUE**: Verifies secrets deserialize from plain JSON strings.
///
/// **WHY THIS MATTERS**: The keyfile stores secrets as plain strings.
#[test]
fn given_json_string_when_deserialized_then_wraps_value() {
    let secret: RedactedSecret = serde_json::from_str("\"s3cr\u{e9}t\"").unwrap();

    assert_eq!(secret.expose(), "s3cr\u{e9}t");
}
