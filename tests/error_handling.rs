use focusgate::error::{notification_title, user_friendly_message};
use focusgate::FocusError;

#[test]
fn test_user_friendly_messages() {
    let msg = user_friendly_message(&FocusError::InvalidInput("-1".into()));
    assert_eq!(msg, "Please enter a valid time.");

    let msg = user_friendly_message(&FocusError::QuizNotActive("idle".into()));
    assert!(msg.contains("Start the timer"));

    let msg = user_friendly_message(&FocusError::ConfigError("bad".into()));
    assert!(msg.contains("Configuration error: bad"));
}

#[test]
fn test_notification_titles() {
    assert_eq!(notification_title(&FocusError::InvalidInput("x".into())), "Error");
    assert_eq!(notification_title(&FocusError::QuizNotActive("x".into())), "Quiz");
}

#[test]
fn test_toml_errors_become_config_errors() {
    let err: FocusError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
    assert!(matches!(err, FocusError::ConfigError(_)));
}
