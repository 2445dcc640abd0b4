use newsdash_core::{ConfigError, FeedConfig};
use std::time::Duration;

#[test]
fn defaults_match_reference_values() {
    let config = FeedConfig::default();
    assert_eq!(config.trending_threshold(), 5);
    assert_eq!(config.load_delay(), Duration::from_millis(500));
    assert_eq!(config.viewer_name(), "You");
    assert_eq!(
        config.viewer_avatar(),
        "/placeholder.svg?height=40&width=40"
    );
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let config = FeedConfig::from_json_str(r#"{"trending_threshold": 30, "viewer_name": " Ada "}"#)
        .expect("partial config should parse");
    assert_eq!(config.trending_threshold(), 30);
    assert_eq!(config.viewer_name(), "Ada");
    assert_eq!(config.load_delay(), Duration::from_millis(500));

    assert_eq!(FeedConfig::from_json_str("{}").expect("empty object should parse"), FeedConfig::default());
}

#[test]
fn invalid_values_are_rejected_with_typed_errors() {
    let err = FeedConfig::from_json_str(r#"{"trending_threshold": -1}"#)
        .expect_err("negative threshold should be rejected");
    assert!(matches!(err, ConfigError::NegativeTrendingThreshold(-1)));
    assert!(err.to_string().contains("trending_threshold must be >= 0"));

    let err = FeedConfig::from_json_str(r#"{"viewer_name": "  "}"#)
        .expect_err("blank viewer name should be rejected");
    assert!(matches!(err, ConfigError::BlankViewerName));
    assert!(err.to_string().contains("viewer_name must not be blank"));
}

#[test]
fn malformed_input_is_a_parse_error() {
    let err = FeedConfig::from_json_str(r#"{"unknown": true}"#)
        .expect_err("unknown field should be rejected");
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("unknown field"));

    let err = FeedConfig::from_json_str("{").expect_err("truncated json should be rejected");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_delay_override() {
    let config = FeedConfig::default().with_load_delay(Duration::from_millis(20));
    assert_eq!(config.load_delay(), Duration::from_millis(20));
}
