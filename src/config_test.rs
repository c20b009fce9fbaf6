use super::*;

#[test]
fn default_targets_local_service() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.endpoint_url(), "http://127.0.0.1:5000/get_response");
    assert_eq!(cfg.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
    assert_eq!(cfg.number_locale, NumberLocale::ID);
}

#[test]
fn from_json_keeps_defaults_for_missing_fields() {
    let cfg = WidgetConfig::from_json(r#"{"assistant_name": "Warung Bot"}"#).unwrap();
    assert_eq!(cfg.assistant_name, "Warung Bot");
    assert_eq!(cfg.user_label, "You");
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn from_json_trims_trailing_slashes() {
    let cfg = WidgetConfig::from_json(r#"{"api_base": "https://menu.example.test/", "endpoint_path": "/ask/"}"#)
        .unwrap();
    assert_eq!(cfg.endpoint_url(), "https://menu.example.test/ask");
}

#[test]
fn from_json_parses_number_locale() {
    let cfg = WidgetConfig::from_json(r#"{"number_locale": {"group": ",", "decimal": "."}}"#).unwrap();
    assert_eq!(cfg.number_locale, NumberLocale::EN);
}

#[test]
fn from_json_rejects_blank_api_base() {
    let err = WidgetConfig::from_json(r#"{"api_base": " / "}"#).unwrap_err();
    assert_eq!(err, ConfigError::Invalid("api_base"));
}

#[test]
fn from_json_rejects_blank_endpoint() {
    let err = WidgetConfig::from_json(r#"{"endpoint_path": ""}"#).unwrap_err();
    assert_eq!(err, ConfigError::Invalid("endpoint_path"));
}

#[test]
fn from_json_reports_malformed_json() {
    let err = WidgetConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid widget config JSON"));
}

#[test]
fn image_url_joins_with_single_slash() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.image_url("static/images/soto.jpg"), "http://127.0.0.1:5000/static/images/soto.jpg");
    assert_eq!(cfg.image_url("/static/images/soto.jpg"), "http://127.0.0.1:5000/static/images/soto.jpg");
}

#[test]
fn image_url_blank_reference_uses_placeholder() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.image_url("  "), DEFAULT_PLACEHOLDER_IMAGE);
}
