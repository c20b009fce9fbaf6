use super::*;

const PLACEHOLDER: &str = "/placeholder-food.jpg";

#[test]
fn primary_reports_resolved_url() {
    let src = ImageSource::Primary("http://127.0.0.1:5000/img/soto.jpg".to_owned());
    assert_eq!(src.url(), "http://127.0.0.1:5000/img/soto.jpg");
    assert!(!src.is_fallback());
}

#[test]
fn first_error_switches_to_placeholder() {
    let mut src = ImageSource::Primary("http://127.0.0.1:5000/missing.jpg".to_owned());
    assert!(src.on_load_error(PLACEHOLDER));
    assert_eq!(src.url(), PLACEHOLDER);
    assert!(src.is_fallback());
}

#[test]
fn later_errors_do_not_loop() {
    let mut src = ImageSource::Primary("http://127.0.0.1:5000/missing.jpg".to_owned());
    assert!(src.on_load_error(PLACEHOLDER));
    assert!(!src.on_load_error("/other.jpg"));
    assert_eq!(src.url(), PLACEHOLDER);
}
