use super::*;

// =============================================================
// Grouping
// =============================================================

#[test]
fn groups_thousands_with_locale_separator() {
    assert_eq!(format_grouped(15000.0, NumberLocale::ID), "15.000");
    assert_eq!(format_grouped(15000.0, NumberLocale::EN), "15,000");
}

#[test]
fn groups_millions() {
    assert_eq!(format_grouped(1_234_567.0, NumberLocale::ID), "1.234.567");
}

#[test]
fn small_values_have_no_separator() {
    assert_eq!(format_grouped(0.0, NumberLocale::ID), "0");
    assert_eq!(format_grouped(999.0, NumberLocale::ID), "999");
}

#[test]
fn fraction_is_limited_to_three_digits_and_trimmed() {
    assert_eq!(format_grouped(2500.5, NumberLocale::ID), "2.500,5");
    assert_eq!(format_grouped(1.23456, NumberLocale::EN), "1.235");
    assert_eq!(format_grouped(7.0001, NumberLocale::EN), "7");
}

#[test]
fn negative_values_keep_sign() {
    assert_eq!(format_grouped(-12345.0, NumberLocale::ID), "-12.345");
    assert_eq!(format_grouped(-0.0001, NumberLocale::ID), "0");
}

#[test]
fn non_finite_values_fall_back_to_plain_rendering() {
    assert_eq!(format_grouped(f64::NAN, NumberLocale::ID), "NaN");
    assert_eq!(format_grouped(f64::INFINITY, NumberLocale::ID), "inf");
}

// =============================================================
// Price labels
// =============================================================

#[test]
fn price_label_prefixes_currency() {
    let cfg = WidgetConfig::default();
    assert_eq!(price_label(&Price::Amount(15000.0), &cfg), "Rp 15.000");
}

#[test]
fn price_label_without_prefix() {
    let cfg = WidgetConfig { currency_prefix: String::new(), ..WidgetConfig::default() };
    assert_eq!(price_label(&Price::Amount(15000.0), &cfg), "15.000");
}

#[test]
fn price_label_shows_raw_value() {
    let cfg = WidgetConfig::default();
    assert_eq!(price_label(&Price::Raw("abc".to_owned()), &cfg), "abc");
}

#[test]
fn price_label_marks_unavailable() {
    let cfg = WidgetConfig::default();
    assert_eq!(price_label(&Price::Unavailable, &cfg), PRICE_UNAVAILABLE);
}

// =============================================================
// Match labels
// =============================================================

#[test]
fn match_label_rounds_percentage() {
    assert_eq!(match_label(Some(0.87)).as_deref(), Some("87%"));
    assert_eq!(match_label(Some(0.876)).as_deref(), Some("88%"));
    assert_eq!(match_label(Some(1.0)).as_deref(), Some("100%"));
}

#[test]
fn match_label_omitted_when_absent_or_zero() {
    assert_eq!(match_label(None), None);
    assert_eq!(match_label(Some(0.0)), None);
}
