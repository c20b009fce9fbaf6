//! Display formatting for result item prices and match scores.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::config::{NumberLocale, WidgetConfig};
use crate::state::turn::Price;

/// Label shown when a result item carries no price.
pub const PRICE_UNAVAILABLE: &str = "unavailable";

// Beyond this magnitude digit grouping stops being meaningful; show the
// plain float rendering instead.
const GROUPING_LIMIT: f64 = 1e21;

/// Format `value` with thousands grouping and up to three fraction digits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_grouped(value: f64, locale: NumberLocale) -> String {
    if !value.is_finite() || value.abs() >= GROUPING_LIMIT {
        return value.to_string();
    }

    let thousandths = (value.abs() * 1000.0).round() as u128;
    let whole = (thousandths / 1000).to_string();
    let fraction = thousandths % 1000;

    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 5);
    if value < 0.0 && thousandths > 0 {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(locale.group);
        }
        out.push(ch);
    }
    if fraction > 0 {
        out.push(locale.decimal);
        out.push_str(format!("{fraction:03}").trim_end_matches('0'));
    }
    out
}

/// Price text for a result card.
///
/// Amounts get the currency prefix and grouping; anything that could not be
/// read as a number is shown as received.
pub fn price_label(price: &Price, config: &WidgetConfig) -> String {
    match price {
        Price::Amount(value) => {
            let grouped = format_grouped(*value, config.number_locale);
            if config.currency_prefix.is_empty() {
                grouped
            } else {
                format!("{} {grouped}", config.currency_prefix)
            }
        }
        Price::Raw(raw) => raw.clone(),
        Price::Unavailable => PRICE_UNAVAILABLE.to_owned(),
    }
}

/// Rounded match percentage, or `None` when the score is absent or zero.
#[allow(clippy::cast_possible_truncation)]
pub fn match_label(score: Option<f64>) -> Option<String> {
    let score = score.filter(|s| s.is_finite() && *s != 0.0)?;
    Some(format!("{}%", (score * 100.0).round() as i64))
}
