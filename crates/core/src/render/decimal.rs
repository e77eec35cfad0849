//! Plain decimal rendering: the shortest-round-trip fast path and the
//! fixed-precision path.

use crate::style::NumberStyle;
use crate::types::DecimalSeparatorDisplay;

use super::{parts, NEGLIGIBLE};

pub(crate) fn render(
    style: &NumberStyle,
    value: f64,
    increment_min_frac: Option<usize>,
) -> String {
    let negative = value < 0.0;
    let magnitude = value.abs();

    let min_fraction = match (style.min_fraction_digits, increment_min_frac) {
        (None, None) => None,
        (min, increment) => Some(min.unwrap_or(0).max(increment.unwrap_or(0))),
    };

    // With no precision bounds in play, the shortest decimal text that
    // parses back to the same bits wins. ryu switches to exponent notation
    // for extreme magnitudes; those fall through to the fixed path, which
    // keeps the output in plain decimal.
    if style.max_fraction_digits.is_none() && min_fraction.is_none() {
        let mut buffer = ryu::Buffer::new();
        let shortest = buffer.format_finite(magnitude);
        if !shortest.contains(['e', 'E']) {
            let (int_text, fraction) = match shortest.split_once('.') {
                Some((int_text, fraction)) => (int_text, fraction),
                None => (shortest, ""),
            };
            let fraction = if fraction.bytes().all(|b| b == b'0') {
                ""
            } else {
                fraction
            };
            let int_value: i128 = int_text.parse().unwrap_or(0);

            let mut text = parts::integer_part(style, int_value.unsigned_abs());
            if !fraction.is_empty() {
                text.push_str(&style.decimal_separator);
                text.push_str(fraction);
            } else if style.decimal_separator_display == DecimalSeparatorDisplay::Always {
                text.push_str(&style.decimal_separator);
            }
            return parts::apply_sign(style, text, negative, value);
        }
    }

    fixed(style, value, magnitude, negative, min_fraction)
}

/// Fixed-precision path: round to the effective fraction-digit count, split
/// on the units boundary by truncation, extract the fraction digits.
fn fixed(
    style: &NumberStyle,
    value: f64,
    magnitude: f64,
    negative: bool,
    min_fraction: Option<usize>,
) -> String {
    let mut fraction_count = style.max_fraction_digits.unwrap_or(15);
    if let Some(min) = min_fraction {
        fraction_count = fraction_count.max(min);
    }

    let rounded = match style.max_fraction_digits {
        Some(max) => {
            let multiplier = 10f64.powi(max as i32);
            (magnitude * multiplier).round() / multiplier
        }
        None => magnitude,
    };

    let int_part = rounded as i128;
    let fraction_part = rounded - int_part as f64;

    let int_text = parts::integer_part(style, int_part.unsigned_abs());

    if fraction_part.abs() < NEGLIGIBLE && min_fraction.is_none() {
        let mut text = int_text;
        if style.decimal_separator_display == DecimalSeparatorDisplay::Always {
            text.push_str(&style.decimal_separator);
        }
        return parts::apply_sign(style, text, negative, value);
    }

    let mut fraction_text = String::new();
    if fraction_count > 0 {
        fraction_text = parts::fraction_digits(fraction_part, fraction_count);
        parts::trim_fraction(&mut fraction_text, min_fraction);
    }

    let mut text = int_text;
    if !fraction_text.is_empty() {
        text.push_str(&style.decimal_separator);
        text.push_str(&fraction_text);
    } else if style.decimal_separator_display == DecimalSeparatorDisplay::Always {
        text.push_str(&style.decimal_separator);
    }
    parts::apply_sign(style, text, negative, value)
}
