//! Compact-suffix and scientific notation.

use crate::style::NumberStyle;

use super::{parts, DIGIT_EPSILON, NEGLIGIBLE};

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// `1K` / `2.5M` / `1B`; below one thousand, a plain truncated integer.
pub(crate) fn compact(style: &NumberStyle, value: f64) -> String {
    let negative = value < 0.0;
    let magnitude = value.abs();

    let (scaled, suffix) = if magnitude >= BILLION {
        (magnitude / BILLION, "B")
    } else if magnitude >= MILLION {
        (magnitude / MILLION, "M")
    } else if magnitude >= THOUSAND {
        (magnitude / THOUSAND, "K")
    } else {
        let text = (magnitude as i128).to_string();
        return parts::apply_sign(style, text, negative, value);
    };

    let text = format!("{}{}", compact_value(style, scaled), suffix);
    parts::apply_sign(style, text, negative, value)
}

/// The scaled mantissa in front of the suffix: configured fraction digits
/// when present, otherwise one decimal place with a trailing `.0` dropped.
fn compact_value(style: &NumberStyle, value: f64) -> String {
    if let Some(max) = style.max_fraction_digits {
        let multiplier = 10f64.powi(max as i32);
        let rounded = (value * multiplier).round() / multiplier;
        let int_part = rounded as i128;
        let fraction_part = rounded - int_part as f64;

        let mut fraction_text = String::new();
        if max > 0 {
            fraction_text = parts::fraction_digits(fraction_part, max);
            parts::trim_fraction(&mut fraction_text, style.min_fraction_digits);
        }

        if !fraction_text.is_empty() {
            return format!("{int_part}.{fraction_text}");
        }
        if let Some(min) = style.min_fraction_digits {
            if min > 0 {
                return format!("{int_part}.{}", "0".repeat(min));
            }
        }
        return int_part.to_string();
    }

    let rounded = (value * 10.0).round() / 10.0;
    if rounded == rounded.trunc() {
        return (rounded as i128).to_string();
    }
    let int_part = rounded as i128;
    let fraction_part = rounded - int_part as f64;
    if fraction_part == 0.0 {
        return int_part.to_string();
    }
    let digit = (fraction_part * 10.0 + DIGIT_EPSILON) as i128;
    format!("{int_part}.{digit}")
}

/// `{mantissa}E{exponent}` with the mantissa normalized into `[1, 10)`.
pub(crate) fn scientific(style: &NumberStyle, value: f64) -> String {
    let negative = value < 0.0;
    let magnitude = value.abs();

    if magnitude == 0.0 {
        return parts::apply_sign(style, "0E0".to_string(), negative, value);
    }

    let exponent = magnitude.log10().floor() as i32;
    let mantissa = magnitude / 10f64.powi(exponent);

    let text = format!("{}E{}", mantissa_text(style, mantissa), exponent);
    parts::apply_sign(style, text, negative, value)
}

/// The mantissa is always in `[1, 10)`, so a significant-digit target maps
/// to `target - 1` decimal places; without one, up to six places.
fn mantissa_text(style: &NumberStyle, mantissa: f64) -> String {
    if let Some((_, max)) = style.significant_digits {
        let target = max.unwrap_or(3);
        if target <= 1 {
            return (mantissa.round() as i128).to_string();
        }
        let places = target - 1;

        let multiplier = 10f64.powi(places as i32);
        let rounded = (mantissa * multiplier).round() / multiplier;
        let int_part = rounded as i128;
        let fraction_part = rounded - int_part as f64;
        if fraction_part.abs() < NEGLIGIBLE {
            return int_part.to_string();
        }

        let mut fraction_text = parts::fraction_digits(fraction_part, places);
        while fraction_text.ends_with('0') {
            fraction_text.pop();
        }
        if fraction_text.is_empty() {
            return int_part.to_string();
        }
        return format!("{int_part}.{fraction_text}");
    }

    if mantissa == mantissa.trunc() {
        return (mantissa as i128).to_string();
    }

    let rounded = (mantissa * 1_000_000.0).round() / 1_000_000.0;
    let int_part = rounded as i128;
    let fraction_part = rounded - int_part as f64;
    if fraction_part.abs() < NEGLIGIBLE {
        return int_part.to_string();
    }

    let mut fraction_text = parts::fraction_digits(fraction_part, 6);
    while fraction_text.ends_with('0') {
        fraction_text.pop();
    }
    format!("{int_part}.{fraction_text}")
}

#[cfg(test)]
mod tests {
    use crate::precision::Precision;
    use crate::style::NumberStyle;
    use crate::types::{Notation, SignDisplay};
    use pretty_assertions::assert_eq;

    fn compact() -> NumberStyle {
        NumberStyle::new().notation(Notation::Compact)
    }

    fn scientific() -> NumberStyle {
        NumberStyle::new().notation(Notation::Scientific)
    }

    #[test]
    fn compact_thresholds() {
        assert_eq!(compact().format(999), "999");
        assert_eq!(compact().format(1000), "1K");
        assert_eq!(compact().format(1500), "1.5K");
        assert_eq!(compact().format(1_000_000), "1M");
        assert_eq!(compact().format(2_500_000), "2.5M");
        assert_eq!(compact().format(1_000_000_000), "1B");
        assert_eq!(compact().format(1_234_000_000_000i64), "1234B");
    }

    #[test]
    fn compact_below_one_thousand_truncates() {
        assert_eq!(compact().format(999.9), "999");
        assert_eq!(compact().format(0.5), "0");
    }

    #[test]
    fn compact_negative_values() {
        assert_eq!(compact().format(-1500), "-1.5K");
        assert_eq!(compact().format(-999), "-999");
    }

    #[test]
    fn compact_with_configured_fractions() {
        let style = compact().precision(Precision::fraction_length(2));
        assert_eq!(style.format(1234), "1.23K");
        assert_eq!(style.format(1000), "1.00K");

        let trimmed = compact().precision(Precision::fraction_range(0..=2));
        assert_eq!(trimmed.format(1500), "1.5K");
        assert_eq!(trimmed.format(1000), "1K");
    }

    #[test]
    fn scientific_zero() {
        assert_eq!(scientific().format(0), "0E0");
        assert_eq!(
            scientific()
                .sign(SignDisplay::Always { include_zero: true })
                .format(0),
            "+0E0"
        );
    }

    #[test]
    fn scientific_basic() {
        assert_eq!(scientific().format(1234), "1.234E3");
        assert_eq!(scientific().format(100), "1E2");
        assert_eq!(scientific().format(-1234), "-1.234E3");
    }

    #[test]
    fn scientific_sub_unity_has_negative_exponent() {
        assert_eq!(scientific().format(0.00123), "1.23E-3");
    }

    #[test]
    fn scientific_with_significant_digits() {
        let style = scientific().precision(Precision::significant_digits(2));
        assert_eq!(style.format(1234), "1.2E3");

        let wide = scientific().precision(Precision::significant_digits(5));
        assert_eq!(wide.format(1234), "1.234E3");
    }

    #[test]
    fn notation_bypasses_fraction_precision() {
        // Scientific ignores the fraction-length configuration entirely.
        let style = scientific().precision(Precision::fraction_length(1));
        assert_eq!(style.format(1234), "1.234E3");
    }
}
