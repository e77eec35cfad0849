//! The conversion engine: normalization, special values, branch dispatch.
//!
//! Exactly one branch renders any given value, in priority order: notation
//! override, significant-digits override, shortest round-trip decimal,
//! fixed precision. All branches share the integer-part and sign helpers so
//! sign, zero, and rounding treatment agree across them.

mod decimal;
mod notation;
mod parts;
mod significant;

use crate::style::NumberStyle;
use crate::types::Notation;

/// Fractional residues below this are treated as zero.
pub(crate) const NEGLIGIBLE: f64 = 1e-10;

/// Added before truncating extracted fraction digits to counter binary
/// representation error.
pub(crate) const DIGIT_EPSILON: f64 = 0.000_000_1;

/// Render a floating-point value.
pub(crate) fn float(style: &NumberStyle, value: f64) -> String {
    let mut value = value * style.scale;

    // Rounding happens before anything else looks at the value. An
    // increment with fractional digits also imposes a minimum fraction
    // count so the quantization step stays visible in the output.
    let mut increment_min_frac = None;
    if let Some(rule) = style.rounding_rule {
        match style.rounding_increment {
            Some(increment) if increment > 0.0 && increment.is_finite() => {
                value = rule.apply(value / increment) * increment;
                increment_min_frac = fraction_digits_of(increment);
            }
            Some(increment) => {
                tracing::warn!(increment, "ignoring invalid rounding increment");
                value = rule.apply(value);
            }
            None => value = rule.apply(value),
        }
    }

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    match style.notation {
        Notation::Compact => {
            tracing::trace!(value, "compact branch");
            return notation::compact(style, value);
        }
        Notation::Scientific => {
            tracing::trace!(value, "scientific branch");
            return notation::scientific(style, value);
        }
        Notation::Automatic => {}
    }

    if let Some((min, max)) = style.significant_digits {
        tracing::trace!(value, ?min, ?max, "significant-digits branch");
        return significant::render(style, value, min, max);
    }

    decimal::render(style, value, increment_min_frac)
}

/// Render an integer that needs no floating-point handling.
pub(crate) fn integer(style: &NumberStyle, value: i128) -> String {
    let text = parts::integer_part(style, value.unsigned_abs());
    parts::apply_sign(style, text, value < 0, value as f64)
}

/// Count the decimal digits of `increment` by repeated scaling until the
/// fractional residue is negligible, bounded at 15 (f64 precision).
fn fraction_digits_of(increment: f64) -> Option<usize> {
    if increment.fract().abs() <= NEGLIGIBLE {
        return None;
    }
    let mut scaled = increment;
    let mut digits = 0;
    while scaled.fract().abs() > NEGLIGIBLE && digits < 15 {
        scaled *= 10.0;
        digits += 1;
    }
    Some(digits)
}
