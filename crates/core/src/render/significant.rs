//! Significant-digit rendering.

use crate::style::NumberStyle;

use super::parts;

pub(crate) fn render(
    style: &NumberStyle,
    value: f64,
    min: Option<usize>,
    max: Option<usize>,
) -> String {
    let negative = value < 0.0;
    let magnitude = value.abs();

    if magnitude == 0.0 {
        let min_digits = min.unwrap_or(1);
        let text = if min_digits <= 1 {
            "0".to_string()
        } else {
            format!("0.{}", "0".repeat(min_digits - 1))
        };
        return parts::apply_sign(style, text, negative, value);
    }

    // Within a (min, max) range the value's own digit count picks the
    // target; otherwise whichever bound is present does, defaulting to 3.
    let target = match (min, max) {
        (Some(min_sig), Some(max_sig)) => {
            let natural = natural_digit_count(magnitude);
            if natural < min_sig {
                min_sig
            } else if natural > max_sig {
                max_sig
            } else {
                natural
            }
        }
        _ => max.or(min).unwrap_or(3),
    };

    // Order of magnitude in O(1). Sub-unity values need ceil - 1 because
    // log10 is negative there and floor would land one place too low.
    let magnitude_order: i32 = if magnitude >= 1.0 {
        magnitude.log10().floor() as i32
    } else {
        magnitude.log10().ceil() as i32 - 1
    };

    let decimal_places = target as i32 - (magnitude_order + 1);

    let rounded = if decimal_places >= 0 {
        let multiplier = 10f64.powi(decimal_places);
        (magnitude * multiplier).round() / multiplier
    } else {
        // Round above the units place, to the nearest 10, 100, ...
        let divisor = 10f64.powi(-decimal_places);
        (magnitude / divisor).round() * divisor
    };

    let text = if rounded >= 1.0 || decimal_places <= 0 {
        render_at_least_one(rounded, decimal_places, min, max)
    } else {
        render_sub_unity(rounded, magnitude_order, target, min, max)
    };
    parts::apply_sign(style, text, negative, value)
}

/// Values with an integer part (or rounded above the units place).
fn render_at_least_one(
    rounded: f64,
    decimal_places: i32,
    min: Option<usize>,
    max: Option<usize>,
) -> String {
    let int_part = rounded as i128;
    let mut text = int_part.to_string();

    if decimal_places > 0 {
        let fraction_part = rounded - int_part as f64;
        if fraction_part > 0.0 || min.is_some() {
            let mut fraction_text = parts::fraction_digits(fraction_part, decimal_places as usize);

            if min.is_none() || min == max {
                while fraction_text.ends_with('0') {
                    fraction_text.pop();
                }
            }

            if !fraction_text.is_empty() {
                text.push('.');
                text.push_str(&fraction_text);
            } else if let Some(min_sig) = min {
                if min_sig > text.len() {
                    let zeros = min_sig - text.len();
                    text.push('.');
                    text.push_str(&"0".repeat(zeros));
                }
            }
        }
    }

    if let Some(min_sig) = min {
        let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < min_sig {
            if !text.contains('.') {
                text.push('.');
            }
            text.push_str(&"0".repeat(min_sig - digits));
        }
    }

    text
}

/// Sub-unity values: every significant digit lives in the fraction.
fn render_sub_unity(
    rounded: f64,
    magnitude_order: i32,
    target: usize,
    min: Option<usize>,
    max: Option<usize>,
) -> String {
    let leading_zeros = (-magnitude_order - 1) as usize;
    let mut text = String::from("0.");
    text.push_str(&"0".repeat(leading_zeros));

    // Shift the significant digits up into an integer.
    let scale_factor = 10f64.powi(-magnitude_order + target as i32 - 1);
    let scaled = (rounded * scale_factor).round();
    let mut digit_text = (scaled as i128).to_string();
    if digit_text.len() > target {
        digit_text.truncate(target);
    }
    text.push_str(&digit_text);

    if min.is_none() || min == max {
        while text.ends_with('0') && text.len() > leading_zeros + 3 {
            text.pop();
        }
    }

    if let Some(min_sig) = min {
        let significant_in_digits = digit_text.chars().filter(|c| *c != '0').count();
        let significant_rendered = text
            .chars()
            .filter(|c| c.is_ascii_digit() && *c != '0')
            .count();
        if significant_in_digits < min_sig && significant_rendered < min_sig {
            let digits_rendered = text.chars().filter(|c| c.is_ascii_digit()).count();
            let zeros_needed =
                min_sig as i64 + leading_zeros as i64 - digits_rendered as i64;
            if zeros_needed > 0 {
                text.push_str(&"0".repeat(zeros_needed as usize));
            }
        }
    }

    text
}

/// The "natural" significant-digit count: non-zero digits in the value's
/// shortest decimal form.
fn natural_digit_count(magnitude: f64) -> usize {
    let mut buffer = ryu::Buffer::new();
    buffer
        .format_finite(magnitude)
        .chars()
        .filter(|c| c.is_ascii_digit() && *c != '0')
        .count()
}
