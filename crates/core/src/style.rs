//! The immutable number style and its chainable setters.

use serde::{Deserialize, Serialize};

use crate::precision::{DigitBounds, Precision};
use crate::types::{DecimalSeparatorDisplay, Notation, RoundingRule, SignDisplay};
use crate::value::Formattable;

/// Grouping policy for the integer part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grouping {
    /// Currently the same as [`Grouping::Always`].
    Automatic,
    /// Insert the separator every three integer digits.
    Always,
    /// No grouping.
    Never,
}

/// An immutable, composable description of how to render a number.
///
/// Every setter consumes the style and returns a new one; a style is never
/// mutated in place, so one can be built once and reused — including across
/// threads — as a template.
///
/// # Examples
///
/// ```
/// use numstyle_core::{Grouping, Notation, NumberStyle, Precision};
///
/// assert_eq!(NumberStyle::new().format(42), "42");
///
/// let grouped = NumberStyle::new().grouping(Grouping::Always);
/// assert_eq!(grouped.format(1234567), "1,234,567");
///
/// let compact = NumberStyle::new().notation(Notation::Compact);
/// assert_eq!(compact.format(1000), "1K");
///
/// let price = NumberStyle::new()
///     .precision(Precision::fraction_length(2))
///     .grouping(Grouping::Always);
/// assert_eq!(price.format(1234.5), "1,234.50");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberStyle {
    pub(crate) max_fraction_digits: Option<usize>,
    pub(crate) min_fraction_digits: Option<usize>,
    pub(crate) grouping_separator: Option<String>,
    pub(crate) decimal_separator: String,
    pub(crate) notation: Notation,
    pub(crate) sign_display: SignDisplay,
    pub(crate) rounding_rule: Option<RoundingRule>,
    pub(crate) rounding_increment: Option<f64>,
    pub(crate) decimal_separator_display: DecimalSeparatorDisplay,
    pub(crate) scale: f64,
    pub(crate) significant_digits: Option<DigitBounds>,
    pub(crate) integer_length: Option<DigitBounds>,
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self {
            max_fraction_digits: None,
            min_fraction_digits: None,
            grouping_separator: None,
            decimal_separator: ".".to_string(),
            notation: Notation::Automatic,
            sign_display: SignDisplay::Automatic,
            rounding_rule: None,
            rounding_increment: None,
            decimal_separator_display: DecimalSeparatorDisplay::Automatic,
            scale: 1.0,
            significant_digits: None,
            integer_length: None,
        }
    }
}

impl NumberStyle {
    /// The default style: no grouping, no precision bounds, `.` separator,
    /// automatic notation and sign.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the precision. Replaces any previously configured precision.
    #[must_use]
    pub fn precision(mut self, precision: Precision) -> Self {
        let (min, max) = precision.fraction;
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        self.significant_digits = precision.significant;
        self.integer_length = precision.integer;
        self
    }

    /// Group the integer part with the default `,` separator.
    #[must_use]
    pub fn grouping(self, policy: Grouping) -> Self {
        self.grouping_with(policy, ",")
    }

    /// Group the integer part with an explicit separator.
    ///
    /// ```
    /// use numstyle_core::{Grouping, NumberStyle};
    ///
    /// let style = NumberStyle::new().grouping_with(Grouping::Always, ".");
    /// assert_eq!(style.format(1234567), "1.234.567");
    /// ```
    #[must_use]
    pub fn grouping_with(mut self, policy: Grouping, separator: &str) -> Self {
        self.grouping_separator = match policy {
            Grouping::Automatic | Grouping::Always => Some(separator.to_string()),
            Grouping::Never => None,
        };
        self
    }

    /// Set the decimal separator character(s).
    ///
    /// ```
    /// use numstyle_core::NumberStyle;
    ///
    /// assert_eq!(NumberStyle::new().decimal_separator(",").format(3.14), "3,14");
    /// ```
    #[must_use]
    pub fn decimal_separator(mut self, separator: &str) -> Self {
        self.decimal_separator = separator.to_string();
        self
    }

    /// Set whether the separator appears even without fraction digits.
    #[must_use]
    pub fn decimal_separator_display(mut self, display: DecimalSeparatorDisplay) -> Self {
        self.decimal_separator_display = display;
        self
    }

    /// Set the notation.
    #[must_use]
    pub fn notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Set the sign-display policy.
    #[must_use]
    pub fn sign(mut self, display: SignDisplay) -> Self {
        self.sign_display = display;
        self
    }

    /// Multiply values by `factor` before any other processing.
    #[must_use]
    pub fn scale(mut self, factor: f64) -> Self {
        self.scale = factor;
        self
    }

    /// Round values to a whole number with `rule` during normalization.
    #[must_use]
    pub fn rounded(mut self, rule: RoundingRule) -> Self {
        self.rounding_rule = Some(rule);
        self.rounding_increment = None;
        self
    }

    /// Snap values to the nearest multiple of `increment`, choosing the
    /// multiple with `rule`. The increment's own decimal digits set a floor
    /// on the fraction digits shown, so the quantization stays visible.
    ///
    /// An increment that is not strictly positive and finite is ignored at
    /// format time (the value is then rounded to a whole number by `rule`),
    /// and a warning is logged.
    #[must_use]
    pub fn rounded_by(mut self, rule: RoundingRule, increment: f64) -> Self {
        self.rounding_rule = Some(rule);
        self.rounding_increment = Some(increment);
        self
    }

    /// Format a value with this style.
    ///
    /// Total: every input produces text. NaN renders as `NaN`, infinities
    /// as `Infinity`/`-Infinity`, regardless of any other option.
    #[must_use]
    pub fn format<V: Formattable>(&self, value: V) -> String {
        value.format_with(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_return_new_values() {
        let base = NumberStyle::new();
        let grouped = base.clone().grouping(Grouping::Always);

        assert_eq!(base.grouping_separator, None);
        assert_eq!(grouped.grouping_separator.as_deref(), Some(","));
    }

    #[test]
    fn grouping_never_clears_the_separator() {
        let style = NumberStyle::new()
            .grouping(Grouping::Always)
            .grouping(Grouping::Never);
        assert_eq!(style.grouping_separator, None);
    }

    #[test]
    fn precision_replaces_all_precision_fields() {
        let style = NumberStyle::new()
            .precision(Precision::fraction_length(2))
            .precision(Precision::significant_digits(3));

        assert_eq!(style.min_fraction_digits, None);
        assert_eq!(style.max_fraction_digits, None);
        assert_eq!(style.significant_digits, Some((Some(3), Some(3))));
    }

    #[test]
    fn styles_are_reusable_templates() {
        let style = NumberStyle::new().notation(Notation::Scientific);
        assert_eq!(style.format(1234), "1.234E3");
        assert_eq!(style.format(1234), "1.234E3");
    }

    #[test]
    fn shared_across_threads() {
        let style = std::sync::Arc::new(NumberStyle::new().grouping(Grouping::Always));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let style = std::sync::Arc::clone(&style);
                std::thread::spawn(move || style.format(1234567))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "1,234,567");
        }
    }
}
