//! Precision selection for a number style.

use std::ops::{Bound, RangeBounds};

/// Resolved `(min, max)` digit bounds; `None` means unbounded on that side.
pub(crate) type DigitBounds = (Option<usize>, Option<usize>);

/// A precision request: fraction digits, significant digits, or integer
/// length, each either fixed or ranged.
///
/// Applying a precision replaces every precision-related field of a style,
/// so the last `precision` call wins. Significant digits take priority over
/// fraction digits when both end up configured.
///
/// Range bounds are kept exactly as given — a range whose minimum exceeds
/// its maximum is not rejected; the minimum then controls padding while the
/// maximum controls rounding.
///
/// # Examples
///
/// ```
/// use numstyle_core::{NumberStyle, Precision};
///
/// let fixed = NumberStyle::new().precision(Precision::fraction_length(2));
/// assert_eq!(fixed.format(3.14159), "3.14");
///
/// let padded = NumberStyle::new().precision(Precision::fraction_range(2..));
/// assert_eq!(padded.format(42.0), "42.00");
///
/// let sig = NumberStyle::new().precision(Precision::significant_digits(3));
/// assert_eq!(sig.format(1234), "1230");
///
/// let wide = NumberStyle::new().precision(Precision::integer_length(4));
/// assert_eq!(wide.format(42), "0042");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub(crate) fraction: DigitBounds,
    pub(crate) significant: Option<DigitBounds>,
    pub(crate) integer: Option<DigitBounds>,
}

impl Precision {
    /// Exactly `digits` fraction digits.
    #[must_use]
    pub fn fraction_length(digits: usize) -> Self {
        Self {
            fraction: (Some(digits), Some(digits)),
            significant: None,
            integer: None,
        }
    }

    /// Fraction digits within `range`, e.g. `2..`, `..=4`, or `2..=4`.
    #[must_use]
    pub fn fraction_range(range: impl RangeBounds<usize>) -> Self {
        Self {
            fraction: bounds_of(&range),
            significant: None,
            integer: None,
        }
    }

    /// Exactly `digits` significant digits.
    #[must_use]
    pub fn significant_digits(digits: usize) -> Self {
        Self {
            fraction: (None, None),
            significant: Some((Some(digits), Some(digits))),
            integer: None,
        }
    }

    /// Significant digits within `range`.
    #[must_use]
    pub fn significant_range(range: impl RangeBounds<usize>) -> Self {
        Self {
            fraction: (None, None),
            significant: Some(bounds_of(&range)),
            integer: None,
        }
    }

    /// Zero-pad the integer part to exactly `digits` digits.
    ///
    /// Padding never truncates: values with more digits keep them all.
    #[must_use]
    pub fn integer_length(digits: usize) -> Self {
        Self {
            fraction: (None, None),
            significant: None,
            integer: Some((Some(digits), Some(digits))),
        }
    }

    /// Integer length within `range`. Only the minimum is ever enforced.
    #[must_use]
    pub fn integer_range(range: impl RangeBounds<usize>) -> Self {
        Self {
            fraction: (None, None),
            significant: None,
            integer: Some(bounds_of(&range)),
        }
    }
}

fn bounds_of(range: &impl RangeBounds<usize>) -> DigitBounds {
    let min = match range.start_bound() {
        Bound::Included(&n) => Some(n),
        Bound::Excluded(&n) => Some(n + 1),
        Bound::Unbounded => None,
    };
    let max = match range.end_bound() {
        Bound::Included(&n) => Some(n),
        Bound::Excluded(&n) => Some(n.saturating_sub(1)),
        Bound::Unbounded => None,
    };
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sets_both_bounds() {
        let p = Precision::fraction_length(2);
        assert_eq!(p.fraction, (Some(2), Some(2)));
        assert_eq!(p.significant, None);
        assert_eq!(p.integer, None);
    }

    #[test]
    fn open_ranges() {
        assert_eq!(Precision::fraction_range(2..).fraction, (Some(2), None));
        assert_eq!(Precision::fraction_range(..=4).fraction, (None, Some(4)));
        assert_eq!(Precision::fraction_range(..4).fraction, (None, Some(3)));
        assert_eq!(Precision::fraction_range(..).fraction, (None, None));
    }

    #[test]
    fn closed_range() {
        assert_eq!(
            Precision::fraction_range(2..=4).fraction,
            (Some(2), Some(4))
        );
    }

    #[test]
    fn significant_and_integer_variants() {
        assert_eq!(
            Precision::significant_digits(3).significant,
            Some((Some(3), Some(3)))
        );
        assert_eq!(
            Precision::significant_range(2..=4).significant,
            Some((Some(2), Some(4)))
        );
        assert_eq!(
            Precision::integer_length(4).integer,
            Some((Some(4), Some(4)))
        );
        assert_eq!(Precision::integer_range(4..).integer, Some((Some(4), None)));
    }
}
