//! Shared option types for number styles.
//!
//! Every [`NumberStyle`](crate::NumberStyle) carries one of each of these;
//! they are plain copyable enums so styles stay cheap to clone and share.

use serde::{Deserialize, Serialize};

/// Notation used when rendering a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notation {
    /// Plain decimal output, driven by the precision options.
    #[default]
    Automatic,
    /// Compact suffix notation: `1K`, `2.5M`, `1B`.
    Compact,
    /// Scientific notation: `1.234E3`.
    Scientific,
}

/// Leading-sign policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignDisplay {
    /// `-` for negative values, nothing otherwise.
    #[default]
    Automatic,
    /// No sign, not even for negative values.
    Never,
    /// `-` for negative values, `+` otherwise. Exact zero only gets the
    /// `+` when `include_zero` is true.
    Always { include_zero: bool },
}

/// Whether the decimal separator appears when no fraction digits follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecimalSeparatorDisplay {
    /// Separator only when fraction digits are present.
    #[default]
    Automatic,
    /// Separator always, so `42` renders as `42.`.
    Always,
}

/// Rounding applied during normalization, before any digits are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingRule {
    /// Truncate: `1.9 -> 1`, `-1.9 -> -1`.
    TowardZero,
    /// Grow the magnitude: `1.1 -> 2`, `-1.1 -> -2`.
    AwayFromZero,
    /// Toward positive infinity.
    Up,
    /// Toward negative infinity.
    Down,
    /// Nearest, ties to the even neighbor.
    ToNearestOrEven,
    /// Nearest, ties away from zero (schoolbook rounding).
    ToNearestOrAwayFromZero,
}

impl RoundingRule {
    /// Round `value` to an integral float according to the rule.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::TowardZero => value.trunc(),
            Self::AwayFromZero => {
                if value > 0.0 {
                    value.ceil()
                } else {
                    value.floor()
                }
            }
            Self::Up => value.ceil(),
            Self::Down => value.floor(),
            Self::ToNearestOrEven => value.round_ties_even(),
            Self::ToNearestOrAwayFromZero => value.round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toward_zero_truncates_both_signs() {
        assert_eq!(RoundingRule::TowardZero.apply(1.9), 1.0);
        assert_eq!(RoundingRule::TowardZero.apply(-1.9), -1.0);
    }

    #[test]
    fn away_from_zero_grows_magnitude() {
        assert_eq!(RoundingRule::AwayFromZero.apply(1.1), 2.0);
        assert_eq!(RoundingRule::AwayFromZero.apply(-1.1), -2.0);
        assert_eq!(RoundingRule::AwayFromZero.apply(0.0), 0.0);
    }

    #[test]
    fn up_and_down_follow_the_number_line() {
        assert_eq!(RoundingRule::Up.apply(-1.9), -1.0);
        assert_eq!(RoundingRule::Up.apply(1.1), 2.0);
        assert_eq!(RoundingRule::Down.apply(-1.1), -2.0);
        assert_eq!(RoundingRule::Down.apply(1.9), 1.0);
    }

    #[test]
    fn tie_handling() {
        assert_eq!(RoundingRule::ToNearestOrEven.apply(2.5), 2.0);
        assert_eq!(RoundingRule::ToNearestOrEven.apply(3.5), 4.0);
        assert_eq!(RoundingRule::ToNearestOrAwayFromZero.apply(2.5), 3.0);
        assert_eq!(RoundingRule::ToNearestOrAwayFromZero.apply(-2.5), -3.0);
    }
}
