//! numstyle Core
//!
//! Composable, immutable number-to-text formatting. Build a [`NumberStyle`]
//! once by chaining setters, then format any primitive integer or float
//! through it. Formatting is total: every input produces text, with `NaN`
//! and the infinities handled before any other option applies.
//!
//! # Quick Start
//!
//! ```
//! use numstyle_core::{Grouping, Notation, NumberStyle, Precision};
//!
//! let style = NumberStyle::new();
//! assert_eq!(style.format(42), "42");
//! assert_eq!(style.format(3.14159), "3.14159");
//!
//! let grouped = NumberStyle::new().grouping(Grouping::Always);
//! assert_eq!(grouped.format(1234567), "1,234,567");
//!
//! let fixed = NumberStyle::new().precision(Precision::fraction_length(2));
//! assert_eq!(fixed.format(3.14159), "3.14");
//!
//! let compact = NumberStyle::new().notation(Notation::Compact);
//! assert_eq!(compact.format(1000), "1K");
//! ```
//!
//! # Styles Are Templates
//!
//! A style is never mutated; every setter returns a fresh value. Styles can
//! therefore be shared across threads and reused for any number of
//! conversions.
//!
//! ```
//! use numstyle_core::{NumberStyle, Precision, SignDisplay};
//!
//! let base = NumberStyle::new().precision(Precision::fraction_length(1));
//! let signed = base.clone().sign(SignDisplay::Always { include_zero: false });
//!
//! assert_eq!(base.format(2.5), "2.5");
//! assert_eq!(signed.format(2.5), "+2.5");
//! ```

pub mod parse;
pub mod precision;
mod render;
pub mod style;
pub mod types;
pub mod value;

pub use parse::{NumericInput, ParseNumericError};
pub use precision::Precision;
pub use style::{Grouping, NumberStyle};
pub use types::{DecimalSeparatorDisplay, Notation, RoundingRule, SignDisplay};
pub use value::Formattable;
