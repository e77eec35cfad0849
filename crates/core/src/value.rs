//! The numeric-capability seam: which types a style can format.

use crate::render;
use crate::style::NumberStyle;
use crate::types::{DecimalSeparatorDisplay, Notation};

mod sealed {
    pub trait Sealed {}
}

/// Values accepted by [`NumberStyle::format`].
///
/// Implemented for the primitive integers (signed up to `i128`, unsigned up
/// to `u64`) and both float widths. Sealed: the engine relies on every
/// implementation reducing to either the `i128` or the `f64` renderer.
pub trait Formattable: sealed::Sealed + Copy {
    #[doc(hidden)]
    fn format_with(self, style: &NumberStyle) -> String;
}

impl sealed::Sealed for f64 {}
impl Formattable for f64 {
    fn format_with(self, style: &NumberStyle) -> String {
        render::float(style, self)
    }
}

impl sealed::Sealed for f32 {}
impl Formattable for f32 {
    fn format_with(self, style: &NumberStyle) -> String {
        render::float(style, f64::from(self))
    }
}

macro_rules! impl_formattable_int {
    ($($int:ty)*) => {$(
        impl sealed::Sealed for $int {}
        impl Formattable for $int {
            fn format_with(self, style: &NumberStyle) -> String {
                let value = self as i128;
                // Anything that can introduce fractional digits or rescale
                // the value needs the floating-point renderer.
                if style.scale != 1.0
                    || style.notation != Notation::Automatic
                    || style.rounding_rule.is_some()
                    || style.significant_digits.is_some()
                    || style.min_fraction_digits.is_some()
                    || style.decimal_separator_display == DecimalSeparatorDisplay::Always
                {
                    return render::float(style, value as f64);
                }
                render::integer(style, value)
            }
        }
    )*};
}

impl_formattable_int!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 usize);
