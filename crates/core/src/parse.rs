//! Input classification for callers that start from text.
//!
//! The engine itself is typed; this is the front door for the CLI and
//! anything else holding a raw token. Integers keep their exactness by
//! parsing into `i128` first; everything else goes through `f64`, which
//! also accepts `NaN`, `inf`, and `-inf`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::style::NumberStyle;

/// A classified numeric token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput {
    /// Parsed exactly as an integer.
    Int(i128),
    /// Everything else numeric, including specials.
    Float(f64),
}

/// Input that parses as neither an integer nor a float.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a number: {input:?}")]
pub struct ParseNumericError {
    input: String,
}

impl FromStr for NumericInput {
    type Err = ParseNumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(int) = s.parse::<i128>() {
            return Ok(Self::Int(int));
        }
        s.parse::<f64>()
            .map(Self::Float)
            .map_err(|_| ParseNumericError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl NumericInput {
    /// Format with `style`, dispatching to the matching instantiation.
    #[must_use]
    pub fn format(self, style: &NumberStyle) -> String {
        match self {
            Self::Int(value) => style.format(value),
            Self::Float(value) => style.format(value),
        }
    }
}
