//! Validated numeral values and conversion between decimal and symbolic form.
//!
//! A [`NumeralValue`] is built from raw text. Construction trims the input,
//! classifies it as decimal or symbolic, and validates it against that
//! system's rules; the other representation is computed on demand.


use std::fmt;
use std::str::FromStr;

use tracing::{debug, debug_span};

use crate::grammar::{self, GrammarViolation};
use crate::settings::{settings, Settings};

/// Exclusive upper bound of representable values.
pub const UPPER_BOUND: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    #[error("malformed number: {detail}")]
    MalformedNumber {
        detail: String,
        violation: Option<GrammarViolation>,
    },
    #[error("{0}")]
    ValueOutOfBounds(String),
}

impl NumeralError {
    fn malformed(text: &str) -> Self {
        Self::MalformedNumber {
            detail: text.to_string(),
            violation: None,
        }
    }

    /// The grammar rule that rejected a symbolic input, if any.
    pub fn violation(&self) -> Option<GrammarViolation> {
        match self {
            Self::MalformedNumber { violation, .. } => *violation,
            Self::ValueOutOfBounds(_) => None,
        }
    }
}

impl From<GrammarViolation> for NumeralError {
    fn from(v: GrammarViolation) -> Self {
        Self::MalformedNumber {
            detail: v.to_string(),
            violation: Some(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralKind {
    Decimal,
    Symbolic,
}

impl NumeralKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Symbolic => "symbolic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Repr {
    Decimal(u32),
    Symbolic,
}

/// An immutable, validated numeral in the range 1..=9999.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumeralValue {
    text: String,
    repr: Repr,
}

impl NumeralValue {
    /// Parse using the global [`settings()`].
    pub fn parse(raw: &str) -> Result<Self, NumeralError> {
        Self::parse_with(raw, settings())
    }

    /// Parse using explicit settings.
    pub fn parse_with(raw: &str, settings: &Settings) -> Result<Self, NumeralError> {
        let _span = debug_span!("parse_numeral", input = raw).entered();

        let text = raw.trim();
        if text.is_empty() {
            return Err(NumeralError::malformed(text));
        }
        if text != "0" && text.starts_with('0') {
            debug!("leading zero");
            return Err(NumeralError::malformed(text));
        }

        if is_decimal_shape(text) {
            let value = parse_decimal(text, settings)?;
            debug!(value, "decimal");
            return Ok(Self {
                text: text.to_string(),
                repr: Repr::Decimal(value),
            });
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(NumeralError::malformed(text));
        }
        if let Err(v) = grammar::validate(text, settings.grammar.repetition) {
            debug!(violation = ?v, "symbolic rejected");
            return Err(v.into());
        }
        debug!("symbolic");
        Ok(Self {
            text: text.to_string(),
            repr: Repr::Symbolic,
        })
    }

    pub fn kind(&self) -> NumeralKind {
        match self.repr {
            Repr::Decimal(_) => NumeralKind::Decimal,
            Repr::Symbolic => NumeralKind::Symbolic,
        }
    }

    /// The trimmed input text exactly as validated.
    pub fn canonical_text(&self) -> &str {
        &self.text
    }

    pub fn to_decimal(&self) -> u32 {
        match self.repr {
            Repr::Decimal(value) => value,
            Repr::Symbolic => grammar::symbolic_value(&self.text),
        }
    }

    pub fn to_symbolic(&self) -> String {
        match self.repr {
            Repr::Decimal(value) => grammar::to_symbolic(value),
            Repr::Symbolic => self.text.clone(),
        }
    }
}

impl FromStr for NumeralValue {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for NumeralValue {
    type Error = NumeralError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl fmt::Display for NumeralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `-?digits(.digits)?`, ASCII digits only.
fn is_decimal_shape(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match unsigned.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(unsigned),
    }
}

/// Range and integrality checks on decimal-shaped text.
fn parse_decimal(text: &str, settings: &Settings) -> Result<u32, NumeralError> {
    let value: f64 = text.parse().map_err(|_| NumeralError::malformed(text))?;
    if !(value > 0.0 && value < f64::from(UPPER_BOUND)) {
        debug!(value, "out of bounds");
        return Err(NumeralError::ValueOutOfBounds(
            settings.bounds.message.clone(),
        ));
    }
    if value.fract() != 0.0 {
        return Err(NumeralError::malformed(text));
    }
    Ok(value as u32)
}
