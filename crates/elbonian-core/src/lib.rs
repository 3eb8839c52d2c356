//! Conversion between decimal numerals and Elbonian symbolic numerals.
//!
//! ```
//! use elbonian_core::NumeralValue;
//!
//! let v: NumeralValue = "4999".parse().unwrap();
//! assert_eq!(v.to_symbolic(), "nDdLlVv");
//! assert_eq!("CX".parse::<NumeralValue>().unwrap().to_decimal(), 110);
//! ```

pub mod grammar;
pub mod numeral;
pub mod settings;

pub use grammar::{GrammarViolation, RepetitionPolicy};
pub use numeral::{NumeralError, NumeralKind, NumeralValue};
