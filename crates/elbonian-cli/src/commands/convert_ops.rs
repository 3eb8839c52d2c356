use std::process;

use serde::Serialize;

use elbonian_core::numeral::{NumeralValue, UPPER_BOUND};

use super::die;

/// Both renderings of one parsed numeral.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub kind: &'static str,
    pub decimal: u32,
    pub symbolic: String,
}

impl ConversionReport {
    pub fn new(value: &NumeralValue) -> Self {
        Self {
            input: value.canonical_text().to_string(),
            kind: value.kind().as_str(),
            decimal: value.to_decimal(),
            symbolic: value.to_symbolic(),
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "{} ({}): decimal={} symbolic={}",
            self.input, self.kind, self.decimal, self.symbolic
        )
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("empty range: {from}..={to}")]
    EmptyRange { from: u32, to: u32 },
}

/// Decimal/symbolic pairs for `from..=to`, clamped to the representable range.
pub fn table_rows(from: u32, to: u32) -> Result<Vec<(u32, String)>, TableError> {
    let lo = from.max(1);
    let hi = to.min(UPPER_BOUND - 1);
    if lo > hi {
        return Err(TableError::EmptyRange { from, to });
    }
    Ok((lo..=hi)
        .map(|n| (n, elbonian_core::grammar::to_symbolic(n)))
        .collect())
}

pub fn convert_cmd(text: &str, json: bool) {
    let value = die!(NumeralValue::parse(text), "Error: {}");
    let report = ConversionReport::new(&value);
    if json {
        let out = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{out}");
    } else {
        println!("{}", report.to_text());
    }
}

pub fn to_decimal_cmd(text: &str) {
    let value = die!(NumeralValue::parse(text), "Error: {}");
    println!("{}", value.to_decimal());
}

pub fn to_symbolic_cmd(text: &str) {
    let value = die!(NumeralValue::parse(text), "Error: {}");
    println!("{}", value.to_symbolic());
}

pub fn check_cmd(text: &str) {
    match NumeralValue::parse(text) {
        Ok(value) => println!("OK: {} {}", value.kind().as_str(), value),
        Err(e) => {
            println!("Invalid: {e}");
            process::exit(1);
        }
    }
}

pub fn table_cmd(from: u32, to: u32) {
    let rows = die!(table_rows(from, to), "Error: {}");
    for (n, symbolic) in rows {
        println!("{n:>4}  {symbolic}");
    }
}
