//! Elbonian symbol table and the structural rules of a symbolic numeral.
//!
//! The alphabet has four magnitude groups (thousands, hundreds, tens, units).
//! Each group has a base letter worth 1x (repeatable up to three times), a
//! five-analog worth 5x and a four-analog worth 4x (each at most once).
//! Every letter carries an absolute weight, so conversion in both directions
//! is purely additive.

use serde::Deserialize;

/// Maximum number of repetitions of a base letter (M, C, X, I).
pub const MAX_BASE_REPEAT: usize = 3;

/// Maximum number of occurrences of a five- or four-analog letter.
pub const MAX_RESTRICTED_REPEAT: usize = 1;

/// All twelve letters with their weights, in descending weight order.
pub const SYMBOLS: [(char, u32); 12] = [
    ('N', 5000),
    ('n', 4000),
    ('M', 1000),
    ('D', 500),
    ('d', 400),
    ('C', 100),
    ('L', 50),
    ('l', 40),
    ('X', 10),
    ('V', 5),
    ('v', 4),
    ('I', 1),
];

/// One magnitude group of the alphabet.
#[derive(Debug, Clone, Copy)]
struct Group {
    five: char,
    four: char,
    base: char,
}

/// Groups in the order they must appear in a symbolic numeral.
const GROUPS: [Group; 4] = [
    Group {
        five: 'N',
        four: 'n',
        base: 'M',
    },
    Group {
        five: 'D',
        four: 'd',
        base: 'C',
    },
    Group {
        five: 'L',
        four: 'l',
        base: 'X',
    },
    Group {
        five: 'V',
        four: 'v',
        base: 'I',
    },
];

/// Weight of a single letter, or `None` if it is not part of the alphabet.
pub fn weight(letter: char) -> Option<u32> {
    SYMBOLS
        .iter()
        .find_map(|&(c, w)| if c == letter { Some(w) } else { None })
}

/// How the repetition rule aggregates per-letter counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepetitionPolicy {
    /// Reject as soon as any single letter exceeds its cap.
    #[default]
    PerLetter,
    /// Reject only when every base letter exceeds its cap at once, or every
    /// restricted letter exceeds its cap at once.
    LegacyConjunction,
}

impl RepetitionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerLetter => "per-letter",
            Self::LegacyConjunction => "legacy-conjunction",
        }
    }
}

/// The grammar rule a symbolic numeral failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GrammarViolation {
    #[error("Values repeated illegal number of times")]
    Repetition,
    #[error("Certain values can't be used with other values")]
    MutualExclusion,
    #[error("Letters should be valid Elbonian characters arranged from greatest to least")]
    Ordering,
}

/// Run all three rules in order and report the first one that fails.
pub fn validate(text: &str, policy: RepetitionPolicy) -> Result<(), GrammarViolation> {
    if !check_repetition(text, policy) {
        return Err(GrammarViolation::Repetition);
    }
    if !check_exclusion(text) {
        return Err(GrammarViolation::MutualExclusion);
    }
    if !check_order(text) {
        return Err(GrammarViolation::Ordering);
    }
    Ok(())
}

/// Occurrence count of every alphabet letter, indexed like [`SYMBOLS`].
struct LetterCounts([usize; SYMBOLS.len()]);

impl LetterCounts {
    fn of(text: &str) -> Self {
        let mut counts = [0; SYMBOLS.len()];
        for c in text.chars() {
            if let Some(i) = SYMBOLS.iter().position(|&(letter, _)| letter == c) {
                counts[i] += 1;
            }
        }
        Self(counts)
    }

    fn get(&self, letter: char) -> usize {
        SYMBOLS
            .iter()
            .position(|&(c, _)| c == letter)
            .map_or(0, |i| self.0[i])
    }
}

/// Rule A: base letters repeat at most three times, the others at most once.
pub fn check_repetition(text: &str, policy: RepetitionPolicy) -> bool {
    let counts = LetterCounts::of(text);
    let base_over = |g: &Group| counts.get(g.base) > MAX_BASE_REPEAT;
    let restricted: Vec<usize> = GROUPS
        .iter()
        .flat_map(|g| [counts.get(g.five), counts.get(g.four)])
        .collect();

    match policy {
        RepetitionPolicy::PerLetter => {
            !GROUPS.iter().any(base_over)
                && !restricted.iter().any(|&n| n > MAX_RESTRICTED_REPEAT)
        }
        RepetitionPolicy::LegacyConjunction => {
            !GROUPS.iter().all(base_over)
                && !restricted.iter().all(|&n| n > MAX_RESTRICTED_REPEAT)
        }
    }
}

/// Rule B: a group's four-analog and base letter never appear together.
pub fn check_exclusion(text: &str) -> bool {
    GROUPS
        .iter()
        .all(|g| !(text.contains(g.four) && text.contains(g.base)))
}

/// Rule C: letters appear group by group in descending magnitude; within a
/// group the five-analog comes first, then the four-analog, then up to three
/// base letters.
pub fn check_order(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    for g in &GROUPS {
        chars.next_if_eq(&g.five);
        chars.next_if_eq(&g.four);
        let mut repeats = 0;
        while repeats < MAX_BASE_REPEAT && chars.next_if_eq(&g.base).is_some() {
            repeats += 1;
        }
    }
    chars.next().is_none()
}

/// Greedy decimal-to-symbolic conversion.
pub fn to_symbolic(value: u32) -> String {
    let mut remaining = value;
    let mut out = String::new();
    for &(letter, weight) in &SYMBOLS {
        while remaining >= weight {
            out.push(letter);
            remaining -= weight;
        }
    }
    out
}

/// Sum of letter weights; letters outside the alphabet count as zero.
pub fn symbolic_value(text: &str) -> u32 {
    text.chars().filter_map(weight).sum()
}
