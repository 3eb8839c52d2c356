//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::grammar::RepetitionPolicy;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub grammar: GrammarSettings,
    pub bounds: BoundsSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrammarSettings {
    #[serde(default)]
    pub repetition: RepetitionPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoundsSettings {
    pub message: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.bounds.message.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "bounds.message".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.grammar.repetition, RepetitionPolicy::PerLetter);
        assert!(s.bounds.message.contains("1 and 9999"));
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[grammar]
repetition = "legacy-conjunction"

[bounds]
message = "Value is out of bounds. Enter value between 0 and 9999."
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.grammar.repetition, RepetitionPolicy::LegacyConjunction);
        assert_eq!(
            s.bounds.message,
            "Value is out of bounds. Enter value between 0 and 9999."
        );
    }

    #[test]
    fn grammar_section_defaults() {
        let toml = r#"
[bounds]
message = "out of range"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.grammar.repetition, RepetitionPolicy::PerLetter);
    }

    #[test]
    fn error_unknown_policy() {
        let toml = r#"
[grammar]
repetition = "lenient"

[bounds]
message = "out of range"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_empty_message() {
        let toml = r#"
[bounds]
message = "   "
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        match err {
            SettingsError::InvalidValue { field, .. } => assert_eq!(field, "bounds.message"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn error_missing_bounds() {
        let err = parse_settings_toml("[grammar]\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn default_toml_matches_constant() {
        assert_eq!(default_toml(), DEFAULT_SETTINGS_TOML);
    }
}
