use std::fs;

use super::die;

pub fn settings_export() {
    print!("{}", elbonian_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        elbonian_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: grammar.repetition={}, bounds.message={:?}",
        s.grammar.repetition.as_str(),
        s.bounds.message
    );
}

/// Install a settings file as the global configuration.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        elbonian_core::settings::init_custom(content),
        "Error loading {file}: {}"
    );
}
