use clap::{Parser, Subcommand};

use elbonian_cli::commands::{config_ops, convert_ops};
use elbonian_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "elbonum", about = "Elbonian numeral converter")]
struct Cli {
    /// Settings TOML file (default: embedded settings)
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show both decimal and symbolic forms of a numeral
    Convert {
        /// Decimal or symbolic numeral
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the decimal form of a numeral
    ToDecimal {
        /// Decimal or symbolic numeral
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Print the symbolic form of a numeral
    ToSymbolic {
        /// Decimal or symbolic numeral
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Validate a numeral (exit status 1 if invalid)
    Check {
        /// Decimal or symbolic numeral
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// List decimal/symbolic pairs for a range
    Table {
        /// First value (inclusive)
        #[arg(long, default_value = "1")]
        from: u32,
        /// Last value (inclusive)
        #[arg(long, default_value = "100")]
        to: u32,
    },
    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Export default settings as TOML
    Default,
    /// Validate a custom settings TOML file
    Check {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Some(path) = cli.config.as_deref() {
        config_ops::load_settings(path);
    }

    match cli.command {
        Command::Convert { text, json } => convert_ops::convert_cmd(&text, json),
        Command::ToDecimal { text } => convert_ops::to_decimal_cmd(&text),
        Command::ToSymbolic { text } => convert_ops::to_symbolic_cmd(&text),
        Command::Check { text } => convert_ops::check_cmd(&text),
        Command::Table { from, to } => convert_ops::table_cmd(from, to),
        Command::Config { action } => match action {
            ConfigAction::Default => config_ops::settings_export(),
            ConfigAction::Check { file } => config_ops::settings_validate(&file),
        },
    }
}
