use clap::{Parser, Subcommand};

use crate::loader::DEFAULT_MANIFEST_PATH;

/// Marketlint: CI validation for plugin marketplace manifests
#[derive(Parser)]
#[command(name = "marketlint")]
#[command(version = "0.1.0")]
#[command(about = "Validates plugin marketplace manifests before merge")]
#[command(
    long_about = "Marketlint checks a marketplace manifest against the structural and semantic rules of one schema generation and reports every finding in a single pass, so a pull request needs at most one fix-and-rerun cycle."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log filter for diagnostic output on stderr (overridden by RUST_LOG)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a marketplace manifest against a schema version
    Validate {
        /// Path to the manifest file
        #[arg(default_value = DEFAULT_MANIFEST_PATH)]
        manifest: String,

        /// Manifest schema version to enforce (v1, v2, v3)
        #[arg(short, long, default_value = "v2")]
        schema: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Validate { .. } => "validate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_validate_command_defaults() {
        let cli = Cli::parse_from(["marketlint", "validate"]);

        match cli.command {
            Commands::Validate {
                manifest,
                schema,
                format,
            } => {
                assert_eq!(manifest, ".claude-plugin/marketplace.json");
                assert_eq!(schema, "v2");
                assert_eq!(format, "text");
            }
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_validate_command_with_args() {
        let cli = Cli::parse_from([
            "marketlint",
            "validate",
            "custom/marketplace.json",
            "--schema",
            "v3",
            "--format",
            "json",
        ]);

        match cli.command {
            Commands::Validate {
                manifest,
                schema,
                format,
            } => {
                assert_eq!(manifest, "custom/marketplace.json");
                assert_eq!(schema, "v3");
                assert_eq!(format, "json");
            }
        }
    }

    #[test]
    fn test_command_name() {
        let cli = Cli::parse_from(["marketlint", "validate"]);
        assert_eq!(cli.command.name(), "validate");
    }
}
