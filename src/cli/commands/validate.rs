use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use super::{CommandHandler, CommandResult};
use crate::loader;
use crate::report::{OutputFormat, Reporter};
use crate::schema::SchemaVersion;
use crate::validator;
use crate::{MarketlintError, Result};

/// Handler for the `validate` command
pub struct ValidateCommand {
    pub manifest: PathBuf,
    pub schema: SchemaVersion,
    pub format: OutputFormat,
}

impl ValidateCommand {
    /// Build the command from raw CLI arguments
    pub fn from_args(manifest: String, schema: &str, format: &str) -> Result<Self> {
        Ok(Self {
            manifest: PathBuf::from(manifest),
            schema: SchemaVersion::from_str(schema).map_err(MarketlintError::Cli)?,
            format: OutputFormat::from_str(format).map_err(MarketlintError::Cli)?,
        })
    }
}

impl CommandHandler for ValidateCommand {
    fn execute(&self) -> Result<CommandResult> {
        info!(
            "validating {} against schema {}",
            self.manifest.display(),
            self.schema
        );

        // Load and parse failures are fatal and propagate; everything
        // after this point accumulates into the report instead.
        let doc = loader::load_manifest(&self.manifest)?;
        let report = validator::validate(&doc, self.schema.descriptor());

        print!("{}", Reporter::new(self.format).render(&report)?);

        Ok(if report.passed() {
            CommandResult::Passed
        } else {
            CommandResult::Failed
        })
    }

    fn name(&self) -> &'static str {
        "validate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_rejects_unknown_schema_and_format() {
        assert!(matches!(
            ValidateCommand::from_args("m.json".into(), "v7", "text"),
            Err(MarketlintError::Cli(_))
        ));
        assert!(matches!(
            ValidateCommand::from_args("m.json".into(), "v2", "yaml"),
            Err(MarketlintError::Cli(_))
        ));
    }

    #[test]
    fn from_args_accepts_valid_combinations() {
        let command = ValidateCommand::from_args("m.json".into(), "v3", "json").unwrap();
        assert_eq!(command.schema, SchemaVersion::V3);
        assert_eq!(command.format, OutputFormat::Json);
        assert_eq!(command.name(), "validate");
    }
}
