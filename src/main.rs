use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use marketlint::cli::commands::{validate::ValidateCommand, CommandHandler};
use marketlint::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Validate {
            manifest,
            schema,
            format,
        } => ValidateCommand::from_args(manifest, &schema, &format)
            .and_then(|command| command.execute()),
    };

    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(error) => {
            eprintln!("✗ {}", error);
            ExitCode::from(1)
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
