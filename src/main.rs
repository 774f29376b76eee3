// os-list-validate/src/main.rs

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use std::{io, path::PathBuf, process::ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use os_list_validate::{run, OutputFormat, ValidateConfig, DEFAULT_SCHEMA_PATH};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format { Text, Json }

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "validate-os-list", version, about = "Validate an OS list JSON file against its schema.")]
struct Args {
    /// Path to the JSON file to validate
    json_path: PathBuf,
    /// Path to the schema file
    #[arg(long, default_value = DEFAULT_SCHEMA_PATH)]
    schema: PathBuf,
    /// List every violation instead of only the first
    #[arg(long)]
    all_errors: bool,
    /// Report format: text | json
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Log to stderr; repeat for more detail (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cfg = ValidateConfig::new(args.json_path)
        .with_schema(args.schema)
        .with_all_errors(args.all_errors)
        .with_format(args.format.into());

    match report(&cfg) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("✗ UnexpectedError: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn report(cfg: &ValidateConfig) -> anyhow::Result<bool> {
    debug!(schema = %cfg.schema_path.display(), json = %cfg.json_path.display(), "validating");
    let outcome = run(cfg);
    outcome
        .write(cfg.format, &mut io::stdout().lock())
        .context("write report")?;
    Ok(outcome.valid)
}
