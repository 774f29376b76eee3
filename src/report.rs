use serde::{Deserialize, Serialize};
use std::{io::{self, Write}, path::PathBuf};

use crate::{
    config::{OutputFormat, ValidateConfig},
    error::{ErrorKind, ValidateError, Violation},
    validate::validate_files,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

/// Result of one run, ready to print in either format.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Outcome {
    pub json_path: PathBuf,
    pub schema_path: PathBuf,
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
}

impl Outcome {
    pub fn from_result(cfg: &ValidateConfig, result: Result<(), ValidateError>) -> Self {
        let failure = result.err().map(|e| Failure {
            kind: e.kind(),
            message: e.to_string(),
            violations: e.violations().to_vec(),
        });
        Self {
            json_path: cfg.json_path.clone(),
            schema_path: cfg.schema_path.clone(),
            valid: failure.is_none(),
            failure,
        }
    }

    pub fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        let Some(failure) = &self.failure else {
            return writeln!(out, "✓ {} is valid against {}", self.json_path.display(), self.schema_path.display());
        };
        if failure.kind != ErrorKind::ValidationError {
            return writeln!(out, "✗ {}", failure.message);
        }
        writeln!(out, "✗ ValidationError in {}:", self.json_path.display())?;
        for v in &failure.violations {
            let path = if v.path.is_empty() { "(root)" } else { v.path.as_str() };
            writeln!(out, "  Path: {path}")?;
            writeln!(out, "  Error: {}", v.message)?;
        }
        Ok(())
    }

    pub fn write_json(&self, out: &mut impl Write) -> io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)
    }

    pub fn write(&self, format: OutputFormat, out: &mut impl Write) -> io::Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => self.write_json(out),
        }
    }
}

/// Run the whole sequence. Never fails; every error ends up in the outcome.
pub fn run(cfg: &ValidateConfig) -> Outcome {
    Outcome::from_result(cfg, validate_files(cfg))
}

/// Validate `json_path` against `schema_path`, print the text report to stdout
/// and return whether the document conforms.
pub fn validate(schema_path: impl Into<PathBuf>, json_path: impl Into<PathBuf>) -> bool {
    let cfg = ValidateConfig::new(json_path).with_schema(schema_path);
    let outcome = run(&cfg);
    // a closed stdout does not change the verdict
    let _ = outcome.write_text(&mut io::stdout().lock());
    outcome.valid
}
