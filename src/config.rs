use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bundled OS list schema, relative to the working directory.
pub const DEFAULT_SCHEMA_PATH: &str = "doc/json-schema/os-list-schema.json";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything one validation run needs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidateConfig {
    pub schema_path: PathBuf,
    pub json_path: PathBuf,
    /// Report every violation instead of stopping at the first.
    pub all_errors: bool,
    pub format: OutputFormat,
}

impl ValidateConfig {
    pub fn new(json_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            json_path: json_path.into(),
            all_errors: false,
            format: OutputFormat::default(),
        }
    }

    pub fn with_schema(mut self, schema_path: impl Into<PathBuf>) -> Self {
        self.schema_path = schema_path.into();
        self
    }

    pub fn with_all_errors(mut self, all_errors: bool) -> Self {
        self.all_errors = all_errors;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
