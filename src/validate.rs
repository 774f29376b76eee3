// os-list-validate/src/validate.rs

use jsonschema::{error::ValidationErrorKind, ValidationError, Validator};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

use crate::{
    config::ValidateConfig,
    error::{DocumentRole, ValidateError, Violation},
    loader::load_document,
};

/// Compile `schema`, checking it against its meta-schema first. The draft is
/// picked from `$schema`.
pub fn compile_schema(schema_path: &Path, schema: &Value) -> Result<Validator, ValidateError> {
    jsonschema::validator_for(schema).map_err(|e| ValidateError::SchemaStructure {
        path: schema_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// All violations of `document`, in the order the validator reports them.
pub fn check_document(validator: &Validator, document: &Value) -> Vec<Violation> {
    validator
        .iter_errors(document)
        .map(|e| {
            let pointer = e.instance_path.to_string();
            Violation { path: dot_path(&pointer), pointer, message: violation_message(&e) }
        })
        .collect()
}

/// Library text, except missing properties read `'name' is a required property`.
fn violation_message(e: &ValidationError<'_>) -> String {
    match &e.kind {
        ValidationErrorKind::Required { property: Value::String(name) } => {
            format!("'{name}' is a required property")
        }
        _ => e.to_string(),
    }
}

/// `/0/devices/1` -> `0.devices.1`
pub fn dot_path(pointer: &str) -> String {
    pointer
        .split('/')
        .skip(1)
        .map(|seg| seg.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}

/// Load both files, compile the schema and check the target. Stops at the
/// first failure; unless `all_errors` is set only the first violation is kept.
pub fn validate_files(cfg: &ValidateConfig) -> Result<(), ValidateError> {
    let schema = load_document(&cfg.schema_path, DocumentRole::Schema)?;
    let document = load_document(&cfg.json_path, DocumentRole::Target)?;
    let validator = compile_schema(&cfg.schema_path, &schema)?;

    let mut violations = check_document(&validator, &document);
    debug!(count = violations.len(), "validation finished");
    if violations.is_empty() {
        info!(target_path = %cfg.json_path.display(), "document is valid");
        return Ok(());
    }
    if !cfg.all_errors {
        violations.truncate(1);
    }
    Err(ValidateError::Invalid { path: cfg.json_path.clone(), violations })
}
