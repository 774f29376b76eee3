use serde_json::Value;
use std::{fs, io, path::Path};
use tracing::debug;

use crate::error::{DocumentRole, ValidateError};

/// Read and parse one JSON file. Errors are tagged with `role` so the report
/// always names the file that actually failed.
pub fn load_document(path: &Path, role: DocumentRole) -> Result<Value, ValidateError> {
    debug!(%role, path = %path.display(), "loading document");
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ValidateError::FileNotFound { role, path: path.to_path_buf() },
        _ => ValidateError::Unexpected(format!("{}: {e}", path.display())),
    })?;
    serde_json::from_str(&text).map_err(|e| ValidateError::Parse {
        role,
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
