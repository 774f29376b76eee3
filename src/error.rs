// os-list-validate/src/error.rs

use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};
use thiserror::Error;

/// Which of the two input files an error belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentRole { Schema, Target }

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Schema => f.write_str("schema"),
            DocumentRole::Target => f.write_str("target"),
        }
    }
}

/// Stable tag for each failure kind; printed as the diagnostic prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ErrorKind {
    SchemaFileNotFound,
    TargetFileNotFound,
    SchemaParseError,
    TargetParseError,
    SchemaStructureError,
    ValidationError,
    UnexpectedError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::SchemaFileNotFound => "SchemaFileNotFound",
            ErrorKind::TargetFileNotFound => "TargetFileNotFound",
            ErrorKind::SchemaParseError => "SchemaParseError",
            ErrorKind::TargetParseError => "TargetParseError",
            ErrorKind::SchemaStructureError => "SchemaStructureError",
            ErrorKind::ValidationError => "ValidationError",
            ErrorKind::UnexpectedError => "UnexpectedError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// One schema violation inside the target document.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Dot-joined property names / array indices; empty at the root.
    pub path: String,
    /// Same location as a JSON Pointer.
    pub pointer: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("{kind}: {}", path.display(), kind = not_found_kind(*role))]
    FileNotFound { role: DocumentRole, path: PathBuf },

    #[error("{kind} in {}: {message}", path.display(), kind = parse_kind(*role))]
    Parse { role: DocumentRole, path: PathBuf, message: String },

    #[error("SchemaStructureError in {}: {message}", path.display())]
    SchemaStructure { path: PathBuf, message: String },

    #[error("ValidationError in {}: {} violation(s)", path.display(), violations.len())]
    Invalid { path: PathBuf, violations: Vec<Violation> },

    #[error("UnexpectedError: {0}")]
    Unexpected(String),
}

fn not_found_kind(role: DocumentRole) -> ErrorKind {
    match role {
        DocumentRole::Schema => ErrorKind::SchemaFileNotFound,
        DocumentRole::Target => ErrorKind::TargetFileNotFound,
    }
}

fn parse_kind(role: DocumentRole) -> ErrorKind {
    match role {
        DocumentRole::Schema => ErrorKind::SchemaParseError,
        DocumentRole::Target => ErrorKind::TargetParseError,
    }
}

impl ValidateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidateError::FileNotFound { role, .. } => not_found_kind(*role),
            ValidateError::Parse { role, .. } => parse_kind(*role),
            ValidateError::SchemaStructure { .. } => ErrorKind::SchemaStructureError,
            ValidateError::Invalid { .. } => ErrorKind::ValidationError,
            ValidateError::Unexpected(_) => ErrorKind::UnexpectedError,
        }
    }

    /// The violations carried by a `ValidationError`, empty for every other kind.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidateError::Invalid { violations, .. } => violations,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_selects_the_kind() {
        let e = ValidateError::FileNotFound { role: DocumentRole::Target, path: "missing.json".into() };
        assert_eq!(e.kind(), ErrorKind::TargetFileNotFound);
        assert_eq!(e.to_string(), "TargetFileNotFound: missing.json");

        let e = ValidateError::Parse { role: DocumentRole::Schema, path: "s.json".into(), message: "eof".into() };
        assert_eq!(e.kind(), ErrorKind::SchemaParseError);
        assert_eq!(e.to_string(), "SchemaParseError in s.json: eof");
    }

    #[test]
    fn only_invalid_carries_violations() {
        let v = Violation { path: "0".into(), pointer: "/0".into(), message: "bad".into() };
        let e = ValidateError::Invalid { path: "doc.json".into(), violations: vec![v.clone()] };
        assert_eq!(e.violations(), &[v]);
        assert!(ValidateError::Unexpected("boom".into()).violations().is_empty());
    }
}
