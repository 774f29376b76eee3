pub mod config;
pub mod error;
pub mod loader;
pub mod validate;
pub mod report;

pub use config::{ValidateConfig, OutputFormat, DEFAULT_SCHEMA_PATH};
pub use error::{DocumentRole, ErrorKind, ValidateError, Violation};
pub use loader::load_document;
pub use validate::{check_document, compile_schema, dot_path, validate_files};
pub use report::{run, validate, Failure, Outcome};
