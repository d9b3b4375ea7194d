//! # swagger-spec-validator
//!
//! Detects whether an API spec is Swagger 1.2 or Swagger 2.0 and validates
//! it with the matching engine.
//!
//! A spec declares its dialect with exactly one top-level key:
//! `swaggerVersion: "1.2"` or `swagger: "2.0"`. Both keys, neither key, or
//! any other version value is rejected before an engine runs.
//!
//! Every failure, whether it comes from loading, dialect selection, or an
//! engine, surfaces as a single [`ValidationError`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use swagger_spec_validator::{FileOutcome, validate_spec_file, validate_spec_url};
//!
//! validate_spec_url("https://petstore.swagger.io/v2/swagger.json").unwrap();
//!
//! let outcome = validate_spec_file(Path::new("api/swagger.yaml"), &mut std::io::stdout()).unwrap();
//! assert!(matches!(outcome, FileOutcome::Validated(_)));
//! ```

mod config;
mod engine;
mod error;
mod format;
mod loader;
mod selector;
mod validator;

pub use config::ValidatorConfig;
pub use engine::{Engine, Engines, Swagger12Engine, Swagger20Engine};
pub use error::{ValidationError, normalize};
pub use format::SpecFormat;
pub use loader::{Loader, SpecLoader};
pub use selector::{Dialect, SWAGGER12_VERSION_KEY, SWAGGER20_VERSION_KEY, select_engine};
pub use validator::{
    FINISHED_NOTICE, FileOutcome, START_NOTICE, SpecValidator, UNKNOWN_ORIGIN, UNSUPPORTED_NOTICE,
};

use std::io::Write;
use std::path::Path;

/// Validate the spec at `spec_url` with the default loader and engines.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the spec cannot be loaded or fails
/// validation.
pub fn validate_spec_url(spec_url: &str) -> Result<(), ValidationError> {
    SpecValidator::new().validate_spec_url(spec_url)
}

/// Validate the spec file at `path` with the default engines, writing
/// progress notices to `notices`.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the file cannot be read or fails
/// validation. An unrecognized extension is not an error.
pub fn validate_spec_file(
    path: &Path,
    notices: &mut dyn Write,
) -> Result<FileOutcome, ValidationError> {
    SpecValidator::new().validate_spec_file(path, notices)
}
