//! The error type surfaced by every validation entry point.

use std::error::Error as StdError;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A spec failed validation, or could not be validated at all.
///
/// Conflicting or missing version keys, unsupported versions, loader
/// failures (I/O, HTTP, parse errors) and engine rejections all surface as
/// this one type. When the failure originated elsewhere, the original error
/// is kept as the [`source`](StdError::source).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl ValidationError {
    /// Create a validation error with no underlying cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Human-readable description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this error wraps a lower-level failure.
    #[must_use]
    pub fn is_wrapped(&self) -> bool {
        self.source.is_some()
    }
}

/// Run `f` and map whatever it fails with into a [`ValidationError`].
///
/// An error that already is a `ValidationError` crosses unchanged; anything
/// else becomes the source of a new one whose message is the full context
/// chain of the original.
///
/// # Errors
///
/// Returns the normalized error if `f` fails.
pub fn normalize<T, F>(f: F) -> Result<T, ValidationError>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    f().map_err(into_validation_error)
}

fn into_validation_error(err: anyhow::Error) -> ValidationError {
    match err.downcast::<ValidationError>() {
        Ok(validation_error) => validation_error,
        Err(other) => ValidationError {
            message: format!("{other:#}"),
            source: Some(other.into()),
        },
    }
}
