//! Dialect validation engines.
//!
//! Each Swagger dialect has one [`Engine`]. [`Engines`] maps a [`Dialect`]
//! picked by the selector to the engine that must run; callers can swap in
//! their own implementations.
//!
//! The bundled engines check document shape only, against a JSON Schema
//! compiled with the `jsonschema` crate. `$ref` pointers are not followed.

use anyhow::anyhow;
use serde_json::Value;

use crate::error::ValidationError;
use crate::selector::Dialect;

pub mod swagger12;
pub mod swagger20;

pub use swagger12::Swagger12Engine;
pub use swagger20::Swagger20Engine;

/// Validation logic for one spec dialect.
pub trait Engine {
    /// Check that `document` conforms to the dialect.
    ///
    /// `origin` names where the document came from; it is only used in
    /// diagnostics and may be absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not conform.
    fn validate(&self, document: &Value, origin: Option<&str>) -> anyhow::Result<()>;
}

/// One engine per dialect.
pub struct Engines {
    swagger12: Box<dyn Engine>,
    swagger20: Box<dyn Engine>,
}

impl Engines {
    /// Pair a Swagger 1.2 engine with a Swagger 2.0 engine.
    #[must_use]
    pub fn new(swagger12: Box<dyn Engine>, swagger20: Box<dyn Engine>) -> Self {
        Self {
            swagger12,
            swagger20,
        }
    }

    /// The engine responsible for `dialect`.
    #[must_use]
    pub fn for_dialect(&self, dialect: Dialect) -> &dyn Engine {
        match dialect {
            Dialect::Swagger12 => self.swagger12.as_ref(),
            Dialect::Swagger20 => self.swagger20.as_ref(),
        }
    }
}

impl Default for Engines {
    fn default() -> Self {
        Self::new(Box::new(Swagger12Engine), Box::new(Swagger20Engine))
    }
}

/// A bundled JSON Schema, compiled once on first use.
///
/// A compilation failure is kept as text and reported by every validation.
type CompiledSchema = Result<jsonschema::Validator, String>;

fn compile_schema(source: &str) -> CompiledSchema {
    let schema: Value = serde_json::from_str(source)
        .map_err(|e| format!("bundled engine schema is not valid JSON: {e}"))?;
    jsonschema::validator_for(&schema)
        .map_err(|e| format!("failed to compile bundled engine schema: {e}"))
}

/// Validate `document` against a compiled bundled schema.
///
/// All violations are reported in a single [`ValidationError`], one per line.
fn check_schema(
    schema: &CompiledSchema,
    document: &Value,
    dialect: Dialect,
    origin: Option<&str>,
) -> anyhow::Result<()> {
    let validator = schema.as_ref().map_err(|e| anyhow!("{e}"))?;

    let violations: Vec<String> = validator
        .iter_errors(document)
        .map(|error| format!("  {error}"))
        .collect();

    if violations.is_empty() {
        return Ok(());
    }

    Err(spec_error(dialect, origin, &violations.join("\n")).into())
}

/// Build the error an engine reports for a non-conformant document.
fn spec_error(dialect: Dialect, origin: Option<&str>, detail: &str) -> ValidationError {
    match origin {
        Some(origin) => ValidationError::new(format!(
            "Swagger {dialect} spec {origin} is invalid:\n{detail}"
        )),
        None => ValidationError::new(format!("Swagger {dialect} spec is invalid:\n{detail}")),
    }
}
