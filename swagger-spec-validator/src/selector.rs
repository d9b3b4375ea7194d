//! Swagger dialect detection.
//!
//! A spec declares its dialect through one of two top-level keys:
//! `swaggerVersion` (1.2) or `swagger` (2.0). The two are mutually exclusive.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::error::ValidationError;

/// Top-level key declaring a Swagger 1.2 spec.
pub const SWAGGER12_VERSION_KEY: &str = "swaggerVersion";

/// Top-level key declaring a Swagger 2.0 spec.
pub const SWAGGER20_VERSION_KEY: &str = "swagger";

/// The spec dialects this crate can validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Swagger 1.2, declared with `swaggerVersion: "1.2"`.
    Swagger12,
    /// Swagger 2.0, declared with `swagger: "2.0"`.
    Swagger20,
}

impl Dialect {
    /// The only version string accepted for this dialect.
    #[must_use]
    pub const fn version(self) -> &'static str {
        match self {
            Self::Swagger12 => "1.2",
            Self::Swagger20 => "2.0",
        }
    }

    /// The top-level key that declares this dialect.
    #[must_use]
    pub const fn version_key(self) -> &'static str {
        match self {
            Self::Swagger12 => SWAGGER12_VERSION_KEY,
            Self::Swagger20 => SWAGGER20_VERSION_KEY,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.version())
    }
}

/// Decide which engine must validate `document`.
///
/// `origin` names where the document came from and only appears in the
/// missing-version message.
///
/// # Errors
///
/// Returns a [`ValidationError`] if both version keys are set, if neither
/// key is present, or if the declared version is not `1.2`/`2.0`.
pub fn select_engine(document: &Value, origin: &str) -> Result<Dialect, ValidationError> {
    let swagger12_version = version_indicator(document, SWAGGER12_VERSION_KEY);
    let swagger20_version = version_indicator(document, SWAGGER20_VERSION_KEY);

    let has_swagger12 = is_truthy(swagger12_version);
    let has_swagger20 = is_truthy(swagger20_version);

    if has_swagger12 && has_swagger20 {
        return Err(ValidationError::new(
            "You've got conflicting keys for the Swagger version in your spec. \
             Expected `swaggerVersion` or `swagger`, but not both.",
        ));
    }

    // Versions prior to 1.2 are not supported.
    if has_swagger12 && declares(swagger12_version, Dialect::Swagger12) {
        debug!(origin, "selected Swagger 1.2 engine");
        return Ok(Dialect::Swagger12);
    }

    if has_swagger20 && declares(swagger20_version, Dialect::Swagger20) {
        debug!(origin, "selected Swagger 2.0 engine");
        return Ok(Dialect::Swagger20);
    }

    if swagger12_version.is_none() && swagger20_version.is_none() {
        return Err(ValidationError::new(format!(
            "Swagger spec {origin} missing version. Expected `swaggerVersion` or `swagger`"
        )));
    }

    let declared = if has_swagger12 {
        swagger12_version
    } else {
        swagger20_version
    };
    Err(ValidationError::new(format!(
        "Swagger version {} not supported.",
        render_version(declared)
    )))
}

/// A version key counts as absent when it is missing or explicitly null.
fn version_indicator<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    document.get(key).filter(|value| !value.is_null())
}

fn declares(indicator: Option<&Value>, dialect: Dialect) -> bool {
    indicator.and_then(Value::as_str) == Some(dialect.version())
}

/// Empty strings, empty collections, `false` and zero do not declare a version.
fn is_truthy(indicator: Option<&Value>) -> bool {
    match indicator {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

fn render_version(indicator: Option<&Value>) -> String {
    match indicator {
        None => "None".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_swagger12() {
        let doc = json!({"swaggerVersion": "1.2", "apis": []});
        assert_eq!(select_engine(&doc, "unknown").unwrap(), Dialect::Swagger12);
    }

    #[test]
    fn test_select_swagger20() {
        let doc = json!({"swagger": "2.0", "paths": {}});
        assert_eq!(select_engine(&doc, "unknown").unwrap(), Dialect::Swagger20);
    }

    #[test]
    fn test_conflicting_keys_rejected_regardless_of_values() {
        for (v12, v20) in [("1.2", "2.0"), ("1.1", "3.0"), ("1.2", "1.2"), ("x", "y")] {
            let doc = json!({"swaggerVersion": v12, "swagger": v20});
            let err = select_engine(&doc, "unknown").unwrap_err();
            assert!(
                err.message().contains("conflicting keys"),
                "({v12}, {v20}) got: {err}"
            );
        }
    }

    #[test]
    fn test_missing_version_mentions_origin() {
        let doc = json!({"info": {"title": "pets"}});
        let err = select_engine(&doc, "http://localhost/api-docs").unwrap_err();
        assert_eq!(
            err.message(),
            "Swagger spec http://localhost/api-docs missing version. \
             Expected `swaggerVersion` or `swagger`"
        );
    }

    #[test]
    fn test_null_version_counts_as_missing() {
        let doc = json!({"swaggerVersion": null, "swagger": null});
        let err = select_engine(&doc, "unknown").unwrap_err();
        assert!(err.message().contains("missing version"), "got: {err}");
    }

    #[test]
    fn test_unsupported_swagger12_version_is_not_missing() {
        let doc = json!({"swaggerVersion": "1.1"});
        let err = select_engine(&doc, "unknown").unwrap_err();
        assert_eq!(err.message(), "Swagger version 1.1 not supported.");
    }

    #[test]
    fn test_unsupported_swagger20_version() {
        let doc = json!({"swagger": "3.0"});
        let err = select_engine(&doc, "unknown").unwrap_err();
        assert_eq!(err.message(), "Swagger version 3.0 not supported.");
    }

    #[test]
    fn test_numeric_version_is_not_the_version_string() {
        let doc = json!({"swagger": 2.0});
        let err = select_engine(&doc, "unknown").unwrap_err();
        assert_eq!(err.message(), "Swagger version 2.0 not supported.");
    }

    #[test]
    fn test_empty_version_value_is_present_but_unsupported() {
        let doc = json!({"swaggerVersion": ""});
        let err = select_engine(&doc, "unknown").unwrap_err();
        assert_eq!(err.message(), "Swagger version None not supported.");
    }

    #[test]
    fn test_empty_key_does_not_conflict() {
        let doc = json!({"swaggerVersion": "", "swagger": "2.0"});
        assert_eq!(select_engine(&doc, "unknown").unwrap(), Dialect::Swagger20);
    }

    #[test]
    fn test_non_mapping_document_is_missing_version() {
        let doc = json!(["swagger", "2.0"]);
        let err = select_engine(&doc, "unknown").unwrap_err();
        assert!(err.message().contains("missing version"), "got: {err}");
    }

    #[test]
    fn test_dialect_display() {
        assert_eq!(Dialect::Swagger12.to_string(), "1.2");
        assert_eq!(Dialect::Swagger20.to_string(), "2.0");
        assert_eq!(Dialect::Swagger20.version_key(), "swagger");
    }
}
