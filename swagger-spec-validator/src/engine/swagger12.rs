//! Swagger 1.2 engine.
//!
//! Checks the resource listing: the document served at `api-docs` that
//! names the API declarations. The declarations themselves live in separate
//! documents and are not fetched.

use std::sync::LazyLock;

use serde_json::Value;

use super::{CompiledSchema, Engine, check_schema, compile_schema};
use crate::selector::Dialect;

static RESOURCE_LISTING_SCHEMA: LazyLock<CompiledSchema> =
    LazyLock::new(|| compile_schema(include_str!("schemas/swagger12-resource-listing.json")));

/// Validates Swagger 1.2 resource listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swagger12Engine;

impl Engine for Swagger12Engine {
    fn validate(&self, document: &Value, origin: Option<&str>) -> anyhow::Result<()> {
        check_schema(&RESOURCE_LISTING_SCHEMA, document, Dialect::Swagger12, origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use serde_json::json;

    #[test]
    fn test_bundled_schema_compiles() {
        assert_eq!(RESOURCE_LISTING_SCHEMA.as_ref().map(|_| ()), Ok(()));
    }

    #[test]
    fn test_valid_resource_listing() {
        let doc = json!({
            "swaggerVersion": "1.2",
            "apiVersion": "1.0.0",
            "apis": [
                {"path": "/pets", "description": "Operations about pets"},
                {"path": "/store"}
            ],
            "info": {"title": "Petstore", "description": "Sample server"}
        });
        Swagger12Engine.validate(&doc, None).unwrap();
    }

    #[test]
    fn test_missing_apis_is_rejected() {
        let doc = json!({"swaggerVersion": "1.2"});
        let err = Swagger12Engine
            .validate(&doc, Some("http://localhost/api-docs"))
            .unwrap_err();

        let validation = err.downcast_ref::<ValidationError>().unwrap();
        assert!(
            validation
                .message()
                .starts_with("Swagger 1.2 spec http://localhost/api-docs is invalid:"),
            "got: {validation}"
        );
        assert!(validation.message().contains("apis"), "got: {validation}");
    }

    #[test]
    fn test_api_without_path_is_rejected() {
        let doc = json!({
            "swaggerVersion": "1.2",
            "apis": [{"description": "no path"}]
        });
        let err = Swagger12Engine.validate(&doc, None).unwrap_err();
        assert!(err.to_string().contains("path"), "got: {err}");
    }
}
