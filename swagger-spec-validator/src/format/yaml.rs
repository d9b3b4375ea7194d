//! YAML spec parsing.
//!
//! YAML is deserialized directly into `serde_json::Value` so the selector and
//! the engines see the same tree regardless of the source format.

use anyhow::Context;
use serde_json::Value;

/// Parse a single-document YAML spec.
///
/// # Errors
///
/// Returns an error if the content is not valid YAML or holds more than one
/// document.
pub fn parse_yaml(content: &str) -> anyhow::Result<Value> {
    serde_saphyr::from_str::<Value>(content).context("YAML parse error")
}
