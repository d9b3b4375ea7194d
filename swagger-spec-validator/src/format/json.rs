//! JSON spec parsing.

use anyhow::Context;
use serde_json::Value;

/// Parse a JSON spec document.
///
/// # Errors
///
/// Returns an error if the content is not valid JSON.
pub fn parse_json(content: &str) -> anyhow::Result<Value> {
    serde_json::from_str(content).context("JSON parse error")
}
