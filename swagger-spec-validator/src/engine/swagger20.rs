//! Swagger 2.0 engine.
//!
//! Runs the bundled top-level schema first; if the shape is right, also
//! rejects path templates that differ only in parameter names
//! (`/pets/{id}` and `/pets/{petId}` match the same requests).

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use serde_json::Value;

use super::{CompiledSchema, Engine, check_schema, compile_schema, spec_error};
use crate::selector::Dialect;

static SWAGGER20_SCHEMA: LazyLock<CompiledSchema> =
    LazyLock::new(|| compile_schema(include_str!("schemas/swagger20.json")));

/// Validates Swagger 2.0 specs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swagger20Engine;

impl Engine for Swagger20Engine {
    fn validate(&self, document: &Value, origin: Option<&str>) -> anyhow::Result<()> {
        check_schema(&SWAGGER20_SCHEMA, document, Dialect::Swagger20, origin)?;

        let Some(paths) = document.get("paths").and_then(Value::as_object) else {
            return Ok(());
        };

        let conflicts = equivalent_paths(paths.keys().map(String::as_str));
        if conflicts.is_empty() {
            return Ok(());
        }

        let detail = conflicts
            .iter()
            .map(|(first, second)| format!("  paths {first} and {second} are equivalent"))
            .collect::<Vec<_>>()
            .join("\n");
        Err(spec_error(Dialect::Swagger20, origin, &detail).into())
    }
}

/// Pairs of path templates that are equal once parameter names are erased.
///
/// Vendor extensions (`x-*`) are not paths and are skipped.
fn equivalent_paths<'a>(paths: impl Iterator<Item = &'a str>) -> Vec<(&'a str, &'a str)> {
    let mut seen: HashMap<String, &'a str> = HashMap::new();
    let mut conflicts = Vec::new();

    for path in paths.filter(|p| p.starts_with('/')) {
        match seen.entry(erase_parameter_names(path)) {
            Entry::Occupied(first) => conflicts.push((*first.get(), path)),
            Entry::Vacant(slot) => {
                slot.insert(path);
            }
        }
    }

    conflicts
}

fn erase_parameter_names(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut in_param = false;

    for c in path.chars() {
        match c {
            '{' => {
                in_param = true;
                out.push('{');
            }
            '}' if in_param => {
                in_param = false;
                out.push('}');
            }
            _ if in_param => {}
            _ => out.push(c),
        }
    }

    out
}
