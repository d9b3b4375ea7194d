//! Spec document formats.
//!
//! Each sub-module parses one format into a `serde_json::Value` tree:
//! - `json`: JSON documents
//! - `yaml`: YAML documents (deserialized straight into `serde_json::Value`)

use std::path::Path;

use serde_json::Value;

pub mod json;
pub mod yaml;

/// Content format of a spec document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
}

impl SpecFormat {
    /// Determine the format from the suffix of a path's file name.
    ///
    /// Only `.json`, `.yaml` and `.yml` are recognized; matching is
    /// case-sensitive. A bare `.json` file name counts, unlike with
    /// `Path::extension`.
    #[must_use]
    pub fn for_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.ends_with(".json") {
            Some(Self::Json)
        } else if name.ends_with(".yaml") || name.ends_with(".yml") {
            Some(Self::Yaml)
        } else {
            None
        }
    }

    /// Parse `content` as this format.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not well-formed in this format.
    pub fn parse(self, content: &str) -> anyhow::Result<Value> {
        match self {
            Self::Json => json::parse_json(content),
            Self::Yaml => yaml::parse_yaml(content),
        }
    }
}
