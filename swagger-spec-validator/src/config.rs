//! Configuration for spec loading and validation.

use std::time::Duration;

/// Options shared by both validation flows.
///
/// Only the loader reads these; dialect selection and the engines are not
/// configurable.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ValidatorConfig {
    /// Maximum size in bytes of a spec document, local or remote (default: 10 MB).
    pub max_document_size: u64,
    /// Timeout for fetching a spec over HTTP (default: 30 seconds).
    pub http_timeout: Duration,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_document_size: 10_485_760,
            http_timeout: Duration::from_secs(30),
        }
    }
}
