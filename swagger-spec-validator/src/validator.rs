//! Validation flows: load a spec, pick its dialect, run the dialect engine.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::engine::Engines;
use crate::error::{ValidationError, normalize};
use crate::format::SpecFormat;
use crate::loader::{Loader, SpecLoader, read_bounded};
use crate::selector::{Dialect, select_engine};

/// Origin label used when a spec is validated from a local file.
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// Notice written before a local spec file is validated.
pub const START_NOTICE: &str = "swagger validate start!";

/// Notice written after a local spec file validated successfully.
pub const FINISHED_NOTICE: &str = "swagger validate finished!";

/// Diagnostic written when a local spec file has an unrecognized extension.
pub const UNSUPPORTED_NOTICE: &str = "swagger file neither json nor yaml";

/// How a successful local-file validation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The spec was parsed and passed the engine for this dialect.
    Validated(Dialect),
    /// The file extension is neither JSON nor YAML; nothing was validated.
    Unsupported,
}

/// Drives the URL and local-file validation flows.
///
/// Holds only its configuration, the loader and the engines. Calls do not
/// affect each other.
pub struct SpecValidator<L = SpecLoader> {
    config: ValidatorConfig,
    loader: L,
    engines: Engines,
}

impl SpecValidator<SpecLoader> {
    /// A validator with the default loader, engines and configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// A validator with the default loader and engines.
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        let loader = SpecLoader::new(&config);
        Self::with_loader(config, loader)
    }
}

impl Default for SpecValidator<SpecLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Loader> SpecValidator<L> {
    /// A validator that loads URL-flow documents through `loader`.
    #[must_use]
    pub fn with_loader(config: ValidatorConfig, loader: L) -> Self {
        Self {
            config,
            loader,
            engines: Engines::default(),
        }
    }

    /// Replace the dialect engines.
    #[must_use]
    pub fn with_engines(mut self, engines: Engines) -> Self {
        self.engines = engines;
        self
    }

    /// Validate the spec at `spec_url`.
    ///
    /// For Swagger 1.2 this is the URL of the resource listing; for 2.0 the
    /// URL of the spec document. `file://` URLs must be absolute. The URL is
    /// passed to the engine and used in error messages.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the spec cannot be loaded, declares
    /// no or an unsupported dialect, or fails its dialect engine.
    pub fn validate_spec_url(&self, spec_url: &str) -> Result<(), ValidationError> {
        normalize(|| {
            let document = self.loader.load(spec_url)?;
            let dialect = select_engine(&document, spec_url)?;
            debug!(%dialect, origin = spec_url, "running engine");
            self.engines
                .for_dialect(dialect)
                .validate(&document, Some(spec_url))
        })
    }

    /// Validate the spec file at `path`, writing progress notices to `notices`.
    ///
    /// The file must end in `.json`, `.yaml` or `.yml`. Any other extension
    /// writes a diagnostic and returns [`FileOutcome::Unsupported`] without
    /// validating. The file path is not used as the origin: selection sees
    /// `"unknown"` and the engine sees no origin.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the file cannot be opened or parsed,
    /// declares no or an unsupported dialect, fails its dialect engine, or a
    /// notice cannot be written.
    pub fn validate_spec_file(
        &self,
        path: &Path,
        notices: &mut dyn Write,
    ) -> Result<FileOutcome, ValidationError> {
        normalize(|| {
            writeln!(notices, "{START_NOTICE}")?;

            let document = {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open spec file {}", path.display()))?;

                let Some(format) = SpecFormat::for_path(path) else {
                    writeln!(notices, "{UNSUPPORTED_NOTICE}")?;
                    return Ok(FileOutcome::Unsupported);
                };
                debug!(path = %path.display(), ?format, "parsing spec file");

                let content = read_bounded(file, self.config.max_document_size)
                    .with_context(|| format!("Failed to read spec file {}", path.display()))?;
                format
                    .parse(&content)
                    .with_context(|| format!("Failed to parse spec file {}", path.display()))?
            };

            let dialect = select_engine(&document, UNKNOWN_ORIGIN)?;
            debug!(%dialect, "running engine");
            self.engines.for_dialect(dialect).validate(&document, None)?;

            writeln!(notices, "{FINISHED_NOTICE}")?;
            Ok(FileOutcome::Validated(dialect))
        })
    }
}
