//! Configuration management for switchdiff.
//!
//! Settings are layered: built-in defaults, then an optional configuration
//! file, then `SWITCHDIFF_*` environment variables, with `__` separating
//! nested keys (for example `SWITCHDIFF_DIFF__IGNORE_CASE=true`).
//!
//! # Example
//!
//! ```
//! use switchdiff_kernel::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! let builder = settings.builder();
//! let model = builder.build_diff_model("hostname a\n!", "hostname b\n!");
//! assert!(model.has_differences());
//! ```

pub mod acl;
pub mod telemetry;

pub use acl::AclSettings;
pub use telemetry::TelemetrySettings;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::diff::DiffOptions;
use crate::semantic::SemanticDiffBuilder;

/// Prefix of environment variables read by [`Settings`].
pub const ENV_PREFIX: &str = "SWITCHDIFF";

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Base line comparison.
    #[serde(default)]
    pub diff: DiffOptions,
    /// Access-list reconciliation.
    #[serde(default)]
    pub acl: AclSettings,
    /// Logging.
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Loads settings from defaults and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Loads settings from defaults, the given file and the environment.
    ///
    /// The file format follows the extension (`.toml`, `.yaml`, `.json`, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or if the merged
    /// configuration cannot be deserialized.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load(Some(path.as_ref()))
    }

    fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("diff.ignore_whitespace", defaults.diff.ignore_whitespace)?
            .set_default("diff.ignore_case", defaults.diff.ignore_case)?
            .set_default("diff.chunking", "section_preserving")?
            .set_default(
                "acl.ignore_removed_duplicate_acls",
                defaults.acl.ignore_removed_duplicate_acls,
            )?
            .set_default("telemetry.service_name", defaults.telemetry.service_name)?
            .set_default("telemetry.log_level", defaults.telemetry.log_level)?
            .set_default("telemetry.json", defaults.telemetry.json)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    /// A diff builder configured with [`Settings::diff`] and [`Settings::acl`].
    #[must_use]
    pub fn builder(&self) -> SemanticDiffBuilder {
        SemanticDiffBuilder::new()
            .with_options(self.diff)
            .with_ignore_removed_duplicate_acls(self.acl.ignore_removed_duplicate_acls)
    }
}
