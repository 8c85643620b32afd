//! Documentation output configuration.
//!
//! `BlueprintConfig` tells a [`Blueprint`](crate::blueprint::Blueprint) where to
//! put the generated documents and which exchanges are worth documenting. The
//! documentation root is always passed in explicitly; nothing in this crate
//! looks at environment variables or the working directory on its own.
//!
//! `BlueprintConfig` provides defaults via [`Default`] and a fluent
//! [`BlueprintConfig::builder()`] for customization with validation.
//!
//! # Examples
//!
//! ## Use defaults
//! ```rust
//! use api_blueprint::config::BlueprintConfig;
//! let cfg = BlueprintConfig::default();
//! assert_eq!(cfg.file_extension, "txt");
//! assert_eq!(cfg.excluded_statuses, vec![401, 301, 403]);
//! ```
//!
//! ## Customize with the builder
//! ```rust
//! use api_blueprint::config::BlueprintConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = BlueprintConfig::builder()
//!     .docs_root("target/api_docs")
//!     .exclude_status(404)
//!     .atomic_writes(true)
//!     .build()?; // returns Result<BlueprintConfig, ConfigError>
//! # Ok(()) }
//! ```
//!
//! # Fields (summary)
//! - `docs_root`: Directory receiving one file per documented action (default: `api_docs`).
//! - `file_extension`: Extension of the generated files, without the dot (default: `txt`).
//! - `json_media_type`: Media type whose bodies get pretty-printed (default: `application/json`).
//! - `excluded_statuses`: Response statuses that are never documented (default: `401, 301, 403`).
//! - `atomic_writes`: Write through a temporary file and rename it over the target (default: `false`).
//!
//! # Errors
//!
//! Builder validation can return [`ConfigError`] if values are invalid
//! (e.g. an empty extension, an extension containing a path separator, or a
//! status code outside `100..=999`).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the documentation directory inside a project root.
pub const DEFAULT_DOCS_DIR: &str = "api_docs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueprintConfig {
    pub docs_root: PathBuf,
    pub file_extension: String,
    pub json_media_type: String,
    pub excluded_statuses: Vec<u16>,
    pub atomic_writes: bool,
}

impl Default for BlueprintConfig {
    fn default() -> Self {
        Self {
            docs_root: PathBuf::from(DEFAULT_DOCS_DIR),
            file_extension: "txt".to_string(),
            json_media_type: "application/json".to_string(),
            excluded_statuses: vec![401, 301, 403],
            atomic_writes: false,
        }
    }
}

impl BlueprintConfig {
    pub fn builder() -> BlueprintConfigBuilder {
        BlueprintConfigBuilder::default()
    }

    /// Default configuration with the documentation directory placed under `project_root`.
    pub fn for_project<P: AsRef<Path>>(project_root: P) -> Self {
        Self {
            docs_root: project_root.as_ref().join(DEFAULT_DOCS_DIR),
            ..Self::default()
        }
    }

    /// Loads a configuration from a JSON file. Missing fields take their default value.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::Unreadable(format!("{}: {e}", path.display())))?;
        let config: BlueprintConfig = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::Malformed(format!("{}: {e}", path.display())))?;

        validate(&config)?;
        Ok(config)
    }

    /// Returns true when responses with this status must not be documented.
    pub fn is_excluded(&self, status: u16) -> bool {
        self.excluded_statuses.contains(&status)
    }
}

/// Builder for [`BlueprintConfig`].
#[derive(Debug, Clone, Default)]
pub struct BlueprintConfigBuilder {
    inner: BlueprintConfig,
}

impl BlueprintConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut BlueprintConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn docs_root<P: Into<PathBuf>>(self, root: P) -> Self { self.map(|c| c.docs_root = root.into()) }
    pub fn file_extension<S: Into<String>>(self, ext: S) -> Self { self.map(|c| c.file_extension = ext.into()) }
    pub fn json_media_type<S: Into<String>>(self, mt: S) -> Self { self.map(|c| c.json_media_type = mt.into()) }
    pub fn excluded_statuses(self, statuses: Vec<u16>) -> Self { self.map(|c| c.excluded_statuses = statuses) }
    pub fn exclude_status(self, status: u16) -> Self { self.map(|c| c.excluded_statuses.push(status)) }
    pub fn atomic_writes(self, on: bool) -> Self { self.map(|c| c.atomic_writes = on) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut BlueprintConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<BlueprintConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyExtension,
    InvalidExtension(String),
    EmptyMediaType,
    InvalidStatus(u16),
    Unreadable(String),
    Malformed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyExtension =>
                write!(f, "file_extension must not be empty"),
            ConfigError::InvalidExtension(ext) =>
                write!(f, "file_extension {ext:?} must not contain dots or path separators"),
            ConfigError::EmptyMediaType =>
                write!(f, "json_media_type must not be empty"),
            ConfigError::InvalidStatus(s) =>
                write!(f, "excluded status {s} is out of range (expected 100..=999)"),
            ConfigError::Unreadable(msg) =>
                write!(f, "cannot read config file {msg}"),
            ConfigError::Malformed(msg) =>
                write!(f, "cannot parse config file {msg}"),
        }
    }
}
impl std::error::Error for ConfigError {}

fn validate(c: &BlueprintConfig) -> Result<(), ConfigError> {
    if c.file_extension.is_empty() {
        return Err(ConfigError::EmptyExtension);
    }
    if c.file_extension.contains(['.', '/', '\\']) {
        return Err(ConfigError::InvalidExtension(c.file_extension.clone()));
    }
    if c.json_media_type.trim().is_empty() {
        return Err(ConfigError::EmptyMediaType);
    }
    if let Some(&status) = c.excluded_statuses.iter().find(|s| !(100..=999).contains(*s)) {
        return Err(ConfigError::InvalidStatus(status));
    }
    Ok(())
}
