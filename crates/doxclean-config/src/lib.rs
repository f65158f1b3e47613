//! Configuration management for doxclean.
//!
//! Parses optional `doxclean.toml` files with serde and provides
//! auto-discovery of config files in parent directories. Every setting has a
//! default, so running without a config file cleans `docs` and reads the
//! version from `src/Version.h` next to it.
//!
//! CLI settings can be applied during load via [`CliSettings`].

mod version;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use version::VersionTriple;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "doxclean.toml";

/// Default macro prefix for version components.
const DEFAULT_VERSION_PREFIX: &str = "WHOIS";

/// Default version header location, relative to the project root.
const DEFAULT_VERSION_HEADER: &str = "src/Version.h";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Version header configuration (paths are relative strings from TOML).
    version: VersionConfigRaw,
    /// Home page configuration.
    pub home: HomeConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved version configuration (set after loading).
    #[serde(skip)]
    pub version_resolved: VersionConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory scanned for doxide markdown.
    pub source_dir: PathBuf,
}

/// Raw version configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct VersionConfigRaw {
    header: Option<String>,
    prefix: Option<String>,
}

/// Resolved version configuration.
#[derive(Debug)]
pub struct VersionConfig {
    /// Explicit header path. When unset, the header is looked up relative to
    /// the parent of the docs directory.
    pub header: Option<PathBuf>,
    /// Macro prefix (`<PREFIX>_VERSION_MAJOR`).
    pub prefix: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            header: None,
            prefix: DEFAULT_VERSION_PREFIX.to_owned(),
        }
    }
}

/// Home page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// H1 title identifying the home page header that receives the version.
    pub title: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            title: "whois".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `doxclean.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_relative()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }

    /// Path of the C header holding the version macros.
    ///
    /// Falls back to `src/Version.h` beside the docs directory, resolving the
    /// docs directory first so relative paths like `docs` still have a parent.
    #[must_use]
    pub fn version_header(&self) -> PathBuf {
        if let Some(header) = &self.version_resolved.header {
            return header.clone();
        }
        let source_dir = &self.docs_resolved.source_dir;
        let resolved = source_dir
            .canonicalize()
            .unwrap_or_else(|_| source_dir.clone());
        resolved
            .parent()
            .unwrap_or(Path::new("."))
            .join(DEFAULT_VERSION_HEADER)
    }

    /// Read the project version from the version header.
    ///
    /// Returns `None` when the header is missing or lacks any component.
    #[must_use]
    pub fn resolve_version(&self) -> Option<VersionTriple> {
        VersionTriple::from_header(&self.version_header(), &self.version_resolved.prefix)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with bare relative paths (`docs`), so messages
    /// show the directory the way it was given.
    fn default_relative() -> Self {
        Self::default_with_base(Path::new(""))
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            version: VersionConfigRaw::default(),
            home: HomeConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            version_resolved: VersionConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.version_resolved.prefix, "version.prefix")?;
        require_non_empty(&self.home.title, "home.title")?;
        Ok(())
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(self.docs.source_dir.as_deref().unwrap_or("docs")),
        };

        self.version_resolved = VersionConfig {
            header: Some(config_dir.join(
                self.version
                    .header
                    .as_deref()
                    .unwrap_or(DEFAULT_VERSION_HEADER),
            )),
            prefix: self
                .version
                .prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_VERSION_PREFIX.to_owned()),
        };
    }
}
