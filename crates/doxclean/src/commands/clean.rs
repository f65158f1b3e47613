//! `doxclean [PATH]` implementation.

use std::path::PathBuf;

use clap::Args;
use doxclean_config::{CliSettings, Config};
use doxclean_pipeline::{Pipeline, PipelineConfig, PipelineError};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for cleaning a docs directory.
#[derive(Args, Debug)]
pub(crate) struct CleanArgs {
    /// Docs directory to clean (default: from doxclean.toml, or docs/).
    pub(crate) path: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover doxclean.toml).
    #[arg(short, long, env = "DOXCLEAN_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CleanArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.path,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            config = ?config.config_path,
            docs_dir = %config.docs_resolved.source_dir.display(),
            "Configuration loaded"
        );

        let docs_dir = config.docs_resolved.source_dir.clone();
        if !docs_dir.is_dir() {
            return Err(PipelineError::NotADirectory(docs_dir).into());
        }

        let version = config.resolve_version().map(|v| v.to_string());
        tracing::debug!(
            header = %config.version_header().display(),
            version = version.as_deref().unwrap_or("none"),
            "Version resolved"
        );
        if let Some(version) = &version {
            output.info(&format!("  version: {version}"));
        }

        let pipeline = Pipeline::new(PipelineConfig {
            docs_dir,
            home_title: config.home.title.clone(),
            version,
        });

        let report = pipeline.run(|path| {
            output.info(&format!("  cleaned {}", path.display()));
        })?;

        output.success(&format!("done: {} file(s) cleaned", report.changed()));
        Ok(())
    }
}
