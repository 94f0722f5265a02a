use anyhow::{Context as _, Result};
use clap::Parser;
use spoiler_core::SpoilerConfig;
use std::env;
use std::path::PathBuf;

/// Command-line arguments for `spoiler-check`
#[derive(Debug, Parser)]
#[command(name = "spoiler-check")]
#[command(about = "Run the Story Spoiler acceptance scenarios", long_about = None)]
pub struct Cli {
    #[arg(short, long, help = "TOML config file (defaults to the public deployment)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Base URL of the deployment (overrides config and env)")]
    pub base_url: Option<String>,

    #[arg(short, long, help = "Login username (overrides config and env)")]
    pub username: Option<String>,

    #[arg(short, long, help = "Login password (overrides config and env)")]
    pub password: Option<String>,

    #[arg(short, long, help = "JSON scenario file to run instead of the built-in suite")]
    pub scenarios: Option<PathBuf>,

    #[arg(long, help = "List scenarios in execution order and exit")]
    pub list: bool,
}

impl Cli {
    /// Resolve configuration: file (or defaults), then env, then flags
    ///
    /// # Errors
    /// Returns an error if the file cannot be loaded or a value is invalid
    pub fn resolve_config(&self) -> Result<SpoilerConfig> {
        self.resolve_config_with(|key| env::var(key).ok())
    }

    /// Same as [`Cli::resolve_config`] with `lookup` standing in for the
    /// process environment
    ///
    /// # Errors
    /// Returns an error if the file cannot be loaded or a value is invalid
    pub fn resolve_config_with<F>(&self, lookup: F) -> Result<SpoilerConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match self.config {
            Some(ref path) => SpoilerConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => SpoilerConfig::default(),
        };

        config
            .apply_overrides_from(lookup)
            .context("Invalid SPOILER_* environment override")?;

        if let Some(ref base_url) = self.base_url {
            config.api.base_url.clone_from(base_url);
        }
        if let Some(ref username) = self.username {
            config.credentials.username.clone_from(username);
        }
        if let Some(ref password) = self.password {
            config.credentials.password.clone_from(password);
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}
