//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// Environment variable overriding the configured endpoint.
pub const ENDPOINT_ENV: &str = "SHOP_API_URL";

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration, overrides applied.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file, then apply endpoint overrides.
    pub fn load(config_path: Option<&str>, endpoint: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        config.catalog.endpoint = resolve_endpoint(
            &config.catalog.endpoint,
            std::env::var(ENDPOINT_ENV).ok(),
            endpoint,
        );
        tracing::debug!(
            endpoint = %config.catalog.endpoint,
            config = ?config_path,
            "resolved configuration"
        );

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), "skipping config: {e:#}")
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}

/// Flag beats environment beats file. Blank overrides are ignored.
pub fn resolve_endpoint(file: &str, env: Option<String>, flag: Option<&str>) -> String {
    let non_blank = |s: &str| !s.trim().is_empty();

    if let Some(flag) = flag.filter(|s| non_blank(s)) {
        return flag.trim().to_string();
    }
    if let Some(env) = env.filter(|s| non_blank(s)) {
        return env.trim().to_string();
    }
    file.to_string()
}
