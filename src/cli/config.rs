//! Configuration management using the `config` crate for hierarchical discovery and merging.
//!
//! ## Configuration Sources (in precedence order, highest to lowest):
//! 1. **CLI flags** - Highest precedence (applied in [`merge_config`])
//! 2. **Environment variables** - `DAXIE_GENERAL__ZERO_GAP` style keys
//! 3. **Config files** - Lowest precedence
//!
//! ## Config File Discovery (in merge order, later overrides earlier):
//! 1. `~/.config/daxie/config.toml` (user config directory)
//! 2. `./daxie.toml` in the current directory
//! 3. Explicit `--config` path (if provided and exists)
//!
//! ```toml
//! [general]
//! zero_gap = "literal"
//! format = "json"
//! show_input = true
//! ```

use crate::MergedConfig;
use crate::cli::args::Args;
use crate::numeral::ZeroGap;
use crate::output::OutputFormat;
use crate::utils::error::DaxieError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "daxie.toml";

/// Root configuration structure loaded from config files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// General application settings.
///
/// Names are kept as strings and validated in [`merge_config`], so an
/// unknown value is reported with the list of valid ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub zero_gap: Option<String>,
    pub format: Option<String>,
    #[serde(default)]
    pub show_input: bool,
}

fn discover_config_paths(explicit_path: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // User config (lowest precedence)
    if let Some(user_config) = get_user_config_path() {
        paths.push(user_config);
    }

    // Current directory config
    let current_dir_config = PathBuf::from(DEFAULT_CONFIG_FILE);
    if current_dir_config.exists() {
        paths.push(current_dir_config);
    }

    // Explicit --config path (highest precedence)
    if explicit_path != Path::new(DEFAULT_CONFIG_FILE) && explicit_path.exists() {
        paths.push(explicit_path.to_path_buf());
    } else if explicit_path != Path::new(DEFAULT_CONFIG_FILE) {
        tracing::warn!(
            "Config file {} not found, ignoring",
            explicit_path.display()
        );
    }

    paths
}

fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|config_dir| config_dir.join("daxie").join("config.toml"))
        .filter(|path| path.exists())
}

/// Load configuration from discovered config files and environment variables.
pub fn load(args: &Args) -> Result<Config> {
    load_from(&discover_config_paths(&args.config), true)
}

/// Load configuration from the given files, later files overriding earlier ones.
pub fn load_from(paths: &[PathBuf], include_env: bool) -> Result<Config> {
    let mut builder = config::Config::builder();

    for config_path in paths {
        tracing::debug!("Loading config from {}", config_path.display());
        builder = builder.add_source(config::File::from(config_path.as_path()));
    }

    if include_env {
        builder = builder.add_source(
            config::Environment::with_prefix("DAXIE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
    }

    let settings = builder.build().context("Failed to build configuration")?;

    settings
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

/// Merge CLI arguments over loaded configuration.
///
/// Options left unset on the command line fall back to the config value;
/// boolean switches can only turn a setting on. Config values are only
/// parsed when the command line does not override them.
pub fn merge_config(args: &Args, config: Config) -> Result<MergedConfig, DaxieError> {
    let general = config.general;

    let zero_gap = match (args.zero_gap, general.zero_gap.as_deref()) {
        (Some(zero_gap), _) => zero_gap,
        (None, Some(name)) => name.parse::<ZeroGap>()?,
        (None, None) => ZeroGap::default(),
    };
    let format = match (args.format, general.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => name.parse::<OutputFormat>()?,
        (None, None) => OutputFormat::default(),
    };

    Ok(MergedConfig {
        numbers: args.numbers.clone(),
        zero_gap,
        format,
        show_input: args.show_input || general.show_input,
        interactive: args.interactive,
        verbose: args.verbose,
        quiet: args.quiet,
    })
}
