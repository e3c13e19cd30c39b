use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use config::{Config, ConfigError, File};
use log::debug;
use serde_json::Value;

use solbuild::app_dirs;
use solbuild::fragments::Fragment;

use crate::cli::CliArgs;

use super::raw::RawConfig;

/// Collect the ordered configuration fragments named by the default locations
/// and the CLI, later entries taking precedence during the merge.
pub(super) fn collect_fragments(cli: &CliArgs) -> Result<Vec<Fragment>> {
    let mut fragments = Vec::new();

    if !cli.no_config {
        for path in default_config_files() {
            if !path.is_file() {
                debug!("skipping absent configuration file {}", path.display());
                continue;
            }
            fragments.push(load_fragment(&path)?);
        }
    }

    for path in &cli.config {
        fragments.push(load_fragment(path)?);
    }

    Ok(fragments)
}

/// Parse one configuration file into a fragment, keeping its path as the
/// origin label for diagnostics.
fn load_fragment(path: &Path) -> Result<Fragment> {
    let value: Value = Config::builder()
        .add_source(File::from(path.to_path_buf()))
        .build()
        .and_then(|config| config.try_deserialize())
        .with_context(|| format!("failed to read configuration file {}", path.display()))?;

    debug!("merging configuration fragment {}", path.display());
    Ok(Fragment::new(path.display().to_string(), value))
}

/// Read `SOLBUILD__*` environment variables into a raw overlay that is
/// applied field-wise on top of the merged configuration files.
pub(super) fn environment_overlay() -> Result<RawConfig> {
    Config::builder()
        .add_source(
            config::Environment::with_prefix("solbuild")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|config| config.try_deserialize())
        .map_err(|err| match err {
            ConfigError::Frozen => anyhow!("configuration builder is frozen"),
            other => other.into(),
        })
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".solbuild.toml"));
        files.push(current_dir.join("solbuild.toml"));
    }

    files
}
