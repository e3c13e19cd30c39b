use anyhow::{Result, anyhow};

use solbuild::fragments::resolve;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{collect_fragments, environment_overlay};
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let fragments = collect_fragments(cli)?;
    let document = resolve(fragments)?;
    let mut raw: RawConfig = document
        .deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.overlay(environment_overlay()?);
    raw.apply_cli_overrides(cli);
    raw.resolve(cli)
}
