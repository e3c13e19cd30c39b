use std::collections::BTreeMap;
use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use solbuild::toolchain;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod networks;
mod solidity;

use networks::NetworkSection;
use solidity::SoliditySection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    solidity: SoliditySection,
    default_network: Option<String>,
    networks: BTreeMap<String, NetworkSection>,
}

impl RawConfig {
    /// Apply environment-derived values field-wise on top of the merged files.
    pub(super) fn overlay(&mut self, other: RawConfig) {
        self.solidity.overlay(other.solidity);
        if let Some(name) = other.default_network {
            self.default_network = Some(name);
        }
        for (name, section) in other.networks {
            self.networks.entry(name).or_default().overlay(section);
        }
    }

    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.solidity.apply_cli_overrides(cli);

        if let Some(name) = cli.network.clone() {
            self.default_network = Some(name);
        }

        if cli.chain_id.is_some() || cli.block_gas_limit.is_some() {
            let name = self.selected_network();
            let section = self.networks.entry(name).or_default();
            if let Some(value) = cli.chain_id {
                section.chain_id = Some(value);
            }
            if let Some(value) = cli.block_gas_limit {
                section.block_gas_limit = Some(value);
            }
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let selected = self.selected_network();
        let sources = ConfigSources {
            compiler_version: detect_source(
                cli.solc.is_some(),
                self.solidity.version.is_some(),
                "SOLBUILD__SOLIDITY__VERSION".to_string(),
                "--solc",
                "solidity.version".to_string(),
            ),
            default_network: detect_source(
                cli.network.is_some(),
                self.default_network.is_some(),
                "SOLBUILD__DEFAULT_NETWORK".to_string(),
                "--network",
                "default_network".to_string(),
            ),
            block_gas_limit: detect_source(
                cli.block_gas_limit.is_some(),
                self.networks
                    .get(&selected)
                    .is_some_and(|section| section.block_gas_limit.is_some()),
                format!(
                    "SOLBUILD__NETWORKS__{}__BLOCK_GAS_LIMIT",
                    selected.to_uppercase()
                ),
                "--block-gas-limit",
                format!("networks.{selected}.block_gas_limit"),
            ),
        };

        let compiler = self.solidity.finalize();
        let networks = networks::finalize(self.networks);

        let config = ResolvedConfig {
            compiler,
            default_network: selected,
            networks,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }

    fn selected_network(&self) -> String {
        self.default_network
            .clone()
            .unwrap_or_else(|| toolchain::DEFAULT_NETWORK.to_string())
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: String,
    cli_flag: &'static str,
    key: String,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(&env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
