use super::super::util::is_version_triple;
use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    if !is_version_triple(&config.compiler.version) {
        return Err(ConfigError::invalid(
            "solidity.version",
            config.compiler.version.clone(),
            sources.source_for_compiler_version(),
            "must be a MAJOR.MINOR.PATCH version",
        ));
    }

    if !config.networks.contains_key(&config.default_network) {
        return Err(ConfigError::invalid(
            "default_network",
            config.default_network.clone(),
            sources.source_for_default_network(),
            "does not name a configured network",
        ));
    }

    for (name, profile) in &config.networks {
        if profile.block_gas_limit == 0 {
            // Overrides only ever target the selected network; other entries
            // can only have come from a configuration key.
            let origin = if *name == config.default_network {
                sources.source_for_block_gas_limit(name)
            } else {
                SettingSource::ConfigKey(format!("networks.{name}.block_gas_limit"))
            };
            return Err(ConfigError::invalid(
                format!("networks.{name}.block_gas_limit"),
                "0",
                origin,
                "must be greater than zero",
            ));
        }
    }

    Ok(())
}
