use anyhow::Result;
use serde_json::json;

use crate::settings::ResolvedConfig;

/// Print the parameters the external tools consume, one per line.
pub(crate) fn print_plain(config: &ResolvedConfig) {
    println!("solc {}", config.compiler.version);

    match config.selected_network() {
        Some((name, profile)) => {
            println!(
                "network {name}: chain id {}, block gas limit {}",
                profile.chain_id, profile.block_gas_limit
            );
            if let Some(url) = &profile.url {
                println!("endpoint {url}");
            }
        }
        None => println!("No network selected"),
    }
}

/// Format the resolved configuration as a JSON string.
pub(crate) fn format_config_json(config: &ResolvedConfig) -> Result<String> {
    let payload = json!({
        "solidity": config.compiler,
        "default_network": config.default_network,
        "networks": config.networks,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the resolved configuration.
pub(crate) fn print_json(config: &ResolvedConfig) -> Result<()> {
    println!("{}", format_config_json(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::Value;
    use solbuild::{CompilerSettings, NetworkProfile};

    use super::*;

    #[test]
    fn json_format_includes_network_parameters() {
        let config = ResolvedConfig {
            compiler: CompilerSettings::default(),
            default_network: "local".to_string(),
            networks: BTreeMap::from([("local".to_string(), NetworkProfile::local())]),
        };

        let json = format_config_json(&config).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["default_network"], "local");
        assert_eq!(value["networks"]["local"]["chain_id"], 31337);
        assert_eq!(value["networks"]["local"]["block_gas_limit"], 30_000_000);
    }

    #[test]
    fn json_format_keeps_large_gas_limits_exact() {
        let profile = NetworkProfile {
            chain_id: 1,
            block_gas_limit: 100_000_000_000,
            url: None,
        };
        let config = ResolvedConfig {
            compiler: CompilerSettings::default(),
            default_network: "local".to_string(),
            networks: BTreeMap::from([("local".to_string(), profile)]),
        };

        let json = format_config_json(&config).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(
            value["networks"]["local"]["block_gas_limit"].as_u64(),
            Some(100_000_000_000)
        );
    }
}
