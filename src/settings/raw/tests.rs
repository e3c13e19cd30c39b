use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
    let mut cli = CliArgs::parse_from(["solbuild"]);
    cli.solc = Some("0.8.19".to_string());
    cli.network = Some("testnet".to_string());
    cli.chain_id = Some(5);
    cli.block_gas_limit = Some(12_000_000);

    let mut config = RawConfig::default();
    config.apply_cli_overrides(&cli);

    assert_eq!(config.solidity.version, cli.solc);
    assert_eq!(config.default_network, cli.network);
    let section = &config.networks["testnet"];
    assert_eq!(section.chain_id, Some(5));
    assert_eq!(section.block_gas_limit, Some(12_000_000));
}

#[test]
fn network_overrides_target_the_builtin_network_by_default() {
    let mut cli = CliArgs::parse_from(["solbuild"]);
    cli.chain_id = Some(1);

    let mut config = RawConfig::default();
    config.apply_cli_overrides(&cli);

    assert_eq!(config.networks["local"].chain_id, Some(1));
}

#[test]
fn overlay_applies_field_wise() {
    let mut base = RawConfig::default();
    base.solidity.version = Some("0.8.18".to_string());
    base.networks.entry("local".to_string()).or_default().chain_id = Some(1);
    base.networks
        .entry("local".to_string())
        .or_default()
        .block_gas_limit = Some(100_000_000_000);

    let mut overlay = RawConfig::default();
    overlay
        .networks
        .entry("local".to_string())
        .or_default()
        .chain_id = Some(5);

    base.overlay(overlay);

    // Only the redeclared field moves; the sibling value is untouched.
    assert_eq!(base.solidity.version.as_deref(), Some("0.8.18"));
    assert_eq!(base.networks["local"].chain_id, Some(5));
    assert_eq!(base.networks["local"].block_gas_limit, Some(100_000_000_000));
}

#[test]
fn resolve_fills_builtin_defaults() {
    let cli = CliArgs::parse_from(["solbuild"]);
    let config = RawConfig::default().resolve(&cli).unwrap();

    assert_eq!(config.default_network, "local");
    assert_eq!(config.compiler.version, "0.8.24");
    let local = &config.networks["local"];
    assert_eq!(local.chain_id, 31337);
    assert_eq!(local.block_gas_limit, 30_000_000);
}

#[test]
fn resolve_rejects_unknown_default_network() {
    let mut cli = CliArgs::parse_from(["solbuild"]);
    cli.network = Some("ghost".to_string());

    let mut config = RawConfig::default();
    config.apply_cli_overrides(&cli);
    let err = config.resolve(&cli).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("default_network"));
    assert!(message.contains("--network"));
}

#[test]
fn resolve_keeps_declared_remote_networks() {
    let cli = CliArgs::parse_from(["solbuild"]);
    let mut config = RawConfig::default();
    {
        let section = config.networks.entry("mainnet".to_string()).or_default();
        section.chain_id = Some(1);
        section.url = Some("https://rpc.example.org".to_string());
    }

    let resolved = config.resolve(&cli).unwrap();

    assert_eq!(resolved.networks["mainnet"].chain_id, 1);
    assert_eq!(
        resolved.networks["mainnet"].url.as_deref(),
        Some("https://rpc.example.org")
    );
    // The builtin network is still materialized alongside declared ones.
    assert!(resolved.networks.contains_key("local"));
}
