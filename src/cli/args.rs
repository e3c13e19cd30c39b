use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use solbuild::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("solbuild {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "solbuild",
    version,
    long_version = long_version(),
    about = "Resolve and inspect Solidity build configuration",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `solbuild` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "SOLBUILD_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long = "solc",
        value_name = "VERSION",
        help = "Override the compiler release to invoke (default: configured version)"
    )]
    pub(crate) solc: Option<String>,
    #[arg(
        short = 'N',
        long = "network",
        value_name = "NAME",
        help = "Select the network handed to the build tool (default: configured default network)"
    )]
    pub(crate) network: Option<String>,
    #[arg(
        long = "chain-id",
        value_name = "NUM",
        help = "Override the chain id of the selected network (default: configured value)"
    )]
    pub(crate) chain_id: Option<u64>,
    #[arg(
        long = "block-gas-limit",
        value_name = "NUM",
        help = "Override the per-block gas cap of the selected network (default: configured value)"
    )]
    pub(crate) block_gas_limit: Option<u64>,
    #[arg(
        long = "list-networks",
        help = "List the configured network names and exit"
    )]
    pub(crate) list_networks: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print a summary of the effective configuration (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the resolved configuration"
    )]
    pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_overrides_unset() {
        let parsed = CliArgs::parse_from(["solbuild"]);
        assert!(parsed.config.is_empty());
        assert!(!parsed.no_config);
        assert!(parsed.solc.is_none());
        assert!(parsed.network.is_none());
        assert_eq!(parsed.output, OutputFormat::Plain);
    }

    #[test]
    fn override_flags_parse_into_typed_values() {
        let parsed = CliArgs::parse_from([
            "solbuild",
            "--network",
            "testnet",
            "--chain-id",
            "5",
            "--block-gas-limit",
            "100000000000",
            "--output",
            "json",
        ]);
        assert_eq!(parsed.network.as_deref(), Some("testnet"));
        assert_eq!(parsed.chain_id, Some(5));
        assert_eq!(parsed.block_gas_limit, Some(100_000_000_000));
        assert_eq!(parsed.output, OutputFormat::Json);
    }
}
