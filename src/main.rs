mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};

fn main() -> Result<()> {
    solbuild::logging::initialize();
    let cli = parse_cli();

    let resolved = settings::load(&cli)?;

    if cli.list_networks {
        for name in resolved.networks.keys() {
            println!("{name}");
        }
        return Ok(());
    }

    if cli.print_config {
        resolved.print_summary();
    }

    match cli.output {
        OutputFormat::Plain => print_plain(&resolved),
        OutputFormat::Json => print_json(&resolved)?,
    }

    Ok(())
}
