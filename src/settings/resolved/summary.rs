use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
    println!("Effective configuration:");
    println!("  Compiler version: {}", config.compiler.version);
    println!(
        "  Optimizer: {} ({} runs)",
        enabled_word(config.compiler.optimizer.enabled),
        config.compiler.optimizer.runs
    );
    println!("  Default network: {}", config.default_network);
    for (name, profile) in &config.networks {
        println!("  Network {name}:");
        println!("    Chain id: {}", profile.chain_id);
        println!("    Block gas limit: {}", profile.block_gas_limit);
        match &profile.url {
            Some(url) => println!("    RPC endpoint: {url}"),
            None => println!("    RPC endpoint: (in-process)"),
        }
    }
}

fn enabled_word(value: bool) -> &'static str {
    if value { "enabled" } else { "disabled" }
}
