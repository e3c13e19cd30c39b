//! Settings consumed by the external build and test tools.

use serde::{Deserialize, Serialize};

/// Name of the builtin in-process network.
pub const DEFAULT_NETWORK: &str = "local";

/// Chain id of the builtin in-process network.
pub const LOCAL_CHAIN_ID: u64 = 31337;

/// Per-block gas cap of the builtin in-process network.
pub const LOCAL_BLOCK_GAS_LIMIT: u64 = 30_000_000;

/// Compiler release invoked when the configuration declares none.
pub const DEFAULT_SOLC_VERSION: &str = "0.8.24";

/// Compiler selection handed to the external build tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    pub version: String,
    pub optimizer: OptimizerSettings,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: DEFAULT_SOLC_VERSION.to_string(),
            optimizer: OptimizerSettings::default(),
        }
    }
}

/// Optimizer parameters passed through to the compiler invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: 200,
        }
    }
}

/// Parameters describing one simulated or remote chain.
///
/// `block_gas_limit` is a `u64` so that caps well beyond 10^11 survive
/// resolution exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub chain_id: u64,
    pub block_gas_limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NetworkProfile {
    /// Profile of the builtin in-process network.
    pub fn local() -> Self {
        Self {
            chain_id: LOCAL_CHAIN_ID,
            block_gas_limit: LOCAL_BLOCK_GAS_LIMIT,
            url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_profile_uses_simulator_defaults() {
        let profile = NetworkProfile::local();
        assert_eq!(profile.chain_id, 31337);
        assert_eq!(profile.block_gas_limit, 30_000_000);
        assert!(profile.url.is_none());
    }

    #[test]
    fn compiler_defaults_keep_optimizer_disabled() {
        let compiler = CompilerSettings::default();
        assert_eq!(compiler.version, DEFAULT_SOLC_VERSION);
        assert!(!compiler.optimizer.enabled);
        assert_eq!(compiler.optimizer.runs, 200);
    }
}
