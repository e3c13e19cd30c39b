use std::collections::BTreeMap;

use serde::Deserialize;

use solbuild::toolchain::{self, NetworkProfile};

use super::super::util::sanitize_endpoint;

/// Per-network configuration as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct NetworkSection {
    pub(super) chain_id: Option<u64>,
    pub(super) block_gas_limit: Option<u64>,
    pub(super) url: Option<String>,
}

impl NetworkSection {
    pub(super) fn overlay(&mut self, other: NetworkSection) {
        if let Some(value) = other.chain_id {
            self.chain_id = Some(value);
        }
        if let Some(value) = other.block_gas_limit {
            self.block_gas_limit = Some(value);
        }
        if let Some(value) = other.url {
            self.url = Some(value);
        }
    }

    fn finalize(self) -> NetworkProfile {
        let defaults = NetworkProfile::local();
        NetworkProfile {
            chain_id: self.chain_id.unwrap_or(defaults.chain_id),
            block_gas_limit: self.block_gas_limit.unwrap_or(defaults.block_gas_limit),
            url: self.url.and_then(sanitize_endpoint),
        }
    }
}

/// Finalize the declared networks, making sure the builtin in-process network
/// always exists.
pub(super) fn finalize(
    mut sections: BTreeMap<String, NetworkSection>,
) -> BTreeMap<String, NetworkProfile> {
    sections
        .entry(toolchain::DEFAULT_NETWORK.to_string())
        .or_default();

    sections
        .into_iter()
        .map(|(name, section)| (name, section.finalize()))
        .collect()
}
