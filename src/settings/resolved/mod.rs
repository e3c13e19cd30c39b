use std::collections::BTreeMap;

use serde::Serialize;

use solbuild::toolchain::{CompilerSettings, NetworkProfile};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from config files, environment
/// variables, CLI overrides and builtin defaults. Immutable once resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub compiler: CompilerSettings,
    pub default_network: String,
    pub networks: BTreeMap<String, NetworkProfile>,
}

impl ResolvedConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Profile of the network the external tool will target.
    pub fn selected_network(&self) -> Option<(&str, &NetworkProfile)> {
        self.networks
            .get_key_value(&self.default_network)
            .map(|(name, profile)| (name.as_str(), profile))
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        summary::print_summary(self);
    }
}
