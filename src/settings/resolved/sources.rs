use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(String),
    ConfigKey(String),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) compiler_version: Option<SettingSource>,
    pub(crate) default_network: Option<SettingSource>,
    pub(crate) block_gas_limit: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_compiler_version(&self) -> SettingSource {
        self.compiler_version
            .clone()
            .unwrap_or_else(|| SettingSource::ConfigKey("solidity.version".to_string()))
    }

    pub(crate) fn source_for_default_network(&self) -> SettingSource {
        self.default_network
            .clone()
            .unwrap_or_else(|| SettingSource::ConfigKey("default_network".to_string()))
    }

    pub(crate) fn source_for_block_gas_limit(&self, network: &str) -> SettingSource {
        self.block_gas_limit.clone().unwrap_or_else(|| {
            SettingSource::ConfigKey(format!("networks.{network}.block_gas_limit"))
        })
    }
}
