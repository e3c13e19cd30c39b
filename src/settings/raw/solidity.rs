use serde::Deserialize;

use solbuild::toolchain::{CompilerSettings, OptimizerSettings};

use crate::cli::CliArgs;

/// Compiler configuration as written on disk: either a bare version string or
/// a detailed table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SolidityFormat {
    Version(String),
    Detailed {
        version: Option<String>,
        optimizer: Option<OptimizerSection>,
    },
}

/// Normalized compiler section prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "SolidityFormat")]
pub(super) struct SoliditySection {
    pub(super) version: Option<String>,
    pub(super) optimizer: OptimizerSection,
}

/// Raw optimizer switches for the compiler invocation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OptimizerSection {
    pub(super) enabled: Option<bool>,
    pub(super) runs: Option<u32>,
}

impl From<SolidityFormat> for SoliditySection {
    fn from(value: SolidityFormat) -> Self {
        match value {
            SolidityFormat::Version(version) => Self {
                version: Some(version),
                optimizer: OptimizerSection::default(),
            },
            SolidityFormat::Detailed { version, optimizer } => Self {
                version,
                optimizer: optimizer.unwrap_or_default(),
            },
        }
    }
}

impl SoliditySection {
    pub(super) fn overlay(&mut self, other: SoliditySection) {
        if let Some(version) = other.version {
            self.version = Some(version);
        }
        if let Some(enabled) = other.optimizer.enabled {
            self.optimizer.enabled = Some(enabled);
        }
        if let Some(runs) = other.optimizer.runs {
            self.optimizer.runs = Some(runs);
        }
    }

    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(version) = cli.solc.clone() {
            self.version = Some(version);
        }
    }

    pub(super) fn finalize(self) -> CompilerSettings {
        let defaults = CompilerSettings::default();
        CompilerSettings {
            version: self.version.unwrap_or(defaults.version),
            optimizer: OptimizerSettings {
                enabled: self.optimizer.enabled.unwrap_or(defaults.optimizer.enabled),
                runs: self.optimizer.runs.unwrap_or(defaults.optimizer.runs),
            },
        }
    }
}
