use std::path::Path;

use anyhow::{Context, Result};
use cephalo_norms::{NormOverrides, NormTable};
use cephalo_types::AnalysisConfig;
use serde::{Deserialize, Serialize};

/// Contents of a `cephalo.toml` file.
///
/// ```toml
/// [analysis]
/// bjork = false
///
/// [norms.steiner]
/// SNA = { mean = 81.0, sd = 3.0 }
///
/// [norms.tolerances]
/// degrees = 2.5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CephaloConfig {
    pub analysis: AnalysisConfig,
    pub norms: NormOverrides,
}

impl CephaloConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).context("Failed to parse config TOML")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Standard norms with this config's overrides merged in.
    pub fn norm_table(&self) -> Result<NormTable> {
        NormTable::standard()
            .with_overrides(&self.norms)
            .context("Invalid norm overrides")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cephalo_types::MeasureKey;

    #[test]
    fn empty_config_means_defaults() {
        let config = CephaloConfig::from_toml("").unwrap();
        assert_eq!(config, CephaloConfig::default());
        assert_eq!(config.norm_table().unwrap(), NormTable::standard());
    }

    #[test]
    fn sections_are_merged() {
        let config = CephaloConfig::from_toml(
            "[analysis]\nbjork = false\n\n[norms.steiner]\nSNA = { mean = 81.0, sd = 3.0 }\n\n[norms.tolerances]\ndegrees = 2.5\n",
        )
        .unwrap();
        assert!(config.analysis.steiner);
        assert!(!config.analysis.bjork);
        let table = config.norm_table().unwrap();
        assert_eq!(table.norm(MeasureKey::Sna).mean, 81.0);
        assert_eq!(table.norm(MeasureKey::Snb).mean, 80.0);
        assert_eq!(table.tolerances().degrees, 2.5);
    }

    #[test]
    fn unknown_measure_is_an_error() {
        let config = CephaloConfig::from_toml("[norms.steiner]\nXYZ = { mean = 1.0, sd = 1.0 }\n")
            .unwrap();
        let err = config.norm_table().unwrap_err();
        assert!(format!("{err:#}").contains("Unknown measure 'XYZ'"));
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(CephaloConfig::from_toml("[report]\nx = 1\n").is_err());
    }
}
