//! Caller-supplied partial norm overrides.

use std::collections::BTreeMap;
use std::path::Path;

use cephalo_types::{Family, MeasureKey, NormRange, Unit};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{NormError, Tolerances};

/// Partial norms, keyed by measure code within each family table.
///
/// ```toml
/// [steiner]
/// SNA = { mean = 81.0, sd = 3.0 }
///
/// [tolerances]
/// degrees = 2.5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormOverrides {
    pub steiner: BTreeMap<String, NormRange>,
    pub bjork: BTreeMap<String, NormRange>,
    pub soft: BTreeMap<String, NormRange>,
    pub extended: BTreeMap<String, NormRange>,
    pub tolerances: ToleranceOverrides,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceOverrides {
    pub degrees: Option<f64>,
    pub millimeters: Option<f64>,
    pub percent: Option<f64>,
}

impl NormOverrides {
    /// Parse overrides from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, NormError> {
        Ok(toml::from_str(s)?)
    }

    /// Load overrides from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, NormError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn is_empty(&self) -> bool {
        Family::ALL.iter().all(|f| self.table(*f).is_empty())
            && self.tolerances == ToleranceOverrides::default()
    }

    fn table(&self, family: Family) -> &BTreeMap<String, NormRange> {
        match family {
            Family::Steiner => &self.steiner,
            Family::Bjork => &self.bjork,
            Family::Soft => &self.soft,
            Family::Extended => &self.extended,
        }
    }

    /// Validate everything first, then patch; a bad entry leaves the target untouched.
    pub(crate) fn apply(
        &self,
        norms: &mut BTreeMap<MeasureKey, NormRange>,
        tolerances: &mut Tolerances,
    ) -> Result<(), NormError> {
        let mut patched = Vec::new();
        for family in Family::ALL {
            for (code, norm) in self.table(family) {
                let key = resolve(family, code)?;
                validate_norm(code, norm)?;
                patched.push((key, *norm));
            }
        }

        let mut next_tol = *tolerances;
        for (unit, value, slot) in [
            (Unit::Degrees, self.tolerances.degrees, &mut next_tol.degrees),
            (Unit::Millimeters, self.tolerances.millimeters, &mut next_tol.millimeters),
            (Unit::Percent, self.tolerances.percent, &mut next_tol.percent),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(NormError::InvalidTolerance { unit, value });
                }
                *slot = value;
            }
        }

        debug!(norms = patched.len(), "applying norm overrides");
        norms.extend(patched);
        *tolerances = next_tol;
        Ok(())
    }
}

fn resolve(family: Family, code: &str) -> Result<MeasureKey, NormError> {
    let key: MeasureKey = code.parse().map_err(|_| NormError::UnknownMeasure {
        family,
        code: code.to_string(),
    })?;
    if key.family() != family {
        return Err(NormError::WrongFamily {
            family,
            actual: key.family(),
            code: code.to_string(),
        });
    }
    Ok(key)
}

fn validate_norm(code: &str, norm: &NormRange) -> Result<(), NormError> {
    if norm.mean.is_finite() && norm.sd.is_finite() && norm.sd > 0.0 {
        return Ok(());
    }
    Err(NormError::InvalidNorm {
        code: code.to_string(),
        mean: norm.mean,
        sd: norm.sd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NormTable;

    #[test]
    fn empty_overrides_keep_standard_table() {
        let overrides = NormOverrides::default();
        assert!(overrides.is_empty());
        let table = NormTable::standard().with_overrides(&overrides).unwrap();
        assert_eq!(table, NormTable::standard());
    }

    #[test]
    fn measure_in_wrong_family_is_rejected() {
        let overrides = NormOverrides::from_toml("[bjork]\nSNA = { mean = 80.0, sd = 3.0 }\n")
            .unwrap();
        let err = NormTable::standard().with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, NormError::WrongFamily { .. }));
    }

    #[test]
    fn non_positive_sd_is_rejected() {
        let overrides = NormOverrides::from_toml("[soft]\nE_Line_Li = { mean = -2.0, sd = 0.0 }\n")
            .unwrap();
        let err = NormTable::standard().with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, NormError::InvalidNorm { .. }));
    }
}
