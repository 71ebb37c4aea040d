//! # cephalo-norms
//!
//! **Tier 1 (Reference Data)**
//!
//! Static population norms (mean ± SD) for every measure, the per-unit
//! tolerance bands used for classification, and caller-supplied partial
//! overrides merged per family.
//!
//! ## Example
//! ```ignore
//! use cephalo_norms::{NormOverrides, NormTable};
//!
//! let overrides = NormOverrides::from_file(Path::new("norms.toml"))?;
//! let table = NormTable::standard().with_overrides(&overrides)?;
//! ```

mod overrides;

use std::collections::BTreeMap;

use cephalo_types::{Family, MeasureKey, NormRange, Unit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use overrides::{NormOverrides, ToleranceOverrides};

/// Errors from loading or merging norm overrides.
#[derive(Debug, Error)]
pub enum NormError {
    #[error("Failed to read norm file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse norm TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown measure '{code}' in [{family}] norms")]
    UnknownMeasure { family: Family, code: String },

    #[error("Measure '{code}' belongs to [{actual}], not [{family}]")]
    WrongFamily {
        family: Family,
        actual: Family,
        code: String,
    },

    #[error("Invalid norm for '{code}': mean {mean}, sd {sd}")]
    InvalidNorm { code: String, mean: f64, sd: f64 },

    #[error("Invalid {unit} tolerance: {value}")]
    InvalidTolerance { unit: Unit, value: f64 },
}

/// Built-in adult reference value for a measure.
pub const fn standard_norm(key: MeasureKey) -> NormRange {
    match key {
        MeasureKey::Sna => NormRange::new(82.0, 3.5),
        MeasureKey::Snb => NormRange::new(80.0, 3.5),
        MeasureKey::Anb => NormRange::new(2.0, 2.5),
        MeasureKey::SnGoGn => NormRange::new(32.0, 5.0),
        MeasureKey::U1NaDeg => NormRange::new(22.0, 5.0),
        MeasureKey::U1NaMm => NormRange::new(4.0, 2.0),
        MeasureKey::L1NbDeg => NormRange::new(25.0, 5.0),
        MeasureKey::L1NbMm => NormRange::new(4.0, 2.0),
        MeasureKey::Interincisal => NormRange::new(131.0, 6.0),
        MeasureKey::PgNb => NormRange::new(2.0, 2.0),
        MeasureKey::Saddle => NormRange::new(123.0, 5.0),
        MeasureKey::Articular => NormRange::new(143.0, 6.0),
        MeasureKey::Gonial => NormRange::new(130.0, 7.0),
        MeasureKey::Sum => NormRange::new(396.0, 6.0),
        MeasureKey::Jarabak => NormRange::new(62.0, 3.0),
        MeasureKey::ELineLi => NormRange::new(-2.0, 2.0),
        MeasureKey::Impa => NormRange::new(90.0, 5.0),
        MeasureKey::Wits => NormRange::new(0.0, 2.0),
        MeasureKey::OcclusalSn => NormRange::new(14.0, 4.0),
        MeasureKey::FacialAngle => NormRange::new(90.0, 3.5),
        MeasureKey::U1Sn => NormRange::new(103.0, 6.0),
    }
}

/// Allowed |value − mean| per unit before a value counts as above/below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    pub degrees: f64,
    pub millimeters: f64,
    pub percent: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            degrees: 2.0,
            millimeters: 1.0,
            percent: 2.0,
        }
    }
}

impl Tolerances {
    /// Tolerance for a unit; pixels have none, so they never classify.
    pub const fn for_unit(&self, unit: Unit) -> Option<f64> {
        match unit {
            Unit::Degrees => Some(self.degrees),
            Unit::Millimeters => Some(self.millimeters),
            Unit::Percent => Some(self.percent),
            Unit::Pixels => None,
        }
    }
}

/// Norms for every measure plus the tolerance bands.
///
/// Always complete: built from [`NormTable::standard`] and only ever patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormTable {
    norms: BTreeMap<MeasureKey, NormRange>,
    tolerances: Tolerances,
}

impl Default for NormTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl NormTable {
    pub fn standard() -> Self {
        Self {
            norms: MeasureKey::ALL
                .into_iter()
                .map(|key| (key, standard_norm(key)))
                .collect(),
            tolerances: Tolerances::default(),
        }
    }

    pub fn norm(&self, key: MeasureKey) -> NormRange {
        self.norms
            .get(&key)
            .copied()
            .unwrap_or_else(|| standard_norm(key))
    }

    pub const fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Norms of one family in clinical reading order.
    pub fn family(&self, family: Family) -> impl Iterator<Item = (MeasureKey, NormRange)> + '_ {
        family.measures().iter().map(|key| (*key, self.norm(*key)))
    }

    /// Copy of this table with the given overrides merged in.
    pub fn with_overrides(&self, overrides: &NormOverrides) -> Result<Self, NormError> {
        let mut next = self.clone();
        overrides.apply(&mut next.norms, &mut next.tolerances)?;
        Ok(next)
    }
}
