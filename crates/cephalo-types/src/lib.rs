//! # cephalo-types
//!
//! **Tier 0 (Analysis Contract)**
//!
//! Pure data structures shared by the cephalo crates. No geometry, no I/O.
//!
//! ## What belongs here
//! * Landmark and measure identifiers (closed enums)
//! * Per-family result records and the combined analysis result
//! * Calibration snapshot, patient context, analysis switches
//!
//! ## What does NOT belong here
//! * Measurement computation (use cephalo-measure)
//! * Norm comparison (use cephalo-interpret)
//! * Rendering (use cephalo-format)
//!
//! Every computed value is an `Option<f64>`: `None` means "not computable"
//! (missing landmarks, degenerate geometry, disabled family).

mod landmark;
mod measure;

pub use cephalo_geometry::Point;
pub use landmark::{LandmarkKey, LandmarkMap};
pub use measure::{
    Family, Interpretation, MeasureKey, MeasureKind, MeasureResult, NormRange, Unit,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to parse one of the closed identifier sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    #[error("unknown landmark code '{0}'")]
    Landmark(String),

    #[error("unknown measure code '{0}'")]
    Measure(String),

    #[error("unknown unit '{0}'")]
    Unit(String),
}

// ------------
// Calibration
// ------------

/// Current state of the two-click scale calibration.
///
/// `mm_per_px` is `Some` only when both points are set, they do not
/// coincide, and `known_mm > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationData {
    pub point1: Option<Point>,
    pub point2: Option<Point>,
    pub known_mm: f64,
    pub mm_per_px: Option<f64>,
}

impl CalibrationData {
    pub const fn uncalibrated(known_mm: f64) -> Self {
        Self {
            point1: None,
            point2: None,
            known_mm,
            mm_per_px: None,
        }
    }

    pub const fn is_calibrated(&self) -> bool {
        self.mm_per_px.is_some()
    }
}

// -------------------
// Analysis switches
// -------------------

/// Per-family enable flags. The soft-tissue family has no switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub steiner: bool,
    pub bjork: bool,
    pub extended: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            steiner: true,
            bjork: true,
            extended: true,
        }
    }
}

impl AnalysisConfig {
    pub const fn is_enabled(&self, family: Family) -> bool {
        match family {
            Family::Steiner => self.steiner,
            Family::Bjork => self.bjork,
            Family::Extended => self.extended,
            Family::Soft => true,
        }
    }
}

/// Free-form patient context, only used to phrase the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientData {
    pub name: String,
    pub age: String,
    pub sex: String,
    pub date: String,
    pub doctor: String,
}

// ----------------
// Family records
// ----------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteinerResults {
    pub sna: Option<f64>,
    pub snb: Option<f64>,
    pub anb: Option<f64>,
    pub sn_gogn: Option<f64>,
    pub u1_na_deg: Option<f64>,
    pub u1_na_mm: Option<f64>,
    pub l1_nb_deg: Option<f64>,
    pub l1_nb_mm: Option<f64>,
    pub interincisal: Option<f64>,
    pub pg_nb: Option<f64>,
    /// Unit of `u1_na_mm`, `l1_nb_mm` and `pg_nb`.
    pub linear_unit: Unit,
}

impl SteinerResults {
    pub const fn unavailable(linear_unit: Unit) -> Self {
        Self {
            sna: None,
            snb: None,
            anb: None,
            sn_gogn: None,
            u1_na_deg: None,
            u1_na_mm: None,
            l1_nb_deg: None,
            l1_nb_mm: None,
            interincisal: None,
            pg_nb: None,
            linear_unit,
        }
    }

    pub fn value(&self, key: MeasureKey) -> Option<f64> {
        match key {
            MeasureKey::Sna => self.sna,
            MeasureKey::Snb => self.snb,
            MeasureKey::Anb => self.anb,
            MeasureKey::SnGoGn => self.sn_gogn,
            MeasureKey::U1NaDeg => self.u1_na_deg,
            MeasureKey::U1NaMm => self.u1_na_mm,
            MeasureKey::L1NbDeg => self.l1_nb_deg,
            MeasureKey::L1NbMm => self.l1_nb_mm,
            MeasureKey::Interincisal => self.interincisal,
            MeasureKey::PgNb => self.pg_nb,
            MeasureKey::Saddle
            | MeasureKey::Articular
            | MeasureKey::Gonial
            | MeasureKey::Sum
            | MeasureKey::Jarabak
            | MeasureKey::ELineLi
            | MeasureKey::Impa
            | MeasureKey::Wits
            | MeasureKey::OcclusalSn
            | MeasureKey::FacialAngle
            | MeasureKey::U1Sn => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BjorkResults {
    pub saddle: Option<f64>,
    pub articular: Option<f64>,
    pub gonial: Option<f64>,
    pub sum: Option<f64>,
    /// Posterior/anterior face height, percent.
    pub jarabak: Option<f64>,
}

impl BjorkResults {
    pub fn value(&self, key: MeasureKey) -> Option<f64> {
        match key {
            MeasureKey::Saddle => self.saddle,
            MeasureKey::Articular => self.articular,
            MeasureKey::Gonial => self.gonial,
            MeasureKey::Sum => self.sum,
            MeasureKey::Jarabak => self.jarabak,
            MeasureKey::Sna
            | MeasureKey::Snb
            | MeasureKey::Anb
            | MeasureKey::SnGoGn
            | MeasureKey::U1NaDeg
            | MeasureKey::U1NaMm
            | MeasureKey::L1NbDeg
            | MeasureKey::L1NbMm
            | MeasureKey::Interincisal
            | MeasureKey::PgNb
            | MeasureKey::ELineLi
            | MeasureKey::Impa
            | MeasureKey::Wits
            | MeasureKey::OcclusalSn
            | MeasureKey::FacialAngle
            | MeasureKey::U1Sn => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftTissueResults {
    /// Lower lip to E-line; negative is behind the line.
    pub e_line_li: Option<f64>,
    pub linear_unit: Unit,
}

impl SoftTissueResults {
    pub fn value(&self, key: MeasureKey) -> Option<f64> {
        match key {
            MeasureKey::ELineLi => self.e_line_li,
            MeasureKey::Sna
            | MeasureKey::Snb
            | MeasureKey::Anb
            | MeasureKey::SnGoGn
            | MeasureKey::U1NaDeg
            | MeasureKey::U1NaMm
            | MeasureKey::L1NbDeg
            | MeasureKey::L1NbMm
            | MeasureKey::Interincisal
            | MeasureKey::PgNb
            | MeasureKey::Saddle
            | MeasureKey::Articular
            | MeasureKey::Gonial
            | MeasureKey::Sum
            | MeasureKey::Jarabak
            | MeasureKey::Impa
            | MeasureKey::Wits
            | MeasureKey::OcclusalSn
            | MeasureKey::FacialAngle
            | MeasureKey::U1Sn => None,
        }
    }
}

/// Which landmark pair served as the occlusal reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcclusalReference {
    /// Oc1–Oc2, the digitized functional occlusal plane.
    Occlusal,
    /// Po–Or (Frankfort horizontal) standing in for the occlusal plane.
    Frankfort,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtendedResults {
    pub impa: Option<f64>,
    pub wits: Option<f64>,
    pub occlusal_sn: Option<f64>,
    pub facial_angle: Option<f64>,
    pub u1_sn: Option<f64>,
    pub occlusal_reference: Option<OcclusalReference>,
    /// Unit of `wits`.
    pub linear_unit: Unit,
}

impl ExtendedResults {
    pub const fn unavailable(linear_unit: Unit) -> Self {
        Self {
            impa: None,
            wits: None,
            occlusal_sn: None,
            facial_angle: None,
            u1_sn: None,
            occlusal_reference: None,
            linear_unit,
        }
    }

    pub fn value(&self, key: MeasureKey) -> Option<f64> {
        match key {
            MeasureKey::Impa => self.impa,
            MeasureKey::Wits => self.wits,
            MeasureKey::OcclusalSn => self.occlusal_sn,
            MeasureKey::FacialAngle => self.facial_angle,
            MeasureKey::U1Sn => self.u1_sn,
            MeasureKey::Sna
            | MeasureKey::Snb
            | MeasureKey::Anb
            | MeasureKey::SnGoGn
            | MeasureKey::U1NaDeg
            | MeasureKey::U1NaMm
            | MeasureKey::L1NbDeg
            | MeasureKey::L1NbMm
            | MeasureKey::Interincisal
            | MeasureKey::PgNb
            | MeasureKey::Saddle
            | MeasureKey::Articular
            | MeasureKey::Gonial
            | MeasureKey::Sum
            | MeasureKey::Jarabak
            | MeasureKey::ELineLi => None,
        }
    }
}

/// Raw per-family results, before norm comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FamilyResults {
    pub steiner: SteinerResults,
    pub bjork: BjorkResults,
    pub soft: SoftTissueResults,
    pub extended: ExtendedResults,
}

impl FamilyResults {
    /// Raw value of any measure, routed to its family record.
    pub fn value(&self, key: MeasureKey) -> Option<f64> {
        match key.family() {
            Family::Steiner => self.steiner.value(key),
            Family::Bjork => self.bjork.value(key),
            Family::Soft => self.soft.value(key),
            Family::Extended => self.extended.value(key),
        }
    }
}

/// Everything one `analyze` call produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysisResults {
    pub steiner: SteinerResults,
    pub bjork: BjorkResults,
    pub soft: SoftTissueResults,
    pub extended: ExtendedResults,
    pub measures: Vec<MeasureResult>,
    pub clinical_summary: String,
}

impl FullAnalysisResults {
    pub fn measure(&self, key: MeasureKey) -> Option<&MeasureResult> {
        self.measures.iter().find(|row| row.key == key)
    }
}
