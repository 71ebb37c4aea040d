//! Measurement identifiers, units and interpreted rows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseKeyError;

/// Measurement family. Each family has its own norm table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Steiner,
    Bjork,
    Soft,
    Extended,
}

impl Family {
    pub const ALL: [Family; 4] = [Family::Steiner, Family::Bjork, Family::Soft, Family::Extended];

    pub const fn as_str(self) -> &'static str {
        match self {
            Family::Steiner => "steiner",
            Family::Bjork => "bjork",
            Family::Soft => "soft",
            Family::Extended => "extended",
        }
    }

    /// Measures of this family in clinical reading order.
    pub const fn measures(self) -> &'static [MeasureKey] {
        match self {
            Family::Steiner => &[
                MeasureKey::Sna,
                MeasureKey::Snb,
                MeasureKey::Anb,
                MeasureKey::SnGoGn,
                MeasureKey::U1NaDeg,
                MeasureKey::U1NaMm,
                MeasureKey::L1NbDeg,
                MeasureKey::L1NbMm,
                MeasureKey::Interincisal,
                MeasureKey::PgNb,
            ],
            Family::Bjork => &[
                MeasureKey::Saddle,
                MeasureKey::Articular,
                MeasureKey::Gonial,
                MeasureKey::Sum,
                MeasureKey::Jarabak,
            ],
            Family::Soft => &[MeasureKey::ELineLi],
            Family::Extended => &[
                MeasureKey::Impa,
                MeasureKey::Wits,
                MeasureKey::OcclusalSn,
                MeasureKey::FacialAngle,
                MeasureKey::U1Sn,
            ],
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display unit of a measurement value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "°")]
    Degrees,
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "%")]
    Percent,
    /// Raw screen pixels; used by linear measures when uncalibrated.
    #[serde(rename = "px")]
    Pixels,
}

impl Unit {
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Degrees => "°",
            Unit::Millimeters => "mm",
            Unit::Percent => "%",
            Unit::Pixels => "px",
        }
    }

    /// Linear unit for a given calibration state.
    pub const fn linear(calibrated: bool) -> Self {
        if calibrated {
            Unit::Millimeters
        } else {
            Unit::Pixels
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "°" | "deg" => Ok(Unit::Degrees),
            "mm" => Ok(Unit::Millimeters),
            "%" => Ok(Unit::Percent),
            "px" => Ok(Unit::Pixels),
            other => Err(ParseKeyError::Unit(other.to_string())),
        }
    }
}

/// Three-way norm classification, plus the "cannot tell" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    Normal,
    Above,
    Below,
    Indeterminate,
}

impl Interpretation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Interpretation::Normal => "normal",
            Interpretation::Above => "above",
            Interpretation::Below => "below",
            Interpretation::Indeterminate => "indeterminate",
        }
    }

    pub const fn is_determinate(self) -> bool {
        !matches!(self, Interpretation::Indeterminate)
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of quantity a measure is; decides its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureKind {
    Angular,
    Linear,
    Ratio,
}

/// The closed set of measurements the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MeasureKey {
    Sna,
    Snb,
    Anb,
    SnGoGn,
    U1NaDeg,
    U1NaMm,
    L1NbDeg,
    L1NbMm,
    Interincisal,
    PgNb,
    Saddle,
    Articular,
    Gonial,
    Sum,
    Jarabak,
    ELineLi,
    Impa,
    Wits,
    OcclusalSn,
    FacialAngle,
    U1Sn,
}

impl MeasureKey {
    pub const ALL: [MeasureKey; 21] = [
        MeasureKey::Sna,
        MeasureKey::Snb,
        MeasureKey::Anb,
        MeasureKey::SnGoGn,
        MeasureKey::U1NaDeg,
        MeasureKey::U1NaMm,
        MeasureKey::L1NbDeg,
        MeasureKey::L1NbMm,
        MeasureKey::Interincisal,
        MeasureKey::PgNb,
        MeasureKey::Saddle,
        MeasureKey::Articular,
        MeasureKey::Gonial,
        MeasureKey::Sum,
        MeasureKey::Jarabak,
        MeasureKey::ELineLi,
        MeasureKey::Impa,
        MeasureKey::Wits,
        MeasureKey::OcclusalSn,
        MeasureKey::FacialAngle,
        MeasureKey::U1Sn,
    ];

    /// Stable code used in norm files and serialized rows.
    pub const fn as_str(self) -> &'static str {
        match self {
            MeasureKey::Sna => "SNA",
            MeasureKey::Snb => "SNB",
            MeasureKey::Anb => "ANB",
            MeasureKey::SnGoGn => "SN_GoGn",
            MeasureKey::U1NaDeg => "U1_NA_deg",
            MeasureKey::U1NaMm => "U1_NA_mm",
            MeasureKey::L1NbDeg => "L1_NB_deg",
            MeasureKey::L1NbMm => "L1_NB_mm",
            MeasureKey::Interincisal => "Interincisal",
            MeasureKey::PgNb => "Pg_NB",
            MeasureKey::Saddle => "Saddle",
            MeasureKey::Articular => "Articular",
            MeasureKey::Gonial => "Gonial",
            MeasureKey::Sum => "Sum",
            MeasureKey::Jarabak => "Jarabak",
            MeasureKey::ELineLi => "E_Line_Li",
            MeasureKey::Impa => "IMPA",
            MeasureKey::Wits => "Wits",
            MeasureKey::OcclusalSn => "Occlusal_SN",
            MeasureKey::FacialAngle => "Facial_Angle",
            MeasureKey::U1Sn => "U1_SN",
        }
    }

    /// Human-readable row label.
    pub const fn label(self) -> &'static str {
        match self {
            MeasureKey::Sna => "SNA",
            MeasureKey::Snb => "SNB",
            MeasureKey::Anb => "ANB",
            MeasureKey::SnGoGn => "SN-GoGn",
            MeasureKey::U1NaDeg => "U1-NA (angle)",
            MeasureKey::U1NaMm => "U1-NA (distance)",
            MeasureKey::L1NbDeg => "L1-NB (angle)",
            MeasureKey::L1NbMm => "L1-NB (distance)",
            MeasureKey::Interincisal => "Interincisal angle",
            MeasureKey::PgNb => "Pg-NB",
            MeasureKey::Saddle => "Saddle angle (N-S-Ar)",
            MeasureKey::Articular => "Articular angle (S-Ar-Go)",
            MeasureKey::Gonial => "Gonial angle (Ar-Go-Me)",
            MeasureKey::Sum => "Björk sum",
            MeasureKey::Jarabak => "Jarabak ratio (S-Go/N-Me)",
            MeasureKey::ELineLi => "Lower lip to E-line",
            MeasureKey::Impa => "IMPA",
            MeasureKey::Wits => "Wits appraisal",
            MeasureKey::OcclusalSn => "Occlusal plane to SN",
            MeasureKey::FacialAngle => "Facial angle",
            MeasureKey::U1Sn => "U1-SN",
        }
    }

    pub const fn family(self) -> Family {
        match self {
            MeasureKey::Sna
            | MeasureKey::Snb
            | MeasureKey::Anb
            | MeasureKey::SnGoGn
            | MeasureKey::U1NaDeg
            | MeasureKey::U1NaMm
            | MeasureKey::L1NbDeg
            | MeasureKey::L1NbMm
            | MeasureKey::Interincisal
            | MeasureKey::PgNb => Family::Steiner,
            MeasureKey::Saddle
            | MeasureKey::Articular
            | MeasureKey::Gonial
            | MeasureKey::Sum
            | MeasureKey::Jarabak => Family::Bjork,
            MeasureKey::ELineLi => Family::Soft,
            MeasureKey::Impa
            | MeasureKey::Wits
            | MeasureKey::OcclusalSn
            | MeasureKey::FacialAngle
            | MeasureKey::U1Sn => Family::Extended,
        }
    }

    pub const fn kind(self) -> MeasureKind {
        match self {
            MeasureKey::U1NaMm
            | MeasureKey::L1NbMm
            | MeasureKey::PgNb
            | MeasureKey::ELineLi
            | MeasureKey::Wits => MeasureKind::Linear,
            MeasureKey::Jarabak => MeasureKind::Ratio,
            _ => MeasureKind::Angular,
        }
    }

    /// Unit of this measure under the given calibration state.
    pub const fn unit(self, calibrated: bool) -> Unit {
        match self.kind() {
            MeasureKind::Angular => Unit::Degrees,
            MeasureKind::Ratio => Unit::Percent,
            MeasureKind::Linear => Unit::linear(calibrated),
        }
    }
}

impl fmt::Display for MeasureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasureKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeasureKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseKeyError::Measure(s.to_string()))
    }
}

impl TryFrom<String> for MeasureKey {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MeasureKey> for String {
    fn from(key: MeasureKey) -> Self {
        key.as_str().to_string()
    }
}

/// Population reference for one measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormRange {
    pub mean: f64,
    pub sd: f64,
}

impl NormRange {
    pub const fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }
}

/// One display-ready row of the measure table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureResult {
    pub key: MeasureKey,
    pub label: String,
    /// `None` when landmarks are missing or the geometry is degenerate.
    pub value: Option<f64>,
    pub units: Unit,
    pub norm: NormRange,
    pub z_score: Option<f64>,
    pub interpretation: Interpretation,
}
