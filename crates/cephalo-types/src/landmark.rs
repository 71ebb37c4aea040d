//! Landmark identifiers and the sparse landmark map.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use cephalo_geometry::Point;
use serde::{Deserialize, Serialize};

use crate::ParseKeyError;

/// The closed set of landmarks an operator can place on a tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LandmarkKey {
    /// Sella
    S,
    /// Nasion
    N,
    /// Subspinale (point A)
    A,
    /// Supramentale (point B)
    B,
    /// Pogonion
    Pg,
    /// Menton
    Me,
    /// Gnathion
    Gn,
    /// Gonion
    Go,
    /// Articulare
    Ar,
    /// Basion
    Ba,
    /// Pterygoid point
    Pt,
    /// Porion
    Po,
    /// Orbitale
    Or,
    /// Upper incisor tip
    U1T,
    /// Upper incisor apex
    U1A,
    /// Lower incisor tip
    L1T,
    /// Lower incisor apex
    L1A,
    /// Anterior occlusal reference (incisal overlap)
    Oc1,
    /// Posterior occlusal reference (molar contact)
    Oc2,
    /// Pronasale (soft-tissue nose tip)
    Prn,
    /// Labrale superius
    Ls,
    /// Labrale inferius
    Li,
    /// Soft-tissue pogonion
    PgS,
}

impl LandmarkKey {
    pub const ALL: [LandmarkKey; 23] = [
        LandmarkKey::S,
        LandmarkKey::N,
        LandmarkKey::A,
        LandmarkKey::B,
        LandmarkKey::Pg,
        LandmarkKey::Me,
        LandmarkKey::Gn,
        LandmarkKey::Go,
        LandmarkKey::Ar,
        LandmarkKey::Ba,
        LandmarkKey::Pt,
        LandmarkKey::Po,
        LandmarkKey::Or,
        LandmarkKey::U1T,
        LandmarkKey::U1A,
        LandmarkKey::L1T,
        LandmarkKey::L1A,
        LandmarkKey::Oc1,
        LandmarkKey::Oc2,
        LandmarkKey::Prn,
        LandmarkKey::Ls,
        LandmarkKey::Li,
        LandmarkKey::PgS,
    ];

    /// Short code used on the tracing and in serialized maps.
    pub const fn as_str(self) -> &'static str {
        match self {
            LandmarkKey::S => "S",
            LandmarkKey::N => "N",
            LandmarkKey::A => "A",
            LandmarkKey::B => "B",
            LandmarkKey::Pg => "Pg",
            LandmarkKey::Me => "Me",
            LandmarkKey::Gn => "Gn",
            LandmarkKey::Go => "Go",
            LandmarkKey::Ar => "Ar",
            LandmarkKey::Ba => "Ba",
            LandmarkKey::Pt => "Pt",
            LandmarkKey::Po => "Po",
            LandmarkKey::Or => "Or",
            LandmarkKey::U1T => "U1T",
            LandmarkKey::U1A => "U1A",
            LandmarkKey::L1T => "L1T",
            LandmarkKey::L1A => "L1A",
            LandmarkKey::Oc1 => "Oc1",
            LandmarkKey::Oc2 => "Oc2",
            LandmarkKey::Prn => "Prn",
            LandmarkKey::Ls => "Ls",
            LandmarkKey::Li => "Li",
            LandmarkKey::PgS => "PgS",
        }
    }

    /// Anatomical name.
    pub const fn name(self) -> &'static str {
        match self {
            LandmarkKey::S => "Sella",
            LandmarkKey::N => "Nasion",
            LandmarkKey::A => "Subspinale (A point)",
            LandmarkKey::B => "Supramentale (B point)",
            LandmarkKey::Pg => "Pogonion",
            LandmarkKey::Me => "Menton",
            LandmarkKey::Gn => "Gnathion",
            LandmarkKey::Go => "Gonion",
            LandmarkKey::Ar => "Articulare",
            LandmarkKey::Ba => "Basion",
            LandmarkKey::Pt => "Pterygoid point",
            LandmarkKey::Po => "Porion",
            LandmarkKey::Or => "Orbitale",
            LandmarkKey::U1T => "Upper incisor tip",
            LandmarkKey::U1A => "Upper incisor apex",
            LandmarkKey::L1T => "Lower incisor tip",
            LandmarkKey::L1A => "Lower incisor apex",
            LandmarkKey::Oc1 => "Occlusal plane, anterior",
            LandmarkKey::Oc2 => "Occlusal plane, posterior",
            LandmarkKey::Prn => "Pronasale",
            LandmarkKey::Ls => "Labrale superius",
            LandmarkKey::Li => "Labrale inferius",
            LandmarkKey::PgS => "Soft-tissue pogonion",
        }
    }
}

impl fmt::Display for LandmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LandmarkKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LandmarkKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseKeyError::Landmark(s.to_string()))
    }
}

impl TryFrom<String> for LandmarkKey {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LandmarkKey> for String {
    fn from(key: LandmarkKey) -> Self {
        key.as_str().to_string()
    }
}

/// Sparse map of placed landmarks.
///
/// A missing key means the operator has not placed that point yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkMap {
    points: BTreeMap<LandmarkKey, Point>,
}

impl LandmarkMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: LandmarkKey) -> Option<Point> {
        self.points.get(&key).copied()
    }

    pub fn has(&self, key: LandmarkKey) -> bool {
        self.points.contains_key(&key)
    }

    /// Place (or move) a landmark, returning its previous position.
    pub fn set(&mut self, key: LandmarkKey, point: Point) -> Option<Point> {
        self.points.insert(key, point)
    }

    pub fn remove(&mut self, key: LandmarkKey) -> Option<Point> {
        self.points.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LandmarkKey, Point)> + '_ {
        self.points.iter().map(|(k, p)| (*k, *p))
    }

    /// Builder-style insert, handy for fixtures.
    #[must_use]
    pub fn with(mut self, key: LandmarkKey, x: f64, y: f64) -> Self {
        self.points.insert(key, Point::new(x, y));
        self
    }
}

impl FromIterator<(LandmarkKey, Point)> for LandmarkMap {
    fn from_iter<I: IntoIterator<Item = (LandmarkKey, Point)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
