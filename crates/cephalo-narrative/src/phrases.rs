//! Phrase tables: the only place clinical wording lives.

use cephalo_types::{Interpretation, MeasureKey};

/// Wording for each outcome of one measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseTable {
    pub above: &'static str,
    pub normal: &'static str,
    pub below: &'static str,
    pub indeterminate: &'static str,
}

impl PhraseTable {
    pub const fn pick(&self, interpretation: Interpretation) -> &'static str {
        match interpretation {
            Interpretation::Above => self.above,
            Interpretation::Normal => self.normal,
            Interpretation::Below => self.below,
            Interpretation::Indeterminate => self.indeterminate,
        }
    }
}

pub const MAXILLA: PhraseTable = PhraseTable {
    above: "a protrusive maxilla",
    normal: "a well-positioned maxilla",
    below: "a retrusive maxilla",
    indeterminate: "an undetermined maxillary position",
};

pub const MANDIBLE: PhraseTable = PhraseTable {
    above: "a protrusive mandible",
    normal: "a well-positioned mandible",
    below: "a retrusive mandible",
    indeterminate: "an undetermined mandibular position",
};

pub const GROWTH_PATTERN: PhraseTable = PhraseTable {
    above: "vertical (hyperdivergent)",
    normal: "balanced (normodivergent)",
    below: "horizontal (hypodivergent)",
    indeterminate: "undetermined",
};

pub const UPPER_INCISOR_ANGLE: PhraseTable = PhraseTable {
    above: "proclined",
    normal: "normally inclined",
    below: "retroclined",
    indeterminate: "of undetermined inclination",
};

pub const UPPER_INCISOR_POSITION: PhraseTable = PhraseTable {
    above: "protruded",
    normal: "well positioned",
    below: "retruded",
    indeterminate: "of undetermined position",
};

pub const LOWER_INCISOR_ANGLE: PhraseTable = UPPER_INCISOR_ANGLE;

pub const LOWER_INCISOR_POSITION: PhraseTable = UPPER_INCISOR_POSITION;

pub const INTERINCISAL: PhraseTable = PhraseTable {
    above: "obtuse",
    normal: "within normal limits",
    below: "acute",
    indeterminate: "undetermined",
};

pub const LOWER_LIP: PhraseTable = PhraseTable {
    above: "The lower lip is protrusive relative to the E-line.",
    normal: "The lower lip is well balanced relative to the E-line.",
    below: "The lower lip is retrusive relative to the E-line.",
    indeterminate: "Lower lip position relative to the E-line could not be assessed \
                    (calibration or soft-tissue landmarks missing).",
};

pub const IMPA: PhraseTable = PhraseTable {
    above: "The lower incisors are proclined on the mandibular plane",
    normal: "The lower incisors are upright on the mandibular plane",
    below: "The lower incisors are retroclined on the mandibular plane",
    indeterminate: "",
};

pub const WITS: PhraseTable = PhraseTable {
    above: "The Wits appraisal indicates a Class II tendency",
    normal: "The Wits appraisal is within normal limits",
    below: "The Wits appraisal indicates a Class III tendency",
    indeterminate: "",
};

pub const OCCLUSAL_PLANE: PhraseTable = PhraseTable {
    above: "The occlusal plane is steep relative to SN",
    normal: "The occlusal plane inclination is normal",
    below: "The occlusal plane is flat relative to SN",
    indeterminate: "",
};

pub const FACIAL_ANGLE: PhraseTable = PhraseTable {
    above: "The facial angle indicates a prognathic profile",
    normal: "The facial angle is within normal limits",
    below: "The facial angle indicates a retrognathic profile",
    indeterminate: "",
};

pub const UPPER_INCISOR_SN: PhraseTable = PhraseTable {
    above: "The upper incisors are proclined relative to SN",
    normal: "The upper incisors are normally inclined to SN",
    below: "The upper incisors are retroclined relative to SN",
    indeterminate: "",
};

/// Every narrated measure and its table.
pub const PHRASES: &[(MeasureKey, PhraseTable)] = &[
    (MeasureKey::Sna, MAXILLA),
    (MeasureKey::Snb, MANDIBLE),
    (MeasureKey::SnGoGn, GROWTH_PATTERN),
    (MeasureKey::U1NaDeg, UPPER_INCISOR_ANGLE),
    (MeasureKey::U1NaMm, UPPER_INCISOR_POSITION),
    (MeasureKey::L1NbDeg, LOWER_INCISOR_ANGLE),
    (MeasureKey::L1NbMm, LOWER_INCISOR_POSITION),
    (MeasureKey::Interincisal, INTERINCISAL),
    (MeasureKey::ELineLi, LOWER_LIP),
    (MeasureKey::Impa, IMPA),
    (MeasureKey::Wits, WITS),
    (MeasureKey::OcclusalSn, OCCLUSAL_PLANE),
    (MeasureKey::FacialAngle, FACIAL_ANGLE),
    (MeasureKey::U1Sn, UPPER_INCISOR_SN),
];

pub fn table_for(key: MeasureKey) -> Option<&'static PhraseTable> {
    PHRASES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, table)| table)
}

/// Skeletal classification from the ANB interpretation.
pub const fn skeletal_class(anb: Interpretation) -> &'static str {
    match anb {
        Interpretation::Above => "Class II",
        Interpretation::Below => "Class III",
        Interpretation::Normal => "Class I",
        Interpretation::Indeterminate => "undetermined",
    }
}
