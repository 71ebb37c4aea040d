//! # cephalo-narrative
//!
//! **Tier 3 (Presentation Text)**
//!
//! Builds the clinical summary from an interpreted measure table. Wording
//! comes only from the [`PhraseTable`] constants in [`phrases`]; this module
//! chooses the phrases and fills fixed paragraph templates.
//!
//! Paragraphs, separated by a blank line:
//! 1. Steiner (only when the family is enabled)
//! 2. Lower lip against the E-line (always)
//! 3. One sentence per determinate extended measure (omitted if none)

pub mod phrases;

pub use phrases::{PhraseTable, skeletal_class, table_for};

use cephalo_types::{
    AnalysisConfig, Family, Interpretation, MeasureKey, MeasureResult, PatientData, Unit,
};

use crate::phrases::{
    GROWTH_PATTERN, INTERINCISAL, LOWER_INCISOR_ANGLE, LOWER_INCISOR_POSITION, LOWER_LIP, MANDIBLE,
    MAXILLA, UPPER_INCISOR_ANGLE, UPPER_INCISOR_POSITION,
};

/// Assemble the summary. Deterministic: same inputs, same text.
pub fn generate_summary(
    patient: &PatientData,
    measures: &[MeasureResult],
    config: &AnalysisConfig,
) -> String {
    let mut paragraphs = Vec::new();
    if config.steiner {
        paragraphs.push(steiner_paragraph(patient, measures));
    }
    paragraphs.push(LOWER_LIP.pick(interpretation(measures, MeasureKey::ELineLi)).to_string());
    if let Some(extended) = extended_paragraph(measures) {
        paragraphs.push(extended);
    }
    paragraphs.join("\n\n")
}

fn interpretation(measures: &[MeasureResult], key: MeasureKey) -> Interpretation {
    measures
        .iter()
        .find(|row| row.key == key)
        .map_or(Interpretation::Indeterminate, |row| row.interpretation)
}

/// "Name (sex, age 14)", falling back to "The patient".
fn patient_descriptor(patient: &PatientData) -> String {
    let name = patient.name.trim();
    let mut out = if name.is_empty() {
        String::from("The patient")
    } else {
        name.to_string()
    };

    let mut details = Vec::new();
    let sex = patient.sex.trim();
    if !sex.is_empty() {
        details.push(sex.to_string());
    }
    let age = patient.age.trim();
    if !age.is_empty() {
        details.push(format!("age {age}"));
    }
    if !details.is_empty() {
        out.push_str(&format!(" ({})", details.join(", ")));
    }
    out
}

fn steiner_paragraph(patient: &PatientData, measures: &[MeasureResult]) -> String {
    let pick = |table: &PhraseTable, key| table.pick(interpretation(measures, key));

    let class = match interpretation(measures, MeasureKey::Anb) {
        Interpretation::Indeterminate => String::from("an undetermined skeletal relationship"),
        anb => format!("a skeletal {} relationship", skeletal_class(anb)),
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{} presents {} and {}, consistent with {}. ",
        patient_descriptor(patient),
        pick(&MAXILLA, MeasureKey::Sna),
        pick(&MANDIBLE, MeasureKey::Snb),
        class,
    ));
    out.push_str(&format!(
        "The growth pattern is {}. ",
        pick(&GROWTH_PATTERN, MeasureKey::SnGoGn)
    ));
    out.push_str(&format!(
        "The upper incisors are {} and {}; the lower incisors are {} and {}. ",
        pick(&UPPER_INCISOR_ANGLE, MeasureKey::U1NaDeg),
        pick(&UPPER_INCISOR_POSITION, MeasureKey::U1NaMm),
        pick(&LOWER_INCISOR_ANGLE, MeasureKey::L1NbDeg),
        pick(&LOWER_INCISOR_POSITION, MeasureKey::L1NbMm),
    ));
    out.push_str(&format!(
        "The interincisal angle is {}.",
        pick(&INTERINCISAL, MeasureKey::Interincisal)
    ));
    out
}

fn extended_paragraph(measures: &[MeasureResult]) -> Option<String> {
    let sentences: Vec<String> = Family::Extended
        .measures()
        .iter()
        .filter_map(|key| {
            let row = measures.iter().find(|row| row.key == *key)?;
            let value = row.value?;
            if !row.interpretation.is_determinate() {
                return None;
            }
            let table = table_for(*key)?;
            Some(format!(
                "{} ({}: {}).",
                table.pick(row.interpretation),
                row.label,
                format_value(value, row.units)
            ))
        })
        .collect();

    if sentences.is_empty() {
        None
    } else {
        Some(sentences.join(" "))
    }
}

fn format_value(value: f64, unit: Unit) -> String {
    match unit {
        Unit::Degrees | Unit::Percent => format!("{value:.1}{}", unit.symbol()),
        Unit::Millimeters | Unit::Pixels => format!("{value:.1} {}", unit.symbol()),
    }
}
