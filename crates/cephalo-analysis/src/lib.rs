//! # cephalo-analysis
//!
//! Orchestration for one analysis call.
//!
//! Landmarks go through the measurement engine, the raw family results are
//! compared against the norm table, and the interpreted rows are narrated.
//! Nothing is cached between calls.

use cephalo_interpret::build_measures;
use cephalo_measure::compute_families;
use cephalo_narrative::generate_summary;
use cephalo_norms::NormTable;
use cephalo_types::{AnalysisConfig, FullAnalysisResults, LandmarkMap, PatientData, Unit};
use tracing::debug;

/// Full analysis against the built-in norms.
pub fn analyze(
    points: &LandmarkMap,
    mm_per_px: Option<f64>,
    patient: &PatientData,
    config: AnalysisConfig,
) -> FullAnalysisResults {
    analyze_with_norms(points, mm_per_px, patient, config, &NormTable::standard())
}

/// Full analysis against a caller-supplied norm table.
pub fn analyze_with_norms(
    points: &LandmarkMap,
    mm_per_px: Option<f64>,
    patient: &PatientData,
    config: AnalysisConfig,
    norms: &NormTable,
) -> FullAnalysisResults {
    let families = compute_families(points, mm_per_px, &config);
    let measures = build_measures(&families, norms, &config);
    let clinical_summary = generate_summary(patient, &measures, &config);

    debug!(
        landmarks = points.len(),
        calibrated = families.steiner.linear_unit == Unit::Millimeters,
        rows = measures.len(),
        determinate = measures
            .iter()
            .filter(|row| row.interpretation.is_determinate())
            .count(),
        "analysis complete"
    );

    FullAnalysisResults {
        steiner: families.steiner,
        bjork: families.bjork,
        soft: families.soft,
        extended: families.extended,
        measures,
        clinical_summary,
    }
}
