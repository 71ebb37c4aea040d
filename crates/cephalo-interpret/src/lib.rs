//! # cephalo-interpret
//!
//! **Tier 2 (Norm Comparison)**
//!
//! Classifies measured values against population norms and assembles the
//! ordered measure table.
//!
//! ## What belongs here
//! * Tolerance-band classification (`interpret`)
//! * z-scores per row
//! * Row order and family gating
//!
//! ## What does NOT belong here
//! * Geometry (use cephalo-measure)
//! * Norm values (use cephalo-norms)

use cephalo_geometry::z_score;
use cephalo_norms::{NormTable, Tolerances};
use cephalo_types::{
    AnalysisConfig, Family, FamilyResults, Interpretation, MeasureKey, MeasureResult, NormRange,
    Unit,
};

/// Slack for values that land on the tolerance boundary after float math.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Families in table order. Soft tissue always comes last.
const TABLE_ORDER: [Family; 4] = [Family::Steiner, Family::Bjork, Family::Extended, Family::Soft];

/// Classify `value` against `mean`.
///
/// Indeterminate when disabled, unavailable, or measured in a unit without
/// a tolerance (pixels). Within `±tolerance` of the mean is normal.
pub fn interpret(
    value: Option<f64>,
    mean: f64,
    unit: Unit,
    enabled: bool,
    tolerances: &Tolerances,
) -> Interpretation {
    if !enabled {
        return Interpretation::Indeterminate;
    }
    let (Some(value), Some(tol)) = (value, tolerances.for_unit(unit)) else {
        return Interpretation::Indeterminate;
    };
    let delta = value - mean;
    if !delta.is_finite() {
        return Interpretation::Indeterminate;
    }
    if delta.abs() <= tol + BOUNDARY_EPSILON {
        Interpretation::Normal
    } else if delta > 0.0 {
        Interpretation::Above
    } else {
        Interpretation::Below
    }
}

/// z-score and interpretation for one value.
///
/// The z-score does not depend on the tolerance table, only on `enabled`.
pub fn compare(
    value: Option<f64>,
    norm: NormRange,
    unit: Unit,
    enabled: bool,
    tolerances: &Tolerances,
) -> (Option<f64>, Interpretation) {
    let z = if enabled {
        value.and_then(|v| z_score(v, norm.mean, norm.sd))
    } else {
        None
    };
    (z, interpret(value, norm.mean, unit, enabled, tolerances))
}

/// Row for one measure. Pixel rows keep their value but are never scored.
pub fn measure_row(
    key: MeasureKey,
    value: Option<f64>,
    units: Unit,
    norms: &NormTable,
) -> MeasureResult {
    let norm = norms.norm(key);
    let scored = units != Unit::Pixels;
    let (z_score, interpretation) = compare(value, norm, units, scored, norms.tolerances());
    MeasureResult {
        key,
        label: key.label().to_string(),
        value,
        units,
        norm,
        z_score,
        interpretation,
    }
}

/// Unit a family record reports for `key`.
fn row_unit(results: &FamilyResults, key: MeasureKey) -> Unit {
    let linear = match key.family() {
        Family::Steiner => results.steiner.linear_unit,
        Family::Soft => results.soft.linear_unit,
        Family::Extended => results.extended.linear_unit,
        Family::Bjork => Unit::Millimeters,
    };
    key.unit(linear == Unit::Millimeters)
}

/// Ordered measure table: Steiner, Björk, Extended (each only if enabled),
/// then the soft-tissue row.
pub fn build_measures(
    results: &FamilyResults,
    norms: &NormTable,
    config: &AnalysisConfig,
) -> Vec<MeasureResult> {
    TABLE_ORDER
        .into_iter()
        .filter(|family| config.is_enabled(*family))
        .flat_map(|family| family.measures().iter().copied())
        .map(|key| measure_row(key, results.value(key), row_unit(results, key), norms))
        .collect()
}
