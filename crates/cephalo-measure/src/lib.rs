//! # cephalo-measure
//!
//! **Tier 2 (Measurement Engine)**
//!
//! Four independent calculators turn a sparse [`LandmarkMap`] into raw
//! family records. Each field needs its own landmark subset; a missing
//! landmark blanks only the fields that depend on it.
//!
//! Linear fields go through [`LinearScale`]: millimeters when a valid
//! mm/px factor is supplied, pixels otherwise.
//!
//! Sign convention: the profile faces +x with screen y pointing down.
//! Signed offsets are measured against lines oriented from their inferior
//! to their superior point, so anterior displacement is positive.

mod bjork;
mod extended;
mod soft;
mod steiner;

pub use bjork::compute_bjork;
pub use extended::{OcclusalPlane, compute_extended, resolve_occlusal_plane, wits_appraisal};
pub use soft::compute_soft_tissue;
pub use steiner::compute_steiner;

use cephalo_calibration::LinearScale;
use cephalo_types::{
    AnalysisConfig, ExtendedResults, Family, FamilyResults, LandmarkKey, LandmarkMap, Point,
    SteinerResults,
};
use tracing::trace;

/// All requested landmarks, or `None` if any is missing.
pub(crate) fn landmarks<const N: usize>(
    points: &LandmarkMap,
    keys: [LandmarkKey; N],
) -> Option<[Point; N]> {
    let mut out = [Point::default(); N];
    for (slot, key) in out.iter_mut().zip(keys) {
        *slot = points.get(key)?;
    }
    Some(out)
}

/// Run every enabled family. The soft-tissue family always runs.
///
/// Disabled families come back with every field unavailable.
pub fn compute_families(
    points: &LandmarkMap,
    mm_per_px: Option<f64>,
    config: &AnalysisConfig,
) -> FamilyResults {
    let unit = LinearScale::from_mm_per_px(mm_per_px).unit();

    let results = FamilyResults {
        steiner: if config.steiner {
            compute_steiner(points, mm_per_px)
        } else {
            SteinerResults::unavailable(unit)
        },
        bjork: if config.bjork {
            compute_bjork(points)
        } else {
            Default::default()
        },
        soft: compute_soft_tissue(points, mm_per_px),
        extended: if config.extended {
            compute_extended(points, mm_per_px)
        } else {
            ExtendedResults::unavailable(unit)
        },
    };

    for family in Family::ALL {
        let computed = family
            .measures()
            .iter()
            .filter(|key| results.value(**key).is_some())
            .count();
        trace!(
            family = family.as_str(),
            computed,
            total = family.measures().len(),
            "family computed"
        );
    }

    results
}
