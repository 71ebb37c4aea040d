//! Soft-tissue profile (Ricketts E-line).

use cephalo_calibration::LinearScale;
use cephalo_geometry::point_line_distance_signed;
use cephalo_types::{LandmarkKey as L, LandmarkMap, SoftTissueResults};

use crate::landmarks;

/// Lower lip to the Prn–PgS' esthetic line; negative means behind the line.
pub fn compute_soft_tissue(points: &LandmarkMap, mm_per_px: Option<f64>) -> SoftTissueResults {
    let scale = LinearScale::from_mm_per_px(mm_per_px);
    let e_line_li = landmarks(points, [L::Li, L::PgS, L::Prn])
        .and_then(|[li, pgs, prn]| point_line_distance_signed(li, pgs, prn))
        .map(|d| scale.apply(d))
        .filter(|v| v.is_finite());

    SoftTissueResults {
        e_line_li,
        linear_unit: scale.unit(),
    }
}
