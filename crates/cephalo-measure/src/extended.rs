//! Extended measures: IMPA, Wits, occlusal plane, facial angle, U1–SN.

use cephalo_calibration::LinearScale;
use cephalo_geometry::{
    Point, acute_angle_between_lines, angle_between_lines, distance, project_point_onto_line,
};
use cephalo_types::{ExtendedResults, LandmarkKey as L, LandmarkMap, OcclusalReference};

use crate::landmarks;

/// The line used as occlusal reference and where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OcclusalPlane {
    pub reference: OcclusalReference,
    pub from: Point,
    pub to: Point,
}

/// Two-tier occlusal reference: Oc1–Oc2 when both are placed, otherwise
/// Porion–Orbitale as a proxy. The order is fixed.
pub fn resolve_occlusal_plane(points: &LandmarkMap) -> Option<OcclusalPlane> {
    if let Some([from, to]) = landmarks(points, [L::Oc1, L::Oc2]) {
        return Some(OcclusalPlane {
            reference: OcclusalReference::Occlusal,
            from,
            to,
        });
    }
    landmarks(points, [L::Po, L::Or]).map(|[from, to]| OcclusalPlane {
        reference: OcclusalReference::Frankfort,
        from,
        to,
    })
}

/// Wits appraisal in pixels.
///
/// A and B are projected onto the occlusal line (AO, BO). The sign is that of
/// the scalar projection of BO − AO onto the `oc1 → oc2` direction (zero
/// counts as positive); the magnitude is |AO BO|. `None` if `oc1 == oc2`.
pub fn wits_appraisal(a: Point, b: Point, oc1: Point, oc2: Point) -> Option<f64> {
    let len = distance(oc1, oc2);
    if len == 0.0 {
        return None;
    }
    let ao = project_point_onto_line(a, oc1, oc2);
    let bo = project_point_onto_line(b, oc1, oc2);
    let along = ((bo.x - ao.x) * (oc2.x - oc1.x) + (bo.y - ao.y) * (oc2.y - oc1.y)) / len;
    let magnitude = distance(ao, bo);
    let signed = if along >= 0.0 { magnitude } else { -magnitude };
    signed.is_finite().then_some(signed)
}

pub fn compute_extended(points: &LandmarkMap, mm_per_px: Option<f64>) -> ExtendedResults {
    let scale = LinearScale::from_mm_per_px(mm_per_px);

    let impa = landmarks(points, [L::L1A, L::L1T, L::Gn, L::Go])
        .and_then(|[apex, tip, gn, go]| angle_between_lines(apex, tip, gn, go));

    let wits = landmarks(points, [L::A, L::B, L::Oc1, L::Oc2])
        .and_then(|[a, b, oc1, oc2]| wits_appraisal(a, b, oc1, oc2))
        .map(|d| scale.apply(d))
        .filter(|v| v.is_finite());

    let plane = resolve_occlusal_plane(points);
    let occlusal_sn = plane.and_then(|plane| {
        let [s, n] = landmarks(points, [L::S, L::N])?;
        acute_angle_between_lines(s, n, plane.from, plane.to)
    });

    let facial_angle = landmarks(points, [L::Ba, L::N, L::Pt, L::Gn])
        .and_then(|[ba, n, pt, gn]| angle_between_lines(ba, n, pt, gn))
        .map(|angle| 180.0 - angle);

    let u1_sn = landmarks(points, [L::U1A, L::U1T, L::N, L::S])
        .and_then(|[apex, tip, n, s]| angle_between_lines(apex, tip, n, s));

    ExtendedResults {
        impa,
        wits,
        occlusal_sn,
        facial_angle,
        u1_sn,
        occlusal_reference: plane.map(|p| p.reference),
        linear_unit: scale.unit(),
    }
}
