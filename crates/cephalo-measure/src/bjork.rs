//! Björk–Jarabak polygon.

use cephalo_geometry::{angle_between, distance};
use cephalo_types::{BjorkResults, LandmarkKey as L, LandmarkMap};

use crate::landmarks;

pub fn compute_bjork(points: &LandmarkMap) -> BjorkResults {
    let saddle =
        landmarks(points, [L::N, L::S, L::Ar]).and_then(|[n, s, ar]| angle_between(s, n, ar));
    let articular =
        landmarks(points, [L::S, L::Ar, L::Go]).and_then(|[s, ar, go]| angle_between(ar, s, go));
    let gonial =
        landmarks(points, [L::Ar, L::Go, L::Me]).and_then(|[ar, go, me]| angle_between(go, ar, me));

    let sum = match (saddle, articular, gonial) {
        (Some(a), Some(b), Some(c)) => Some(a + b + c),
        _ => None,
    };

    let jarabak = landmarks(points, [L::S, L::Go, L::N, L::Me]).and_then(|[s, go, n, me]| {
        let anterior = distance(n, me);
        let ratio = distance(s, go) * 100.0 / anterior;
        (anterior > 0.0 && ratio.is_finite()).then_some(ratio)
    });

    BjorkResults {
        saddle,
        articular,
        gonial,
        sum,
        jarabak,
    }
}
