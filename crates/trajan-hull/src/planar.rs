//! Planar convex hull by Andrew's monotone chain.

use crate::error::HullError;
use crate::metrics::{DEGENERACY_EPS, HullMetrics};

/// Area and perimeter of the convex hull of 2-D points.
///
/// Collinear runs on the boundary are dropped from the vertex list. A hull whose
/// area is negligible relative to the squared extent of the points is reported as
/// collinear rather than returned as a sliver.
pub(crate) fn planar_hull(points: &[[f64; 2]]) -> Result<HullMetrics, HullError> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
    pts.dedup();

    let hull = monotone_chain(&pts);
    if hull.len() < 3 {
        return Err(HullError::Collinear);
    }

    let n = hull.len();
    let mut twice_area = 0.0;
    let mut perimeter = 0.0;
    for i in 0..n {
        let a = hull[i];
        let b = hull[(i + 1) % n];
        twice_area += a[0] * b[1] - b[0] * a[1];
        perimeter += ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2)).sqrt();
    }
    let area = twice_area.abs() / 2.0;

    let scale = extent(&pts);
    if area <= DEGENERACY_EPS * scale * scale {
        return Err(HullError::Collinear);
    }

    Ok(HullMetrics {
        volume: area,
        area: perimeter,
    })
}

/// Counter-clockwise hull vertices of lexicographically sorted, deduplicated points.
fn monotone_chain(pts: &[[f64; 2]]) -> Vec<[f64; 2]> {
    if pts.len() < 3 {
        return pts.to_vec();
    }
    let mut lower: Vec<[f64; 2]> = Vec::with_capacity(pts.len());
    for &p in pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<[f64; 2]> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }
    // last point of each chain is the first of the other
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// z-component of `(a - o) x (b - o)`; positive for a left turn.
fn cross(o: [f64; 2], a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

fn extent(pts: &[[f64; 2]]) -> f64 {
    let mut lo = [f64::INFINITY; 2];
    let mut hi = [f64::NEG_INFINITY; 2];
    for p in pts {
        for d in 0..2 {
            lo[d] = lo[d].min(p[d]);
            hi[d] = hi[d].max(p[d]);
        }
    }
    (hi[0] - lo[0]).max(hi[1] - lo[1])
}
