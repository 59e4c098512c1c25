//! Three-dimensional convex hull by incremental face insertion.

use std::collections::HashSet;

use crate::error::HullError;
use crate::metrics::{DEGENERACY_EPS, HullMetrics};

type Vec3 = [f64; 3];

/// Oriented triangular face with an outward unit normal.
#[derive(Debug, Clone)]
struct Face {
    v: [usize; 3],
    normal: Vec3,
    offset: f64,
}

impl Face {
    fn new(pts: &[Vec3], v: [usize; 3], interior: Vec3) -> Self {
        let [a, b, c] = v.map(|i| pts[i]);
        let mut normal = normalize(cross(sub(b, a), sub(c, a)));
        let mut v = v;
        if dot(normal, sub(interior, a)) > 0.0 {
            normal = normal.map(|x| -x);
            v.swap(1, 2);
        }
        let offset = dot(normal, a);
        Self { v, normal, offset }
    }

    /// Signed distance of `p` above the face plane.
    fn distance(&self, p: Vec3) -> f64 {
        dot(self.normal, p) - self.offset
    }

    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.v;
        [(a, b), (b, c), (c, a)]
    }
}

/// Volume and surface area of the convex hull of 3-D points.
///
/// Builds an initial tetrahedron from extreme points, then inserts the remaining
/// points one by one: faces a point can see are removed and the horizon is
/// re-triangulated to the point. Points within a relative tolerance of the current
/// hull are treated as inside.
pub(crate) fn spatial_hull(pts: &[Vec3]) -> Result<HullMetrics, HullError> {
    let scale = extent(pts);
    let eps = DEGENERACY_EPS * scale;
    if scale == 0.0 {
        return Err(HullError::Collinear);
    }

    let [i0, i1, i2, i3] = initial_simplex(pts, eps)?;
    let interior = [i0, i1, i2, i3]
        .map(|i| pts[i])
        .iter()
        .fold([0.0; 3], |acc, p| add(acc, p.map(|x| x / 4.0)));

    let mut faces: Vec<Face> = [[i0, i1, i2], [i0, i1, i3], [i0, i2, i3], [i1, i2, i3]]
        .into_iter()
        .map(|v| Face::new(pts, v, interior))
        .collect();

    for (p_idx, &p) in pts.iter().enumerate() {
        if [i0, i1, i2, i3].contains(&p_idx) {
            continue;
        }
        let (visible, kept): (Vec<Face>, Vec<Face>) =
            faces.into_iter().partition(|f| f.distance(p) > eps);
        faces = kept;
        if visible.is_empty() {
            continue;
        }

        let edges: HashSet<(usize, usize)> = visible.iter().flat_map(Face::edges).collect();
        for &(a, b) in &edges {
            if !edges.contains(&(b, a)) {
                faces.push(Face::new(pts, [a, b, p_idx], interior));
            }
        }
    }

    let mut volume = 0.0;
    let mut area = 0.0;
    for f in &faces {
        let [a, b, c] = f.v.map(|i| pts[i]);
        let n = cross(sub(b, a), sub(c, a));
        area += norm(n) / 2.0;
        volume += dot(sub(a, interior), n) / 6.0;
    }
    let volume = volume.abs();

    if volume <= DEGENERACY_EPS * scale.powi(3) {
        return Err(HullError::Coplanar);
    }
    Ok(HullMetrics { volume, area })
}

/// Indices of four points spanning a tetrahedron of non-negligible volume.
fn initial_simplex(pts: &[Vec3], eps: f64) -> Result<[usize; 4], HullError> {
    let i0 = 0;
    let p0 = pts[i0];

    let (i1, d1) = farthest(pts, |p| norm(sub(p, p0)));
    if d1 <= eps {
        return Err(HullError::Collinear);
    }
    let p1 = pts[i1];
    let axis = normalize(sub(p1, p0));

    let (i2, d2) = farthest(pts, |p| norm(cross(axis, sub(p, p0))));
    if d2 <= eps {
        return Err(HullError::Collinear);
    }
    let p2 = pts[i2];
    let plane = normalize(cross(sub(p1, p0), sub(p2, p0)));

    let (i3, d3) = farthest(pts, |p| dot(plane, sub(p, p0)).abs());
    if d3 <= eps {
        return Err(HullError::Coplanar);
    }
    Ok([i0, i1, i2, i3])
}

fn farthest(pts: &[Vec3], dist: impl Fn(Vec3) -> f64) -> (usize, f64) {
    pts.iter()
        .enumerate()
        .map(|(i, &p)| (i, dist(p)))
        .fold((0, f64::NEG_INFINITY), |best, cur| if cur.1 > best.1 { cur } else { best })
}

fn extent(pts: &[Vec3]) -> f64 {
    (0..3)
        .map(|d| {
            let (lo, hi) = pts
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                    (lo.min(p[d]), hi.max(p[d]))
                });
            hi - lo
        })
        .fold(0.0, f64::max)
}

fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm(a: Vec3) -> f64 {
    dot(a, a).sqrt()
}

fn normalize(a: Vec3) -> Vec3 {
    let n = norm(a);
    a.map(|x| x / n)
}
