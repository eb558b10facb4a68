//! Bernstein-basis Bezier evaluation.
//!
//! The camera path is a single global Bezier of degree `len - 1` through
//! the whole key sequence, not a piecewise spline. Binomial coefficients
//! use the iterative multiplicative formula over the smaller of `r` and
//! `n - r`, and the weighted sum accumulates in double precision before
//! narrowing back to `f32`; both keep float error in check for long key
//! sequences.

use glam::{DVec3, Vec3};
use smallvec::SmallVec;

use crate::animation::keys::CameraKey;

/// C(n, r) via the multiplicative formula, exploiting C(n, r) = C(n, n-r).
#[must_use]
pub fn binomial(n: usize, r: usize) -> f64 {
    if r > n {
        return 0.0;
    }
    let r = r.min(n - r);
    let mut res = 1.0_f64;
    for i in 1..=r {
        res = res * (n - i + 1) as f64 / i as f64;
    }
    res
}

/// Evaluates the degree `points.len() - 1` Bezier curve through `points`
/// at `t`, clamped to [0, 1]. Zero vector for an empty slice.
#[must_use]
pub fn bezier_point(points: &[Vec3], t: f32) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    let n = points.len() - 1;
    let t = f64::from(t.clamp(0.0, 1.0));

    let mut acc = DVec3::ZERO;
    for (i, p) in points.iter().enumerate() {
        let basis = binomial(n, i) * (1.0 - t).powi((n - i) as i32) * t.powi(i as i32);
        acc += p.as_dvec3() * basis;
    }
    acc.as_vec3()
}

pub(crate) fn bezier_eyes(keys: &[CameraKey], t: f32) -> Vec3 {
    let pts: SmallVec<[Vec3; 8]> = keys.iter().map(|k| k.eye).collect();
    bezier_point(&pts, t)
}

pub(crate) fn bezier_look_ats(keys: &[CameraKey], t: f32) -> Vec3 {
    let pts: SmallVec<[Vec3; 8]> = keys.iter().map(|k| k.look_at).collect();
    bezier_point(&pts, t)
}

/// Uniformly samples the camera eye path into a polyline with
/// `segments + 1` points, for path visualization (drawn as a line strip by
/// the external renderer). Empty when there are no keys.
#[must_use]
pub fn camera_path_polyline(keys: &[CameraKey], segments: usize) -> Vec<Vec3> {
    if keys.is_empty() || segments == 0 {
        return Vec::new();
    }
    (0..=segments)
        .map(|i| bezier_eyes(keys, i as f32 / segments as f32))
        .collect()
}
