//! Interpolation helpers:
//! - lerp_f64 (scalar)
//! - lerp_point (component-wise, rounded to whole pixels)
//! - interpolate (every anchor of a pose)

use crate::geometry::Point;
use crate::pose::Pose;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Component-wise lerp rounded half away from zero. At `t == 0` and `t == 1`
/// the result is exactly `a` and `b`: integer coordinates are exact in f64.
#[inline]
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::from_f64(
        lerp_f64(f64::from(a.x), f64::from(b.x), t),
        lerp_f64(f64::from(a.y), f64::from(b.y), t),
    )
}

/// Intermediate pose between `start` and `end`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate linearly.
pub fn interpolate(start: &Pose, end: &Pose, t: f64) -> Pose {
    Pose {
        head: lerp_point(start.head, end.head, t),
        body: lerp_point(start.body, end.body, t),
        arms: [
            lerp_point(start.arms[0], end.arms[0], t),
            lerp_point(start.arms[1], end.arms[1], t),
        ],
        legs: [
            lerp_point(start.legs[0], end.legs[0], t),
            lerp_point(start.legs[1], end.legs[1], t),
        ],
    }
}
