//! Skeletal pose snapshot.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Five anchor groups of a stick figure. Index 0 of `arms`/`legs` is always the
/// left (primary) limb, index 1 the right one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub head: Point,
    pub body: Point,
    pub arms: [Point; 2],
    pub legs: [Point; 2],
}

impl Pose {
    /// Every point in fixed order: head, body, arm0, arm1, leg0, leg1.
    pub fn points(&self) -> [Point; 6] {
        [
            self.head,
            self.body,
            self.arms[0],
            self.arms[1],
            self.legs[0],
            self.legs[1],
        ]
    }

    /// Inverse of [`Pose::points`].
    pub fn from_points(p: [Point; 6]) -> Self {
        Self {
            head: p[0],
            body: p[1],
            arms: [p[2], p[3]],
            legs: [p[4], p[5]],
        }
    }

    /// Same pose shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::from_points(self.points().map(|p| p.offset(dx, dy)))
    }
}
