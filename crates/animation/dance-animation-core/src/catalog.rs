//! Pose catalog: every named pose of the built-in dances, generated from one
//! center point and three proportion constants.
//!
//! Geometry notation used below: `(x, y)` is the center (head position of a
//! standing figure), `b` the body length, `l` the limb length and
//! `f = y + b + l` the resting foot line.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::AnimationError;
use crate::geometry::Point;
use crate::pose::Pose;

/// Figure proportions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Proportions {
    /// Head outline radius. Pose geometry does not depend on it; renderers may.
    pub head_radius: f64,
    pub body_length: f64,
    pub limb_length: f64,
}

impl Default for Proportions {
    fn default() -> Self {
        Self {
            head_radius: 15.0,
            body_length: 40.0,
            limb_length: 30.0,
        }
    }
}

/// Every pose identifier in declaration order, grouped by the dance that
/// introduced it. Hip hop also reuses `feet_hip_width` from broadway.
pub const POSE_IDS: [&str; 29] = [
    // tap
    "tap_feet_together",
    "tap_right_forward",
    "right_foot_forward",
    "left_side_tap",
    "left_foot_side",
    "right_back_tap",
    "right_foot_back",
    "left_tap_in_place",
    "heels_click",
    // broadway
    "feet_hip_width",
    "left_step_right_arm",
    "left_forward_arm_extended",
    "right_step_slide",
    "body_twist_left",
    "arm_swing",
    "spin_prep",
    "spin_180",
    "arms_up_leap",
    // hip hop
    "cross_right_swing",
    "jump_apart_clap",
    "right_back_arms_down",
    "slide_push",
    "jump_apart_arms_side",
    // contemporary
    "feet_shoulder_width",
    "raise_arm_pivot",
    "step_back_extend",
    "weight_shift",
    "step_right_arms_side",
    "leap_execute",
];

/// Immutable mapping from pose id to pose for one geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseCatalog {
    center: Point,
    proportions: Proportions,
    poses: HashMap<String, Pose>,
}

impl PoseCatalog {
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn proportions(&self) -> Proportions {
        self.proportions
    }

    pub fn get(&self, id: &str) -> Option<&Pose> {
        self.poses.get(id)
    }

    /// Lookup that reports a missing id as [`AnimationError::UnknownPose`].
    pub fn resolve(&self, id: &str) -> Result<&Pose, AnimationError> {
        self.poses
            .get(id)
            .ok_or_else(|| AnimationError::UnknownPose { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.poses.contains_key(id)
    }

    /// Pose ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        POSE_IDS.iter().copied().filter(|id| self.poses.contains_key(*id))
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

/// Build the catalog for `center` and `proportions`. Pure: identical inputs
/// always give identical poses.
pub fn build_catalog(center: Point, proportions: Proportions) -> PoseCatalog {
    let g = Geometry::new(center, proportions);
    let l = proportions.limb_length;
    let mut poses = HashMap::with_capacity(POSE_IDS.len());
    let mut put = |id: &str, pose: Pose| {
        poses.insert(id.to_string(), pose);
    };

    // Tap: upper body stays still, only the feet move.
    put("tap_feet_together", g.standing([(-10.0, 0.0), (10.0, 0.0)]));
    put("tap_right_forward", g.standing([(-10.0, 0.0), (30.0, -10.0)]));
    put("right_foot_forward", g.standing([(-10.0, 0.0), (25.0, 0.0)]));
    put("left_side_tap", g.standing([(-30.0, 0.0), (25.0, 0.0)]));
    put("left_foot_side", g.standing([(-30.0, 0.0), (10.0, 0.0)]));
    put("right_back_tap", g.standing([(-10.0, 0.0), (10.0, 20.0)]));
    put("right_foot_back", g.standing([(-10.0, 0.0), (10.0, 15.0)]));
    put("left_tap_in_place", g.standing([(-10.0, -10.0), (10.0, 15.0)]));
    put(
        "heels_click",
        g.pose(
            (0.0, -15.0),
            (0.0, -15.0),
            [(-1.1 * l, -15.0), (1.1 * l, -15.0)],
            [(-5.0, -15.0), (5.0, -15.0)],
        ),
    );

    // Broadway
    put("feet_hip_width", g.standing([(-20.0, 0.0), (20.0, 0.0)]));
    put(
        "left_step_right_arm",
        g.pose(
            (0.0, 0.0),
            (0.0, 0.0),
            [(-0.5 * l, 0.0), (1.2 * l, -10.0)],
            [(-20.0, 0.0), (30.0, 0.0)],
        ),
    );
    put(
        "left_forward_arm_extended",
        g.pose(
            (0.0, 0.0),
            (0.0, 0.0),
            [(-0.5 * l, 0.0), (1.2 * l, 0.0)],
            [(-30.0, 0.0), (10.0, 0.0)],
        ),
    );
    put(
        "right_step_slide",
        g.pose(
            (0.0, 0.0),
            (10.0, 0.0),
            [(-l, 10.0), (0.8 * l, 15.0)],
            [(-15.0, 0.0), (25.0, -5.0)],
        ),
    );
    put(
        "body_twist_left",
        g.pose(
            (-5.0, 0.0),
            (0.0, 0.0),
            [(-1.2 * l, 0.0), (0.8 * l, -10.0)],
            [(-20.0, 0.0), (10.0, 0.0)],
        ),
    );
    put(
        "arm_swing",
        g.pose(
            (-5.0, 0.0),
            (0.0, 0.0),
            [(-0.8 * l, 0.0), (1.2 * l, -15.0)],
            [(-20.0, 0.0), (10.0, 0.0)],
        ),
    );
    put(
        "spin_prep",
        g.pose(
            (-5.0, 0.0),
            (0.0, 0.0),
            [(-l, -5.0), (l, -5.0)],
            [(-10.0, 0.0), (10.0, 0.0)],
        ),
    );
    put(
        "spin_180",
        g.pose(
            (0.0, -10.0),
            (0.0, -10.0),
            [(-1.1 * l, -10.0), (1.1 * l, -10.0)],
            [(-5.0, -10.0), (5.0, -10.0)],
        ),
    );
    put(
        "arms_up_leap",
        g.pose(
            (0.0, -20.0),
            (0.0, -20.0),
            [(-1.1 * l, -25.0), (1.1 * l, -25.0)],
            [(-30.0, -20.0), (30.0, -20.0)],
        ),
    );

    // Hip hop
    put(
        "cross_right_swing",
        g.pose(
            (0.0, 0.0),
            (0.0, 0.0),
            [(0.8 * l, 0.0), (1.2 * l, 0.0)],
            [(15.0, 0.0), (-20.0, 0.0)],
        ),
    );
    put(
        "jump_apart_clap",
        g.pose(
            (0.0, -15.0),
            (0.0, -15.0),
            [(-0.5 * l, -25.0), (0.5 * l, -25.0)],
            [(-25.0, -15.0), (25.0, -15.0)],
        ),
    );
    put(
        "right_back_arms_down",
        g.pose(
            (0.0, 0.0),
            (0.0, 0.0),
            [(-0.8 * l, 20.0), (0.8 * l, 20.0)],
            [(-10.0, 0.0), (25.0, 0.0)],
        ),
    );
    put(
        "slide_push",
        g.pose(
            (0.0, 0.0),
            (0.0, 0.0),
            [(-0.5 * l, -5.0), (0.5 * l, -5.0)],
            [(-10.0, 0.0), (10.0, 0.0)],
        ),
    );
    put(
        "jump_apart_arms_side",
        g.pose(
            (0.0, -15.0),
            (0.0, -15.0),
            [(-1.2 * l, -15.0), (1.2 * l, -15.0)],
            [(-25.0, -15.0), (25.0, -15.0)],
        ),
    );

    // Contemporary
    put("feet_shoulder_width", g.standing([(-15.0, 0.0), (15.0, 0.0)]));
    put(
        "raise_arm_pivot",
        g.pose(
            (-5.0, 0.0),
            (0.0, 0.0),
            [(-0.5 * l, 0.0), (0.8 * l, -20.0)],
            [(-15.0, 0.0), (15.0, 0.0)],
        ),
    );
    put(
        "step_back_extend",
        g.pose(
            (-5.0, 0.0),
            (0.0, 0.0),
            [(-0.5 * l, 0.0), (1.2 * l, -10.0)],
            [(-30.0, 0.0), (10.0, 0.0)],
        ),
    );
    put(
        "weight_shift",
        g.pose(
            (-10.0, 0.0),
            (-5.0, 0.0),
            [(-1.2 * l, 10.0), (0.8 * l, -15.0)],
            [(-20.0, -5.0), (5.0, 0.0)],
        ),
    );
    put(
        "step_right_arms_side",
        g.pose(
            (0.0, 0.0),
            (0.0, 0.0),
            [(-1.1 * l, 0.0), (1.1 * l, 0.0)],
            [(-10.0, 0.0), (25.0, 0.0)],
        ),
    );
    put(
        "leap_execute",
        g.pose(
            (0.0, -20.0),
            (0.0, -20.0),
            [(-1.1 * l, -25.0), (1.1 * l, -25.0)],
            [(-30.0, -20.0), (30.0, -20.0)],
        ),
    );

    PoseCatalog {
        center,
        proportions,
        poses,
    }
}

/// Anchors for one geometry. Each anchor takes `(dx, dy)` offsets.
struct Geometry {
    x: f64,
    y: f64,
    body: f64,
    foot: f64,
}

impl Geometry {
    fn new(center: Point, p: Proportions) -> Self {
        let x = f64::from(center.x);
        let y = f64::from(center.y);
        Self {
            x,
            y,
            body: y + p.body_length,
            foot: y + p.body_length + p.limb_length,
        }
    }

    /// head/arms are offsets from the center, body from the hip line and legs
    /// from the foot line.
    fn pose(
        &self,
        head: (f64, f64),
        body: (f64, f64),
        arms: [(f64, f64); 2],
        legs: [(f64, f64); 2],
    ) -> Pose {
        let at = |(dx, dy): (f64, f64), base_y: f64| Point::from_f64(self.x + dx, base_y + dy);
        Pose {
            head: at(head, self.y),
            body: at(body, self.body),
            arms: [at(arms[0], self.y), at(arms[1], self.y)],
            legs: [at(legs[0], self.foot), at(legs[1], self.foot)],
        }
    }

    /// Upright figure with arms level at shoulder height; only feet vary.
    fn standing(&self, legs: [(f64, f64); 2]) -> Pose {
        let l = self.foot - self.body;
        self.pose((0.0, 0.0), (0.0, 0.0), [(-l, 0.0), (l, 0.0)], legs)
    }
}
