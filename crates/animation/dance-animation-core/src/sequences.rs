//! Movements and the four built-in dance sequences.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::style::DanceStyle;

/// One beat of a dance: descriptive text, a duration in timing units and the
/// chain of pose ids it moves through, first to last.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub position: String,
    pub movement: String,
    /// Abstract timing units (beats), not seconds.
    pub duration: f64,
    pub frames: Vec<String>,
}

impl Movement {
    pub fn new(position: &str, movement: &str, duration: f64, frames: &[&str]) -> Self {
        Self {
            position: position.to_string(),
            movement: movement.to_string(),
            duration,
            frames: frames.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    /// Number of consecutive pose pairs.
    pub fn transitions(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }
}

/// Ordered movements for one style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DanceSequence {
    pub style: DanceStyle,
    pub movements: Vec<Movement>,
}

impl DanceSequence {
    pub fn total_duration(&self) -> f64 {
        self.movements.iter().map(|m| m.duration).sum()
    }
}

/// Read-only built-in template for `style`.
pub fn builtin_sequence(style: DanceStyle) -> &'static DanceSequence {
    match style {
        DanceStyle::Tap => &*TAP,
        DanceStyle::Broadway => &*BROADWAY,
        DanceStyle::HipHop => &*HIP_HOP,
        DanceStyle::Contemporary => &*CONTEMPORARY,
    }
}

static TAP: Lazy<DanceSequence> = Lazy::new(|| DanceSequence {
    style: DanceStyle::Tap,
    movements: vec![
        Movement::new(
            "Standing with feet together, arms relaxed at sides",
            "Tap right foot forward twice with precise, sharp movements, keeping upper body straight and arms steady",
            2.0,
            &["tap_feet_together", "tap_right_forward", "tap_feet_together", "tap_right_forward"],
        ),
        Movement::new(
            "Right foot forward, weight balanced",
            "Maintain posture while tapping left foot to the side twice, creating clear rhythmic sounds",
            2.0,
            &["right_foot_forward", "left_side_tap", "right_foot_forward", "left_side_tap"],
        ),
        Movement::new(
            "Left foot to the side",
            "Bring left foot back in and tap right foot back twice",
            2.0,
            &["left_foot_side", "right_back_tap", "left_foot_side", "right_back_tap"],
        ),
        Movement::new(
            "Right foot back",
            "Tap left foot in place twice",
            2.0,
            &["right_foot_back", "left_tap_in_place", "right_foot_back", "left_tap_in_place"],
        ),
        Movement::new(
            "Left foot in place",
            "Jump and click heels together twice",
            2.0,
            &["tap_feet_together", "heels_click", "tap_feet_together", "heels_click"],
        ),
    ],
});

static BROADWAY: Lazy<DanceSequence> = Lazy::new(|| DanceSequence {
    style: DanceStyle::Broadway,
    movements: vec![
        Movement::new(
            "Standing confidently with feet hip-width apart, shoulders back",
            "Step left foot forward with theatrical flair while extending right arm forward in a smooth, dramatic gesture",
            2.0,
            &["feet_hip_width", "left_step_right_arm"],
        ),
        Movement::new(
            "Left foot forward, right arm extended",
            "Bring right arm down and step right foot forward, sliding left foot back",
            2.0,
            &["left_forward_arm_extended", "right_step_slide"],
        ),
        Movement::new(
            "Right foot forward, left foot back",
            "Twist body to left while swinging right arm around",
            3.0,
            &["body_twist_left", "arm_swing"],
        ),
        Movement::new(
            "Twisted to left, right arm extended",
            "Jump and spin 180 degrees to the right, landing with feet together",
            4.0,
            &["spin_prep", "spin_180"],
        ),
        Movement::new(
            "Standing with feet together",
            "Extend both arms up and leap forward with right foot",
            3.0,
            &["spin_180", "arms_up_leap"],
        ),
    ],
});

static HIP_HOP: Lazy<DanceSequence> = Lazy::new(|| DanceSequence {
    style: DanceStyle::HipHop,
    movements: vec![
        Movement::new(
            "Athletic stance with feet hip-width apart, knees slightly bent",
            "Cross right foot over left with swagger, while swinging both arms to the right in a smooth, controlled motion",
            2.0,
            &["feet_hip_width", "cross_right_swing"],
        ),
        Movement::new(
            "Right foot crossed over left",
            "Jump feet apart and clap hands above head",
            2.0,
            &["cross_right_swing", "jump_apart_clap"],
        ),
        Movement::new(
            "Standing with feet apart, hands clapped above head",
            "Step right foot back and swing arms down",
            2.0,
            &["jump_apart_clap", "right_back_arms_down"],
        ),
        Movement::new(
            "Right foot back, arms down",
            "Slide left foot to meet right and push hands forward",
            2.0,
            &["right_back_arms_down", "slide_push"],
        ),
        Movement::new(
            "Feet together, hands pushed forward",
            "Jump feet apart and swing arms to the sides",
            2.0,
            &["slide_push", "jump_apart_arms_side"],
        ),
    ],
});

static CONTEMPORARY: Lazy<DanceSequence> = Lazy::new(|| DanceSequence {
    style: DanceStyle::Contemporary,
    movements: vec![
        Movement::new(
            "Grounded stance with feet shoulder-width apart, body centered",
            "Fluidly raise right arm overhead while pivoting body left, maintaining graceful control",
            2.0,
            &["feet_shoulder_width", "raise_arm_pivot"],
        ),
        Movement::new(
            "Standing with body pivoted left",
            "Step left foot back and extend right arm forward",
            2.0,
            &["raise_arm_pivot", "step_back_extend"],
        ),
        Movement::new(
            "Standing with left foot behind right",
            "Swing right arm back and left arm forward, shift weight to left foot",
            3.0,
            &["step_back_extend", "weight_shift"],
        ),
        Movement::new(
            "Standing with weight on left foot",
            "Step right foot forward, swing arms to the sides",
            2.0,
            &["weight_shift", "step_right_arms_side"],
        ),
        Movement::new(
            "Standing with right foot forward",
            "Leap forward, extending both arms upward",
            4.0,
            &["step_right_arms_side", "leap_execute"],
        ),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{build_catalog, Proportions};
    use crate::geometry::Point;

    #[test]
    fn each_builtin_has_five_movements() {
        for style in DanceStyle::ALL {
            let seq = builtin_sequence(style);
            assert_eq!(seq.style, style);
            assert_eq!(seq.movements.len(), 5, "{style}");
        }
    }

    #[test]
    fn total_duration_sums_movements() {
        assert_eq!(builtin_sequence(DanceStyle::Tap).total_duration(), 10.0);
        assert_eq!(builtin_sequence(DanceStyle::Broadway).total_duration(), 14.0);
        assert_eq!(builtin_sequence(DanceStyle::HipHop).total_duration(), 10.0);
        assert_eq!(builtin_sequence(DanceStyle::Contemporary).total_duration(), 13.0);
    }

    #[test]
    fn every_referenced_pose_exists() {
        let cat = build_catalog(Point::new(200, 200), Proportions::default());
        for style in DanceStyle::ALL {
            for m in &builtin_sequence(style).movements {
                assert!(m.transitions() >= 1);
                for id in &m.frames {
                    assert!(cat.contains(id), "{style}: {id}");
                }
            }
        }
    }

    #[test]
    fn transitions_count_pairs() {
        let m = Movement::new("p", "m", 1.0, &["a", "b", "c"]);
        assert_eq!(m.transitions(), 2);
        let empty = Movement::new("p", "m", 1.0, &[]);
        assert_eq!(empty.transitions(), 0);
    }
}
