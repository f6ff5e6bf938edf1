//! Animation sequencer: movements + style -> ordered pose list.
//!
//! Per movement, every consecutive pose pair becomes one transition of
//! `round(frames_per_unit * duration * speed_multiplier)` eased frames, then
//! the style's hold frames repeat the last pose. Everything is validated
//! before the first pose is produced, so an error never leaves partial output.

use serde::{Deserialize, Serialize};

use crate::catalog::PoseCatalog;
use crate::error::AnimationError;
use crate::interp::functions::interpolate;
use crate::pose::Pose;
use crate::sequences::Movement;
use crate::style::{DanceStyle, StyleTiming};

/// Upper bound on the frames one animation may produce (about 11 hours at
/// 25 fps). Plans past it are rejected before anything is allocated.
pub const MAX_TOTAL_FRAMES: usize = 1_000_000;

/// Frame accounting for one movement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementPlan {
    pub index: usize,
    pub frames_per_transition: u32,
    pub transitions: usize,
    pub hold_frames: u32,
    /// Offset of this movement's first frame in the output.
    pub start_frame: usize,
    pub frame_count: usize,
}

/// Frame accounting for a whole sequence under one style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationPlan {
    pub style: DanceStyle,
    pub movements: Vec<MovementPlan>,
    pub total_frames: usize,
}

/// Transition frame budget for a movement of `duration` timing units.
/// Fewer than two frames cannot show motion and is rejected.
pub fn frames_per_transition(timing: &StyleTiming, duration: f64) -> Result<u32, AnimationError> {
    let raw = (f64::from(timing.frames_per_unit) * duration * timing.speed_multiplier).round();
    if !raw.is_finite() || raw < 2.0 || raw > f64::from(u32::MAX) {
        return Err(AnimationError::DegenerateTransition {
            duration,
            frames: if raw.is_finite() { raw as i64 } else { 0 },
        });
    }
    Ok(raw as u32)
}

fn plan_movements(
    movements: &[Movement],
    style: DanceStyle,
    catalog: Option<&PoseCatalog>,
) -> Result<AnimationPlan, AnimationError> {
    let timing = style.timing();
    let mut plans = Vec::with_capacity(movements.len());
    let mut start_frame = 0usize;
    for (index, movement) in movements.iter().enumerate() {
        let n = frames_per_transition(&timing, movement.duration)?;
        if movement.frames.is_empty() {
            return Err(AnimationError::EmptyMovement { index });
        }
        if let Some(catalog) = catalog {
            for id in &movement.frames {
                catalog.resolve(id)?;
            }
        }
        let transitions = movement.transitions();
        let frame_count = (transitions as u64) * u64::from(n) + u64::from(timing.hold_frames);
        let total = start_frame as u64 + frame_count;
        if total > MAX_TOTAL_FRAMES as u64 {
            return Err(AnimationError::TooManyFrames {
                index,
                frames: total,
                limit: MAX_TOTAL_FRAMES as u64,
            });
        }
        let frame_count = frame_count as usize;
        plans.push(MovementPlan {
            index,
            frames_per_transition: n,
            transitions,
            hold_frames: timing.hold_frames,
            start_frame,
            frame_count,
        });
        start_frame += frame_count;
    }
    Ok(AnimationPlan {
        style,
        movements: plans,
        total_frames: start_frame,
    })
}

/// Validate `movements` against `catalog` and compute per-movement frame counts.
pub fn plan_animation(
    movements: &[Movement],
    style: DanceStyle,
    catalog: &PoseCatalog,
) -> Result<AnimationPlan, AnimationError> {
    plan_movements(movements, style, Some(catalog))
}

/// Closed-form output length: sum of `transitions * frames_per_transition +
/// hold_frames` over movements. Does not check pose ids.
pub fn expected_frame_count(movements: &[Movement], style: DanceStyle) -> Result<usize, AnimationError> {
    plan_movements(movements, style, None).map(|p| p.total_frames)
}

/// Build the full ordered pose list for `movements` under `style`.
pub fn build_animation(
    movements: &[Movement],
    style: DanceStyle,
    catalog: &PoseCatalog,
) -> Result<Vec<Pose>, AnimationError> {
    let plan = plan_animation(movements, style, catalog)?;
    let easing = style.timing().easing;
    let mut out: Vec<Pose> = Vec::with_capacity(plan.total_frames);

    for (movement, mp) in movements.iter().zip(&plan.movements) {
        log::debug!(
            "movement {}: {} transition(s) x {} frames + {} hold",
            mp.index,
            mp.transitions,
            mp.frames_per_transition,
            mp.hold_frames
        );
        let n = mp.frames_per_transition;
        let last_step = f64::from(n - 1);
        for pair in movement.frames.windows(2) {
            let start = catalog.resolve(&pair[0])?;
            let end = catalog.resolve(&pair[1])?;
            for frame in 0..n {
                let t = easing.apply(f64::from(frame) / last_step);
                out.push(interpolate(start, end, t));
            }
        }

        // Single-pose movements hold that pose.
        let last = match (mp.transitions, out.last()) {
            (0, _) | (_, None) => *catalog.resolve(&movement.frames[0])?,
            (_, Some(pose)) => *pose,
        };
        out.extend(std::iter::repeat(last).take(mp.hold_frames as usize));
    }

    debug_assert_eq!(out.len(), plan.total_frames);
    log::info!(
        "built {} poses for {} ({} movement(s))",
        out.len(),
        style,
        movements.len()
    );
    Ok(out)
}

/// [`build_animation`] with the style given by name.
pub fn build_animation_named(
    movements: &[Movement],
    style_name: &str,
    catalog: &PoseCatalog,
) -> Result<Vec<Pose>, AnimationError> {
    let style = DanceStyle::from_name(style_name)?;
    build_animation(movements, style, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{build_catalog, Proportions};
    use crate::geometry::Point;
    use crate::sequences::builtin_sequence;

    fn catalog() -> PoseCatalog {
        build_catalog(Point::new(200, 200), Proportions::default())
    }

    #[test]
    fn tap_budget_is_36_frames() {
        let n = frames_per_transition(&DanceStyle::Tap.timing(), 2.0).unwrap();
        assert_eq!(n, 36);
        assert_eq!(frames_per_transition(&DanceStyle::Broadway.timing(), 3.0).unwrap(), 60);
        assert_eq!(frames_per_transition(&DanceStyle::HipHop.timing(), 2.0).unwrap(), 36);
        assert_eq!(frames_per_transition(&DanceStyle::Contemporary.timing(), 4.0).unwrap(), 80);
    }

    #[test]
    fn short_duration_is_degenerate() {
        // 15 * 0.05 * 1.2 = 0.9 -> 1 frame
        let err = frames_per_transition(&DanceStyle::Tap.timing(), 0.05).unwrap_err();
        assert_eq!(
            err,
            AnimationError::DegenerateTransition {
                duration: 0.05,
                frames: 1
            }
        );
        assert!(frames_per_transition(&DanceStyle::Tap.timing(), 0.0).is_err());
        assert!(frames_per_transition(&DanceStyle::Tap.timing(), -1.0).is_err());
        assert!(frames_per_transition(&DanceStyle::Tap.timing(), f64::NAN).is_err());
    }

    #[test]
    fn tap_first_movement_is_111_frames() {
        let seq = builtin_sequence(DanceStyle::Tap);
        let first = &seq.movements[..1];
        assert_eq!(expected_frame_count(first, DanceStyle::Tap).unwrap(), 111);
        let poses = build_animation(first, DanceStyle::Tap, &catalog()).unwrap();
        assert_eq!(poses.len(), 111);
    }

    #[test]
    fn transition_starts_and_ends_on_keyposes() {
        let cat = catalog();
        let m = Movement::new("p", "m", 2.0, &["feet_hip_width", "left_step_right_arm"]);
        for style in DanceStyle::ALL {
            let poses = build_animation(std::slice::from_ref(&m), style, &cat).unwrap();
            let n = frames_per_transition(&style.timing(), 2.0).unwrap() as usize;
            assert_eq!(poses[0], *cat.get("feet_hip_width").unwrap(), "{style}");
            assert_eq!(poses[n - 1], *cat.get("left_step_right_arm").unwrap(), "{style}");
            // hold frames repeat the final pose
            for p in &poses[n..] {
                assert_eq!(p, &poses[n - 1]);
            }
        }
    }

    #[test]
    fn unknown_pose_fails_without_output() {
        let m = vec![
            Movement::new("p", "m", 2.0, &["tap_feet_together", "tap_right_forward"]),
            Movement::new("p", "m", 2.0, &["tap_feet_together", "moonwalk"]),
        ];
        let err = build_animation(&m, DanceStyle::Tap, &catalog()).unwrap_err();
        assert_eq!(
            err,
            AnimationError::UnknownPose {
                id: "moonwalk".into()
            }
        );
    }

    #[test]
    fn unknown_style_name_fails() {
        let seq = builtin_sequence(DanceStyle::Tap);
        let err = build_animation_named(&seq.movements, "Jazz", &catalog()).unwrap_err();
        assert_eq!(err.kind(), "unknown_style");
    }

    #[test]
    fn single_pose_movement_only_holds() {
        let m = vec![Movement::new("p", "m", 2.0, &["spin_180"])];
        let poses = build_animation(&m, DanceStyle::Broadway, &catalog()).unwrap();
        assert_eq!(poses.len(), 8);
        assert!(poses.iter().all(|p| p == catalog().get("spin_180").unwrap()));
    }

    #[test]
    fn empty_movement_is_rejected() {
        let m = vec![Movement::new("p", "m", 2.0, &[])];
        let err = build_animation(&m, DanceStyle::Broadway, &catalog()).unwrap_err();
        assert_eq!(err, AnimationError::EmptyMovement { index: 0 });
    }

    #[test]
    fn oversized_timing_is_rejected_before_allocating() {
        // 25 * 1e8 * 0.8 = 2e9 frames for a single transition
        let m = vec![
            Movement::new("p", "m", 2.0, &["weight_shift", "step_right_arms_side"]),
            Movement::new("p", "m", 1e8, &["step_right_arms_side", "leap_execute"]),
        ];
        let err = build_animation(&m, DanceStyle::Contemporary, &catalog()).unwrap_err();
        match err {
            AnimationError::TooManyFrames { index, frames, limit } => {
                assert_eq!(index, 1);
                assert_eq!(frames, 50 + 2_000_000_000 + 10);
                assert_eq!(limit, MAX_TOTAL_FRAMES as u64);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            expected_frame_count(&m, DanceStyle::Contemporary).unwrap_err().kind(),
            "too_many_frames"
        );
    }

    #[test]
    fn plan_offsets_accumulate() {
        let seq = builtin_sequence(DanceStyle::Broadway);
        let plan = plan_animation(&seq.movements, DanceStyle::Broadway, &catalog()).unwrap();
        let counts: Vec<usize> = plan.movements.iter().map(|m| m.frame_count).collect();
        // durations 2, 2, 3, 4, 3 at 20 frames/unit, one transition, 8 holds
        assert_eq!(counts, vec![48, 48, 68, 88, 68]);
        assert_eq!(plan.movements[2].start_frame, 96);
        assert_eq!(plan.total_frames, 320);
    }
}
