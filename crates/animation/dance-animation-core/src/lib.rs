//! Dance Animation Core (renderer-agnostic up to the raster step)
//!
//! Turns a symbolic dance description (named poses chained into movements with
//! durations) into an ordered list of rasterized frames. Each dance style binds
//! its own timing and easing so genres read differently on screen.
//!
//! Pipeline: pose catalog → sequencer (interpolator + easing) → rasterizer.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod interp;
pub mod pose;
pub mod raster;
pub mod sequencer;
pub mod sequences;
pub mod stored_sequence;
pub mod style;

// Re-exports for consumers (export backends, CLI hosts)
pub use catalog::{build_catalog, PoseCatalog, Proportions, POSE_IDS};
pub use config::Config;
pub use engine::Animator;
pub use error::AnimationError;
pub use geometry::Point;
pub use interp::easing::Easing;
pub use interp::functions::interpolate;
pub use pose::Pose;
pub use raster::{render, render_all, render_with, Frame, RenderStyle};
pub use sequencer::{
    build_animation, build_animation_named, expected_frame_count, frames_per_transition,
    plan_animation, AnimationPlan, MovementPlan, MAX_TOTAL_FRAMES,
};
pub use sequences::{builtin_sequence, DanceSequence, Movement};
pub use stored_sequence::parse_movements_json;
pub use style::{style_timing, DanceStyle, StyleTiming};
