//! Interpolation and easing.
//!
//! `functions` holds the pose lerp (componentwise, rounded to pixels, no
//! clamping); `easing` the closed set of per-style progress remaps.

pub mod easing;
pub mod functions;
