//! Error types for animation builds.
//!
//! Every variant is fatal to the build call that raised it. Inputs are
//! deterministic data, so callers fix the referenced configuration instead of
//! retrying.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimationError {
    /// Style name is not one of the built-in timing entries.
    #[error("unknown dance style: {name}")]
    UnknownStyle { name: String },

    /// Pose identifier is absent from the catalog.
    #[error("unknown pose: {id}")]
    UnknownPose { id: String },

    /// A transition would get fewer than two frames.
    #[error("degenerate transition: duration {duration} yields {frames} frame(s), need at least 2")]
    DegenerateTransition { duration: f64, frames: i64 },

    /// The whole animation would exceed the frame ceiling.
    #[error("movement {index} brings the animation to {frames} frames, limit is {limit}")]
    TooManyFrames { index: usize, frames: u64, limit: u64 },

    /// A movement lists no poses at all.
    #[error("movement {index} has no poses")]
    EmptyMovement { index: usize },

    /// Movement timing is missing, non-numeric, non-finite or not positive.
    #[error("invalid timing {raw:?}: {reason}")]
    InvalidTiming { raw: String, reason: String },

    /// Movement JSON could not be parsed.
    #[error("parse error: {reason}")]
    Parse { reason: String },
}

impl AnimationError {
    /// Short machine-readable tag, handy for logs and CLI exit reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownStyle { .. } => "unknown_style",
            Self::UnknownPose { .. } => "unknown_pose",
            Self::DegenerateTransition { .. } => "degenerate_transition",
            Self::TooManyFrames { .. } => "too_many_frames",
            Self::EmptyMovement { .. } => "empty_movement",
            Self::InvalidTiming { .. } => "invalid_timing",
            Self::Parse { .. } => "parse",
        }
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_input() {
        let err = AnimationError::UnknownStyle {
            name: "Jazz".into(),
        };
        assert_eq!(err.to_string(), "unknown dance style: Jazz");
        assert_eq!(err.kind(), "unknown_style");

        let err = AnimationError::DegenerateTransition {
            duration: 0.05,
            frames: 1,
        };
        assert!(err.to_string().contains("need at least 2"));

        let err = AnimationError::TooManyFrames {
            index: 2,
            frames: 2_000_000,
            limit: 1_000_000,
        };
        assert_eq!(err.kind(), "too_many_frames");
        assert!(err.to_string().starts_with("movement 2 "));
    }

    #[test]
    fn json_errors_become_parse() {
        let err: AnimationError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert_eq!(err.kind(), "parse");
    }
}
