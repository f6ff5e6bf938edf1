//! Style timing policy: per-style frame budget, holds, speed and easing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;
use crate::interp::easing::Easing;

/// Built-in dance styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DanceStyle {
    Tap,
    Broadway,
    HipHop,
    Contemporary,
}

/// Timing parameters bound to one style.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleTiming {
    /// Frames per abstract timing unit (beat).
    pub frames_per_unit: u32,
    /// Pause frames appended after each movement.
    pub hold_frames: u32,
    /// Multiplier on the transition frame budget.
    pub speed_multiplier: f64,
    pub easing: Easing,
}

impl DanceStyle {
    pub const ALL: [DanceStyle; 4] = [
        DanceStyle::Tap,
        DanceStyle::Broadway,
        DanceStyle::HipHop,
        DanceStyle::Contemporary,
    ];

    pub fn timing(self) -> StyleTiming {
        match self {
            DanceStyle::Tap => StyleTiming {
                frames_per_unit: 15,
                hold_frames: 3,
                speed_multiplier: 1.2,
                easing: Easing::SharpBounce,
            },
            DanceStyle::Broadway => StyleTiming {
                frames_per_unit: 20,
                hold_frames: 8,
                speed_multiplier: 1.0,
                easing: Easing::SmoothDramatic,
            },
            DanceStyle::HipHop => StyleTiming {
                frames_per_unit: 12,
                hold_frames: 5,
                speed_multiplier: 1.5,
                easing: Easing::SharpWithHolds,
            },
            DanceStyle::Contemporary => StyleTiming {
                frames_per_unit: 25,
                hold_frames: 10,
                speed_multiplier: 0.8,
                easing: Easing::VerySmooth,
            },
        }
    }

    /// Human-facing name, as offered to users.
    pub fn display_name(self) -> &'static str {
        match self {
            DanceStyle::Tap => "Tap Dance",
            DanceStyle::Broadway => "Broadway",
            DanceStyle::HipHop => "Hip Hop",
            DanceStyle::Contemporary => "Contemporary",
        }
    }

    /// Lowercase ascii slug, used in file names.
    pub fn slug(self) -> &'static str {
        match self {
            DanceStyle::Tap => "tap",
            DanceStyle::Broadway => "broadway",
            DanceStyle::HipHop => "hip-hop",
            DanceStyle::Contemporary => "contemporary",
        }
    }

    /// Resolve a style by display name, short name or slug. Case, spaces,
    /// dashes and underscores are ignored. No fallback: anything else is
    /// [`AnimationError::UnknownStyle`].
    pub fn from_name(name: &str) -> Result<DanceStyle, AnimationError> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "tap" | "tapdance" => Ok(DanceStyle::Tap),
            "broadway" => Ok(DanceStyle::Broadway),
            "hiphop" => Ok(DanceStyle::HipHop),
            "contemporary" => Ok(DanceStyle::Contemporary),
            _ => Err(AnimationError::UnknownStyle {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for DanceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for DanceStyle {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DanceStyle::from_name(s)
    }
}

/// Timing table lookup by style name.
pub fn style_timing(name: &str) -> Result<StyleTiming, AnimationError> {
    DanceStyle::from_name(name).map(DanceStyle::timing)
}
