//! Session configuration for an [`crate::Animator`].

use serde::{Deserialize, Serialize};

use crate::catalog::Proportions;
use crate::geometry::Point;
use crate::raster::RenderStyle;

/// Canvas, figure geometry and playback rate for one animation session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    /// Pose catalog center. `None` uses the canvas midpoint.
    pub center: Option<Point>,
    pub proportions: Proportions,
    pub render: RenderStyle,
    /// Playback rate handed to encoders; does not change the frame count.
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            center: None,
            proportions: Proportions::default(),
            render: RenderStyle::default(),
            fps: 25,
        }
    }
}

impl Config {
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    pub fn resolved_center(&self) -> Point {
        self.center
            .unwrap_or_else(|| Point::canvas_center(self.width, self.height))
    }
}
