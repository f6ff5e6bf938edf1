//! Animator: one animation session.
//!
//! Owns the pose catalog built for its configured center, and composes the
//! sequencer with the rasterizer. Sessions share no mutable state.

use crate::catalog::{build_catalog, PoseCatalog};
use crate::config::Config;
use crate::error::AnimationError;
use crate::pose::Pose;
use crate::raster::{render_all, render_with, Frame};
use crate::sequencer::{build_animation, plan_animation, AnimationPlan};
use crate::sequences::{builtin_sequence, Movement};
use crate::style::DanceStyle;

#[derive(Debug, Clone)]
pub struct Animator {
    cfg: Config,
    catalog: PoseCatalog,
}

impl Animator {
    pub fn new(cfg: Config) -> Self {
        let catalog = build_catalog(cfg.resolved_center(), cfg.proportions);
        log::debug!(
            "animator {}x{} center {:?}, {} poses",
            cfg.width,
            cfg.height,
            catalog.center(),
            catalog.len()
        );
        Self { cfg, catalog }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn catalog(&self) -> &PoseCatalog {
        &self.catalog
    }

    /// Frame accounting for `movements` without building anything.
    pub fn plan(&self, movements: &[Movement], style: DanceStyle) -> Result<AnimationPlan, AnimationError> {
        plan_animation(movements, style, &self.catalog)
    }

    /// Ordered poses, before rasterization.
    pub fn create_poses(&self, movements: &[Movement], style: DanceStyle) -> Result<Vec<Pose>, AnimationError> {
        build_animation(movements, style, &self.catalog)
    }

    /// Ordered frames for `movements` under `style`.
    pub fn create_animation(&self, movements: &[Movement], style: DanceStyle) -> Result<Vec<Frame>, AnimationError> {
        let poses = self.create_poses(movements, style)?;
        Ok(render_all(&poses, self.cfg.width, self.cfg.height, &self.cfg.render))
    }

    /// Frames for the built-in sequence of `style`.
    pub fn create_builtin(&self, style: DanceStyle) -> Result<Vec<Frame>, AnimationError> {
        self.create_animation(&builtin_sequence(style).movements, style)
    }

    pub fn render_pose(&self, pose: &Pose) -> Frame {
        render_with(pose, self.cfg.width, self.cfg.height, &self.cfg.render)
    }

    /// Single-frame preview of a catalog pose.
    pub fn preview(&self, pose_id: &str) -> Result<Frame, AnimationError> {
        let pose = self.catalog.resolve(pose_id)?;
        Ok(self.render_pose(pose))
    }

    /// Playback length of `frame_count` frames at the configured rate.
    pub fn duration_secs(&self, frame_count: usize) -> f64 {
        frame_count as f64 / f64::from(self.cfg.fps.max(1))
    }
}
