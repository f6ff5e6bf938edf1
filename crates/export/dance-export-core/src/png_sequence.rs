//! Numbered PNG frames in a directory, for external muxers.

use std::fs;
use std::path::{Path, PathBuf};

use dance_animation_core::Frame;
use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::backend::check_frames;
use crate::error::ExportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PngSequenceConfig {
    /// File name prefix; files are `<prefix>_<index>.png`.
    pub prefix: String,
    /// Zero padding for the frame index.
    pub digits: usize,
}

impl Default for PngSequenceConfig {
    fn default() -> Self {
        Self {
            prefix: "frame".to_string(),
            digits: 5,
        }
    }
}

impl PngSequenceConfig {
    pub fn file_name(&self, index: usize) -> String {
        format!("{}_{:0width$}.png", self.prefix, index, width = self.digits)
    }
}

/// Write every frame into `dir` (created if missing). Returns the written
/// paths in frame order.
pub fn write_png_sequence(
    frames: &[Frame],
    cfg: &PngSequenceConfig,
    dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    check_frames(frames)?;
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(frames.len());
    for (index, frame) in frames.iter().enumerate() {
        let path = dir.join(cfg.file_name(index));
        frame.image().save_with_format(&path, ImageFormat::Png)?;
        written.push(path);
    }
    log::info!("wrote {} PNG frame(s) to {}", written.len(), dir.display());
    Ok(written)
}
