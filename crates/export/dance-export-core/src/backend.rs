//! Backend selection: a closed set of local encoders chosen by the caller.

use std::path::{Path, PathBuf};

use dance_animation_core::{DanceStyle, Frame};
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::gif_writer::{write_gif, GifConfig};
use crate::png_sequence::{write_png_sequence, PngSequenceConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VideoBackend {
    /// Single animated GIF file.
    Gif(GifConfig),
    /// Directory of numbered PNG files.
    PngSequence(PngSequenceConfig),
}

impl VideoBackend {
    /// Default-configured backend by short name (`gif`, `png`).
    pub fn from_name(name: &str) -> Result<Self, ExportError> {
        match name.to_ascii_lowercase().as_str() {
            "gif" => Ok(Self::Gif(GifConfig::default())),
            "png" | "png-sequence" | "png_sequence" => {
                Ok(Self::PngSequence(PngSequenceConfig::default()))
            }
            _ => Err(ExportError::UnknownBackend(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gif(_) => "gif",
            Self::PngSequence(_) => "png",
        }
    }

    /// File extension of the output, or `None` for directory outputs.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Gif(_) => Some("gif"),
            Self::PngSequence(_) => None,
        }
    }

    /// Playback rate, for backends that record one.
    pub fn with_fps(self, fps: u32) -> Self {
        match self {
            Self::Gif(cfg) => Self::Gif(cfg.with_fps(fps)),
            other => other,
        }
    }

    /// Encode `frames` to `out`: the file for GIF, the directory for PNG
    /// sequences. Returns the written location.
    pub fn encode(&self, frames: &[Frame], out: &Path) -> Result<PathBuf, ExportError> {
        log::debug!("encoding {} frame(s) with {} backend", frames.len(), self.name());
        match self {
            Self::Gif(cfg) => {
                write_gif(frames, cfg, out)?;
            }
            Self::PngSequence(cfg) => {
                write_png_sequence(frames, cfg, out)?;
            }
        }
        Ok(out.to_path_buf())
    }
}

/// `dance_<backend>_<style>_<stamp>[.ext]`, the naming used for generated
/// outputs.
pub fn output_file_name(backend: &VideoBackend, style: DanceStyle, stamp: &str) -> String {
    let base = format!("dance_{}_{}_{}", backend.name(), style.slug(), stamp);
    match backend.extension() {
        Some(ext) => format!("{base}.{ext}"),
        None => base,
    }
}

/// Non-empty and uniformly sized. Returns the shared size.
pub(crate) fn check_frames(frames: &[Frame]) -> Result<(u32, u32), ExportError> {
    let first = frames.first().ok_or(ExportError::NoFrames)?;
    let expected = (first.width(), first.height());
    for (index, f) in frames.iter().enumerate().skip(1) {
        let actual = (f.width(), f.height());
        if actual != expected {
            return Err(ExportError::FrameSizeMismatch {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(expected)
}
