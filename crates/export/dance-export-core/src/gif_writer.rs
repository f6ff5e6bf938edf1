//! Animated GIF output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dance_animation_core::Frame;
use gif::{Encoder, Repeat};
use serde::{Deserialize, Serialize};

use crate::backend::check_frames;
use crate::error::ExportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GifConfig {
    /// Playback rate. GIF delays are whole centiseconds, so rates above 100
    /// play at 100.
    pub fps: u32,
    /// 0 loops forever.
    pub loop_count: u16,
    /// Quantizer speed, 1 (best) ..= 30 (fastest).
    pub speed: i32,
}

impl Default for GifConfig {
    fn default() -> Self {
        Self {
            fps: 25,
            loop_count: 0,
            speed: 10,
        }
    }
}

impl GifConfig {
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Per-frame delay in centiseconds (fps=25 -> 4).
    pub fn frame_delay_cs(&self) -> u16 {
        (100 / self.fps.max(1)).max(1) as u16
    }
}

/// Encode `frames` into `writer` as an animated GIF.
pub fn encode_gif<W: Write>(frames: &[Frame], cfg: &GifConfig, writer: W) -> Result<(), ExportError> {
    let (width, height) = check_frames(frames)?;
    let (w, h) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(ExportError::TooLarge { width, height }),
    };

    let mut encoder = Encoder::new(writer, w, h, &[])?;
    let repeat = if cfg.loop_count == 0 {
        Repeat::Infinite
    } else {
        Repeat::Finite(cfg.loop_count)
    };
    encoder.set_repeat(repeat)?;

    let delay = cfg.frame_delay_cs();
    let speed = cfg.speed.clamp(1, 30);
    for frame in frames {
        let mut gif_frame = gif::Frame::from_rgb_speed(w, h, frame.as_bytes(), speed);
        gif_frame.delay = delay;
        encoder.write_frame(&gif_frame)?;
    }
    Ok(())
}

/// Encode `frames` to a GIF file at `path`.
pub fn write_gif(frames: &[Frame], cfg: &GifConfig, path: &Path) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    encode_gif(frames, cfg, &mut out)?;
    out.flush().map_err(io_err)?;
    log::info!("wrote {} GIF frame(s) to {}", frames.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dance_animation_core::{Animator, Config};

    #[test]
    fn delay_tracks_fps() {
        assert_eq!(GifConfig::default().frame_delay_cs(), 4);
        assert_eq!(GifConfig::default().with_fps(10).frame_delay_cs(), 10);
        assert_eq!(GifConfig::default().with_fps(240).frame_delay_cs(), 1);
    }

    #[test]
    fn encodes_gif_header() {
        let anim = Animator::new(Config::default().with_canvas(48, 48));
        let frames = vec![
            anim.preview("tap_feet_together").unwrap(),
            anim.preview("heels_click").unwrap(),
        ];
        let mut buf = Vec::new();
        encode_gif(&frames, &GifConfig::default(), &mut buf).unwrap();
        assert_eq!(&buf[..6], b"GIF89a");
        assert_eq!(u16::from_le_bytes([buf[6], buf[7]]), 48);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = encode_gif(&[], &GifConfig::default(), Vec::new()).unwrap_err();
        assert!(matches!(err, ExportError::NoFrames));
    }
}
