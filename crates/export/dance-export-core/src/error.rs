use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no frames to encode")]
    NoFrames,

    #[error("frame {index} is {actual:?}, expected {expected:?}")]
    FrameSizeMismatch {
        index: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("{width}x{height} exceeds the GIF limit of 65535 pixels per side")]
    TooLarge { width: u32, height: u32 },

    #[error("unknown export backend '{0}'")]
    UnknownBackend(String),

    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("GIF encoding failed")]
    Gif(#[from] gif::EncodingError),

    #[error("PNG encoding failed")]
    Image(#[from] image::ImageError),
}
