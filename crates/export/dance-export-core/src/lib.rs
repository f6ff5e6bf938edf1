//! Export backends for rendered dance frames.
//!
//! The caller picks a [`VideoBackend`] variant explicitly; each variant owns
//! its own configuration and output layout.

pub mod backend;
pub mod error;
pub mod gif_writer;
pub mod png_sequence;

pub use backend::{output_file_name, VideoBackend};
pub use error::ExportError;
pub use gif_writer::GifConfig;
pub use png_sequence::PngSequenceConfig;
