//! Texture loading seam.
//!
//! The emitter requests a drawable by path through [`TextureLoader`] and
//! receives a shared [`Texture`] handle. Load failures are reported through
//! [`ResourceError`]; the emitter recovers from them by substituting the
//! built-in missing-texture placeholder, so a bad path never takes the
//! effect down.

pub mod texture;

pub use texture::{FileTextureLoader, Texture};

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Texture loading errors.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// No file exists at the resolved path.
    #[error("Texture not found: {0}")]
    NotFound(PathBuf),
    /// The path was empty or not representable on this platform.
    #[error("Invalid texture path: {0}")]
    InvalidPath(String),
    /// The file exists but could not be decoded.
    #[error("Texture decode error: {0}")]
    DecodeError(#[from] image::ImageError),
}

/// Contract for resolving a texture path into a shared drawable handle.
pub trait TextureLoader {
    fn load(&self, path: &str) -> Result<Arc<Texture>, ResourceError>;
}
