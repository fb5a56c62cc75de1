//! CPU-side texture handle and the file-backed loader.

use super::{ResourceError, TextureLoader};
use glam::Vec2;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Side length of the generated missing-texture placeholder.
const MISSING_TEXTURE_SIZE: u32 = 8;

/// An immutable RGBA texture shared read-only between an emitter and its
/// particles.
///
/// Rasterization happens in the rendering backend; this handle only carries
/// the pixels and the dimensions the emitter needs for origin math.
#[derive(Debug)]
pub struct Texture {
    pixels: RgbaImage,
    source: Option<PathBuf>,
}

impl Texture {
    /// Wraps a decoded image loaded from `source`.
    pub fn from_image(pixels: RgbaImage, source: impl Into<PathBuf>) -> Self {
        Self {
            pixels,
            source: Some(source.into()),
        }
    }

    /// The magenta/black checkerboard substituted when a texture fails to
    /// load.
    pub fn missing() -> Self {
        let size = MISSING_TEXTURE_SIZE;
        let pixels = RgbaImage::from_fn(size, size, |x, y| {
            if (x / 2 + y / 2) % 2 == 0 {
                image::Rgba([255, 0, 255, 255])
            } else {
                image::Rgba([0, 0, 0, 255])
            }
        });
        Self {
            pixels,
            source: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Center of the texture, used as the rotation/scaling origin.
    pub fn half_extent(&self) -> Vec2 {
        Vec2::new(self.width() as f32 / 2.0, self.height() as f32 / 2.0)
    }

    /// Path the texture was decoded from, `None` for the placeholder.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// `true` for the missing-texture placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Loads textures from disk relative to an asset root.
pub struct FileTextureLoader {
    root: PathBuf,
}

impl FileTextureLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TextureLoader for FileTextureLoader {
    fn load(&self, path: &str) -> Result<Arc<Texture>, ResourceError> {
        if path.trim().is_empty() {
            return Err(ResourceError::InvalidPath(path.to_string()));
        }

        let full = self.root.join(path);
        if !full.is_file() {
            return Err(ResourceError::NotFound(full));
        }

        let pixels = image::open(&full)?.to_rgba8();
        tracing::debug!(
            target: "resources",
            "Loaded texture {:?} ({}x{})",
            full,
            pixels.width(),
            pixels.height()
        );
        Ok(Arc::new(Texture::from_image(pixels, full)))
    }
}
