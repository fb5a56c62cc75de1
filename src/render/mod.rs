//! Renderer seam for the particle emitter.
//!
//! The emitter never talks to a graphics API directly. It emits one
//! [`SpriteCommand`]-shaped draw call per live particle through the
//! [`SpriteRenderer`] trait and trusts the backend to composite. The
//! [`CommandRecorder`] implementation collects commands into a batch, which
//! is what the tests (and any headless caller) consume.

pub mod color;

pub use color::Color;

use crate::resources::Texture;
use glam::Vec2;
use std::sync::Arc;

/// One recorded sprite draw call.
#[derive(Debug, Clone)]
pub struct SpriteCommand {
    /// Texture to sample.
    pub texture: Arc<Texture>,
    /// World position of the sprite origin.
    pub position: Vec2,
    /// Rotation around the origin, radians.
    pub rotation: f32,
    /// Tint color, already faded by the particle.
    pub color: Color,
    /// Rotation/scaling origin inside the texture, pixels.
    pub origin: Vec2,
    /// Uniform scale multiplier.
    pub scale: f32,
    /// Layering depth.
    pub depth: f32,
}

/// Backend contract the emitter draws through.
///
/// Implementations must not block; the emitter calls this once per live
/// particle per frame, in slot-index order.
pub trait SpriteRenderer {
    #[allow(clippy::too_many_arguments)]
    fn draw(
        &mut self,
        texture: &Arc<Texture>,
        position: Vec2,
        rotation: f32,
        color: Color,
        origin: Vec2,
        scale: f32,
        depth: f32,
    );
}

/// A renderer that records draw calls instead of rasterizing them.
#[derive(Default)]
pub struct CommandRecorder {
    commands: Vec<SpriteCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last [`clear`](Self::clear), in submission
    /// order.
    pub fn commands(&self) -> &[SpriteCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drops all recorded commands, typically once per frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl SpriteRenderer for CommandRecorder {
    fn draw(
        &mut self,
        texture: &Arc<Texture>,
        position: Vec2,
        rotation: f32,
        color: Color,
        origin: Vec2,
        scale: f32,
        depth: f32,
    ) {
        self.commands.push(SpriteCommand {
            texture: Arc::clone(texture),
            position,
            rotation,
            color,
            origin,
            scale,
            depth,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_collects_in_order() {
        let texture = Arc::new(Texture::missing());
        let mut recorder = CommandRecorder::new();
        assert!(recorder.is_empty());

        for i in 0..3 {
            recorder.draw(
                &texture,
                Vec2::new(i as f32, 0.0),
                0.0,
                Color::WHITE,
                Vec2::ZERO,
                1.0,
                0.5,
            );
        }

        assert_eq!(recorder.len(), 3);
        assert_eq!(recorder.commands()[2].position.x, 2.0);

        recorder.clear();
        assert!(recorder.is_empty());
    }
}
