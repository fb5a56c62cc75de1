//! Flat facade over a single [`ParticleEmitter`].
//!
//! Thin delegation only: the facade exposes the emitter configuration as a
//! flat property surface (with the second-based units callers tend to work
//! in), stores the texture loader so the texture path can be swapped at
//! runtime, and turns use-before-`load_content` into a
//! [`ParticleError`] instead of the core's silent zero-capacity behavior.

use super::config::EmitterConfig;
use super::emitter::ParticleEmitter;
use super::ParticleError;
use crate::render::{Color, SpriteRenderer};
use crate::resources::TextureLoader;
use glam::Vec2;

/// One self-contained particle system: an emitter plus its texture loader.
pub struct ParticleSystem {
    emitter: ParticleEmitter,
    loader: Option<Box<dyn TextureLoader>>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self {
            emitter: ParticleEmitter::new(),
            loader: None,
        }
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            emitter: ParticleEmitter::with_config(config),
            loader: None,
        }
    }

    /// Loads the configured texture and allocates the pool, keeping the
    /// loader around for later texture swaps.
    pub fn load_content(&mut self, loader: Box<dyn TextureLoader>) {
        self.emitter.load_content(loader.as_ref());
        self.loader = Some(loader);
    }

    /// Advances the simulation by `elapsed_ms`.
    ///
    /// Fails fast with [`ParticleError::ContentNotLoaded`] before
    /// `load_content`.
    pub fn update(&mut self, elapsed_ms: f32) -> Result<(), ParticleError> {
        if !self.emitter.is_loaded() {
            return Err(ParticleError::ContentNotLoaded {
                operation: "update",
            });
        }
        self.emitter.update(elapsed_ms);
        Ok(())
    }

    /// Draws all live particles through `renderer`.
    pub fn draw(&self, renderer: &mut dyn SpriteRenderer) -> Result<(), ParticleError> {
        if !self.emitter.is_loaded() {
            return Err(ParticleError::ContentNotLoaded { operation: "draw" });
        }
        self.emitter.draw(renderer);
        Ok(())
    }

    /// Releases all particles and the texture handle.
    pub fn dispose(&mut self) {
        self.emitter.dispose();
    }

    /// Swaps the texture path and reloads content.
    ///
    /// The emitter is disabled for the duration of the reload so a frame
    /// never observes a half-initialized pool, then re-enabled.
    pub fn set_texture_path(&mut self, path: impl Into<String>) -> Result<(), ParticleError> {
        let Some(loader) = self.loader.as_ref() else {
            return Err(ParticleError::ContentNotLoaded {
                operation: "set_texture_path",
            });
        };
        self.emitter.set_enabled(false);
        self.emitter.set_texture_path(path);
        self.emitter.load_content(loader.as_ref());
        self.emitter.set_enabled(true);
        Ok(())
    }

    pub fn texture_path(&self) -> &str {
        self.emitter.texture_path()
    }

    // --- flat configuration surface ---

    pub fn emitter_position(&self) -> Vec2 {
        self.emitter.position()
    }

    pub fn set_emitter_position(&mut self, position: Vec2) {
        self.emitter.set_position(position);
    }

    pub fn emitter_size(&self) -> Vec2 {
        self.emitter.size()
    }

    pub fn set_emitter_size(&mut self, size: Vec2) {
        self.emitter.set_size(size);
    }

    /// Integer convenience overload for the spawn-region extent.
    pub fn set_emitter_size_xy(&mut self, width: i32, height: i32) {
        self.emitter.set_size(Vec2::new(width as f32, height as f32));
    }

    pub fn particles_per_emit(&self) -> u32 {
        self.emitter.particles_per_emit()
    }

    pub fn set_particles_per_emit(&mut self, count: i32) {
        self.emitter.set_particles_per_emit(count);
    }

    /// Burst interval in seconds (stored in milliseconds internally).
    pub fn seconds_per_emit(&self) -> f32 {
        self.emitter.time_per_emit_ms() / 1000.0
    }

    pub fn set_seconds_per_emit(&mut self, seconds: f32) {
        self.emitter.set_time_per_emit_ms(seconds * 1000.0);
    }

    /// Particle lifetime in seconds (stored in milliseconds internally).
    pub fn lifetime_seconds(&self) -> f32 {
        self.emitter.lifetime_ms() / 1000.0
    }

    pub fn set_lifetime_seconds(&mut self, seconds: f32) {
        self.emitter.set_lifetime_ms(seconds * 1000.0);
    }

    pub fn velocity(&self) -> Vec2 {
        self.emitter.velocity()
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.emitter.set_velocity(velocity);
    }

    pub fn angular_velocity(&self) -> f32 {
        self.emitter.angular_velocity()
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.emitter.set_angular_velocity(angular_velocity);
    }

    pub fn max_particles(&self) -> usize {
        self.emitter.max_particles()
    }

    pub fn set_max_particles(&mut self, count: usize) {
        self.emitter.set_max_particles(count);
    }

    pub fn blend_color(&self) -> Color {
        self.emitter.color()
    }

    pub fn set_blend_color(&mut self, color: Color) {
        self.emitter.set_color(color);
    }

    pub fn random_color(&self) -> bool {
        self.emitter.random_color()
    }

    pub fn set_random_color(&mut self, random_color: bool) {
        self.emitter.set_random_color(random_color);
    }

    pub fn random_direction(&self) -> bool {
        self.emitter.random_direction()
    }

    pub fn set_random_direction(&mut self, random_direction: bool) {
        self.emitter.set_random_direction(random_direction);
    }

    pub fn is_enabled(&self) -> bool {
        self.emitter.is_enabled()
    }

    /// Toggles the enabled flag.
    pub fn switch_state(&mut self) {
        let enabled = self.emitter.is_enabled();
        self.emitter.set_enabled(!enabled);
    }

    pub fn live_count(&self) -> usize {
        self.emitter.live_count()
    }

    pub fn capacity(&self) -> usize {
        self.emitter.capacity()
    }

    /// Direct access to the wrapped emitter.
    pub fn emitter(&self) -> &ParticleEmitter {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut ParticleEmitter {
        &mut self.emitter
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}
