//! Fixed-capacity particle pool with timed emission.

use super::config::EmitterConfig;
use super::particle::Particle;
use crate::render::{Color, SpriteRenderer};
use crate::resources::{Texture, TextureLoader};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A pooled 2D particle emitter.
///
/// The pool is a fixed-length array of optional slots, allocated once at
/// [`load_content`](Self::load_content). Emission fills the lowest-index
/// empty slot; expiry vacates it through `vacate`, the single release path,
/// so the live count always matches the number of occupied slots.
///
/// Before content is loaded the emitter simply has zero capacity: `update`,
/// `emit` and `draw` are total functions and never fail.
pub struct ParticleEmitter {
    config: EmitterConfig,
    texture: Option<Arc<Texture>>,
    slots: Vec<Option<Particle>>,
    live_count: AtomicUsize,
    emission_timer_ms: f32,
    rng: StdRng,
}

/// Empties one slot and decrements the shared live count.
///
/// This is the only code path that clears a slot, for both per-frame expiry
/// and the parallel teardown fan-out; the atomic decrement is what makes the
/// fan-out safe.
fn vacate(slot: &mut Option<Particle>, live_count: &AtomicUsize) {
    if slot.take().is_some() {
        live_count.fetch_sub(1, Ordering::AcqRel);
    }
}

impl ParticleEmitter {
    /// Creates an empty, enabled emitter with default configuration.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an emitter from `config`, sanitizing all numeric values.
    pub fn with_config(mut config: EmitterConfig) -> Self {
        config.sanitize();
        Self {
            config,
            texture: None,
            slots: Vec::new(),
            live_count: AtomicUsize::new(0),
            emission_timer_ms: 0.0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reseeds the spawn RNG; deterministic tests depend on this.
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Resolves the configured texture and allocates the slot pool.
    ///
    /// A load failure is recoverable: the emitter logs it and substitutes
    /// the missing-texture placeholder instead of surfacing an error. The
    /// pool is reset to `max_particles` empty slots and the capacity stays
    /// fixed until the next `load_content`.
    pub fn load_content(&mut self, loader: &dyn TextureLoader) {
        let texture = match loader.load(&self.config.texture_path) {
            Ok(texture) => texture,
            Err(error) => {
                tracing::warn!(
                    target: "particles",
                    "Texture {:?} failed to load ({error}), substituting placeholder",
                    self.config.texture_path
                );
                Arc::new(Texture::missing())
            }
        };

        self.texture = Some(texture);
        self.slots = (0..self.config.max_particles).map(|_| None).collect();
        self.live_count.store(0, Ordering::Release);
        self.emission_timer_ms = 0.0;
        tracing::debug!(
            target: "particles",
            "Pool allocated: {} slots",
            self.slots.len()
        );
    }

    /// Advances the emitter by `elapsed_ms`. No-op while disabled.
    ///
    /// Once the emission timer reaches the configured interval and the pool
    /// has room, a burst of `particles_per_emit` emission attempts runs and
    /// the timer resets to exactly zero; residual time beyond the interval
    /// is discarded rather than rolled over. Every occupied slot is then
    /// simulated, and expired particles vacate their slots.
    pub fn update(&mut self, elapsed_ms: f32) {
        if !self.config.enabled {
            return;
        }
        let elapsed_ms = elapsed_ms.max(0.0);

        self.emission_timer_ms += elapsed_ms;
        if self.emission_timer_ms >= self.config.time_per_emit_ms
            && self.live_count() < self.capacity()
        {
            for _ in 0..self.config.particles_per_emit {
                self.emit();
            }
            self.emission_timer_ms = 0.0;
        }

        for index in 0..self.slots.len() {
            let expired = match self.slots[index].as_mut() {
                Some(particle) => particle.update(elapsed_ms).is_expired(),
                None => false,
            };
            if expired {
                self.release_slot(index);
            }
        }
    }

    /// Spawns one particle into the lowest-index empty slot.
    ///
    /// Silently does nothing at capacity; a full pool is steady state, not
    /// an error. The scan is linear on purpose: lowest-index-first reuse is
    /// observable behavior, and capacity is small by design.
    pub fn emit(&mut self) {
        if self.live_count() >= self.capacity() {
            return;
        }
        let Some(texture) = self.texture.as_ref() else {
            return;
        };
        let Some(index) = self.slots.iter().position(Option::is_none) else {
            return;
        };

        let position = Vec2::new(
            sample_axis(&mut self.rng, self.config.position.x, self.config.size.x),
            sample_axis(&mut self.rng, self.config.position.y, self.config.size.y),
        );

        let particle = Particle::spawn(
            position,
            Arc::clone(texture),
            &self.config,
            index,
            &mut self.rng,
        );
        self.slots[index] = Some(particle);
        self.live_count.fetch_add(1, Ordering::AcqRel);
    }

    /// Draws every occupied slot in slot-index order.
    ///
    /// No-op until a texture is bound; no sorting or batching beyond the
    /// in-order walk.
    pub fn draw(&self, renderer: &mut dyn SpriteRenderer) {
        if self.texture.is_none() {
            return;
        }
        for slot in &self.slots {
            if let Some(particle) = slot {
                particle.draw(renderer);
            }
        }
    }

    /// Releases all live particles, then the texture handle.
    ///
    /// The slots are vacated in a parallel fan-out; each task touches only
    /// its own slot plus the atomic live count, which is the one piece of
    /// shared mutable state here.
    pub fn dispose(&mut self) {
        let Self {
            slots, live_count, ..
        } = self;
        slots
            .par_iter_mut()
            .for_each(|slot| vacate(slot, live_count));
        self.texture = None;
    }

    /// Vacates `index` and decrements the live count.
    fn release_slot(&mut self, index: usize) {
        vacate(&mut self.slots[index], &self.live_count);
    }

    // --- configuration surface (clamped on set) ---

    pub fn position(&self) -> Vec2 {
        self.config.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.config.position = position;
    }

    pub fn size(&self) -> Vec2 {
        self.config.size
    }

    /// Sets the spawn-region extent; negative components clamp to zero.
    pub fn set_size(&mut self, size: Vec2) {
        self.config.size = Vec2::new(size.x.max(0.0), size.y.max(0.0));
    }

    pub fn texture_path(&self) -> &str {
        &self.config.texture_path
    }

    pub fn set_texture_path(&mut self, path: impl Into<String>) {
        self.config.texture_path = path.into();
    }

    /// Configured pool capacity. Takes effect at the next `load_content`.
    pub fn max_particles(&self) -> usize {
        self.config.max_particles
    }

    pub fn set_max_particles(&mut self, count: usize) {
        self.config.max_particles = count;
    }

    pub fn particles_per_emit(&self) -> u32 {
        self.config.particles_per_emit
    }

    /// Sets the burst size; negative values clamp to zero.
    pub fn set_particles_per_emit(&mut self, count: i32) {
        self.config.particles_per_emit = count.max(0) as u32;
    }

    pub fn time_per_emit_ms(&self) -> f32 {
        self.config.time_per_emit_ms
    }

    /// Sets the burst interval; non-positive values clamp to zero.
    pub fn set_time_per_emit_ms(&mut self, interval_ms: f32) {
        self.config.time_per_emit_ms = if interval_ms > 0.0 { interval_ms } else { 0.0 };
    }

    pub fn velocity(&self) -> Vec2 {
        self.config.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.config.velocity = velocity;
    }

    pub fn angular_velocity(&self) -> f32 {
        self.config.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.config.angular_velocity = angular_velocity;
    }

    pub fn lifetime_ms(&self) -> f32 {
        self.config.lifetime_ms
    }

    /// Sets the base lifetime; negative values clamp to zero.
    pub fn set_lifetime_ms(&mut self, lifetime_ms: f32) {
        self.config.lifetime_ms = lifetime_ms.max(0.0);
    }

    pub fn lifetime_jitter_ms(&self) -> f32 {
        self.config.lifetime_jitter_ms
    }

    /// Sets the lifetime jitter bound; negative values clamp to zero.
    pub fn set_lifetime_jitter_ms(&mut self, jitter_ms: f32) {
        self.config.lifetime_jitter_ms = jitter_ms.max(0.0);
    }

    pub fn color(&self) -> Color {
        self.config.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.config.color = color;
    }

    pub fn random_color(&self) -> bool {
        self.config.random_color
    }

    pub fn set_random_color(&mut self, random_color: bool) {
        self.config.random_color = random_color;
    }

    pub fn random_direction(&self) -> bool {
        self.config.random_direction
    }

    pub fn set_random_direction(&mut self, random_direction: bool) {
        self.config.random_direction = random_direction;
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    // --- runtime state ---

    /// Allocated pool capacity; zero until content is loaded.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn live_count(&self) -> usize {
        self.live_count.load(Ordering::Acquire)
    }

    /// `true` once `load_content` has bound a texture.
    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    pub fn texture(&self) -> Option<&Arc<Texture>> {
        self.texture.as_ref()
    }

    /// Milliseconds accumulated since the last emission burst.
    pub fn emission_timer_ms(&self) -> f32 {
        self.emission_timer_ms
    }
}

impl Default for ParticleEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform integer-truncated sample in `[origin, origin + extent)`.
///
/// A degenerate axis collapses to the origin coordinate instead of panicking
/// on an empty range: extent truncating to zero, or an origin so large that
/// the upper bound saturates back onto it.
fn sample_axis(rng: &mut StdRng, origin: f32, extent: f32) -> f32 {
    let origin = origin as i32;
    let extent = extent as i32;
    let upper = origin.saturating_add(extent);
    if upper > origin {
        rng.gen_range(origin..upper) as f32
    } else {
        origin as f32
    }
}
