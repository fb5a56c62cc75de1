//! A single pooled particle.

use super::config::EmitterConfig;
use crate::render::{Color, SpriteRenderer};
use crate::resources::Texture;
use glam::Vec2;
use rand::Rng;
use std::sync::Arc;

/// Outcome of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    /// Lifetime budget exceeded; the owning emitter must vacate the slot.
    Expired,
}

impl Lifecycle {
    pub fn is_expired(self) -> bool {
        matches!(self, Lifecycle::Expired)
    }
}

/// One live particle, owned exclusively by a single emitter slot.
///
/// Everything a particle needs is copied out of the emitter configuration at
/// spawn time, so a particle never observes later config changes. The only
/// link back to its owner is the slot index; the emitter routes the
/// [`Lifecycle::Expired`] signal returned by [`update`](Self::update) into
/// its release path.
#[derive(Debug, Clone)]
pub struct Particle {
    slot: usize,
    texture: Arc<Texture>,
    position: Vec2,
    velocity: Vec2,
    rotation: f32,
    angular_velocity: f32,
    scale: f32,
    color: Color,
    elapsed_ms: f32,
    lifetime_ms: f32,
    // Accumulated alongside the lifetime but not consulted by the fade law.
    fade_timer_ms: f32,
}

impl Particle {
    /// Builds a fully initialized particle for `slot`.
    ///
    /// Randomized at spawn, once: scale in [0, 0.4), the velocity sign when
    /// `random_direction` is set, the lifetime jitter, and the color when
    /// `random_color` is set. None of these are re-rolled per frame.
    pub fn spawn(
        position: Vec2,
        texture: Arc<Texture>,
        config: &EmitterConfig,
        slot: usize,
        rng: &mut impl Rng,
    ) -> Self {
        let mut velocity = config.velocity;
        if config.random_direction && rng.gen_range(0..10) < 5 {
            velocity = -velocity;
        }

        let jitter_bound = config.lifetime_jitter_ms.max(0.0) as u32;
        let jitter = if jitter_bound > 0 {
            rng.gen_range(0..jitter_bound) as f32
        } else {
            0.0
        };

        let color = if config.random_color {
            Color::from_components(
                rng.gen_range(0..255),
                rng.gen_range(0..255),
                rng.gen_range(0..255),
                rng.gen_range(240..255),
            )
        } else {
            config.color
        };

        let mut particle = Self {
            slot,
            texture,
            position,
            velocity,
            rotation: 0.0,
            angular_velocity: config.angular_velocity,
            scale: 1.0,
            color,
            elapsed_ms: 0.0,
            lifetime_ms: config.lifetime_ms.max(0.0) + jitter,
            fade_timer_ms: 0.0,
        };
        particle.set_scale(rng.gen::<f32>() / 2.5);
        particle
    }

    /// Advances the particle by `elapsed_ms` and reports whether it expired.
    ///
    /// The color is re-interpolated from its *current* value toward fully
    /// transparent using the lifetime fraction, so RGB darkens together with
    /// the alpha. Position and rotation integrate unconditionally, including
    /// on the tick the death signal fires.
    pub fn update(&mut self, elapsed_ms: f32) -> Lifecycle {
        self.elapsed_ms += elapsed_ms;
        self.fade_timer_ms += elapsed_ms;

        let fraction = if self.lifetime_ms > 0.0 {
            self.elapsed_ms / self.lifetime_ms
        } else {
            1.0
        };
        self.color = self.color.lerp(Color::TRANSPARENT, fraction);

        let signal = if self.elapsed_ms > self.lifetime_ms {
            Lifecycle::Expired
        } else {
            Lifecycle::Alive
        };

        let elapsed_secs = elapsed_ms / 1000.0;
        self.position += self.velocity * elapsed_secs * self.scale;
        self.rotation += self.angular_velocity * elapsed_secs;

        signal
    }

    /// Emits one draw call for this particle.
    ///
    /// The origin is the texture center so rotation and scaling pivot there.
    /// Depth reuses the scale value: larger particles layer in front.
    pub fn draw(&self, renderer: &mut dyn SpriteRenderer) {
        renderer.draw(
            &self.texture,
            self.position,
            self.rotation,
            self.color,
            self.texture.half_extent(),
            self.scale,
            self.scale,
        );
    }

    /// Sets the visual scale; negative input falls back to 1.
    pub fn set_scale(&mut self, value: f32) {
        self.scale = if value < 0.0 { 1.0 } else { value };
    }

    /// Index of the pool slot this particle occupies.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Simulated time lived so far, milliseconds.
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Total lifetime budget, milliseconds.
    pub fn lifetime_ms(&self) -> f32 {
        self.lifetime_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CommandRecorder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spawn_with(config: &EmitterConfig, seed: u64) -> Particle {
        let mut rng = StdRng::seed_from_u64(seed);
        Particle::spawn(
            Vec2::new(5.0, 5.0),
            Arc::new(Texture::missing()),
            config,
            0,
            &mut rng,
        )
    }

    fn exact_config(lifetime_ms: f32) -> EmitterConfig {
        EmitterConfig {
            lifetime_ms,
            lifetime_jitter_ms: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_spawn_is_fully_initialized() {
        let config = exact_config(200.0);
        let particle = spawn_with(&config, 1);
        assert_eq!(particle.slot(), 0);
        assert_eq!(particle.elapsed_ms(), 0.0);
        assert_eq!(particle.lifetime_ms(), 200.0);
        assert_eq!(particle.rotation(), 0.0);
        assert!(particle.scale() >= 0.0 && particle.scale() < 0.4);
        assert_eq!(particle.color(), Color::WHITE);
    }

    #[test]
    fn test_lifetime_jitter_stays_below_bound() {
        let config = EmitterConfig {
            lifetime_ms: 100.0,
            lifetime_jitter_ms: 500.0,
            ..Default::default()
        };
        for seed in 0..50 {
            let particle = spawn_with(&config, seed);
            assert!(particle.lifetime_ms() >= 100.0);
            assert!(particle.lifetime_ms() < 600.0);
        }
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let mut particle = spawn_with(&exact_config(1000.0), 2);
        let mut previous = particle.elapsed_ms();
        for delta in [0.0, 16.0, 0.0, 33.0, 250.0] {
            particle.update(delta);
            assert!(particle.elapsed_ms() >= previous);
            previous = particle.elapsed_ms();
        }
    }

    #[test]
    fn test_expires_once_budget_exceeded() {
        let mut particle = spawn_with(&exact_config(100.0), 3);
        assert_eq!(particle.update(100.0), Lifecycle::Alive);
        assert_eq!(particle.update(1.0), Lifecycle::Expired);
        // The signal keeps firing until the owner vacates the slot.
        assert_eq!(particle.update(1.0), Lifecycle::Expired);
    }

    #[test]
    fn test_position_integrates_velocity_scaled() {
        let config = EmitterConfig {
            velocity: Vec2::new(10.0, -20.0),
            lifetime_ms: 10_000.0,
            lifetime_jitter_ms: 0.0,
            ..Default::default()
        };
        let mut particle = spawn_with(&config, 4);
        particle.set_scale(0.5);
        particle.update(1000.0);
        assert!((particle.position().x - (5.0 + 10.0 * 0.5)).abs() < 1e-4);
        assert!((particle.position().y - (5.0 - 20.0 * 0.5)).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_integrates_angular_velocity() {
        let config = EmitterConfig {
            angular_velocity: 2.0,
            lifetime_ms: 10_000.0,
            lifetime_jitter_ms: 0.0,
            ..Default::default()
        };
        let mut particle = spawn_with(&config, 5);
        particle.update(500.0);
        assert!((particle.rotation() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_velocity_sign_fixed_at_spawn() {
        let config = EmitterConfig {
            velocity: Vec2::new(10.0, 0.0),
            random_direction: true,
            lifetime_ms: 10_000.0,
            lifetime_jitter_ms: 0.0,
            ..Default::default()
        };

        let mut forward = 0;
        let mut backward = 0;
        for seed in 0..400 {
            let mut particle = spawn_with(&config, seed);
            let spawned = particle.velocity();
            for _ in 0..5 {
                particle.update(16.0);
            }
            assert_eq!(particle.velocity(), spawned);
            if spawned.x > 0.0 {
                forward += 1;
            } else {
                backward += 1;
            }
        }
        // Roughly an even split, decided once per spawn.
        assert!(forward > 120, "forward = {forward}");
        assert!(backward > 120, "backward = {backward}");
    }

    #[test]
    fn test_fade_reaches_transparent_at_end_of_life() {
        let mut particle = spawn_with(&exact_config(100.0), 6);
        particle.update(50.0);
        let halfway = particle.color();
        assert!(halfway.a < 255);
        assert!(halfway.r < 255);

        particle.update(60.0);
        assert_eq!(particle.color(), Color::TRANSPARENT);
    }

    #[test]
    fn test_random_color_is_near_opaque() {
        let config = EmitterConfig {
            random_color: true,
            ..Default::default()
        };
        for seed in 0..50 {
            let particle = spawn_with(&config, seed);
            assert!(particle.color().a >= 240);
        }
    }

    #[test]
    fn test_set_scale_negative_defaults_to_one() {
        let mut particle = spawn_with(&exact_config(100.0), 7);
        particle.set_scale(-3.0);
        assert_eq!(particle.scale(), 1.0);
        particle.set_scale(0.25);
        assert_eq!(particle.scale(), 0.25);
    }

    #[test]
    fn test_draw_uses_centered_origin_and_scale_as_depth() {
        let particle = spawn_with(&exact_config(100.0), 8);
        let mut recorder = CommandRecorder::new();
        particle.draw(&mut recorder);

        let command = &recorder.commands()[0];
        assert_eq!(command.origin, Vec2::new(4.0, 4.0));
        assert_eq!(command.scale, particle.scale());
        assert_eq!(command.depth, particle.scale());
        assert_eq!(command.position, particle.position());
    }
}
