//! # Sprite Particles
//!
//! A 2D sprite particle emitter built around a fixed-capacity particle pool.
//!
//! ## Features
//!
//! - **Pooled allocation**: a fixed array of particle slots, lowest-index-first
//!   reuse, no per-frame heap churn
//! - **Timed emission**: configurable burst interval, burst size and spawn
//!   rectangle
//! - **Per-particle simulation**: velocity integration, rotation, lifetime
//!   fade toward transparent
//! - **Pluggable backends**: texture loading and sprite rendering are traits,
//!   so the simulation runs headless in tests
//!
//! ## Example
//!
//! ```ignore
//! use sprite_particles::{
//!     CommandRecorder, EmitterConfig, FileTextureLoader, ParticleSystem,
//! };
//!
//! let mut system = ParticleSystem::with_config(EmitterConfig {
//!     texture_path: "spark.png".to_string(),
//!     max_particles: 256,
//!     ..Default::default()
//! });
//! system.load_content(Box::new(FileTextureLoader::new("assets")));
//!
//! let mut renderer = CommandRecorder::new();
//! system.update(16.0)?;          // elapsed milliseconds from the frame loop
//! system.draw(&mut renderer)?;
//! # Ok::<(), sprite_particles::ParticleError>(())
//! ```

/// Particle pool, emitter and the flat facade
pub mod particles;
/// Sprite renderer seam and color handling
pub mod render;
/// Texture loading seam
pub mod resources;

pub use particles::{
    EmitterConfig, ParticleEmitter, ParticleError, ParticleSystem,
};
pub use render::{Color, CommandRecorder, SpriteCommand, SpriteRenderer};
pub use resources::{FileTextureLoader, ResourceError, Texture, TextureLoader};
