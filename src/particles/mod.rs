//! Pooled 2D particle emitter.
//!
//! The emitter owns a fixed-length array of particle slots and drives the
//! whole population through one `update` and one `draw` call per frame.
//! Emission fills the lowest-index empty slot; expiry vacates a slot through
//! a single release path so the live count and the slot array never drift
//! apart.

pub mod config;
pub mod emitter;
pub mod particle;
pub mod system;

pub use config::{ConfigError, EmitterConfig};
pub use emitter::ParticleEmitter;
pub use particle::Particle;
pub use system::ParticleSystem;

use thiserror::Error;

/// Errors surfaced at the [`ParticleSystem`] facade boundary.
///
/// The core emitter itself never fails: before content is loaded it simply
/// has zero capacity. The facade is the layer that turns "used before
/// `load_content`" into a real error instead of a silent no-op.
#[derive(Error, Debug)]
pub enum ParticleError {
    /// `load_content` has not been called yet.
    #[error("Content not loaded: load_content must be called before {operation}")]
    ContentNotLoaded {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}
