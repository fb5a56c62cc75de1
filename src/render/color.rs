//! Byte-channel RGBA color used for particle tinting and fading.

use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels.
///
/// Channels are stored as bytes; constructors taking wider integers clamp
/// into the byte range instead of rejecting the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

    /// Creates a color from raw byte channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from wide integer channels, clamping each into 0..=255.
    pub fn from_components(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
            a: a.clamp(0, 255) as u8,
        }
    }

    /// Linearly interpolates all four channels toward `target`.
    ///
    /// `t` is clamped to [0, 1]; 0 returns `self` unchanged, 1 returns
    /// `target`.
    pub fn lerp(self, target: Color, t: f32) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 1.0 };
        let mix = |from: u8, to: u8| -> u8 {
            (from as f32 + (to as f32 - from as f32) * t).round() as u8
        };
        Color {
            r: mix(self.r, target.r),
            g: mix(self.g, target.g),
            b: mix(self.b, target.b),
            a: mix(self.a, target.a),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_components_clamps_to_byte_range() {
        let color = Color::from_components(-20, 300, 128, 256);
        assert_eq!(color, Color::new(0, 255, 128, 255));
    }

    #[test]
    fn test_lerp_endpoints() {
        let start = Color::new(200, 100, 50, 255);
        assert_eq!(start.lerp(Color::TRANSPARENT, 0.0), start);
        assert_eq!(start.lerp(Color::TRANSPARENT, 1.0), Color::TRANSPARENT);
    }

    #[test]
    fn test_lerp_midpoint_drives_all_channels() {
        let start = Color::new(200, 100, 50, 254);
        let half = start.lerp(Color::TRANSPARENT, 0.5);
        assert_eq!(half, Color::new(100, 50, 25, 127));
    }

    #[test]
    fn test_lerp_clamps_fraction() {
        let start = Color::new(10, 10, 10, 10);
        assert_eq!(start.lerp(Color::TRANSPARENT, 2.0), Color::TRANSPARENT);
        assert_eq!(start.lerp(Color::TRANSPARENT, -1.0), start);
    }
}
