/// An RGBA color with 8-bit channels and a separate floating point
/// alpha, matching how the palette entries are written (a byte triple
/// plus a 0..1 opacity that gets rescaled per connection line).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with the alpha replaced.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear two-stop interpolation, `t` in `0..=1`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Cool palette: cyan, blue, purple.
pub const COOL_PALETTE: [Rgba; 3] = [
    Rgba::new(56, 189, 248, 0.7),
    Rgba::new(59, 130, 246, 0.7),
    Rgba::new(139, 92, 246, 0.7),
];

/// Neon palette: violet, cyan, pink, mint.
pub const NEON_PALETTE: [Rgba; 4] = [
    Rgba::new(141, 0, 255, 0.7),
    Rgba::new(0, 255, 255, 0.7),
    Rgba::new(255, 0, 119, 0.7),
    Rgba::new(0, 255, 204, 0.7),
];
