use crate::color::{COOL_PALETTE, Rgba};
use glam::Vec2;

/// Tunables for one particle field instance.
///
/// The defaults reproduce the usual full-screen background setup:
/// one particle per 10 000 square units of viewport, capped at 100,
/// with connection lines up to 150 units at a 1920-wide reference
/// surface.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Viewport area divided by this gives the particle count.
    pub density_divisor: f32,
    /// Hard cap on the particle count regardless of viewport area.
    pub max_particles: usize,
    /// Particle radius is drawn uniformly from `min_radius..=max_radius`.
    pub min_radius: f32,
    pub max_radius: f32,
    /// Per-axis velocity magnitude bound, units per frame.
    pub max_speed: Vec2,
    /// Scroll progress (0..1) is multiplied by this and added to each
    /// particle's baseline y. Parallax repositioning, not acceleration.
    pub scroll_coupling: f32,
    /// Pointer distance within which particles are pushed away.
    pub repulsion_radius: f32,
    /// Positional nudge applied per frame inside the repulsion radius.
    pub repulsion_strength: f32,
    /// Connection line threshold at `reference_width`.
    pub connection_distance: f32,
    /// Surface width at which `connection_distance` applies verbatim;
    /// the effective threshold scales linearly with the actual width.
    pub reference_width: f32,
    /// Extra factor applied to connection line alpha on top of the
    /// distance falloff.
    pub connection_alpha: f32,
    /// Stroke width for connection lines.
    pub line_width: f32,
    /// Low-opacity layer painted each frame to leave motion trails.
    pub fade_color: Rgba,
    /// Colors assigned to particles uniformly at creation.
    pub palette: Vec<Rgba>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density_divisor: 10_000.0,
            max_particles: 100,
            min_radius: 0.5,
            max_radius: 2.0,
            max_speed: Vec2::new(0.25, 0.1),
            scroll_coupling: 100.0,
            repulsion_radius: 100.0,
            repulsion_strength: 0.5,
            connection_distance: 150.0,
            reference_width: 1920.0,
            connection_alpha: 0.3,
            line_width: 0.5,
            fade_color: Rgba::new(0, 0, 0, 0.01),
            palette: COOL_PALETTE.to_vec(),
        }
    }
}

impl FieldConfig {
    /// Effective connection threshold for a surface of the given width,
    /// so the visual density of the web is resolution independent.
    pub fn max_connection_distance(&self, surface_width: f32) -> f32 {
        self.connection_distance * (surface_width / self.reference_width)
    }
}
