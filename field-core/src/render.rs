//! Drawing pass for a particle field.
//!
//! One call to [`render`] produces one complete frame:
//! 1. Clear, then lay down the low-opacity fade layer that leaves
//!    motion trails between frames.
//! 2. Each particle: a soft glow halo, then the core disc.
//! 3. Each proximity connection: a line stroked with a two-stop
//!    gradient between the endpoint colors, alpha falling off with
//!    distance.

use crate::config::FieldConfig;
use crate::connect::connections;
use crate::field::ParticleField;
use crate::surface::Surface;

/// Halo radius relative to the particle radius.
const GLOW_RADIUS_FACTOR: f32 = 3.0;
/// Halo alpha relative to the particle alpha.
const GLOW_ALPHA_FACTOR: f32 = 0.25;

/// Draws the field onto `surface` and returns the number of connection
/// lines drawn.
///
/// The connection threshold is [`FieldConfig::max_connection_distance`]
/// for the field's current width, so the web looks the same across
/// resolutions. Connection stroke colors are the endpoint particle
/// colors with alpha `opacity * cfg.connection_alpha`.
pub fn render(field: &ParticleField, cfg: &FieldConfig, surface: &mut dyn Surface) -> usize {
    surface.clear();
    surface.fill(cfg.fade_color);

    for p in &field.particles {
        surface.fill_circle(
            p.pos,
            p.radius * GLOW_RADIUS_FACTOR,
            p.color.with_alpha(p.color.a * GLOW_ALPHA_FACTOR),
        );
        surface.fill_circle(p.pos, p.radius, p.color);
    }

    let max_distance = cfg.max_connection_distance(field.width);
    let conns = connections(field, max_distance);

    for c in &conns {
        let pa = &field.particles[c.a];
        let pb = &field.particles[c.b];
        let alpha = c.opacity * cfg.connection_alpha;
        surface.gradient_line(
            pa.pos,
            pa.color.with_alpha(alpha),
            pb.pos,
            pb.color.with_alpha(alpha),
            cfg.line_width,
        );
    }

    conns.len()
}
