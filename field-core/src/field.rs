use crate::config::FieldConfig;
use crate::particle::Particle;
use glam::Vec2;
use rand::Rng;

/// Pointer closer than this to a particle gives no usable repulsion
/// direction, so the nudge is skipped for that particle.
const MIN_POINTER_DISTANCE: f32 = 1e-3;

/// External forcing inputs, snapshotted once per frame by the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Scroll progress, nominally `0..=1`.
    pub scroll_offset: f32,
    /// Pointer position in surface coordinates, if one is present.
    pub pointer: Option<Vec2>,
}

/// The particle batch plus the viewport it lives in.
///
/// The batch is created in one go and only ever replaced wholesale
/// (on resize); individual particles are never added or removed.
#[derive(Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub width: f32,
    pub height: f32,
}

impl ParticleField {
    /// A field with no particles and a zero-sized viewport.
    pub fn empty() -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    /// Builds a field directly from existing particles. Mostly useful
    /// for tests that need fully determined positions and velocities.
    pub fn from_parts(particles: Vec<Particle>, width: f32, height: f32) -> Self {
        Self {
            particles,
            width,
            height,
        }
    }

    /// Particle count for a viewport: `min(cap, floor(w * h / divisor))`.
    ///
    /// Non-positive dimensions yield zero.
    pub fn count_for(width: f32, height: f32, cfg: &FieldConfig) -> usize {
        if width <= 0.0 || height <= 0.0 {
            return 0;
        }
        let by_area = (width * height / cfg.density_divisor).floor() as usize;
        by_area.min(cfg.max_particles)
    }

    /// Creates a fresh batch of randomly placed particles for the given
    /// viewport. A non-positive dimension produces an empty field
    /// rather than an error; the animation loop runs harmlessly over
    /// zero particles.
    pub fn initialize(width: f32, height: f32, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let count = Self::count_for(width, height, cfg);
        let particles = (0..count)
            .map(|_| Particle::random(width, height, cfg, rng))
            .collect();

        log::debug!("initialized particle field: {count} particles in {width}x{height}");

        Self {
            particles,
            width,
            height,
        }
    }

    /// Discards the current batch and re-initializes for the new
    /// viewport. No particle survives a resize, so nothing can be left
    /// out of bounds after a shrink.
    pub fn resize(&mut self, width: f32, height: f32, cfg: &FieldConfig, rng: &mut impl Rng) {
        *self = Self::initialize(width, height, cfg, rng);
    }

    /// Advances every particle by one frame.
    ///
    /// Per particle, in order:
    ///
    /// 1. Horizontal drift: `x += vel.x`.
    /// 2. Scroll repositioning: `y = baseline_y + scroll · coupling`.
    ///    Scroll moves particles, it never accelerates them.
    /// 3. Pointer repulsion: if a pointer is supplied and closer than
    ///    `cfg.repulsion_radius`, the particle is nudged directly away
    ///    from it by `cfg.repulsion_strength` units. Velocity is left
    ///    untouched, so the push does not build up momentum. A pointer
    ///    sitting exactly on a particle has no direction to push along
    ///    and is skipped.
    /// 4. Wrap-around on both axes independently: a particle leaving
    ///    one edge reappears at the opposite edge, keeping
    ///    `0 <= x < width` and `0 <= y < height`.
    ///
    /// The update is fully deterministic: no randomness is drawn after
    /// initialization.
    pub fn advance(&mut self, input: &FrameInput, cfg: &FieldConfig) {
        let scroll_shift = input.scroll_offset * cfg.scroll_coupling;

        for p in &mut self.particles {
            p.pos.x += p.vel.x;
            p.pos.y = p.baseline_y + scroll_shift;

            if let Some(pointer) = input.pointer {
                let delta = p.pos - pointer;
                let dist = delta.length();
                if dist < cfg.repulsion_radius && dist > MIN_POINTER_DISTANCE {
                    p.pos += delta / dist * cfg.repulsion_strength;
                }
            }

            p.pos.x = wrap(p.pos.x, self.width);
            p.pos.y = wrap(p.pos.y, self.height);
        }
    }
}

/// Wraps a coordinate into `[0, extent)`. Exiting on the right comes
/// back near zero; exiting on the left comes back just under `extent`.
fn wrap(coord: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    let wrapped = coord.rem_euclid(extent);
    // rem_euclid of a tiny negative can round up to `extent` itself.
    if wrapped >= extent { 0.0 } else { wrapped }
}
