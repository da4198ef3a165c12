use crate::color::Rgba;
use crate::config::FieldConfig;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    /// Vertical position before any scroll offset is applied. Scroll
    /// repositions from here each frame, so horizontal drift survives.
    pub baseline_y: f32,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Particle {
    /// A particle at a uniformly random position inside the viewport,
    /// with small random velocity, radius, and a palette color.
    pub fn random(width: f32, height: f32, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..width),
            rng.random_range(0.0..height),
        );
        let vel = Vec2::new(
            rng.random_range(-cfg.max_speed.x..=cfg.max_speed.x),
            rng.random_range(-cfg.max_speed.y..=cfg.max_speed.y),
        );
        let radius = rng.random_range(cfg.min_radius..=cfg.max_radius);
        let color = cfg.palette[rng.random_range(0..cfg.palette.len())];

        Self {
            pos,
            baseline_y: pos.y,
            vel,
            radius,
            color,
        }
    }
}
