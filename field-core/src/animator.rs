//! Per-instance animation lifecycle.
//!
//! An [`Animator`] owns exactly one [`ParticleField`] and walks a small
//! state machine:
//!
//! ```text
//! Uninitialized --start--> Running --stop--> Stopped
//!                             ^  |
//!                             +--+  frame (one advance + render pair)
//! ```
//!
//! `Stopped` is terminal: the particle batch is dropped and a stopped
//! animator never runs again. Hosts wanting to restart build a fresh
//! animator. Multiple animators can coexist; each owns its field and
//! shares nothing with the others.

use crate::config::FieldConfig;
use crate::field::{FrameInput, ParticleField};
use crate::render;
use crate::surface::Surface;
use rand::Rng;

/// Lifecycle state of an [`Animator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    Uninitialized,
    Running,
    Stopped,
}

/// Owns one particle field and drives its frame loop.
///
/// The host is responsible for scheduling: it calls [`Animator::frame`]
/// once per display frame from its own frame callback. The animator
/// performs all work synchronously inside that call and keeps no
/// pending work between calls, so frames for one instance can never
/// overlap.
pub struct Animator {
    cfg: FieldConfig,
    field: ParticleField,
    state: AnimatorState,
}

impl Animator {
    /// A new animator in the `Uninitialized` state with no particles.
    pub fn new(cfg: FieldConfig) -> Self {
        Self {
            cfg,
            field: ParticleField::empty(),
            state: AnimatorState::Uninitialized,
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    /// Builds the particle batch for the given surface size and enters
    /// `Running`.
    ///
    /// Only valid from `Uninitialized`; a stopped animator stays
    /// stopped and a running one keeps its current batch (logged and
    /// ignored). A non-positive dimension still transitions to
    /// `Running`, just with zero particles, so the loop runs
    /// harmlessly until a resize delivers a real viewport.
    pub fn start(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        if self.state != AnimatorState::Uninitialized {
            log::warn!("start ignored: animator is {:?}", self.state);
            return;
        }
        self.field = ParticleField::initialize(width, height, &self.cfg, rng);
        self.state = AnimatorState::Running;
        log::debug!(
            "animator running: {} particles in {width}x{height}",
            self.field.particles.len()
        );
    }

    /// Rebuilds the batch for a new surface size.
    ///
    /// Only meaningful while `Running`; otherwise logged and ignored.
    /// No particle from the old batch survives, so nothing can be left
    /// out of bounds after a shrink.
    pub fn resize(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        if self.state != AnimatorState::Running {
            log::warn!("resize ignored: animator is {:?}", self.state);
            return;
        }
        self.field.resize(width, height, &self.cfg, rng);
    }

    /// Runs one frame: exactly one `advance` paired with exactly one
    /// `render`, synchronously.
    ///
    /// `input` is the host's once-per-frame snapshot of the external
    /// forcing signals. Returns the number of connection lines drawn.
    /// Outside `Running` this draws nothing and returns zero.
    pub fn frame(&mut self, input: &FrameInput, surface: &mut dyn Surface) -> usize {
        if self.state != AnimatorState::Running {
            return 0;
        }
        self.field.advance(input, &self.cfg);
        render::render(&self.field, &self.cfg, surface)
    }

    /// Tears the animator down, dropping the particle batch.
    ///
    /// After this, [`Animator::frame`] is a no-op forever; there is no
    /// way back to `Running` on the same instance.
    pub fn stop(&mut self) {
        if self.state == AnimatorState::Stopped {
            return;
        }
        self.field = ParticleField::empty();
        self.state = AnimatorState::Stopped;
        log::debug!("animator stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Counts draw calls; enough to tell "rendered" from "no-op".
    #[derive(Default)]
    struct CountingSurface {
        ops: usize,
    }

    impl Surface for CountingSurface {
        fn clear(&mut self) {
            self.ops += 1;
        }
        fn fill(&mut self, _color: Rgba) {
            self.ops += 1;
        }
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
            self.ops += 1;
        }
        fn gradient_line(
            &mut self,
            _from: Vec2,
            _from_color: Rgba,
            _to: Vec2,
            _to_color: Rgba,
            _width: f32,
        ) {
            self.ops += 1;
        }
    }

    #[test]
    fn starts_uninitialized_with_empty_field() {
        let anim = Animator::new(FieldConfig::default());
        assert_eq!(anim.state(), AnimatorState::Uninitialized);
        assert!(anim.field().particles.is_empty());
    }

    #[test]
    fn frame_before_start_draws_nothing() {
        let mut anim = Animator::new(FieldConfig::default());
        let mut surface = CountingSurface::default();

        let n = anim.frame(&FrameInput::default(), &mut surface);

        assert_eq!(n, 0);
        assert_eq!(surface.ops, 0);
        assert_eq!(anim.state(), AnimatorState::Uninitialized);
    }

    #[test]
    fn start_builds_batch_and_frame_advances_and_renders() {
        let mut anim = Animator::new(FieldConfig::default());
        let mut rng = StdRng::seed_from_u64(11);

        anim.start(1920.0, 1080.0, &mut rng);
        assert_eq!(anim.state(), AnimatorState::Running);
        assert_eq!(anim.field().particles.len(), 100);

        let before: Vec<Vec2> = anim.field().particles.iter().map(|p| p.pos).collect();

        let mut surface = CountingSurface::default();
        anim.frame(&FrameInput::default(), &mut surface);

        // clear + fade + two circles per particle, at minimum.
        assert!(surface.ops >= 2 + 2 * 100);

        // At least the drifting particles moved.
        let moved = anim
            .field()
            .particles
            .iter()
            .zip(&before)
            .filter(|(p, old)| p.pos != **old)
            .count();
        assert!(moved > 0);
    }

    #[test]
    fn start_with_degenerate_viewport_runs_with_zero_particles() {
        let mut anim = Animator::new(FieldConfig::default());
        let mut rng = StdRng::seed_from_u64(12);

        anim.start(0.0, 0.0, &mut rng);
        assert_eq!(anim.state(), AnimatorState::Running);
        assert!(anim.field().particles.is_empty());

        // The loop still runs; rendering is just clear + fade.
        let mut surface = CountingSurface::default();
        anim.frame(&FrameInput::default(), &mut surface);
        assert_eq!(surface.ops, 2);
    }

    #[test]
    fn resize_rebuilds_for_new_dimensions() {
        let mut anim = Animator::new(FieldConfig::default());
        let mut rng = StdRng::seed_from_u64(13);

        anim.start(1920.0, 1080.0, &mut rng);
        anim.resize(500.0, 400.0, &mut rng);

        assert_eq!(anim.field().particles.len(), 20);
        for p in &anim.field().particles {
            assert!(p.pos.x >= 0.0 && p.pos.x < 500.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 400.0);
        }
    }

    #[test]
    fn resize_outside_running_is_ignored() {
        let mut anim = Animator::new(FieldConfig::default());
        let mut rng = StdRng::seed_from_u64(14);

        anim.resize(800.0, 600.0, &mut rng);
        assert!(anim.field().particles.is_empty());
        assert_eq!(anim.state(), AnimatorState::Uninitialized);
    }

    #[test]
    fn stop_drops_batch_and_is_terminal() {
        let mut anim = Animator::new(FieldConfig::default());
        let mut rng = StdRng::seed_from_u64(15);

        anim.start(1920.0, 1080.0, &mut rng);
        anim.stop();

        assert_eq!(anim.state(), AnimatorState::Stopped);
        assert!(anim.field().particles.is_empty());

        // No further frames run.
        let mut surface = CountingSurface::default();
        assert_eq!(anim.frame(&FrameInput::default(), &mut surface), 0);
        assert_eq!(surface.ops, 0);

        // And start does not resurrect it.
        anim.start(800.0, 600.0, &mut rng);
        assert_eq!(anim.state(), AnimatorState::Stopped);
        assert!(anim.field().particles.is_empty());
    }

    #[test]
    fn second_start_keeps_existing_batch() {
        let mut anim = Animator::new(FieldConfig::default());
        let mut rng = StdRng::seed_from_u64(16);

        anim.start(1920.0, 1080.0, &mut rng);
        let count = anim.field().particles.len();

        anim.start(500.0, 400.0, &mut rng);
        assert_eq!(anim.field().particles.len(), count);
        assert_eq!(anim.field().width, 1920.0);
    }
}
