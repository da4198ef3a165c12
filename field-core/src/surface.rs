use crate::color::Rgba;
use glam::Vec2;

/// 2-D immediate-mode drawing contract the renderer draws through.
///
/// The host supplies an implementation backed by whatever it actually
/// draws with (an egui painter, a pixel buffer, ...). Coordinates are
/// surface-local, in the same units as the particle field.
pub trait Surface {
    /// Resets the surface for a new frame.
    fn clear(&mut self);

    /// Fills the whole surface with a (usually translucent) color.
    fn fill(&mut self, color: Rgba);

    /// Draws a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Draws a line stroked with a two-stop linear gradient between the
    /// endpoint colors.
    fn gradient_line(&mut self, from: Vec2, from_color: Rgba, to: Vec2, to_color: Rgba, width: f32);
}

/// Surface that draws nothing.
///
/// Used when the host has no usable drawing context: the animator keeps
/// running its state machine but rendering degrades to a no-op instead
/// of failing.
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn fill(&mut self, _color: Rgba) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {}
    fn gradient_line(
        &mut self,
        _from: Vec2,
        _from_color: Rgba,
        _to: Vec2,
        _to_color: Rgba,
        _width: f32,
    ) {
    }
}
