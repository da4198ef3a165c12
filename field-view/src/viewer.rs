//! Interactive particle field viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the animation state
//! (animator, configuration, input snapshots) and implements
//! [`eframe::App`] to drive and render the particle field.

use eframe::App;
use field_core::{
    animator::{Animator, AnimatorState},
    color::{COOL_PALETTE, NEON_PALETTE, Rgba},
    config::FieldConfig,
    field::FrameInput,
    render,
    surface::Surface,
};
use glam::Vec2;

/// How much one unit of wheel delta moves the scroll progress.
const WHEEL_SCROLL_RATE: f32 = 0.001;

/// Which fixed palette newly built fields draw colors from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PaletteChoice {
    Cool,
    Neon,
}

impl PaletteChoice {
    fn colors(self) -> Vec<Rgba> {
        match self {
            PaletteChoice::Cool => COOL_PALETTE.to_vec(),
            PaletteChoice::Neon => NEON_PALETTE.to_vec(),
        }
    }
}

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The animation core: one [`Animator`] owning its particle field.
/// - An editable [`FieldConfig`] applied by rebuilding the animator.
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions and snapshot the forcing inputs
///    (scroll progress, pointer position) once.
/// 2. If `running`, call [`Animator::frame`] through a
///    [`PainterSurface`]; otherwise redraw the current field without
///    advancing it.
/// 3. Re-arm the loop with `request_repaint` only while running, so a
///    paused or stopped viewer consumes no further frames.
///
/// ### Fields
/// - `animator` - Lifecycle owner of the particle field.
/// - `cfg` - Working copy of the configuration being edited in the UI.
/// - `palette_choice` - Palette applied on the next rebuild.
///
/// - `rng` - Random number generator used for (re)building batches.
///
/// - `running` - Whether the animation is currently auto-advancing.
/// - `scroll` - Scroll progress in `0..=1`, fed by wheel and slider.
/// - `pointer_repulsion` - Whether the hover position is passed to the
///   field as a repulsion source.
///
/// - `surface_size` - Last seen drawing rect size, for resize detection.
/// - `last_connections` - Connection lines drawn last frame (status bar).
pub struct Viewer {
    animator: Animator,
    cfg: FieldConfig,
    palette_choice: PaletteChoice,

    rng: rand::rngs::ThreadRng,

    running: bool,
    scroll: f32,
    pointer_repulsion: bool,

    surface_size: egui::Vec2,
    last_connections: usize,
}

impl Viewer {
    /// Creates a new viewer with the default configuration.
    ///
    /// The animator starts `Uninitialized`; the first frame of the
    /// central panel starts it with the actual drawing rect size, so
    /// the particle count always matches the real viewport.
    pub fn new() -> Self {
        let cfg = FieldConfig::default();
        Self {
            animator: Animator::new(cfg.clone()),
            cfg,
            palette_choice: PaletteChoice::Cool,
            rng: rand::rng(),
            running: true,
            scroll: 0.0,
            pointer_repulsion: true,
            surface_size: egui::Vec2::ZERO,
            last_connections: 0,
        }
    }

    /// Replaces the animator with a fresh one built from the current
    /// config edits.
    ///
    /// A stopped animator cannot return to `Running`, so both "apply
    /// config" and "reset" go through a full rebuild; the old instance
    /// (and its batch) is dropped and the next central-panel frame
    /// starts the new one.
    fn rebuild(&mut self) {
        let mut cfg = self.cfg.clone();
        cfg.palette = self.palette_choice.colors();
        self.animator = Animator::new(cfg);
        self.surface_size = egui::Vec2::ZERO;
        self.last_connections = 0;
        log::debug!("viewer rebuilt its animator");
    }

    /// Stops the animation for good; only a reset brings it back.
    fn stop(&mut self) {
        self.animator.stop();
        self.running = false;
    }

    /// Folds wheel movement into the scroll progress, clamped to `0..=1`.
    fn nudge_scroll(&mut self, wheel_delta: f32) {
        if wheel_delta != 0.0 {
            self.scroll = (self.scroll - wheel_delta * WHEEL_SCROLL_RATE).clamp(0.0, 1.0);
        }
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, scroll, repulsion toggle).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let can_run = self.animator.state() != AnimatorState::Stopped;
                if ui
                    .add_enabled(
                        can_run,
                        egui::Button::new(if self.running { "⏸ Pause" } else { "▶ Run" }),
                    )
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui.button("⏹ Stop").clicked() {
                    self.stop();
                }

                if ui.button("Reset").clicked() {
                    self.rebuild();
                    self.running = true;
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.scroll, 0.0..=1.0).text("Scroll"));
                ui.checkbox(&mut self.pointer_repulsion, "Pointer repulsion");
            });
        });
    }

    /// Builds the bottom status bar (counts, surface size, state).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("state = {:?}", self.animator.state()));
                ui.separator();
                ui.label(format!(
                    "surface = {:.0}x{:.0}",
                    self.surface_size.x, self.surface_size.y
                ));
                ui.label(format!("connections = {}", self.last_connections));
                ui.label(format!(
                    "particles = {}",
                    self.animator.field().particles.len()
                ));
            });
        });
    }

    /// Builds the right-hand configuration panel.
    ///
    /// Edits act on the working copy; "Apply" rebuilds the animator so
    /// the batch is regenerated under the new settings.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Density");
                Self::labeled_drag_f32(
                    ui,
                    "density_divisor:",
                    &mut self.cfg.density_divisor,
                    1000.0..=100_000.0,
                    100.0,
                );
                Self::labeled_drag_usize(
                    ui,
                    "max_particles:",
                    &mut self.cfg.max_particles,
                    0..=150,
                    1.0,
                );

                ui.separator();
                ui.label("Connections");
                Self::labeled_drag_f32(
                    ui,
                    "connection_distance:",
                    &mut self.cfg.connection_distance,
                    0.0..=400.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "line_width:",
                    &mut self.cfg.line_width,
                    0.1..=3.0,
                    0.1,
                );

                ui.separator();
                ui.label("Forcing");
                Self::labeled_drag_f32(
                    ui,
                    "scroll_coupling:",
                    &mut self.cfg.scroll_coupling,
                    0.0..=500.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "repulsion_radius:",
                    &mut self.cfg.repulsion_radius,
                    0.0..=300.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "repulsion_strength:",
                    &mut self.cfg.repulsion_strength,
                    0.0..=5.0,
                    0.05,
                );

                ui.separator();
                ui.label("Palette");
                ui.horizontal(|ui| {
                    if ui
                        .selectable_label(self.palette_choice == PaletteChoice::Cool, "Cool")
                        .clicked()
                    {
                        self.palette_choice = PaletteChoice::Cool;
                    }
                    if ui
                        .selectable_label(self.palette_choice == PaletteChoice::Neon, "Neon")
                        .clicked()
                    {
                        self.palette_choice = PaletteChoice::Neon;
                    }
                });

                ui.separator();
                if ui.button("Apply (rebuild field)").clicked() {
                    self.rebuild();
                    self.running = true;
                }
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = FieldConfig::default();
                    self.palette_choice = PaletteChoice::Cool;
                }
            });
    }

    /// Builds the central panel where the field is animated and drawn.
    ///
    /// The panel allocates the remaining space, starts the animator on
    /// first sight of a real rect, resizes it when the rect changes,
    /// snapshots pointer and scroll once, and then runs the frame.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);
            let size = rect.size();

            match self.animator.state() {
                AnimatorState::Uninitialized => {
                    self.animator.start(size.x, size.y, &mut self.rng);
                    self.surface_size = size;
                }
                AnimatorState::Running => {
                    if size != self.surface_size {
                        self.animator.resize(size.x, size.y, &mut self.rng);
                        self.surface_size = size;
                    }
                }
                AnimatorState::Stopped => {}
            }

            // Once-per-frame input snapshot.
            self.nudge_scroll(ctx.input(|i| i.raw_scroll_delta.y));
            let pointer = if self.pointer_repulsion {
                response
                    .hover_pos()
                    .map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y))
            } else {
                None
            };

            let mut surface = PainterSurface {
                painter: &painter,
                rect,
            };

            if self.running {
                let input = FrameInput {
                    scroll_offset: self.scroll,
                    pointer,
                };
                self.last_connections = self.animator.frame(&input, &mut surface);
                // Re-arm the loop; dropped once paused or stopped.
                ctx.request_repaint();
            } else {
                // Paused: redraw the frozen field without advancing it.
                self.last_connections =
                    render::render(self.animator.field(), self.animator.config(), &mut surface);
            }
        });
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

impl Drop for Viewer {
    fn drop(&mut self) {
        self.animator.stop();
    }
}

/// Adapts an [`egui::Painter`] to the core's drawing-surface contract.
///
/// Field coordinates are rect-local; everything is offset by the rect
/// origin before painting. Gradient strokes are approximated with two
/// half-segments colored at the quarter points of the two-stop
/// gradient, which egui can stroke directly.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl PainterSurface<'_> {
    fn to_pos(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + p.x, self.rect.min.y + p.y)
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, 0.0, egui::Color32::from_rgb(8, 10, 15));
    }

    fn fill(&mut self, color: Rgba) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.to_pos(center), radius, to_color32(color));
    }

    fn gradient_line(
        &mut self,
        from: Vec2,
        from_color: Rgba,
        to: Vec2,
        to_color: Rgba,
        width: f32,
    ) {
        let mid = (from + to) * 0.5;
        let first = from_color.lerp(to_color, 0.25);
        let second = from_color.lerp(to_color, 0.75);

        self.painter.line_segment(
            [self.to_pos(from), self.to_pos(mid)],
            egui::Stroke::new(width, to_color32(first)),
        );
        self.painter.line_segment(
            [self.to_pos(mid), self.to_pos(to)],
            egui::Stroke::new(width, to_color32(second)),
        );
    }
}

/// Converts the core's color type to egui's, mapping the float alpha
/// onto a byte.
fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, (c.a.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_viewer_starts_uninitialized_and_running() {
        let viewer = Viewer::new();
        assert_eq!(viewer.animator.state(), AnimatorState::Uninitialized);
        assert!(viewer.running);
        assert_eq!(viewer.scroll, 0.0);
    }

    #[test]
    fn stop_then_reset_yields_a_fresh_animator() {
        let mut viewer = Viewer::new();

        viewer.stop();
        assert_eq!(viewer.animator.state(), AnimatorState::Stopped);
        assert!(!viewer.running);

        viewer.rebuild();
        viewer.running = true;

        // Rebuild replaces the stopped instance with a startable one.
        assert_eq!(viewer.animator.state(), AnimatorState::Uninitialized);
        assert_eq!(viewer.surface_size, egui::Vec2::ZERO);
        assert_eq!(viewer.last_connections, 0);
    }

    #[test]
    fn rebuild_applies_palette_choice_to_config() {
        let mut viewer = Viewer::new();
        viewer.palette_choice = PaletteChoice::Neon;

        viewer.rebuild();

        assert_eq!(viewer.animator.config().palette, NEON_PALETTE.to_vec());
    }

    #[test]
    fn nudge_scroll_accumulates_and_clamps() {
        let mut viewer = Viewer::new();

        // Scrolling down (negative wheel delta) increases progress.
        viewer.nudge_scroll(-100.0);
        assert!((viewer.scroll - 0.1).abs() < 1e-6);

        viewer.nudge_scroll(-1e6);
        assert_eq!(viewer.scroll, 1.0);

        viewer.nudge_scroll(1e6);
        assert_eq!(viewer.scroll, 0.0);

        // No-op wheel leaves progress alone.
        viewer.nudge_scroll(0.0);
        assert_eq!(viewer.scroll, 0.0);
    }

    #[test]
    fn to_color32_maps_alpha_onto_bytes() {
        let c = to_color32(Rgba::new(56, 189, 248, 0.7));
        assert_eq!(c, egui::Color32::from_rgba_unmultiplied(56, 189, 248, 178));

        // Out-of-range alphas are clamped, not wrapped.
        let hi = to_color32(Rgba::new(0, 0, 0, 2.0));
        assert_eq!(hi, egui::Color32::from_rgba_unmultiplied(0, 0, 0, 255));
        let lo = to_color32(Rgba::new(0, 0, 0, -1.0));
        assert_eq!(lo, egui::Color32::from_rgba_unmultiplied(0, 0, 0, 0));
    }
}
