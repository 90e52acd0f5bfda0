//! egui backend for display lists.
//!
//! egui redraws the whole screen every frame, so the accumulating
//! translucent fade of the full-surface views is rebuilt by
//! [`TrailCompositor`]: it keeps the recent frames and replays them with
//! the opacity each would have left after being faded over since.

use std::collections::VecDeque;

use egui::{Align2, Color32, FontId, Mesh, Painter, Pos2, Rounding, Shape};
use glam::Vec2;

use super::canvas::{Canvas, Color, DisplayList, DrawCommand, Rect};

/// Layers whose remaining opacity falls below this are dropped
const TRAIL_CUTOFF: f32 = 0.02;
/// Upper bound on replayed frames, whatever the fade alpha
const MAX_TRAIL_LAYERS: usize = 256;
/// Offsets sampled by the blur emulation
const BLUR_TAPS: usize = 8;
/// Layered halos drawn for a glowing circle
const GLOW_RINGS: usize = 3;

/// Rolling history of a view's recent frames
#[derive(Debug, Default)]
pub struct TrailCompositor {
    history: VecDeque<DisplayList>,
}

impl TrailCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames a fade of `alpha` keeps, the oldest being the first
    /// whose remaining opacity is at or below the cutoff
    pub fn layers_for(alpha: f32) -> usize {
        if alpha >= 1.0 {
            return 1;
        }
        if alpha <= 0.0 {
            return MAX_TRAIL_LAYERS;
        }
        let age = TRAIL_CUTOFF.ln() / (1.0 - alpha).ln();
        (age.ceil() as usize + 1).clamp(1, MAX_TRAIL_LAYERS)
    }

    /// Record the newest frame. A frame without a fade covers everything
    /// before it, so the history restarts.
    pub fn push(&mut self, frame: &DisplayList) {
        let keep = match frame.fade_color() {
            Some(fade) => Self::layers_for(fade.a),
            None => 1,
        };
        if frame.fade_color().is_none() {
            self.history.clear();
        }
        self.history.push_back(frame.clone());
        while self.history.len() > keep {
            self.history.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Base colour under the trail, if the newest frame fades
    pub fn backdrop(&self) -> Option<Color> {
        self.history
            .back()
            .and_then(|f| f.fade_color())
            .map(|c| c.with_alpha(1.0))
    }

    /// Frames oldest first, each with its remaining opacity
    pub fn layers(&self) -> Vec<(&DisplayList, f32)> {
        let Some(newest) = self.history.back() else {
            return Vec::new();
        };
        let keep = newest.fade_color().map_or(0.0, |c| 1.0 - c.a);
        let count = self.history.len();
        self.history
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                let age = (count - 1 - i) as i32;
                (frame, keep.powi(age))
            })
            .collect()
    }

    /// Paint the trail into `painter` with the canvas origin at `origin`
    pub fn paint(&self, painter: &Painter, origin: Vec2) {
        if let (Some(backdrop), Some(newest)) = (self.backdrop(), self.history.back()) {
            let rect = egui::Rect::from_min_size(to_pos(origin), to_vec(newest.size()));
            painter.rect_filled(rect, Rounding::ZERO, to_color32(backdrop, 1.0));
        }
        for (frame, weight) in self.layers() {
            paint_display_list(painter, frame, origin, weight);
        }
    }
}

/// Replay one display list, multiplying every alpha by `opacity`.
///
/// A frame with a blur is drawn several times at offsets around a ring of
/// the blur radius.
pub fn paint_display_list(painter: &Painter, list: &DisplayList, origin: Vec2, opacity: f32) {
    let blur = list.blur_radius();
    if blur < 0.5 {
        replay(painter, list, origin, opacity);
        return;
    }

    let taps = BLUR_TAPS + 1;
    // Per-tap alpha so that all taps stacked reach roughly the original opacity.
    let tap_opacity = 1.0 - 0.05_f32.powf(1.0 / taps as f32);
    replay(painter, list, origin, opacity * tap_opacity);
    for k in 0..BLUR_TAPS {
        let angle = std::f32::consts::TAU * k as f32 / BLUR_TAPS as f32;
        let offset = Vec2::from_angle(angle) * blur;
        replay(painter, list, origin + offset, opacity * tap_opacity);
    }
}

fn replay(painter: &Painter, list: &DisplayList, origin: Vec2, opacity: f32) {
    let clip = egui::Rect::from_min_size(to_pos(origin), to_vec(list.size()));
    let clipped = painter.with_clip_rect(clip.intersect(painter.clip_rect()));
    let mut canvas = EguiCanvas::new(clipped, origin, list.size()).with_opacity(opacity);
    for command in list.commands() {
        canvas.draw(command.clone());
    }
}

/// [`Canvas`] that paints straight into an egui layer
pub struct EguiCanvas {
    painter: Painter,
    origin: Vec2,
    opacity: f32,
    size: Vec2,
}

impl EguiCanvas {
    pub fn new(painter: Painter, origin: Vec2, size: Vec2) -> Self {
        Self {
            painter,
            origin,
            opacity: 1.0,
            size,
        }
    }

    /// Multiply every painted alpha by `opacity`
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    fn pos(&self, p: Vec2) -> Pos2 {
        to_pos(self.origin + p)
    }

    fn color(&self, c: Color) -> Color32 {
        to_color32(c, self.opacity)
    }

    fn stroke(&self, stroke: super::canvas::Stroke) -> egui::Stroke {
        egui::Stroke::new(stroke.width, self.color(stroke.color))
    }

    fn rect(&self, rect: Rect) -> egui::Rect {
        egui::Rect::from_min_size(self.pos(rect.min), to_vec(rect.size))
    }

    fn gradient(&self, rect: Rect, from: Color, to: Color) -> Mesh {
        let r = self.rect(rect);
        let mid = lerp_color(from, to, 0.5);
        let mut mesh = Mesh::default();
        mesh.colored_vertex(r.left_top(), self.color(from));
        mesh.colored_vertex(r.right_top(), self.color(mid));
        mesh.colored_vertex(r.right_bottom(), self.color(to));
        mesh.colored_vertex(r.left_bottom(), self.color(mid));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        mesh
    }
}

impl Canvas for EguiCanvas {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn draw(&mut self, command: DrawCommand) {
        match command {
            // Fades and blur are composited by the caller.
            DrawCommand::Fade { .. } | DrawCommand::Blur { .. } => {}
            DrawCommand::FillRect { rect, color } => {
                self.painter
                    .rect_filled(self.rect(rect), Rounding::ZERO, self.color(color));
            }
            DrawCommand::GradientRect { rect, from, to } => {
                let mesh = self.gradient(rect, from, to);
                self.painter.add(Shape::mesh(mesh));
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
                glow,
            } => {
                let center = self.pos(center);
                if let Some(glow) = glow {
                    for ring in (1..=GLOW_RINGS).rev() {
                        let t = ring as f32 / GLOW_RINGS as f32;
                        let halo = color.fade(0.25 * (1.0 - t) + 0.05);
                        self.painter
                            .circle_filled(center, radius + glow * t, self.color(halo));
                    }
                }
                self.painter.circle_filled(center, radius, self.color(color));
            }
            DrawCommand::CircleOutline {
                center,
                radius,
                stroke,
            } => {
                self.painter
                    .circle_stroke(self.pos(center), radius, self.stroke(stroke));
            }
            DrawCommand::Line { from, to, stroke } => {
                self.painter
                    .line_segment([self.pos(from), self.pos(to)], self.stroke(stroke));
            }
            DrawCommand::DashedLine {
                from,
                to,
                stroke,
                dash,
                gap,
            } => {
                let shapes =
                    Shape::dashed_line(&[self.pos(from), self.pos(to)], self.stroke(stroke), dash, gap);
                self.painter.extend(shapes);
            }
            DrawCommand::RectOutline { rect, stroke } => {
                self.painter
                    .rect_stroke(self.rect(rect), Rounding::ZERO, self.stroke(stroke));
            }
            DrawCommand::Text {
                anchor,
                text,
                size,
                color,
            } => {
                self.painter.text(
                    self.pos(anchor),
                    Align2::LEFT_BOTTOM,
                    text,
                    FontId::monospace(size),
                    self.color(color),
                );
            }
        }
    }
}

pub fn to_color32(color: Color, opacity: f32) -> Color32 {
    let a = (color.a * opacity).clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, (a * 255.0).round() as u8)
}

fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::rgba(
        mix(from.r, to.r),
        mix(from.g, to.g),
        mix(from.b, to.b),
        from.a + (to.a - from.a) * t,
    )
}

fn to_pos(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

fn to_vec(v: Vec2) -> egui::Vec2 {
    egui::vec2(v.x, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faded_frame(alpha: f32) -> DisplayList {
        let mut list = DisplayList::new(Vec2::new(100.0, 100.0));
        list.fade(Color::rgba(15, 23, 42, alpha));
        list
    }

    #[test]
    fn test_layers_for_alpha() {
        assert_eq!(TrailCompositor::layers_for(1.0), 1);
        // age 38 is the first at or below 0.02
        assert_eq!(TrailCompositor::layers_for(0.1), 39);
        assert_eq!(TrailCompositor::layers_for(0.0), MAX_TRAIL_LAYERS);
    }

    #[test]
    fn test_slow_fades_reach_cutoff_before_drop() {
        for alpha in [0.02, 0.05] {
            let layers = TrailCompositor::layers_for(alpha);
            assert!(layers < MAX_TRAIL_LAYERS, "alpha {} hits the cap", alpha);

            let mut trail = TrailCompositor::new();
            for _ in 0..layers + 20 {
                trail.push(&faded_frame(alpha));
            }
            assert_eq!(trail.len(), layers);

            let weights: Vec<f32> = trail.layers().iter().map(|(_, w)| *w).collect();
            assert!(
                weights[0] <= TRAIL_CUTOFF,
                "alpha {}: oldest layer dropped at {}",
                alpha,
                weights[0]
            );
            assert!(weights[1] > TRAIL_CUTOFF);
        }
    }

    #[test]
    fn test_trail_weights_decay() {
        let mut trail = TrailCompositor::new();
        for _ in 0..3 {
            trail.push(&faded_frame(0.5));
        }
        let weights: Vec<f32> = trail.layers().iter().map(|(_, w)| *w).collect();
        assert_eq!(weights, vec![0.25, 0.5, 1.0]);
        assert_eq!(trail.backdrop(), Some(Color::rgb(15, 23, 42)));
    }

    #[test]
    fn test_opaque_frame_restarts_history() {
        let mut trail = TrailCompositor::new();
        trail.push(&faded_frame(0.1));
        trail.push(&faded_frame(0.1));
        trail.push(&DisplayList::new(Vec2::new(100.0, 100.0)));
        assert_eq!(trail.len(), 1);
        assert!(trail.backdrop().is_none());
    }

    #[test]
    fn test_color_conversion() {
        let c = to_color32(Color::rgba(6, 182, 212, 0.5), 0.5);
        assert_eq!(c.a(), 64);
    }
}
