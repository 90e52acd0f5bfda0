//! Backend-neutral 2D drawing surface.
//!
//! Views paint into a [`Canvas`]; the simulation never talks to the GPU
//! directly. [`DisplayList`] records the commands so a frame can be
//! inspected in tests or replayed by the egui painter.

use glam::{Affine2, Vec2};

/// Straight (non-premultiplied) colour with a floating-point alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `[0, 1]`
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Multiply the current alpha by `factor`
    pub fn fade(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Outline style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Axis-aligned rectangle in canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmplt(self.max()).all()
    }
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Translucent fill over the whole canvas, leaving a fading trail
    Fade { color: Color },
    FillRect { rect: Rect, color: Color },
    /// Diagonal linear gradient from the top-left to the bottom-right corner
    GradientRect { rect: Rect, from: Color, to: Color },
    /// Filled disc with an optional soft glow of radius `glow`
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        glow: Option<f32>,
    },
    CircleOutline { center: Vec2, radius: f32, stroke: Stroke },
    Line { from: Vec2, to: Vec2, stroke: Stroke },
    DashedLine {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
        dash: f32,
        gap: f32,
    },
    RectOutline { rect: Rect, stroke: Stroke },
    /// Text whose bottom-left corner sits at `anchor`
    Text {
        anchor: Vec2,
        text: String,
        size: f32,
        color: Color,
    },
    /// Post-render blur over everything drawn this frame
    Blur { radius: f32 },
}

/// A drawing surface for one view
pub trait Canvas {
    /// Canvas size in canvas units
    fn size(&self) -> Vec2;

    fn draw(&mut self, command: DrawCommand);

    fn fade(&mut self, color: Color) {
        self.draw(DrawCommand::Fade { color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw(DrawCommand::FillRect { rect, color });
    }

    fn gradient_rect(&mut self, rect: Rect, from: Color, to: Color) {
        self.draw(DrawCommand::GradientRect { rect, from, to });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw(DrawCommand::Circle {
            center,
            radius,
            color,
            glow: None,
        });
    }

    fn glow_circle(&mut self, center: Vec2, radius: f32, color: Color, glow: f32) {
        self.draw(DrawCommand::Circle {
            center,
            radius,
            color,
            glow: Some(glow),
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.draw(DrawCommand::CircleOutline {
            center,
            radius,
            stroke,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.draw(DrawCommand::Line { from, to, stroke });
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke, dash: f32, gap: f32) {
        self.draw(DrawCommand::DashedLine {
            from,
            to,
            stroke,
            dash,
            gap,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.draw(DrawCommand::RectOutline { rect, stroke });
    }

    fn text(&mut self, anchor: Vec2, text: &str, size: f32, color: Color) {
        self.draw(DrawCommand::Text {
            anchor,
            text: text.to_owned(),
            size,
            color,
        });
    }

    fn blur(&mut self, radius: f32) {
        self.draw(DrawCommand::Blur { radius });
    }
}

/// Recorded frame: canvas size plus commands in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Empty the list for a new frame, keeping its allocation
    pub fn reset(&mut self, size: Vec2) {
        self.size = size;
        self.commands.clear();
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Alpha of this frame's trail fade, if it has one
    pub fn fade_color(&self) -> Option<Color> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Fade { color } => Some(*color),
            _ => None,
        })
    }

    /// Radius of this frame's post-render blur, zero if none
    pub fn blur_radius(&self) -> f32 {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Blur { radius } => Some(*radius),
                _ => None,
            })
            .fold(0.0, f32::max)
    }

    /// Straight line segments in this frame
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Stroke)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, stroke } => Some((*from, *to, *stroke)),
            _ => None,
        })
    }

    /// Filled circles in this frame
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                color,
                ..
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }
}

impl Canvas for DisplayList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// Canvas adapter that maps geometry through an affine transform.
///
/// Lengths (radii, stroke widths, text size) scale by the transform's
/// uniform scale. Fades and blur are screen-space and pass through.
pub struct Transformed<'a> {
    inner: &'a mut dyn Canvas,
    transform: Affine2,
    scale: f32,
}

impl<'a> Transformed<'a> {
    pub fn new(inner: &'a mut dyn Canvas, transform: Affine2) -> Self {
        let scale = transform.matrix2.x_axis.length();
        Self {
            inner,
            transform,
            scale,
        }
    }

    fn point(&self, p: Vec2) -> Vec2 {
        self.transform.transform_point2(p)
    }

    fn rect(&self, rect: Rect) -> Rect {
        Rect::new(self.point(rect.min), rect.size * self.scale)
    }

    fn stroke(&self, stroke: Stroke) -> Stroke {
        Stroke::new(stroke.width * self.scale, stroke.color)
    }
}

impl Canvas for Transformed<'_> {
    fn size(&self) -> Vec2 {
        self.inner.size()
    }

    fn draw(&mut self, command: DrawCommand) {
        let mapped = match command {
            DrawCommand::FillRect { rect, color } => DrawCommand::FillRect {
                rect: self.rect(rect),
                color,
            },
            DrawCommand::GradientRect { rect, from, to } => DrawCommand::GradientRect {
                rect: self.rect(rect),
                from,
                to,
            },
            DrawCommand::Circle {
                center,
                radius,
                color,
                glow,
            } => DrawCommand::Circle {
                center: self.point(center),
                radius: radius * self.scale,
                color,
                glow: glow.map(|g| g * self.scale),
            },
            DrawCommand::CircleOutline {
                center,
                radius,
                stroke,
            } => DrawCommand::CircleOutline {
                center: self.point(center),
                radius: radius * self.scale,
                stroke: self.stroke(stroke),
            },
            DrawCommand::Line { from, to, stroke } => DrawCommand::Line {
                from: self.point(from),
                to: self.point(to),
                stroke: self.stroke(stroke),
            },
            DrawCommand::DashedLine {
                from,
                to,
                stroke,
                dash,
                gap,
            } => DrawCommand::DashedLine {
                from: self.point(from),
                to: self.point(to),
                stroke: self.stroke(stroke),
                dash: dash * self.scale,
                gap: gap * self.scale,
            },
            DrawCommand::RectOutline { rect, stroke } => DrawCommand::RectOutline {
                rect: self.rect(rect),
                stroke: self.stroke(stroke),
            },
            DrawCommand::Text {
                anchor,
                text,
                size,
                color,
            } => DrawCommand::Text {
                anchor: self.point(anchor),
                text,
                size: size * self.scale,
                color,
            },
            screen_space @ (DrawCommand::Fade { .. } | DrawCommand::Blur { .. }) => screen_space,
        };
        self.inner.draw(mapped);
    }
}
