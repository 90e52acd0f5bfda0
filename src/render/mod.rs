//! Rendering: a backend-neutral canvas the views paint into, the scene
//! painters for each view, and the wgpu/egui backend that shows them.

mod canvas;
pub mod hud;
mod painter;
mod pipeline;
pub mod scene;
pub mod style;

pub use canvas::{Canvas, Color, DisplayList, DrawCommand, Rect, Stroke, Transformed};
pub use hud::{HudAction, HudColors, HudFrame, HudOverlay, HudState, HudTheme};
pub use painter::{paint_display_list, to_color32, EguiCanvas, TrailCompositor};
pub use pipeline::RenderState;
