//! HUD overlay system using egui.
//!
//! Paints the active view's frames on egui's background layer and the
//! instrument panels on top of them.

mod panels;
mod state;
mod theme;
mod widgets;

pub use state::HudState;
pub use theme::{HudColors, HudTheme};

use egui::{Context, LayerId};
use egui_wgpu::ScreenDescriptor;
use glam::Vec2;
use winit::event::WindowEvent;
use winit::window::Window;

use super::painter::TrailCompositor;
use crate::config::Parameters;
use crate::state::FrameMetrics;
use crate::view::{ViewCommand, ViewKind, ViewReadout};

/// Something the user asked for through the HUD
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HudAction {
    SwitchView(ViewKind),
    Command(ViewCommand),
}

/// Everything the panels read for one frame
pub struct HudFrame<'a> {
    pub params: &'a Parameters,
    pub metrics: &'a FrameMetrics,
    pub active: Option<ViewKind>,
    pub readout: Option<&'a ViewReadout>,
}

/// HUD overlay manager integrating egui with wgpu
pub struct HudOverlay {
    /// Panel visibility state
    pub state: HudState,
    /// Theme configuration
    pub theme: HudTheme,
    /// egui context
    ctx: Context,
    /// egui-winit state
    egui_state: egui_winit::State,
    /// egui-wgpu renderer
    renderer: egui_wgpu::Renderer,
    /// Actions collected since the last `take_actions`
    pending: Vec<HudAction>,
}

impl HudOverlay {
    pub fn new(window: &Window, device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let ctx = Context::default();
        let theme = HudTheme::default();
        theme.apply(&ctx);

        let viewport_id = ctx.viewport_id();
        let egui_state = egui_winit::State::new(
            ctx.clone(),
            viewport_id,
            window,
            Some(window.scale_factor() as f32),
            None,
        );

        let renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1);

        Self {
            state: HudState::default(),
            theme,
            ctx,
            egui_state,
            renderer,
            pending: Vec::new(),
        }
    }

    /// Handle window events, returns true if egui consumed the event
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        response.consumed
    }

    /// Drain the actions requested since the last call
    pub fn take_actions(&mut self) -> Vec<HudAction> {
        std::mem::take(&mut self.pending)
    }

    /// Build this frame's shapes: the view trail underneath, panels on top.
    ///
    /// `origin` is the view canvas's top-left corner in logical points.
    pub fn render(
        &mut self,
        window: &Window,
        frame: &HudFrame<'_>,
        trail: &TrailCompositor,
        origin: Vec2,
    ) -> (Vec<egui::ClippedPrimitive>, egui::TexturesDelta) {
        let raw_input = self.egui_state.take_egui_input(window);

        let state = &self.state;
        let pending = &mut self.pending;
        let output = self.ctx.run(raw_input, |ctx| {
            let background = ctx.layer_painter(LayerId::background());
            trail.paint(&background, origin);
            panels::render_panels(ctx, state, frame, pending);
        });

        self.egui_state
            .handle_platform_output(window, output.platform_output);

        let pixels_per_point = self.ctx.pixels_per_point();
        let primitives = self.ctx.tessellate(output.shapes, pixels_per_point);

        (primitives, output.textures_delta)
    }

    /// Paint the tessellated frame over the cleared surface
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        screen_descriptor: ScreenDescriptor,
        paint_jobs: Vec<egui::ClippedPrimitive>,
        textures_delta: egui::TexturesDelta,
    ) {
        for (id, image_delta) in &textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in &textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    pub fn screen_descriptor(&self, window: &Window) -> ScreenDescriptor {
        let size = window.inner_size();
        ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        }
    }

    pub fn toggle_hud(&mut self) {
        self.state.toggle_hud();
    }

    pub fn toggle_help(&mut self) {
        self.state.toggle_help();
    }

    /// Check if HUD wants to capture keyboard input
    pub fn wants_keyboard_input(&self) -> bool {
        self.ctx.wants_keyboard_input()
    }
}
