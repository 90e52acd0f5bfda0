//! WebGPU surface setup and the per-frame render pass.
//!
//! The views draw through egui, so the GPU side is a single pass that
//! clears to the base colour followed by the egui pass.

use std::sync::Arc;

use anyhow::Result;
use glam::Vec2;
use winit::event::WindowEvent;
use winit::{dpi::PhysicalSize, window::Window};

use super::canvas::{Color, DisplayList};
use super::hud::{HudFrame, HudOverlay};
use super::painter::TrailCompositor;
use super::style::BASE;

/// Main render state managing all GPU resources
pub struct RenderState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,

    /// Instrument panels and the egui renderer
    pub hud: HudOverlay,
    /// Recent frames of the active view
    trail: TrailCompositor,
    clear_color: wgpu::Color,
}

impl RenderState {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // The Arc<Window> is stored in RenderState, so it outlives the surface.
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        log::info!("Using adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Cytoscope Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let hud = HudOverlay::new(&window, &device, surface_format);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            hud,
            trail: TrailCompositor::new(),
            clear_color: clear_color(BASE),
        })
    }

    /// Drawable area in logical points, `None` while minimised
    pub fn logical_size(&self) -> Option<Vec2> {
        if self.size.width == 0 || self.size.height == 0 {
            return None;
        }
        let scale = self.window.scale_factor() as f32;
        Some(Vec2::new(self.size.width as f32, self.size.height as f32) / scale)
    }

    /// Convert a physical cursor position to logical points
    pub fn to_logical(&self, x: f64, y: f64) -> Vec2 {
        let scale = self.window.scale_factor();
        Vec2::new((x / scale) as f32, (y / scale) as f32)
    }

    /// Resize the render surface
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
        self.size = new_size;
    }

    /// Forward a window event to egui, returns true if it was consumed
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        self.hud.handle_event(&self.window, event)
    }

    /// Add the active view's newest frame to the trail
    pub fn push_frame(&mut self, frame: &DisplayList) {
        self.trail.push(frame);
    }

    /// Forget the trail, e.g. after switching views
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Draw one frame: clear, then the view trail and HUD through egui
    pub fn render(&mut self, frame: &HudFrame<'_>, origin: Vec2) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let _clear_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        let (paint_jobs, textures_delta) = self.hud.render(&self.window, frame, &self.trail, origin);
        let screen_descriptor = self.hud.screen_descriptor(&self.window);
        self.hud.paint(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            screen_descriptor,
            paint_jobs,
            textures_delta,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Linear-space clear colour for an sRGB surface
fn clear_color(color: Color) -> wgpu::Color {
    let decode = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    wgpu::Color {
        r: decode(color.r),
        g: decode(color.g),
        b: decode(color.b),
        a: color.a as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_color_is_linear() {
        let c = clear_color(Color::rgb(255, 0, 128));
        assert!((c.r - 1.0).abs() < 1e-9);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2158).abs() < 1e-3);
        assert_eq!(c.a, 1.0);
    }
}
