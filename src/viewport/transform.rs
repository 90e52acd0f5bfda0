//! Pan/zoom/focus/stain state of the specimen viewer.
//!
//! Zoom scales about the canvas centre and composes with the pan offset;
//! focus never moves geometry, it only sets the post-render blur.

use glam::{Affine2, Vec2};

use crate::config::MicroscopeParameters;

/// Histological stain preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StainMode {
    /// Hematoxylin and eosin, general histology
    #[default]
    HematoxylinEosin,
    /// Papanicolaou, cervical screening
    Papanicolaou,
}

impl StainMode {
    pub const ALL: [StainMode; 2] = [StainMode::HematoxylinEosin, StainMode::Papanicolaou];

    pub fn label(self) -> &'static str {
        match self {
            StainMode::HematoxylinEosin => "H&E",
            StainMode::Papanicolaou => "Pap",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            StainMode::HematoxylinEosin => StainMode::Papanicolaou,
            StainMode::Papanicolaou => StainMode::HematoxylinEosin,
        }
    }
}

/// Focus at which the specimen is sharpest
pub const FOCUS_SHARP: f32 = 50.0;
pub const FOCUS_MAX: f32 = 100.0;

/// Viewer controls. All setters clamp to the declared ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportTransform {
    focus: f32,
    zoom: f32,
    pan: Vec2,
    stain: StainMode,
    zoom_min: f32,
    zoom_max: f32,
    pan_damping: f32,
    blur_divisor: f32,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(&MicroscopeParameters::default())
    }
}

impl ViewportTransform {
    pub fn new(params: &MicroscopeParameters) -> Self {
        let zoom_min = params.zoom_min.min(params.zoom_max);
        let zoom_max = params.zoom_max.max(params.zoom_min);
        Self {
            focus: FOCUS_SHARP,
            zoom: 1.0_f32.max(zoom_min).min(zoom_max),
            pan: Vec2::ZERO,
            stain: StainMode::default(),
            zoom_min,
            zoom_max,
            pan_damping: params.pan_damping,
            blur_divisor: if params.blur_divisor > 0.0 {
                params.blur_divisor
            } else {
                10.0
            },
        }
    }

    pub fn focus(&self) -> f32 {
        self.focus
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn stain(&self) -> StainMode {
        self.stain
    }

    /// Returns `true` if the value changed
    pub fn set_focus(&mut self, focus: f32) -> bool {
        let focus = focus.max(0.0).min(FOCUS_MAX);
        let changed = focus != self.focus;
        self.focus = focus;
        changed
    }

    /// Out-of-range zoom is clamped to the nearest bound. Returns `true` if the value changed.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        let zoom = zoom.max(self.zoom_min).min(self.zoom_max);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    pub fn set_stain(&mut self, stain: StainMode) -> bool {
        let changed = stain != self.stain;
        self.stain = stain;
        changed
    }

    /// Accumulate a raw drag delta, damped. Pan is unbounded.
    pub fn pan_by_drag(&mut self, delta: Vec2) -> bool {
        let step = delta * self.pan_damping;
        self.pan += step;
        step != Vec2::ZERO
    }

    /// Back to sharp focus, unit zoom and no pan. The stain is kept.
    pub fn reset(&mut self) {
        self.focus = FOCUS_SHARP;
        self.zoom = 1.0_f32.max(self.zoom_min).min(self.zoom_max);
        self.pan = Vec2::ZERO;
    }

    /// Blur radius of the post-render filter: U-shaped around sharp focus
    pub fn blur_radius(&self) -> f32 {
        (self.focus - FOCUS_SHARP).abs() / self.blur_divisor
    }

    /// Specimen-to-canvas transform for a canvas of `size`
    pub fn to_affine(&self, size: Vec2) -> Affine2 {
        let center = size / 2.0;
        Affine2::from_translation(center + self.pan)
            * Affine2::from_scale(Vec2::splat(self.zoom))
            * Affine2::from_translation(-center)
    }
}
