//! Animated views and the host that runs one of them at a time.
//!
//! A view owns its entities, rules and timers. It is built when the host
//! activates it and dropped on deactivation, so no state survives a switch.

mod cell_stream;
mod helix;
mod host;
mod microscope;
mod particle_field;
mod scan;

pub use cell_stream::CellStreamView;
pub use helix::HelixView;
pub use host::ViewHost;
pub use microscope::MicroscopeView;
pub use particle_field::ParticleFieldView;
pub use scan::ScanView;

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use rand::rngs::StdRng;

use crate::clock::FrameTick;
use crate::config::Parameters;
use crate::render::Canvas;
use crate::scan::{DetectionRecord, ScanPhase};
use crate::viewport::{InputChannel, StainMode};

/// The five animated views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    ParticleField,
    CellStream,
    Helix,
    Microscope,
    Scan,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::ParticleField,
        ViewKind::CellStream,
        ViewKind::Helix,
        ViewKind::Microscope,
        ViewKind::Scan,
    ];

    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            ViewKind::ParticleField => "particles",
            ViewKind::CellStream => "cells",
            ViewKind::Helix => "helix",
            ViewKind::Microscope => "microscope",
            ViewKind::Scan => "scan",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::ParticleField => "Particle Field",
            ViewKind::CellStream => "Cell Stream",
            ViewKind::Helix => "DNA Helix",
            ViewKind::Microscope => "Virtual Microscope",
            ViewKind::Scan => "AI Scan",
        }
    }

    /// Fixed canvas size, or `None` for views that fill the surface
    pub fn fixed_canvas(self, params: &Parameters) -> Option<Vec2> {
        match self {
            ViewKind::Microscope => Some(Vec2::splat(params.microscope.canvas_size)),
            ViewKind::Scan => Some(Vec2::new(
                params.scan.canvas_width,
                params.scan.canvas_height,
            )),
            _ => None,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown view '{}', expected one of: particles, cells, helix, microscope, scan",
                    s
                )
            })
    }
}

/// Pointer and surface input, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewInput {
    PointerMoved(Vec2),
    PointerLeft,
    PointerPressed(Vec2),
    PointerReleased,
    Resized(Vec2),
}

impl ViewInput {
    pub fn channel(&self) -> InputChannel {
        match self {
            ViewInput::PointerMoved(_) | ViewInput::PointerLeft => InputChannel::PointerMove,
            ViewInput::PointerPressed(_) | ViewInput::PointerReleased => {
                InputChannel::PointerButton
            }
            ViewInput::Resized(_) => InputChannel::Resize,
        }
    }
}

/// Discrete control selections
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    SetFocus(f32),
    SetZoom(f32),
    SetStain(StainMode),
    ResetViewport,
    StartScan,
}

/// View-specific state shown by the HUD
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReadoutDetail {
    #[default]
    None,
    Microscope {
        focus: f32,
        zoom: f32,
        pan: Vec2,
        stain: StainMode,
        blur: f32,
    },
    Scan {
        phase: ScanPhase,
        scan_line: f32,
        progress: f32,
        detections: Vec<DetectionRecord>,
    },
}

/// Snapshot of the active view for display
#[derive(Debug, Clone, PartialEq)]
pub struct ViewReadout {
    pub kind: ViewKind,
    pub canvas: Vec2,
    pub entity_count: usize,
    pub connection_count: usize,
    pub detail: ReadoutDetail,
}

/// One animated view
pub trait View {
    fn kind(&self) -> ViewKind;

    /// Size of the area this view paints
    fn canvas_size(&self) -> Vec2;

    /// Input channels the host registers listeners for
    fn channels(&self) -> &'static [InputChannel] {
        &[]
    }

    fn handle_input(&mut self, _input: ViewInput) {}

    /// Apply a control selection. Returns `true` if the view changed.
    fn command(&mut self, _command: ViewCommand) -> bool {
        false
    }

    /// Advance the simulation by one frame
    fn tick(&mut self, tick: &FrameTick);

    /// Paint the current state
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Release timers before the view is dropped. Must be idempotent.
    fn teardown(&mut self) {}

    fn readout(&self) -> ViewReadout;
}

/// Build and seed a view for a surface of `surface` size
pub fn build_view(
    kind: ViewKind,
    params: &Parameters,
    surface: Vec2,
    rng: &mut StdRng,
) -> Box<dyn View> {
    match kind {
        ViewKind::ParticleField => Box::new(ParticleFieldView::new(
            &params.particle_field,
            surface,
            rng,
        )),
        ViewKind::CellStream => Box::new(CellStreamView::new(&params.cell_stream, surface, rng)),
        ViewKind::Helix => Box::new(HelixView::new(&params.helix, surface, rng)),
        ViewKind::Microscope => Box::new(MicroscopeView::new(&params.microscope, rng)),
        ViewKind::Scan => Box::new(ScanView::new(&params.scan, rng)),
    }
}
