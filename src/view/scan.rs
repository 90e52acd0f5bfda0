//! Mock AI scan widget.

use glam::Vec2;
use rand::Rng;

use super::{ReadoutDetail, View, ViewCommand, ViewKind, ViewReadout};
use crate::clock::FrameTick;
use crate::config::ScanParameters;
use crate::render::{scene, Canvas};
use crate::scan::ScanSequencer;
use crate::state::Specimen;

pub struct ScanView {
    specimen: Specimen,
    sequencer: ScanSequencer,
}

impl ScanView {
    pub fn new<R: Rng + ?Sized>(params: &ScanParameters, rng: &mut R) -> Self {
        Self {
            specimen: Specimen::scattered(rng, params),
            sequencer: ScanSequencer::new(params),
        }
    }

    pub fn with_sequencer<R: Rng + ?Sized>(params: &ScanParameters, sequencer: ScanSequencer, rng: &mut R) -> Self {
        Self {
            specimen: Specimen::scattered(rng, params),
            sequencer,
        }
    }

    pub fn sequencer(&self) -> &ScanSequencer {
        &self.sequencer
    }
}

impl View for ScanView {
    fn kind(&self) -> ViewKind {
        ViewKind::Scan
    }

    fn canvas_size(&self) -> Vec2 {
        self.sequencer.canvas_size()
    }

    fn command(&mut self, command: ViewCommand) -> bool {
        match command {
            ViewCommand::StartScan => self.sequencer.trigger(),
            _ => false,
        }
    }

    fn tick(&mut self, tick: &FrameTick) {
        self.sequencer.advance(tick.delta);
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        scene::paint_scan(canvas, &self.specimen, &self.sequencer);
    }

    fn teardown(&mut self) {
        self.sequencer.teardown();
    }

    fn readout(&self) -> ViewReadout {
        ViewReadout {
            kind: self.kind(),
            canvas: self.canvas_size(),
            entity_count: self.specimen.len(),
            connection_count: 0,
            detail: ReadoutDetail::Scan {
                phase: self.sequencer.phase(),
                scan_line: self.sequencer.scan_line(),
                progress: self.sequencer.progress(),
                detections: self.sequencer.detections().to_vec(),
            },
        }
    }
}
