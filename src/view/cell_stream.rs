//! Stylised cells falling down the timeline.

use glam::Vec2;
use rand::Rng;

use super::{ReadoutDetail, View, ViewInput, ViewKind, ViewReadout};
use crate::clock::FrameTick;
use crate::config::CellStreamParameters;
use crate::physics::CellRule;
use crate::render::{scene, Canvas};
use crate::state::{seed_cells, Cell, EntityStore};
use crate::viewport::InputChannel;

pub struct CellStreamView {
    bounds: Vec2,
    cells: EntityStore<Cell>,
    rule: CellRule,
    fade_alpha: f32,
}

impl CellStreamView {
    pub fn new<R: Rng + ?Sized>(params: &CellStreamParameters, bounds: Vec2, rng: &mut R) -> Self {
        Self {
            bounds,
            cells: seed_cells(rng, bounds, params),
            rule: CellRule::from(params),
            fade_alpha: params.fade_alpha,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        self.cells.as_slice()
    }
}

impl View for CellStreamView {
    fn kind(&self) -> ViewKind {
        ViewKind::CellStream
    }

    fn canvas_size(&self) -> Vec2 {
        self.bounds
    }

    fn channels(&self) -> &'static [InputChannel] {
        &[InputChannel::Resize]
    }

    fn handle_input(&mut self, input: ViewInput) {
        if let ViewInput::Resized(size) = input {
            self.bounds = size;
        }
    }

    fn tick(&mut self, _tick: &FrameTick) {
        self.rule.step_all(self.cells.as_mut_slice(), self.bounds);
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        scene::paint_cell_stream(canvas, self.cells.as_slice(), self.fade_alpha);
    }

    fn readout(&self) -> ViewReadout {
        ViewReadout {
            kind: self.kind(),
            canvas: self.bounds,
            entity_count: self.cells.len(),
            connection_count: 0,
            detail: ReadoutDetail::None,
        }
    }
}
