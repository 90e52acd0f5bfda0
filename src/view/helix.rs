//! Drifting double-helix background with floating molecules.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use super::{ReadoutDetail, View, ViewInput, ViewKind, ViewReadout};
use crate::clock::FrameTick;
use crate::config::HelixParameters;
use crate::physics::{floating_molecules, HelixRule, SatellitePose};
use crate::render::{scene, Canvas};
use crate::state::{seed_strands, EntityStore, HelixStrand};
use crate::viewport::InputChannel;

pub struct HelixView {
    bounds: Vec2,
    strands: EntityStore<HelixStrand>,
    rule: HelixRule,
    poses: Vec<Vec<SatellitePose>>,
    molecules: Vec<Vec2>,
    molecule_count: usize,
    elapsed: Duration,
    fade_alpha: f32,
}

impl HelixView {
    pub fn new<R: Rng + ?Sized>(params: &HelixParameters, bounds: Vec2, rng: &mut R) -> Self {
        let mut view = Self {
            bounds,
            strands: seed_strands(rng, bounds.y, params),
            rule: HelixRule::from(params),
            poses: Vec::new(),
            molecules: Vec::new(),
            molecule_count: params.molecule_count,
            elapsed: Duration::ZERO,
            fade_alpha: params.fade_alpha,
        };
        view.refresh_geometry();
        view
    }

    fn refresh_geometry(&mut self) {
        self.poses = self
            .strands
            .iter()
            .map(|s| self.rule.poses(s, self.bounds.x))
            .collect();
        self.molecules = floating_molecules(self.elapsed, self.bounds, self.molecule_count);
    }

    pub fn strands(&self) -> &[HelixStrand] {
        self.strands.as_slice()
    }

    /// Satellite poses per strand as of the last tick
    pub fn poses(&self) -> &[Vec<SatellitePose>] {
        &self.poses
    }

    pub fn molecules(&self) -> &[Vec2] {
        &self.molecules
    }
}

impl View for HelixView {
    fn kind(&self) -> ViewKind {
        ViewKind::Helix
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

    fn tick(&mut self, tick: &FrameTick) {
        self.rule.step_all(self.strands.as_mut_slice(), self.bounds.y);
        self.elapsed = tick.elapsed;
        self.refresh_geometry();
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        scene::paint_helix(
            canvas,
            self.poses.iter().map(Vec::as_slice),
            &self.molecules,
            self.fade_alpha,
        );
    }

    fn readout(&self) -> ViewReadout {
        let satellites: usize = self.strands.iter().map(|s| s.satellites.len()).sum();
        ViewReadout {
            kind: self.kind(),
            canvas: self.bounds,
            entity_count: self.strands.len() + satellites,
            connection_count: satellites,
            detail: ReadoutDetail::None,
        }
    }
}
