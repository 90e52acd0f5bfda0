//! Free-floating particles drawn towards the pointer.

use glam::Vec2;
use rand::Rng;

use super::{ReadoutDetail, View, ViewInput, ViewKind, ViewReadout};
use crate::clock::FrameTick;
use crate::config::ParticleFieldParameters;
use crate::physics::{Connection, ConnectionRule, ParticleRule};
use crate::render::{scene, Canvas};
use crate::state::{seed_particles, EntityStore, Particle};
use crate::viewport::{InputChannel, PointerState};

pub struct ParticleFieldView {
    bounds: Vec2,
    particles: EntityStore<Particle>,
    rule: ParticleRule,
    connection_rule: ConnectionRule,
    connections: Vec<Connection>,
    pointer: PointerState,
    fade_alpha: f32,
}

impl ParticleFieldView {
    pub fn new<R: Rng + ?Sized>(params: &ParticleFieldParameters, bounds: Vec2, rng: &mut R) -> Self {
        Self::from_store(params, bounds, seed_particles(rng, bounds, params))
    }

    /// A field with exactly these particles, e.g. for a scripted scene
    pub fn with_particles(params: &ParticleFieldParameters, bounds: Vec2, particles: Vec<Particle>) -> Self {
        Self::from_store(params, bounds, EntityStore::from_vec(particles))
    }

    fn from_store(params: &ParticleFieldParameters, bounds: Vec2, particles: EntityStore<Particle>) -> Self {
        Self {
            bounds,
            particles,
            rule: ParticleRule::from(params),
            connection_rule: ConnectionRule::from(params),
            connections: Vec::new(),
            pointer: PointerState::default(),
            fade_alpha: params.fade_alpha,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    /// Connections computed on the last tick
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.position()
    }
}

impl View for ParticleFieldView {
    fn kind(&self) -> ViewKind {
        ViewKind::ParticleField
    }

    fn canvas_size(&self) -> Vec2 {
        self.bounds
    }

    fn channels(&self) -> &'static [InputChannel] {
        &[InputChannel::PointerMove, InputChannel::Resize]
    }

    fn handle_input(&mut self, input: ViewInput) {
        match input {
            ViewInput::PointerMoved(p) => self.pointer.move_to(p),
            ViewInput::PointerLeft => self.pointer.leave(),
            ViewInput::Resized(size) => self.bounds = size,
            _ => {}
        }
    }

    fn tick(&mut self, _tick: &FrameTick) {
        self.rule
            .step_all(self.particles.as_mut_slice(), self.bounds, self.pointer.position());
        self.connection_rule
            .connections_into(self.particles.as_slice(), &mut self.connections);
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        scene::paint_particle_field(
            canvas,
            self.particles.as_slice(),
            &self.connections,
            self.fade_alpha,
        );
    }

    fn readout(&self) -> ViewReadout {
        ViewReadout {
            kind: self.kind(),
            canvas: self.bounds,
            entity_count: self.particles.len(),
            connection_count: self.connections.len(),
            detail: ReadoutDetail::None,
        }
    }
}
