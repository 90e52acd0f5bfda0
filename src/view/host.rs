//! Owns the active view, its frame clock and its input listeners.

use std::rc::Rc;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{build_view, View, ViewCommand, ViewInput, ViewKind, ViewReadout};
use crate::clock::{FrameClock, TimeSource};
use crate::config::Parameters;
use crate::render::DisplayList;
use crate::state::FrameMetrics;
use crate::viewport::{centred_origin, drawable_size, InputChannel, ListenerId, ListenerRegistry};

struct ActiveView {
    view: Box<dyn View>,
    listeners: Vec<ListenerId>,
}

/// Runs at most one view at a time.
///
/// Activation seeds a fresh view, registers its listeners and starts the
/// frame clock; deactivation undoes all three. Input reaches the view only
/// through channels that currently have a registered listener.
pub struct ViewHost {
    params: Parameters,
    clock: FrameClock,
    listeners: ListenerRegistry,
    active: Option<ActiveView>,
    surface: Option<Vec2>,
    frame: DisplayList,
    metrics: FrameMetrics,
    rng: StdRng,
}

impl ViewHost {
    pub fn new(params: Parameters, time: Rc<dyn TimeSource>) -> Self {
        Self::with_rng(params, time, StdRng::from_entropy())
    }

    /// Host whose views are seeded deterministically
    pub fn with_seed(params: Parameters, time: Rc<dyn TimeSource>, seed: u64) -> Self {
        Self::with_rng(params, time, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: Parameters, time: Rc<dyn TimeSource>, rng: StdRng) -> Self {
        Self {
            params,
            clock: FrameClock::new(time),
            listeners: ListenerRegistry::new(),
            active: None,
            surface: None,
            frame: DisplayList::default(),
            metrics: FrameMetrics::new(),
            rng,
        }
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn surface(&self) -> Option<Vec2> {
        self.surface
    }

    /// Update the drawing surface size. `None` (or an empty size) means
    /// there is nothing to draw on.
    pub fn set_surface(&mut self, size: Option<Vec2>) {
        let size = size.and_then(drawable_size);
        if size == self.surface {
            return;
        }
        self.surface = size;
        log::debug!("Surface resized to {:?}", size);

        if let Some(size) = size {
            if self.kind().and_then(|k| k.fixed_canvas(&self.params)).is_none() {
                self.route(ViewInput::Resized(size));
            }
        }
    }

    /// Replace the active view with a fresh `kind`.
    ///
    /// Returns `false` without starting anything when there is no drawing
    /// surface; any previously active view is still torn down.
    pub fn activate(&mut self, kind: ViewKind) -> bool {
        self.deactivate();

        let Some(surface) = self.surface else {
            log::debug!("No drawing surface, skipping activation of {}", kind);
            return false;
        };

        let view = build_view(kind, &self.params, surface, &mut self.rng);
        let listeners = view
            .channels()
            .iter()
            .map(|&channel| self.listeners.register(channel))
            .collect();
        self.active = Some(ActiveView { view, listeners });
        self.metrics.reset();
        self.clock.start();
        log::info!("Activated {} view", kind.title());
        true
    }

    /// Stop the active view and release its timers and listeners. Idempotent.
    pub fn deactivate(&mut self) {
        self.clock.stop();
        if let Some(mut active) = self.active.take() {
            active.view.teardown();
            for id in active.listeners {
                self.listeners.remove(id);
            }
            log::info!("Deactivated {} view", active.view.kind().title());
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn kind(&self) -> Option<ViewKind> {
        self.active.as_ref().map(|a| a.view.kind())
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn metrics(&self) -> &FrameMetrics {
        &self.metrics
    }

    /// Top-left of the active view's canvas on the surface
    pub fn origin(&self) -> Vec2 {
        match (self.active.as_ref(), self.surface) {
            (Some(active), Some(surface)) => {
                if active.view.kind().fixed_canvas(&self.params).is_some() {
                    centred_origin(surface, active.view.canvas_size())
                } else {
                    Vec2::ZERO
                }
            }
            _ => Vec2::ZERO,
        }
    }

    /// Advance and paint the active view by one frame
    pub fn frame(&mut self) -> Option<&DisplayList> {
        let active = self.active.as_mut()?;
        let tick = self.clock.tick()?;

        active.view.tick(&tick);
        self.frame.reset(active.view.canvas_size());
        active.view.paint(&mut self.frame);

        let readout = active.view.readout();
        self.metrics.record(&tick);
        self.metrics.entity_count = readout.entity_count;
        self.metrics.connection_count = readout.connection_count;
        Some(&self.frame)
    }

    /// The last painted frame
    pub fn last_frame(&self) -> &DisplayList {
        &self.frame
    }

    pub fn readout(&self) -> Option<ViewReadout> {
        self.active.as_ref().map(|a| a.view.readout())
    }

    pub fn command(&mut self, command: ViewCommand) -> bool {
        match self.active.as_mut() {
            Some(active) => active.view.command(command),
            None => false,
        }
    }

    /// Pointer moved to `position` in surface coordinates
    pub fn pointer_moved(&mut self, position: Vec2) {
        let local = position - self.origin();
        self.route(ViewInput::PointerMoved(local));
    }

    pub fn pointer_left(&mut self) {
        self.route(ViewInput::PointerLeft);
    }

    pub fn pointer_pressed(&mut self, position: Vec2) {
        let local = position - self.origin();
        self.route(ViewInput::PointerPressed(local));
    }

    pub fn pointer_released(&mut self) {
        self.route(ViewInput::PointerReleased);
    }

    fn route(&mut self, input: ViewInput) {
        if !self.listeners.is_listening(input.channel()) {
            return;
        }
        if let Some(active) = self.active.as_mut() {
            active.view.handle_input(input);
        }
    }

    pub fn is_listening(&self, channel: InputChannel) -> bool {
        self.listeners.is_listening(channel)
    }
}

impl Drop for ViewHost {
    fn drop(&mut self) {
        self.deactivate();
    }
}
