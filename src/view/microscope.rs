//! Interactive specimen viewer: drag to pan, zoom, focus and stain.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{ReadoutDetail, View, ViewCommand, ViewInput, ViewKind, ViewReadout};
use crate::clock::FrameTick;
use crate::config::MicroscopeParameters;
use crate::render::{scene, Canvas};
use crate::state::Specimen;
use crate::viewport::{DragTracker, InputChannel, ViewportTransform};

pub struct MicroscopeView {
    params: MicroscopeParameters,
    specimen: Specimen,
    viewport: ViewportTransform,
    drag: DragTracker,
    rng: StdRng,
}

impl MicroscopeView {
    pub fn new<R: Rng + ?Sized>(params: &MicroscopeParameters, rng: &mut R) -> Self {
        let mut rng = StdRng::seed_from_u64(rng.gen());
        Self {
            params: params.clone(),
            specimen: Specimen::lattice(&mut rng, params),
            viewport: ViewportTransform::new(params),
            drag: DragTracker::default(),
            rng,
        }
    }

    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    pub fn specimen(&self) -> &Specimen {
        &self.specimen
    }

    fn changed(&mut self) {
        if self.params.reseed_on_redraw {
            self.specimen = Specimen::lattice(&mut self.rng, &self.params);
        }
    }
}

impl View for MicroscopeView {
    fn kind(&self) -> ViewKind {
        ViewKind::Microscope
    }

    fn canvas_size(&self) -> Vec2 {
        Vec2::splat(self.params.canvas_size)
    }

    fn channels(&self) -> &'static [InputChannel] {
        &[InputChannel::PointerMove, InputChannel::PointerButton]
    }

    fn handle_input(&mut self, input: ViewInput) {
        match input {
            ViewInput::PointerPressed(p) => self.drag.begin(p),
            ViewInput::PointerMoved(p) => {
                if let Some(delta) = self.drag.drag_to(p) {
                    if self.viewport.pan_by_drag(delta) {
                        self.changed();
                    }
                }
            }
            ViewInput::PointerReleased | ViewInput::PointerLeft => self.drag.end(),
            ViewInput::Resized(_) => {}
        }
    }

    fn command(&mut self, command: ViewCommand) -> bool {
        let changed = match command {
            ViewCommand::SetFocus(focus) => self.viewport.set_focus(focus),
            ViewCommand::SetZoom(zoom) => self.viewport.set_zoom(zoom),
            ViewCommand::SetStain(stain) => self.viewport.set_stain(stain),
            ViewCommand::ResetViewport => {
                let before = self.viewport.clone();
                self.viewport.reset();
                before != self.viewport
            }
            ViewCommand::StartScan => false,
        };
        if changed {
            self.changed();
        }
        changed
    }

    fn tick(&mut self, _tick: &FrameTick) {}

    fn paint(&self, canvas: &mut dyn Canvas) {
        scene::paint_specimen(canvas, &self.specimen, &self.viewport);
    }

    fn teardown(&mut self) {
        self.drag.end();
    }

    fn readout(&self) -> ViewReadout {
        ViewReadout {
            kind: self.kind(),
            canvas: self.canvas_size(),
            entity_count: self.specimen.len(),
            connection_count: 0,
            detail: ReadoutDetail::Microscope {
                focus: self.viewport.focus(),
                zoom: self.viewport.zoom(),
                pan: self.viewport.pan(),
                stain: self.viewport.stain(),
                blur: self.viewport.blur_radius(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::StainMode;

    fn view(reseed: bool) -> MicroscopeView {
        let params = MicroscopeParameters {
            reseed_on_redraw: reseed,
            ..MicroscopeParameters::default()
        };
        MicroscopeView::new(&params, &mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_drag_pans_with_damping() {
        let mut v = view(false);
        v.handle_input(ViewInput::PointerMoved(Vec2::new(10.0, 10.0)));
        assert_eq!(v.viewport().pan(), Vec2::ZERO);

        v.handle_input(ViewInput::PointerPressed(Vec2::new(100.0, 100.0)));
        v.handle_input(ViewInput::PointerMoved(Vec2::new(150.0, 80.0)));
        v.handle_input(ViewInput::PointerReleased);
        v.handle_input(ViewInput::PointerMoved(Vec2::new(400.0, 400.0)));
        assert!(v.viewport().pan().abs_diff_eq(Vec2::new(5.0, -2.0), 1e-5));
    }

    #[test]
    fn test_specimen_stable_across_controls() {
        let mut v = view(false);
        let before = v.specimen().clone();
        assert!(v.command(ViewCommand::SetStain(StainMode::Papanicolaou)));
        assert!(v.command(ViewCommand::SetZoom(2.0)));
        assert_eq!(v.specimen(), &before);
    }

    #[test]
    fn test_reseed_on_redraw() {
        let mut v = view(true);
        let before = v.specimen().clone();
        assert!(v.command(ViewCommand::SetFocus(30.0)));
        assert_ne!(v.specimen(), &before);
        // unchanged values do not count as a redraw
        let after = v.specimen().clone();
        assert!(!v.command(ViewCommand::SetFocus(30.0)));
        assert_eq!(v.specimen(), &after);
    }
}
