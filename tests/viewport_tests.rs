//! Integration tests for the microscope viewer.
//!
//! Tests verify:
//! - Zoom clamps to its bounds and the neutral transform is the identity
//! - Focus away from 50 blurs the frame symmetrically
//! - Dragging the slide through the host pans it by the damped delta
//! - Stain selection recolours the specimen

use std::rc::Rc;

use cytoscope::clock::ManualClock;
use cytoscope::config::{MicroscopeParameters, Parameters};
use cytoscope::render::DrawCommand;
use cytoscope::view::{ReadoutDetail, ViewCommand, ViewHost, ViewKind};
use cytoscope::viewport::{StainMode, ViewportTransform, FOCUS_SHARP};
use glam::{Affine2, Vec2};
use std::time::Duration;

fn microscope_host() -> (ViewHost, ManualClock) {
    let time = ManualClock::new();
    let mut host = ViewHost::with_seed(Parameters::default(), Rc::new(time.clone()), 8);
    host.set_surface(Some(Vec2::new(900.0, 700.0)));
    assert!(host.activate(ViewKind::Microscope));
    (host, time)
}

fn pan_of(host: &ViewHost) -> Vec2 {
    match host.readout().map(|r| r.detail) {
        Some(ReadoutDetail::Microscope { pan, .. }) => pan,
        other => panic!("not a microscope readout: {:?}", other),
    }
}

// ============================================================================
// Transform Tests
// ============================================================================

#[test]
fn test_zoom_clamps_to_bounds() {
    let mut viewport = ViewportTransform::new(&MicroscopeParameters::default());
    viewport.set_zoom(10.0);
    assert_eq!(viewport.zoom(), 3.0);
    viewport.set_zoom(0.1);
    assert_eq!(viewport.zoom(), 0.5);
    assert!(!viewport.set_zoom(0.2), "Clamped repeat is not a change");
}

#[test]
fn test_neutral_transform_is_identity() {
    let viewport = ViewportTransform::default();
    let affine = viewport.to_affine(Vec2::splat(500.0));
    let p = Vec2::new(123.0, 45.0);
    assert!(affine.transform_point2(p).abs_diff_eq(p, 1e-4));
    assert!(affine.abs_diff_eq(Affine2::IDENTITY, 1e-5));
}

#[test]
fn test_zoom_scales_about_centre() {
    let mut viewport = ViewportTransform::default();
    viewport.set_zoom(2.0);
    let affine = viewport.to_affine(Vec2::splat(500.0));
    assert!(affine
        .transform_point2(Vec2::splat(250.0))
        .abs_diff_eq(Vec2::splat(250.0), 1e-4));
    assert!(affine
        .transform_point2(Vec2::new(300.0, 250.0))
        .abs_diff_eq(Vec2::new(350.0, 250.0), 1e-4));
}

#[test]
fn test_blur_is_symmetric_around_sharp_focus() {
    let mut viewport = ViewportTransform::default();
    assert_eq!(viewport.blur_radius(), 0.0);
    viewport.set_focus(FOCUS_SHARP + 30.0);
    let far = viewport.blur_radius();
    viewport.set_focus(FOCUS_SHARP - 30.0);
    assert_eq!(viewport.blur_radius(), far);
    assert!((far - 3.0).abs() < 1e-6);
}

#[test]
fn test_reset_keeps_stain() {
    let mut viewport = ViewportTransform::default();
    viewport.set_stain(StainMode::Papanicolaou);
    viewport.set_zoom(2.5);
    viewport.set_focus(10.0);
    viewport.pan_by_drag(Vec2::new(40.0, 40.0));
    viewport.reset();

    assert_eq!(viewport.zoom(), 1.0);
    assert_eq!(viewport.focus(), FOCUS_SHARP);
    assert_eq!(viewport.pan(), Vec2::ZERO);
    assert_eq!(viewport.stain(), StainMode::Papanicolaou);
}

// ============================================================================
// Hosted Viewer Tests
// ============================================================================

#[test]
fn test_drag_pans_slide() {
    let (mut host, _) = microscope_host();
    let origin = host.origin();
    assert_eq!(origin, Vec2::new(200.0, 100.0));

    host.pointer_pressed(origin + Vec2::new(100.0, 100.0));
    host.pointer_moved(origin + Vec2::new(150.0, 80.0));
    host.pointer_released();
    host.pointer_moved(origin + Vec2::new(400.0, 400.0));

    assert!(pan_of(&host).abs_diff_eq(Vec2::new(5.0, -2.0), 1e-5));
}

#[test]
fn test_out_of_focus_frame_is_blurred() {
    let (mut host, time) = microscope_host();
    assert!(host.command(ViewCommand::SetFocus(80.0)));
    time.advance(Duration::from_millis(16));

    let frame = host.frame().unwrap();
    assert!((frame.blur_radius() - 3.0).abs() < 1e-6);
    assert!(matches!(frame.commands()[0], DrawCommand::GradientRect { .. }));
}

#[test]
fn test_stain_changes_palette() {
    let (mut host, time) = microscope_host();
    time.advance(Duration::from_millis(16));
    let before = host.frame().unwrap().clone();

    assert!(host.command(ViewCommand::SetStain(StainMode::Papanicolaou)));
    assert!(!host.command(ViewCommand::SetStain(StainMode::Papanicolaou)));
    time.advance(Duration::from_millis(16));
    let after = host.frame().unwrap().clone();

    assert_eq!(before.circles().count(), after.circles().count());
    let colors_before: Vec<_> = before.circles().map(|(_, _, c)| c).collect();
    let colors_after: Vec<_> = after.circles().map(|(_, _, c)| c).collect();
    assert_ne!(colors_before, colors_after);

    // Positions are stable across redraws
    let centres_before: Vec<_> = before.circles().map(|(p, _, _)| p).collect();
    let centres_after: Vec<_> = after.circles().map(|(p, _, _)| p).collect();
    assert_eq!(centres_before, centres_after);
}

#[test]
fn test_scan_ignores_microscope_commands() {
    let time = ManualClock::new();
    let mut host = ViewHost::with_seed(Parameters::default(), Rc::new(time), 1);
    host.set_surface(Some(Vec2::new(900.0, 700.0)));
    host.activate(ViewKind::Scan);
    assert!(!host.command(ViewCommand::SetZoom(2.0)));
    assert!(!host.command(ViewCommand::ResetViewport));
}
