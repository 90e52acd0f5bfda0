//! Integration tests for view activation and teardown.
//!
//! Tests verify:
//! - Activation without a drawing surface starts nothing
//! - Teardown is idempotent and stops all frames
//! - Each view registers only the listeners it needs
//! - A surface appearing later allows activation

use std::rc::Rc;
use std::time::Duration;

use cytoscope::clock::ManualClock;
use cytoscope::config::Parameters;
use cytoscope::view::{ViewHost, ViewKind};
use cytoscope::viewport::InputChannel;
use glam::Vec2;

fn host() -> (ViewHost, ManualClock) {
    let time = ManualClock::new();
    let host = ViewHost::with_seed(Parameters::default(), Rc::new(time.clone()), 42);
    (host, time)
}

// ============================================================================
// Activation Tests
// ============================================================================

#[test]
fn test_activation_without_surface_is_skipped() {
    let (mut host, time) = host();
    assert!(!host.activate(ViewKind::ParticleField));
    assert!(!host.is_active());
    assert!(!host.is_running());
    assert_eq!(host.listener_count(), 0);

    time.advance(Duration::from_millis(16));
    assert!(host.frame().is_none());
}

#[test]
fn test_empty_surface_counts_as_missing() {
    let (mut host, _) = host();
    host.set_surface(Some(Vec2::new(0.0, 480.0)));
    assert!(host.surface().is_none());
    assert!(!host.activate(ViewKind::Helix));
}

#[test]
fn test_activation_once_surface_appears() {
    let (mut host, time) = host();
    host.activate(ViewKind::CellStream);
    host.set_surface(Some(Vec2::new(640.0, 480.0)));
    assert!(host.activate(ViewKind::CellStream));

    time.advance(Duration::from_millis(16));
    let frame = host.frame().expect("active view produces frames");
    assert_eq!(frame.size(), Vec2::new(640.0, 480.0));
    assert_eq!(host.metrics().frames, 1);
}

#[test]
fn test_every_view_activates() {
    let (mut host, time) = host();
    host.set_surface(Some(Vec2::new(1280.0, 720.0)));

    for kind in ViewKind::ALL {
        assert!(host.activate(kind), "{} should activate", kind);
        assert_eq!(host.kind(), Some(kind));
        time.advance(Duration::from_millis(16));
        let frame = host.frame().expect("frame after activation");
        assert!(!frame.is_empty(), "{} painted nothing", kind);
        assert!(host.metrics().entity_count > 0, "{} has no entities", kind);
    }
}

// ============================================================================
// Teardown Tests
// ============================================================================

#[test]
fn test_teardown_is_idempotent() {
    let (mut host, time) = host();
    host.set_surface(Some(Vec2::new(800.0, 600.0)));
    host.activate(ViewKind::Microscope);

    host.deactivate();
    host.deactivate();
    assert!(!host.is_active());
    assert!(!host.is_running());
    assert_eq!(host.listener_count(), 0);

    time.advance(Duration::from_millis(16));
    assert!(host.frame().is_none(), "No frames after teardown");
}

#[test]
fn test_teardown_without_activation() {
    let (mut host, _) = host();
    host.deactivate();
    assert!(!host.is_active());
}

// ============================================================================
// Listener Tests
// ============================================================================

#[test]
fn test_listeners_follow_active_view() {
    let (mut host, _) = host();
    host.set_surface(Some(Vec2::new(800.0, 600.0)));

    host.activate(ViewKind::ParticleField);
    assert!(host.is_listening(InputChannel::PointerMove));
    assert!(host.is_listening(InputChannel::Resize));
    assert!(!host.is_listening(InputChannel::PointerButton));

    host.activate(ViewKind::Microscope);
    assert!(host.is_listening(InputChannel::PointerButton));
    assert!(!host.is_listening(InputChannel::Resize));

    host.activate(ViewKind::Scan);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_view_names_parse() {
    for kind in ViewKind::ALL {
        let parsed: ViewKind = kind.name().parse().unwrap();
        assert_eq!(parsed, kind);
    }
    assert!("histology".parse::<ViewKind>().is_err());
}
