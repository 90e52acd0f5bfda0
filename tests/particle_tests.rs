//! Integration tests for the particle field.
//!
//! Tests verify:
//! - Particles stay inside the field whatever their speed
//! - Pointer attraction accelerates particles toward the pointer
//! - Connection opacity falls off linearly to the threshold
//! - The rendered frame carries one line per connected pair

use cytoscope::config::ParticleFieldParameters;
use cytoscope::physics::{ConnectionRule, ParticleRule};
use cytoscope::render::{DisplayList, DrawCommand};
use cytoscope::state::{seed_particles, Particle};
use cytoscope::view::{ParticleFieldView, View, ViewInput};
use cytoscope::clock::FrameTick;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

fn tick(index: u64) -> FrameTick {
    FrameTick {
        index,
        delta: Duration::from_millis(16),
        elapsed: Duration::from_millis(16 * index),
    }
}

fn stationary(x: f32, y: f32) -> Particle {
    Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0, 0.5)
}

// ============================================================================
// Update Rule Tests
// ============================================================================

#[test]
fn test_particles_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let params = ParticleFieldParameters {
        max_initial_speed: 25.0,
        ..Default::default()
    };
    let mut particles = seed_particles(&mut rng, BOUNDS, &params);
    let rule = ParticleRule::from(&params);

    for step in 0..500 {
        let pointer = (step % 3 == 0).then_some(Vec2::new(400.0, 300.0));
        rule.step_all(particles.as_mut_slice(), BOUNDS, pointer);
        for p in particles.iter() {
            assert!(
                p.position.x >= p.radius && p.position.x <= BOUNDS.x - p.radius,
                "x out of bounds at step {}: {:?}",
                step,
                p.position
            );
            assert!(
                p.position.y >= p.radius && p.position.y <= BOUNDS.y - p.radius,
                "y out of bounds at step {}: {:?}",
                step,
                p.position
            );
        }
    }
}

#[test]
fn test_attraction_increases_speed_toward_pointer() {
    let rule = ParticleRule::default();
    let pointer = Vec2::new(150.0, 100.0);
    let mut particle = stationary(100.0, 100.0);

    let mut previous = 0.0;
    for step in 0..10 {
        rule.apply(&mut particle, BOUNDS, Some(pointer));
        let toward = particle.velocity.dot((pointer - particle.position).normalize());
        assert!(
            toward > previous,
            "Speed toward pointer should grow at step {}: {} <= {}",
            step,
            toward,
            previous
        );
        previous = toward;
    }
}

#[test]
fn test_far_pointer_has_no_effect() {
    let rule = ParticleRule::default();
    let mut particle = stationary(100.0, 100.0);
    rule.apply(&mut particle, BOUNDS, Some(Vec2::new(500.0, 500.0)));
    assert_eq!(particle.velocity, Vec2::ZERO);
}

#[test]
fn test_speed_cap_when_configured() {
    let rule = ParticleRule {
        max_speed: Some(3.0),
        ..Default::default()
    };
    let mut particle = stationary(100.0, 100.0);
    for _ in 0..20 {
        rule.apply(&mut particle, BOUNDS, Some(Vec2::new(250.0, 100.0)));
    }
    assert!(particle.velocity.length() <= 3.0 + 1e-5);
}

// ============================================================================
// Pairwise Pass Tests
// ============================================================================

#[test]
fn test_connection_alpha_formula() {
    let rule = ConnectionRule::default();
    for distance in [0.0, 25.0, 50.0, 99.0] {
        let alpha = rule.alpha_at(distance).unwrap();
        let expected = (1.0 - distance / 100.0) * 0.2;
        assert!((alpha - expected).abs() < 1e-6, "alpha at {}: {}", distance, alpha);
    }
    assert!(rule.alpha_at(100.0).is_none());
    assert!(rule.alpha_at(150.0).is_none());
}

#[test]
fn test_each_pair_connected_once() {
    let rule = ConnectionRule::default();
    let particles = vec![stationary(0.0, 0.0), stationary(30.0, 0.0), stationary(60.0, 0.0)];
    let connections = rule.connections(&particles);

    // 0-1 (30), 0-2 (60), 1-2 (30)
    assert_eq!(connections.len(), 3);
    assert!(connections.iter().all(|c| c.a < c.b));
}

// ============================================================================
// View Tests
// ============================================================================

#[test]
fn test_two_stationary_particles_draw_one_line_per_frame() {
    let params = ParticleFieldParameters::default();
    let mut view = ParticleFieldView::with_particles(
        &params,
        BOUNDS,
        vec![stationary(100.0, 100.0), stationary(150.0, 100.0)],
    );

    let mut frame = DisplayList::new(BOUNDS);
    for index in 0..60 {
        view.tick(&tick(index));
        frame.reset(BOUNDS);
        view.paint(&mut frame);

        let lines: Vec<_> = frame.lines().collect();
        assert_eq!(lines.len(), 1, "tick {} should draw exactly one line", index);
        if index == 0 {
            assert!((lines[0].2.color.a - 0.1).abs() < 1e-6);
        }
    }
}

#[test]
fn test_frame_starts_with_trail_fade() {
    let mut rng = StdRng::seed_from_u64(3);
    let params = ParticleFieldParameters::default();
    let mut view = ParticleFieldView::new(&params, BOUNDS, &mut rng);
    view.tick(&tick(0));

    let mut frame = DisplayList::new(BOUNDS);
    view.paint(&mut frame);

    assert!(matches!(frame.commands()[0], DrawCommand::Fade { .. }));
    assert_eq!(frame.fade_color().map(|c| c.a), Some(params.fade_alpha));
    assert_eq!(frame.circles().count(), params.count);
}

#[test]
fn test_pointer_leave_stops_attraction() {
    let params = ParticleFieldParameters::default();
    let mut view = ParticleFieldView::with_particles(&params, BOUNDS, vec![stationary(100.0, 100.0)]);

    view.handle_input(ViewInput::PointerMoved(Vec2::new(120.0, 100.0)));
    assert_eq!(view.pointer(), Some(Vec2::new(120.0, 100.0)));
    view.handle_input(ViewInput::PointerLeft);
    assert_eq!(view.pointer(), None);

    view.tick(&tick(0));
    assert_eq!(view.particles()[0].velocity, Vec2::ZERO);
}

#[test]
fn test_resize_changes_bounds() {
    let params = ParticleFieldParameters::default();
    let mut view = ParticleFieldView::with_particles(&params, BOUNDS, vec![stationary(700.0, 500.0)]);
    view.handle_input(ViewInput::Resized(Vec2::new(300.0, 200.0)));
    view.tick(&tick(0));

    assert_eq!(view.canvas_size(), Vec2::new(300.0, 200.0));
    let p = view.particles()[0];
    assert!(p.position.x <= 298.0 && p.position.y <= 198.0);
}
