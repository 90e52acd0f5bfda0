//! Particle field benchmarks

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cytoscope::clock::FrameTick;
use cytoscope::config::ParticleFieldParameters;
use cytoscope::physics::{ConnectionRule, ParticleRule};
use cytoscope::render::DisplayList;
use cytoscope::state::seed_particles;
use cytoscope::view::{ParticleFieldView, View, ViewInput};

const BOUNDS: Vec2 = Vec2::new(1280.0, 720.0);

fn bench_pairwise_pass(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let params = ParticleFieldParameters {
        count: 500, // Larger than the default field
        ..Default::default()
    };
    let particles = seed_particles(&mut rng, BOUNDS, &params);
    let rule = ConnectionRule::from(&params);
    let mut out = Vec::new();

    c.bench_function("pairwise_pass_500", |b| {
        b.iter(|| rule.connections_into(black_box(particles.as_slice()), &mut out))
    });
}

fn bench_particle_step(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let params = ParticleFieldParameters::default();
    let mut particles = seed_particles(&mut rng, BOUNDS, &params);
    let rule = ParticleRule::from(&params);
    let pointer = Some(Vec2::new(640.0, 360.0));

    c.bench_function("particle_step", |b| {
        b.iter(|| rule.step_all(black_box(particles.as_mut_slice()), BOUNDS, pointer))
    });
}

fn bench_field_frame(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let params = ParticleFieldParameters::default();
    let mut view = ParticleFieldView::new(&params, BOUNDS, &mut rng);
    view.handle_input(ViewInput::PointerMoved(Vec2::new(640.0, 360.0)));
    let mut frame = DisplayList::new(BOUNDS);
    let tick = FrameTick {
        index: 0,
        delta: Duration::from_millis(16),
        elapsed: Duration::ZERO,
    };

    c.bench_function("particle_field_frame", |b| {
        b.iter(|| {
            view.tick(black_box(&tick));
            frame.reset(BOUNDS);
            view.paint(&mut frame);
        })
    });
}

criterion_group!(benches, bench_pairwise_pass, bench_particle_step, bench_field_frame);
criterion_main!(benches);
