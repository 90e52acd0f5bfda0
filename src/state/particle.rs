//! Free-field particle entities.

use glam::Vec2;
use rand::Rng;

use super::store::{uniform, uniform_point, EntityStore};
use crate::config::ParticleFieldParameters;

/// A glowing dot drifting across the hero canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Canvas position
    pub position: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    pub radius: f32,
    /// Fill opacity in `[0, 1]`
    pub opacity: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    /// Random particle anywhere inside `bounds`
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: Vec2,
        params: &ParticleFieldParameters,
    ) -> Self {
        let speed = params.max_initial_speed;
        Self {
            position: uniform_point(rng, Vec2::ZERO, bounds),
            velocity: uniform_point(rng, Vec2::splat(-speed), Vec2::splat(speed)),
            radius: uniform(rng, params.radius_min, params.radius_max),
            opacity: uniform(rng, params.opacity_min, params.opacity_max),
        }
    }
}

/// Seed the particle field for a viewport of size `bounds`
pub fn seed_particles<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Vec2,
    params: &ParticleFieldParameters,
) -> EntityStore<Particle> {
    EntityStore::seed_with(params.count, |_| Particle::random(rng, bounds, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_attributes_within_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let params = ParticleFieldParameters::default();
        let bounds = Vec2::new(800.0, 600.0);
        let store = seed_particles(&mut rng, bounds, &params);

        assert_eq!(store.len(), 50);
        for p in &store {
            assert!(p.position.x >= 0.0 && p.position.x < bounds.x);
            assert!(p.position.y >= 0.0 && p.position.y < bounds.y);
            assert!(p.velocity.x >= -1.0 && p.velocity.x < 1.0);
            assert!(p.velocity.y >= -1.0 && p.velocity.y < 1.0);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            assert!(p.opacity >= 0.3 && p.opacity < 0.8);
        }
    }
}
