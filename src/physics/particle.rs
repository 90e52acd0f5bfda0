//! Particle update rule: integration, wall bounce and pointer attraction.

use glam::Vec2;

use crate::config::ParticleFieldParameters;
use crate::state::Particle;

/// Per-tick state transition for free-field particles.
///
/// There is no drag term: velocity picked up near the pointer is kept.
/// `max_speed` bounds the accumulated speed when set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleRule {
    pub attraction_radius: f32,
    pub attraction_strength: f32,
    pub max_speed: Option<f32>,
}

impl Default for ParticleRule {
    fn default() -> Self {
        Self::from(&ParticleFieldParameters::default())
    }
}

impl From<&ParticleFieldParameters> for ParticleRule {
    fn from(params: &ParticleFieldParameters) -> Self {
        Self {
            attraction_radius: params.attraction_radius,
            attraction_strength: params.attraction_strength,
            max_speed: params.max_speed,
        }
    }
}

impl ParticleRule {
    /// Advance one particle by one tick inside a `bounds`-sized field
    pub fn apply(&self, particle: &mut Particle, bounds: Vec2, pointer: Option<Vec2>) {
        particle.position += particle.velocity;

        let r = particle.radius;
        if particle.position.x - r < 0.0 || particle.position.x + r > bounds.x {
            particle.velocity.x = -particle.velocity.x;
        }
        if particle.position.y - r < 0.0 || particle.position.y + r > bounds.y {
            particle.velocity.y = -particle.velocity.y;
        }
        // min before max: a field narrower than the particle pins it at `r`
        particle.position.x = particle.position.x.min(bounds.x - r).max(r);
        particle.position.y = particle.position.y.min(bounds.y - r).max(r);

        if let Some(pointer) = pointer {
            let offset = pointer - particle.position;
            let distance = offset.length();
            if distance > 0.0 && distance < self.attraction_radius {
                particle.velocity += offset / distance * self.attraction_strength;
            }
        }

        if let Some(max_speed) = self.max_speed {
            particle.velocity = particle.velocity.clamp_length_max(max_speed);
        }
    }

    /// Advance every particle. Particles do not influence each other here.
    pub fn step_all(&self, particles: &mut [Particle], bounds: Vec2, pointer: Option<Vec2>) {
        for particle in particles.iter_mut() {
            self.apply(particle, bounds, pointer);
        }
    }
}
