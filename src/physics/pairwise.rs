//! Proximity connections between particles.
//!
//! This is the only quadratic pass in the engine; particle counts stay in
//! the tens, so a full scan each tick is cheap enough at 60 fps.

use glam::Vec2;

use crate::config::ParticleFieldParameters;
use crate::state::Particle;

/// A line to draw between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Index of the first particle (always less than `b`)
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub distance: f32,
    pub alpha: f32,
}

/// Distance threshold and opacity falloff for connections
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionRule {
    pub threshold: f32,
    pub base_alpha: f32,
}

impl Default for ConnectionRule {
    fn default() -> Self {
        Self::from(&ParticleFieldParameters::default())
    }
}

impl From<&ParticleFieldParameters> for ConnectionRule {
    fn from(params: &ParticleFieldParameters) -> Self {
        Self {
            threshold: params.connection_distance,
            base_alpha: params.connection_alpha,
        }
    }
}

impl ConnectionRule {
    /// Line opacity at `distance`: linear falloff reaching zero at the threshold
    pub fn alpha_at(&self, distance: f32) -> Option<f32> {
        if distance < self.threshold {
            Some((1.0 - distance / self.threshold) * self.base_alpha)
        } else {
            None
        }
    }

    /// Collect connections for every unordered pair into `out` (cleared first)
    pub fn connections_into(&self, particles: &[Particle], out: &mut Vec<Connection>) {
        out.clear();
        for (a, p) in particles.iter().enumerate() {
            for (offset, q) in particles[a + 1..].iter().enumerate() {
                let distance = p.position.distance(q.position);
                if let Some(alpha) = self.alpha_at(distance) {
                    out.push(Connection {
                        a,
                        b: a + 1 + offset,
                        from: p.position,
                        to: q.position,
                        distance,
                        alpha,
                    });
                }
            }
        }
    }

    pub fn connections(&self, particles: &[Particle]) -> Vec<Connection> {
        let mut out = Vec::new();
        self.connections_into(particles, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 2.0, 0.5)
    }

    #[test]
    fn test_alpha_falloff() {
        let rule = ConnectionRule::default();
        assert!((rule.alpha_at(0.0).unwrap() - 0.2).abs() < 1e-6);
        assert!((rule.alpha_at(50.0).unwrap() - 0.1).abs() < 1e-6);
        assert!((rule.alpha_at(75.0).unwrap() - 0.05).abs() < 1e-6);
        assert!(rule.alpha_at(100.0).is_none());
        assert!(rule.alpha_at(140.0).is_none());
    }

    #[test]
    fn test_each_pair_once() {
        let rule = ConnectionRule::default();
        let particles = [at(0.0, 0.0), at(30.0, 0.0), at(60.0, 0.0), at(500.0, 500.0)];
        let connections = rule.connections(&particles);
        let pairs: Vec<(usize, usize)> = connections.iter().map(|c| (c.a, c.b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_empty_and_single() {
        let rule = ConnectionRule::default();
        assert!(rule.connections(&[]).is_empty());
        assert!(rule.connections(&[at(1.0, 1.0)]).is_empty());
    }
}
