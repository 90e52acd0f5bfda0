//! Double-helix background strands.

use std::f32::consts::TAU;

use rand::Rng;

use super::store::{uniform, EntityStore};
use crate::config::HelixParameters;

/// A point orbiting a strand anchor, drawn as the helix cross-link
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Satellite {
    /// Orbital angle at baseline zero (radians)
    pub angle: f32,
    /// Horizontal orbit radius; the vertical radius is 60% of it
    pub orbit_radius: f32,
}

/// One vertical strand of the helix background
#[derive(Debug, Clone, PartialEq)]
pub struct HelixStrand {
    pub lane: usize,
    /// Vertical offset of the strand, advancing every tick
    pub baseline: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
    /// Baseline advance per tick
    pub speed: f32,
    pub satellites: Vec<Satellite>,
}

impl HelixStrand {
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        lane: usize,
        height: f32,
        params: &HelixParameters,
    ) -> Self {
        let fraction = if params.strand_count == 0 {
            0.0
        } else {
            lane as f32 / params.strand_count as f32
        };
        let satellites = (0..params.satellites_per_strand)
            .map(|_| Satellite {
                angle: uniform(rng, 0.0, TAU),
                orbit_radius: uniform(rng, params.orbit_radius_min, params.orbit_radius_max),
            })
            .collect();

        Self {
            lane,
            baseline: fraction * height,
            amplitude: params.amplitude,
            frequency: params.frequency,
            phase: fraction * TAU,
            speed: uniform(rng, params.speed_min, params.speed_max),
            satellites,
        }
    }
}

/// Seed the strands, spaced evenly down the viewport
pub fn seed_strands<R: Rng + ?Sized>(
    rng: &mut R,
    height: f32,
    params: &HelixParameters,
) -> EntityStore<HelixStrand> {
    EntityStore::seed_with(params.strand_count, |lane| {
        HelixStrand::random(rng, lane, height, params)
    })
}
