//! Cell stream entities.
//!
//! Cells fall down the timeline with a cosmetic sideways wobble.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::store::{uniform, EntityStore};
use crate::config::CellStreamParameters;

/// Fixed palette a stream cell is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellTint {
    Cyan,
    Teal,
    Sky,
}

impl CellTint {
    pub const ALL: [CellTint; 3] = [CellTint::Cyan, CellTint::Teal, CellTint::Sky];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A single cell in the stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub position: Vec2,
    /// `x` is the residual sideways drift, `y` the fall speed (per tick)
    pub velocity: Vec2,
    pub radius: f32,
    pub tint: CellTint,
    /// Wobble phase (radians); also rotates the chromatin strands
    pub wobble: f32,
    /// Wobble phase advance per tick
    pub wobble_speed: f32,
}

impl Cell {
    /// Random cell seeded at lane slot `index` of `count`
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        index: usize,
        count: usize,
        bounds: Vec2,
        params: &CellStreamParameters,
    ) -> Self {
        let slot = if count == 0 { 0.0 } else { index as f32 / count as f32 };
        Self {
            position: Vec2::new(bounds.x / 2.0, slot * bounds.y),
            velocity: Vec2::new(
                uniform(rng, -params.max_drift, params.max_drift),
                uniform(rng, params.fall_speed_min, params.fall_speed_max),
            ),
            radius: uniform(rng, params.radius_min, params.radius_max),
            tint: CellTint::random(rng),
            wobble: uniform(rng, 0.0, TAU),
            wobble_speed: uniform(rng, params.wobble_speed_min, params.wobble_speed_max),
        }
    }
}

/// Seed the stream, spreading cells evenly down the centre line
pub fn seed_cells<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Vec2,
    params: &CellStreamParameters,
) -> EntityStore<Cell> {
    let count = params.count;
    EntityStore::seed_with(count, |i| Cell::random(rng, i, count, bounds, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cells_start_on_centre_line() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = CellStreamParameters::default();
        let bounds = Vec2::new(300.0, 900.0);
        let cells = seed_cells(&mut rng, bounds, &params);

        assert_eq!(cells.len(), 15);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.position.x, 150.0);
            assert!((cell.position.y - i as f32 * 60.0).abs() < 1e-3);
            assert!(cell.velocity.x >= -0.75 && cell.velocity.x < 0.75);
            assert!(cell.velocity.y >= 1.5 && cell.velocity.y < 2.5);
            assert!(cell.radius >= 6.0 && cell.radius < 10.0);
            assert!(cell.wobble_speed >= 0.02 && cell.wobble_speed < 0.04);
        }
    }
}
