//! Cell stream update rule.

use glam::Vec2;

use crate::config::CellStreamParameters;
use crate::state::Cell;

/// Wobbling fall with wrap-around at the bottom edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRule {
    pub wobble_amplitude: f32,
    pub drift_factor: f32,
}

impl Default for CellRule {
    fn default() -> Self {
        Self::from(&CellStreamParameters::default())
    }
}

impl From<&CellStreamParameters> for CellRule {
    fn from(params: &CellStreamParameters) -> Self {
        Self {
            wobble_amplitude: params.wobble_amplitude,
            drift_factor: params.drift_factor,
        }
    }
}

impl CellRule {
    pub fn apply(&self, cell: &mut Cell, bounds: Vec2) {
        cell.wobble += cell.wobble_speed;
        cell.position.x += cell.wobble.sin() * self.wobble_amplitude + cell.velocity.x * self.drift_factor;
        cell.position.y += cell.velocity.y;

        if cell.position.y > bounds.y + cell.radius {
            cell.position.y = -cell.radius;
            cell.position.x = bounds.x / 2.0;
        }

        // Soft edges: position is held, velocity is left alone.
        if cell.position.x < cell.radius {
            cell.position.x = cell.radius;
        }
        if cell.position.x > bounds.x - cell.radius {
            cell.position.x = bounds.x - cell.radius;
        }
    }

    pub fn step_all(&self, cells: &mut [Cell], bounds: Vec2) {
        for cell in cells.iter_mut() {
            self.apply(cell, bounds);
        }
    }
}
