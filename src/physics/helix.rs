//! Helix strand drift and the ambient floating molecules.

use std::time::Duration;

use glam::Vec2;

use crate::config::HelixParameters;
use crate::state::HelixStrand;

/// One satellite pose: the strand anchor and the orbiting cross-link end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatellitePose {
    pub anchor: Vec2,
    pub satellite: Vec2,
}

/// Baseline drift with wrap-around, plus satellite orbit geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixRule {
    pub orbit_rate: f32,
    pub satellite_spacing: f32,
    pub wrap_margin: f32,
}

impl Default for HelixRule {
    fn default() -> Self {
        Self::from(&HelixParameters::default())
    }
}

impl From<&HelixParameters> for HelixRule {
    fn from(params: &HelixParameters) -> Self {
        Self {
            orbit_rate: params.orbit_rate,
            satellite_spacing: params.satellite_spacing,
            wrap_margin: params.wrap_margin,
        }
    }
}

impl HelixRule {
    pub fn apply(&self, strand: &mut HelixStrand, height: f32) {
        strand.baseline += strand.speed;
        if strand.baseline > height + self.wrap_margin {
            strand.baseline = -self.wrap_margin;
        }
    }

    pub fn step_all(&self, strands: &mut [HelixStrand], height: f32) {
        for strand in strands.iter_mut() {
            self.apply(strand, height);
        }
    }

    /// Horizontal centre of the strand's sinusoid
    pub fn strand_x(&self, strand: &HelixStrand, width: f32) -> f32 {
        width / 2.0 + (strand.baseline * strand.frequency + strand.phase).sin() * strand.amplitude
    }

    /// Anchor and satellite positions for every satellite of `strand`
    pub fn poses(&self, strand: &HelixStrand, width: f32) -> Vec<SatellitePose> {
        let x = self.strand_x(strand, width);
        let middle = (strand.satellites.len() / 2) as f32;
        strand
            .satellites
            .iter()
            .enumerate()
            .map(|(idx, s)| {
                let anchor = Vec2::new(
                    x,
                    strand.baseline + (idx as f32 - middle) * self.satellite_spacing,
                );
                let angle = s.angle + strand.baseline * self.orbit_rate;
                let satellite = anchor
                    + Vec2::new(angle.cos() * s.orbit_radius, angle.sin() * s.orbit_radius * 0.6);
                SatellitePose { anchor, satellite }
            })
            .collect()
    }
}

/// Positions of the slow Lissajous "molecules" behind the helix
pub fn floating_molecules(elapsed: Duration, bounds: Vec2, count: usize) -> Vec<Vec2> {
    let t = elapsed.as_secs_f64() * 1000.0;
    (0..count)
        .map(|i| {
            let i = i as f64;
            let x = (t * 0.0001 + i).sin() as f32 * bounds.x * 0.4 + bounds.x / 2.0 + 150.0;
            let y = (t * 0.00015 + i * 1.2).cos() as f32 * bounds.y * 0.3 + bounds.y / 2.0;
            Vec2::new(x, y)
        })
        .collect()
}
