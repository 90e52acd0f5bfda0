//! Static specimen content for the microscope and scan widgets.

use glam::Vec2;
use rand::Rng;

use super::store::{uniform, uniform_point};
use crate::config::{MicroscopeParameters, ScanParameters};

/// A stained nucleus on the slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nucleus {
    pub center: Vec2,
    pub radius: f32,
}

/// A generated slide: a set of nuclei in canvas coordinates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specimen {
    pub nuclei: Vec<Nucleus>,
}

impl Specimen {
    /// Row/column lattice of nuclei with small positional and size jitter
    pub fn lattice<R: Rng + ?Sized>(rng: &mut R, params: &MicroscopeParameters) -> Self {
        let half = params.jitter / 2.0;
        let mut nuclei = Vec::with_capacity(params.lattice * params.lattice);
        for i in 0..params.lattice {
            for j in 0..params.lattice {
                let cell = Vec2::new(i as f32, j as f32) * params.lattice_spacing
                    + Vec2::splat(params.lattice_margin);
                nuclei.push(Nucleus {
                    center: cell + uniform_point(rng, Vec2::splat(-half), Vec2::splat(half)),
                    radius: uniform(rng, params.nucleus_radius_min, params.nucleus_radius_max),
                });
            }
        }
        Self { nuclei }
    }

    /// Uniformly scattered nuclei of one radius, kept `margin` from each edge
    pub fn scattered<R: Rng + ?Sized>(rng: &mut R, params: &ScanParameters) -> Self {
        let min = Vec2::splat(params.cell_margin);
        let max = Vec2::new(params.canvas_width, params.canvas_height) - min;
        let nuclei = (0..params.specimen_cells)
            .map(|_| Nucleus {
                center: uniform_point(rng, min, max),
                radius: params.cell_radius,
            })
            .collect();
        Self { nuclei }
    }

    pub fn len(&self) -> usize {
        self.nuclei.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nuclei.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_lattice_jitter_bounds() {
        let mut rng = StdRng::seed_from_u64(21);
        let params = MicroscopeParameters::default();
        let specimen = Specimen::lattice(&mut rng, &params);

        assert_eq!(specimen.len(), 25);
        for (k, nucleus) in specimen.nuclei.iter().enumerate() {
            let expected = Vec2::new((k / 5) as f32, (k % 5) as f32) * 100.0 + Vec2::splat(50.0);
            assert!((nucleus.center - expected).abs().max_element() <= 10.0);
            assert!(nucleus.radius >= 15.0 && nucleus.radius < 25.0);
        }
    }

    #[test]
    fn test_scattered_stays_inside_margin() {
        let mut rng = StdRng::seed_from_u64(9);
        let params = ScanParameters::default();
        let specimen = Specimen::scattered(&mut rng, &params);

        assert_eq!(specimen.len(), 20);
        for nucleus in &specimen.nuclei {
            assert!(nucleus.center.x >= 20.0 && nucleus.center.x < 380.0);
            assert!(nucleus.center.y >= 20.0 && nucleus.center.y < 280.0);
        }
    }
}
