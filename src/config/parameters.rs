//! Parameter structures for every animated view.
//!
//! Defaults reproduce the presentation's look; a JSON file can override any
//! subset of fields.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default location of the optional parameter override file
pub const DEFAULT_PARAMETERS_PATH: &str = "data/parameters/views.json";

/// Top-level parameters container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Free-floating particle field with pointer attraction
    pub particle_field: ParticleFieldParameters,
    /// Cells flowing down the timeline
    pub cell_stream: CellStreamParameters,
    /// Drifting double-helix background
    pub helix: HelixParameters,
    /// Interactive specimen viewer
    pub microscope: MicroscopeParameters,
    /// Mock AI scan widget
    pub scan: ScanParameters,
}

impl Parameters {
    /// Load parameters from the default file, or use defaults if it is missing or invalid
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(DEFAULT_PARAMETERS_PATH)
    }

    /// Load parameters from `path`, falling back to defaults
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded view parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse view parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("View parameters file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Load parameters from `path`, failing if the file is missing or malformed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading parameters from {}", path.display()))?;
        let params = serde_json::from_str(&contents)
            .with_context(|| format!("parsing parameters in {}", path.display()))?;
        log::info!("Loaded view parameters from {:?}", path);
        Ok(params)
    }
}

/// Particle field parameters
///
/// Velocities are in canvas units per tick, distances in canvas units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleFieldParameters {
    /// Number of particles seeded on activation
    pub count: usize,
    /// Initial velocity components are drawn from `[-max_initial_speed, max_initial_speed)`
    pub max_initial_speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    /// Distance below which the pointer pulls on a particle
    pub attraction_radius: f32,
    /// Velocity added per tick along the unit direction to the pointer
    pub attraction_strength: f32,
    /// Optional speed cap. `None` keeps the undamped accumulation.
    pub max_speed: Option<f32>,
    /// Distance below which two particles are connected
    pub connection_distance: f32,
    /// Connection opacity at zero distance
    pub connection_alpha: f32,
    /// Alpha of the per-frame trail fade
    pub fade_alpha: f32,
}

impl Default for ParticleFieldParameters {
    fn default() -> Self {
        Self {
            count: 50,
            max_initial_speed: 1.0,
            radius_min: 1.0,
            radius_max: 4.0,
            opacity_min: 0.3,
            opacity_max: 0.8,
            attraction_radius: 200.0,
            attraction_strength: 0.5,
            max_speed: None,
            connection_distance: 100.0,
            connection_alpha: 0.2,
            fade_alpha: 0.1,
        }
    }
}

/// Cell stream parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStreamParameters {
    pub count: usize,
    /// Residual horizontal drift is drawn from `[-max_drift, max_drift)`
    pub max_drift: f32,
    pub fall_speed_min: f32,
    pub fall_speed_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub wobble_speed_min: f32,
    pub wobble_speed_max: f32,
    /// Horizontal displacement per tick at the wobble crest
    pub wobble_amplitude: f32,
    /// Fraction of the residual drift applied per tick
    pub drift_factor: f32,
    pub fade_alpha: f32,
}

impl Default for CellStreamParameters {
    fn default() -> Self {
        Self {
            count: 15,
            max_drift: 0.75,
            fall_speed_min: 1.5,
            fall_speed_max: 2.5,
            radius_min: 6.0,
            radius_max: 10.0,
            wobble_speed_min: 0.02,
            wobble_speed_max: 0.04,
            wobble_amplitude: 0.8,
            drift_factor: 0.2,
            fade_alpha: 0.05,
        }
    }
}

/// Helix background parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HelixParameters {
    pub strand_count: usize,
    pub satellites_per_strand: usize,
    pub amplitude: f32,
    pub frequency: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub orbit_radius_min: f32,
    pub orbit_radius_max: f32,
    /// Orbital angle advance per unit of baseline travel
    pub orbit_rate: f32,
    /// Vertical distance between satellites of one strand
    pub satellite_spacing: f32,
    /// Strands wrap from `height + wrap_margin` back to `-wrap_margin`
    pub wrap_margin: f32,
    /// Number of ambient floating molecules
    pub molecule_count: usize,
    pub fade_alpha: f32,
}

impl Default for HelixParameters {
    fn default() -> Self {
        Self {
            strand_count: 8,
            satellites_per_strand: 6,
            amplitude: 80.0,
            frequency: 0.02,
            speed_min: 0.5,
            speed_max: 0.8,
            orbit_radius_min: 15.0,
            orbit_radius_max: 25.0,
            orbit_rate: 0.02,
            satellite_spacing: 30.0,
            wrap_margin: 100.0,
            molecule_count: 5,
            fade_alpha: 0.02,
        }
    }
}

/// Specimen viewer parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroscopeParameters {
    /// Square canvas edge length
    pub canvas_size: f32,
    /// Nuclei per lattice row and column
    pub lattice: usize,
    pub lattice_spacing: f32,
    pub lattice_margin: f32,
    /// Total jitter span; each axis moves by up to half of it
    pub jitter: f32,
    pub nucleus_radius_min: f32,
    pub nucleus_radius_max: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Fraction of each drag delta applied to the pan offset
    pub pan_damping: f32,
    /// Focus distance from 50 per pixel of blur
    pub blur_divisor: f32,
    /// Regenerate nucleus jitter whenever a control changes
    pub reseed_on_redraw: bool,
}

impl Default for MicroscopeParameters {
    fn default() -> Self {
        Self {
            canvas_size: 500.0,
            lattice: 5,
            lattice_spacing: 100.0,
            lattice_margin: 50.0,
            jitter: 20.0,
            nucleus_radius_min: 15.0,
            nucleus_radius_max: 25.0,
            zoom_min: 0.5,
            zoom_max: 3.0,
            pan_damping: 0.1,
            blur_divisor: 10.0,
            reseed_on_redraw: false,
        }
    }
}

/// Which detection records a completed scan publishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionSourceKind {
    /// Fixed, scripted records
    #[default]
    Canned,
    /// Randomly placed records with the same count and shape
    Procedural,
}

/// Scan widget parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanParameters {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Scan line advance per timer fire
    pub step: f32,
    /// Timer period in milliseconds
    pub interval_ms: u64,
    /// Decorative cells painted under the scan
    pub specimen_cells: usize,
    pub cell_radius: f32,
    pub cell_margin: f32,
    pub detection_source: DetectionSourceKind,
}

impl Default for ScanParameters {
    fn default() -> Self {
        Self {
            canvas_width: 400.0,
            canvas_height: 300.0,
            step: 5.0,
            interval_ms: 10,
            specimen_cells: 20,
            cell_radius: 15.0,
            cell_margin: 20.0,
            detection_source: DetectionSourceKind::Canned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_particle_params() {
        let params = ParticleFieldParameters::default();
        assert_eq!(params.count, 50);
        assert!((params.attraction_radius - 200.0).abs() < 0.01);
        assert!(params.max_speed.is_none());
    }

    #[test]
    fn test_default_microscope_bounds() {
        let params = MicroscopeParameters::default();
        assert!(params.zoom_min < params.zoom_max);
        assert!((params.pan_damping - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "particle_field": { "count": 12 }, "scan": { "detection_source": "procedural" } }"#;
        let parsed: Parameters = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.particle_field.count, 12);
        assert!((parsed.particle_field.connection_distance - 100.0).abs() < 0.01);
        assert_eq!(parsed.scan.detection_source, DetectionSourceKind::Procedural);
        assert_eq!(parsed.cell_stream.count, 15);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let params = Parameters::load_or_default_from("does/not/exist.json");
        assert_eq!(params.helix.strand_count, 8);
        assert!(Parameters::load("does/not/exist.json").is_err());
    }
}
