//! Mock detection scan: a sweeping line followed by a scripted reveal.

mod detection;
mod sequencer;

pub use detection::{
    CannedDetections, DetectionLabel, DetectionRecord, DetectionSource, ProceduralDetections,
};
pub use sequencer::{ScanPhase, ScanSequencer};
