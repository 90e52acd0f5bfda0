//! Configuration module for loading view parameters.
//!
//! Every animated view reads its counts, speeds and thresholds from here.
//! Visual colours live in `render::style`.

mod parameters;

pub use parameters::{
    CellStreamParameters, DetectionSourceKind, HelixParameters, MicroscopeParameters,
    Parameters, ParticleFieldParameters, ScanParameters,
};
