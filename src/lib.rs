//! Cytoscope - animated 2D cell and particle visualisations
//!
//! Five views (a particle field, a cell stream, a double helix, a
//! microscope slide and a mock AI scan) driven by a shared frame clock and
//! painted through a backend-neutral canvas.

pub mod clock;
pub mod config;
pub mod physics;
pub mod render;
pub mod scan;
pub mod state;
pub mod view;
pub mod viewport;

pub use clock::{FrameClock, FrameTick, ManualClock, SystemClock, TimeSource};
pub use config::Parameters;
pub use render::{Canvas, DisplayList, RenderState};
pub use scan::{DetectionRecord, ScanPhase, ScanSequencer};
pub use view::{View, ViewCommand, ViewHost, ViewKind};
pub use viewport::{StainMode, ViewportTransform};
