//! Simulation entities and their seeding.
//!
//! Each animated view owns one [`EntityStore`] built from these types when it
//! activates. The stores are dropped with the view; nothing here is global.

mod cell;
mod helix;
mod metrics;
mod particle;
mod specimen;
mod store;

pub use cell::{seed_cells, Cell, CellTint};
pub use helix::{seed_strands, HelixStrand, Satellite};
pub use metrics::{FrameMetrics, FrameRateStatus};
pub use particle::{seed_particles, Particle};
pub use specimen::{Nucleus, Specimen};
pub use store::EntityStore;
