//! Per-tick update rules.
//!
//! This module implements:
//! - Particle integration with wall bounce and pointer attraction
//! - Cell stream wobble, drift and wrap-around
//! - Helix strand drift and satellite orbits
//! - The pairwise connection pass over particles
//!
//! Rules are plain values built from [`crate::config`] parameters. They hold
//! no entity state; views own the entities and apply the rules each tick.

pub mod cell;
pub mod helix;
pub mod pairwise;
pub mod particle;

pub use cell::CellRule;
pub use helix::{floating_molecules, HelixRule, SatellitePose};
pub use pairwise::{Connection, ConnectionRule};
pub use particle::ParticleRule;
