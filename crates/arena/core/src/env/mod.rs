//! Environment collaborators injected into the simulation.
//!
//! The only external input a run needs besides its roster is randomness.
pub mod rng;

pub use rng::{DrawContext, PcgRng, RandomSource, RngOracle, compute_seed};
