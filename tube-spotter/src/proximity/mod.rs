//! Nearby-station detection.
//!
//! Two thresholds: a small reset distance that filters GPS jitter, and a
//! larger inclusion radius that decides which stations get markers.

mod config;
mod filter;

pub use config::ProximityConfig;
pub use filter::{ProximityFilter, ProximityUpdate};
