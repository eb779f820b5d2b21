//! Domain types for the station proximity engine.
//!
//! Coordinates, stations, lines and statuses. These are plain values with
//! no I/O; invariants are enforced where the values are constructed.

mod coordinate;
mod line;
mod station;
mod status;

pub use coordinate::{Coordinate, EARTH_RADIUS_M};
pub use line::{LineColor, LineId, Mode, UnknownLine, derive_feed_id};
pub use station::Station;
pub use status::{Status, classify};
