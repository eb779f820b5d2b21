//! Station type.

use super::Coordinate;

/// A named station at a fixed position.
///
/// Names are unique within a catalog and double as marker identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub coordinate: Coordinate,
}

impl Station {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }

    /// Distance from this station to `point` in metres.
    pub fn distance_to(&self, point: &Coordinate) -> f64 {
        self.coordinate.distance_to(point)
    }
}
