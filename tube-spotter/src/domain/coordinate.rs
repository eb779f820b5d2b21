//! Geographic coordinates and great-circle distance.

use std::fmt;

/// Mean Earth radius in metres, as used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS84 position in decimal degrees.
///
/// # Examples
///
/// ```
/// use tube_spotter::domain::Coordinate;
///
/// let oxford_circus = Coordinate::new(51.515, -0.1415);
/// let piccadilly_circus = Coordinate::new(51.5098, -0.1342);
///
/// let d = oxford_circus.distance_to(&piccadilly_circus);
/// assert!(d > 700.0 && d < 800.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in metres (haversine).
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }

    /// Returns a coordinate `metres` due north (negative for south).
    ///
    /// Moving along a meridian keeps the haversine distance exact, which
    /// makes this convenient for building fixtures at known distances.
    pub fn offset_north(&self, metres: f64) -> Coordinate {
        let d_lat = (metres / EARTH_RADIUS_M).to_degrees();
        Coordinate::new(self.latitude + d_lat, self.longitude)
    }

    /// Whether both components are finite and within the valid ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}
