//! Proximity filter configuration.

/// Distance thresholds for the proximity filter, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityConfig {
    /// A location update is only acted on once the user has moved more
    /// than this far from the last accepted location.
    pub reset_distance_m: f64,

    /// Stations strictly closer than this are nearby.
    pub nearby_radius_m: f64,
}

impl ProximityConfig {
    pub fn new(reset_distance_m: f64, nearby_radius_m: f64) -> Self {
        Self {
            reset_distance_m,
            nearby_radius_m,
        }
    }
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            reset_distance_m: 30.0,
            nearby_radius_m: 800.0,
        }
    }
}
