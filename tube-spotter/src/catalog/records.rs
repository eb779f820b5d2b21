//! Raw station and association records as stored in the bundled JSON files.

use serde::{Deserialize, Serialize};

/// A station as listed in the station file.
///
/// Coordinates are decimal-degree strings and are only parsed when the
/// catalog is built.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StationRecord {
    #[serde(rename = "Station")]
    pub name: String,
    #[serde(rename = "Latitude")]
    pub latitude: String,
    #[serde(rename = "Longitude")]
    pub longitude: String,
}

/// A directional link between two stations on a line.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssociationRecord {
    /// Line display name, e.g. "Hammersmith & City".
    #[serde(rename = "Tube Line")]
    pub line: String,
    #[serde(rename = "From Station")]
    pub from: String,
    #[serde(rename = "To Station")]
    pub to: String,
}

impl StationRecord {
    pub fn new(
        name: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

impl AssociationRecord {
    pub fn new(line: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}
