//! Placed station markers.
//!
//! The AR layer pins one marker per nearby station and draws the lines
//! serving it. This board is the engine's record of which markers exist,
//! keyed by station name, so the same station is never marked twice.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::{Coordinate, Station};
use crate::resolver::ResolvedLine;

/// Everything the renderer needs to draw one station marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub lines: Vec<ResolvedLine>,
}

impl Marker {
    fn for_station(station: &Station, catalog: &Catalog) -> Self {
        Self {
            name: station.name.clone(),
            latitude: station.coordinate.latitude,
            longitude: station.coordinate.longitude,
            lines: catalog.resolve(&station.name),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Markers currently placed, at most one per station name.
#[derive(Debug, Clone, Default)]
pub struct MarkerBoard {
    markers: BTreeMap<String, Marker>,
}

impl MarkerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a marker for `station` unless one with that name exists.
    ///
    /// Returns the new marker, or `None` if the station was already marked.
    pub fn place(&mut self, station: &Station, catalog: &Catalog) -> Option<&Marker> {
        if self.markers.contains_key(&station.name) {
            return None;
        }
        let marker = Marker::for_station(station, catalog);
        let placed = &*self.markers.entry(station.name.clone()).or_insert(marker);
        Some(placed)
    }

    /// Replace every marker with a freshly resolved one per nearby station.
    pub fn sync(&mut self, nearby: &[Station], catalog: &Catalog) -> Vec<Marker> {
        self.markers.clear();
        for station in nearby {
            self.place(station, catalog);
        }
        debug!(markers = self.markers.len(), "marker board synced");
        self.markers.values().cloned().collect()
    }

    /// Re-resolve the lines of every placed marker against `catalog`.
    ///
    /// Markers stay where they are; only their line statuses change.
    pub fn refresh(&mut self, catalog: &Catalog) {
        for marker in self.markers.values_mut() {
            marker.lines = catalog.resolve(&marker.name);
        }
        debug!(markers = self.markers.len(), "marker lines refreshed");
    }

    pub fn remove(&mut self, name: &str) -> Option<Marker> {
        self.markers.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Marker> {
        self.markers.get(name)
    }

    /// Placed station names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.markers.keys().map(String::as_str)
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }
}
