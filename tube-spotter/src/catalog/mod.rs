//! In-memory catalog of stations, line associations and line statuses.
//!
//! Built once from raw records and read-only afterwards. A catalog is plain
//! owned data, so it can be shared across threads behind an `Arc`; status
//! refreshes produce a new catalog rather than mutating this one.

mod error;
mod records;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{Coordinate, LineId, Station};
use crate::resolver::{ResolvedLine, resolve};
use crate::tfl::LineStatusRecord;

pub use error::{CatalogError, RecordKind};
pub use records::{AssociationRecord, StationRecord};

/// A validated station→line link.
///
/// Only `from` is used when working out which lines serve a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAssociation {
    pub line: LineId,
    pub from: String,
    pub to: String,
}

/// Line status records indexed by feed id.
#[derive(Debug, Clone)]
pub struct StatusFeed {
    records: HashMap<String, LineStatusRecord>,
    fetched_at: DateTime<Utc>,
}

impl StatusFeed {
    /// Index `records` by id. When ids repeat, the first record wins.
    pub fn new(records: Vec<LineStatusRecord>, fetched_at: DateTime<Utc>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for record in records {
            index.entry(record.id.clone()).or_insert(record);
        }
        Self {
            records: index,
            fetched_at,
        }
    }

    pub fn get(&self, feed_id: &str) -> Option<&LineStatusRecord> {
        self.records.get(feed_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When the underlying feed was fetched.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// Immutable tables the proximity filter and resolver run against.
#[derive(Debug, Clone)]
pub struct Catalog {
    stations: Arc<[Station]>,
    by_name: Arc<HashMap<String, usize>>,
    associations: Arc<[LineAssociation]>,
    statuses: Arc<StatusFeed>,
}

impl Catalog {
    /// Validate raw records and build a catalog.
    ///
    /// Fails on the first station whose coordinates do not parse to valid
    /// decimal degrees, on a repeated station name, or on an association
    /// naming a line that is not known.
    pub fn load(
        stations: Vec<StationRecord>,
        associations: Vec<AssociationRecord>,
        status_feed: Vec<LineStatusRecord>,
    ) -> Result<Self, CatalogError> {
        let mut parsed = Vec::with_capacity(stations.len());
        let mut by_name = HashMap::with_capacity(stations.len());

        for (index, record) in stations.into_iter().enumerate() {
            let station = parse_station(index, record)?;
            if by_name.insert(station.name.clone(), parsed.len()).is_some() {
                return Err(CatalogError::DuplicateStation { name: station.name });
            }
            parsed.push(station);
        }

        let associations = associations
            .into_iter()
            .enumerate()
            .map(|(index, record)| parse_association(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        let statuses = StatusFeed::new(status_feed, Utc::now());

        debug!(
            stations = parsed.len(),
            associations = associations.len(),
            statuses = statuses.len(),
            "catalog built"
        );

        Ok(Self {
            stations: parsed.into(),
            by_name: Arc::new(by_name),
            associations: associations.into(),
            statuses: Arc::new(statuses),
        })
    }

    /// Same stations and associations with a new status feed.
    pub fn with_statuses(&self, statuses: StatusFeed) -> Self {
        Self {
            stations: Arc::clone(&self.stations),
            by_name: Arc::clone(&self.by_name),
            associations: Arc::clone(&self.associations),
            statuses: Arc::new(statuses),
        }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, name: &str) -> Option<&Station> {
        self.by_name.get(name).map(|&i| &self.stations[i])
    }

    pub fn associations(&self) -> &[LineAssociation] {
        &self.associations
    }

    pub fn statuses(&self) -> &StatusFeed {
        &self.statuses
    }

    /// Lines serving `station_name`, each with its current status.
    pub fn resolve(&self, station_name: &str) -> Vec<ResolvedLine> {
        resolve(station_name, &self.associations, &self.statuses)
    }
}

fn parse_station(index: usize, record: StationRecord) -> Result<Station, CatalogError> {
    let malformed = |reason: String| CatalogError::MalformedRecord {
        kind: RecordKind::Station,
        index,
        name: record.name.clone(),
        reason,
    };

    let latitude = parse_degrees(&record.latitude)
        .ok_or_else(|| malformed(format!("latitude {:?} is not a number", record.latitude)))?;
    let longitude = parse_degrees(&record.longitude)
        .ok_or_else(|| malformed(format!("longitude {:?} is not a number", record.longitude)))?;

    let coordinate = Coordinate::new(latitude, longitude);
    if !coordinate.is_valid() {
        return Err(malformed(format!("coordinate {coordinate:?} is out of range")));
    }

    Ok(Station::new(record.name, coordinate))
}

fn parse_degrees(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

fn parse_association(
    index: usize,
    record: AssociationRecord,
) -> Result<LineAssociation, CatalogError> {
    let line = LineId::parse(&record.line).map_err(|e| CatalogError::MalformedRecord {
        kind: RecordKind::Association,
        index,
        name: record.line.clone(),
        reason: e.to_string(),
    })?;

    Ok(LineAssociation {
        line,
        from: record.from,
        to: record.to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfl::LineStatus;

    fn status_record(id: &str, severity: i32) -> LineStatusRecord {
        LineStatusRecord {
            id: id.to_string(),
            name: id.to_string(),
            mode_name: "tube".to_string(),
            line_statuses: vec![LineStatus {
                status_severity: severity,
                status_severity_description: String::new(),
                reason: None,
            }],
        }
    }

    fn sample() -> Catalog {
        Catalog::load(
            vec![
                StationRecord::new("Oxford Circus", "51.515", "-0.1415"),
                StationRecord::new("Bank", " 51.5133 ", "-0.0886"),
            ],
            vec![
                AssociationRecord::new("Victoria", "Oxford Circus", "Green Park"),
                AssociationRecord::new("Waterloo & City", "Bank", "Waterloo"),
            ],
            vec![status_record("victoria", 10)],
        )
        .unwrap()
    }

    #[test]
    fn load_valid_records() {
        let catalog = sample();
        assert_eq!(catalog.stations().len(), 2);
        assert_eq!(catalog.associations().len(), 2);
        assert_eq!(catalog.statuses().len(), 1);

        let bank = catalog.station("Bank").unwrap();
        assert_eq!(bank.coordinate, Coordinate::new(51.5133, -0.0886));
        assert_eq!(catalog.associations()[1].line, LineId::WaterlooAndCity);
        assert!(catalog.station("Euston").is_none());
    }

    #[test]
    fn stations_keep_input_order() {
        let catalog = sample();
        let names: Vec<_> = catalog.stations().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Oxford Circus", "Bank"]);
    }

    #[test]
    fn non_numeric_latitude_is_malformed() {
        let err = Catalog::load(
            vec![
                StationRecord::new("Bank", "51.5133", "-0.0886"),
                StationRecord::new("Nowhere", "north", "-0.1"),
            ],
            vec![],
            vec![],
        )
        .unwrap_err();

        match err {
            CatalogError::MalformedRecord {
                kind, index, name, ..
            } => {
                assert_eq!(kind, RecordKind::Station);
                assert_eq!(index, 1);
                assert_eq!(name, "Nowhere");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_longitude_is_malformed() {
        let err = Catalog::load(vec![StationRecord::new("Bank", "51.5", "")], vec![], vec![])
            .unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { .. }));
    }

    #[test]
    fn non_finite_or_out_of_range_is_malformed() {
        for (lat, lon) in [("NaN", "0"), ("inf", "0"), ("91", "0"), ("0", "-181")] {
            let result = Catalog::load(vec![StationRecord::new("X", lat, lon)], vec![], vec![]);
            assert!(
                matches!(result, Err(CatalogError::MalformedRecord { .. })),
                "{lat},{lon}"
            );
        }
    }

    #[test]
    fn unknown_line_is_malformed() {
        let err = Catalog::load(
            vec![],
            vec![
                AssociationRecord::new("Central", "Bank", "Liverpool Street"),
                AssociationRecord::new("Crossrail 2", "Bank", "Euston"),
            ],
            vec![],
        )
        .unwrap_err();

        match err {
            CatalogError::MalformedRecord {
                kind, index, name, ..
            } => {
                assert_eq!(kind, RecordKind::Association);
                assert_eq!(index, 1);
                assert_eq!(name, "Crossrail 2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_station_is_rejected() {
        let err = Catalog::load(
            vec![
                StationRecord::new("Bank", "51.5133", "-0.0886"),
                StationRecord::new("Bank", "51.5134", "-0.0887"),
            ],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateStation {
                name: "Bank".into()
            }
        );
    }

    #[test]
    fn associations_may_name_unknown_stations() {
        let catalog = Catalog::load(
            vec![],
            vec![AssociationRecord::new("Central", "Somewhere", "Elsewhere")],
            vec![],
        )
        .unwrap();
        assert_eq!(catalog.associations().len(), 1);
    }

    #[test]
    fn first_duplicate_feed_record_wins() {
        let feed = StatusFeed::new(
            vec![status_record("central", 3), status_record("central", 10)],
            Utc::now(),
        );
        assert_eq!(feed.len(), 1);
        assert_eq!(
            feed.get("central").unwrap().current().unwrap().status_severity,
            3
        );
    }

    #[test]
    fn with_statuses_shares_tables() {
        let catalog = sample();
        let refreshed = catalog.with_statuses(StatusFeed::new(
            vec![status_record("waterloo-city", 20), status_record("central", 3)],
            Utc::now(),
        ));

        assert_eq!(refreshed.stations().len(), 2);
        assert_eq!(refreshed.statuses().len(), 2);
        assert!(refreshed.statuses().get("victoria").is_none());
        // original is untouched
        assert!(catalog.statuses().get("victoria").is_some());
    }

    #[test]
    fn catalog_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
