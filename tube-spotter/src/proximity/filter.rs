//! Location-driven nearby-station membership.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::{Coordinate, Station};

use super::config::ProximityConfig;

/// Result of feeding one location fix to the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityUpdate {
    /// Whether the fix was far enough from the last reset to be acted on.
    pub changed: bool,
    /// Nearby stations, in catalog order.
    pub nearby: Vec<Station>,
    /// Names that joined the nearby set on this update.
    pub added: Vec<String>,
    /// Names that left the nearby set on this update.
    pub removed: Vec<String>,
}

/// Tracks the last accepted location and the stations near it.
///
/// Small GPS jitter is ignored: a fix only replaces the reset location
/// when it is more than `reset_distance_m` away from it. Calls must be
/// serialized by the caller.
#[derive(Debug, Clone, Default)]
pub struct ProximityFilter {
    config: ProximityConfig,
    last_reset: Option<Coordinate>,
    nearby: Vec<Station>,
}

impl ProximityFilter {
    pub fn new(config: ProximityConfig) -> Self {
        Self {
            config,
            last_reset: None,
            nearby: Vec::new(),
        }
    }

    pub fn config(&self) -> &ProximityConfig {
        &self.config
    }

    /// The location membership was last computed for.
    pub fn last_reset(&self) -> Option<Coordinate> {
        self.last_reset
    }

    pub fn nearby(&self) -> &[Station] {
        &self.nearby
    }

    /// Feed a location fix.
    ///
    /// The first fix is always accepted. Later fixes within the reset
    /// distance of the last accepted one leave membership untouched,
    /// even if `catalog` has changed since.
    pub fn update_location(&mut self, current: Coordinate, catalog: &Catalog) -> ProximityUpdate {
        if let Some(last) = self.last_reset {
            let moved = last.distance_to(&current);
            if moved <= self.config.reset_distance_m {
                return ProximityUpdate {
                    changed: false,
                    nearby: self.nearby.clone(),
                    added: Vec::new(),
                    removed: Vec::new(),
                };
            }
        }

        self.last_reset = Some(current);

        let nearby: Vec<Station> = catalog
            .stations()
            .iter()
            .filter(|s| s.distance_to(&current) < self.config.nearby_radius_m)
            .cloned()
            .collect();

        let before: HashSet<&str> = self.nearby.iter().map(|s| s.name.as_str()).collect();
        let after: HashSet<&str> = nearby.iter().map(|s| s.name.as_str()).collect();

        let added = nearby
            .iter()
            .filter(|s| !before.contains(s.name.as_str()))
            .map(|s| s.name.clone())
            .collect::<Vec<_>>();
        let removed = self
            .nearby
            .iter()
            .filter(|s| !after.contains(s.name.as_str()))
            .map(|s| s.name.clone())
            .collect::<Vec<_>>();

        debug!(
            location = %current,
            nearby = nearby.len(),
            added = added.len(),
            removed = removed.len(),
            "proximity reset"
        );

        self.nearby = nearby;

        ProximityUpdate {
            changed: true,
            nearby: self.nearby.clone(),
            added,
            removed,
        }
    }

    /// Forget the reset location and membership.
    pub fn reset(&mut self) {
        self.last_reset = None;
        self.nearby.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StationRecord;

    const OXFORD_CIRCUS: Coordinate = Coordinate::new(51.515, -0.1415);

    fn record(name: &str, at: Coordinate) -> StationRecord {
        StationRecord::new(name, at.latitude.to_string(), at.longitude.to_string())
    }

    fn catalog(stations: &[(&str, Coordinate)]) -> Catalog {
        Catalog::load(
            stations.iter().map(|(n, c)| record(n, *c)).collect(),
            vec![],
            vec![],
        )
        .unwrap()
    }

    fn names(stations: &[Station]) -> Vec<&str> {
        stations.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn first_update_is_always_accepted() {
        let catalog = catalog(&[("Oxford Circus", OXFORD_CIRCUS)]);
        let mut filter = ProximityFilter::default();

        let update = filter.update_location(OXFORD_CIRCUS, &catalog);
        assert!(update.changed);
        assert_eq!(names(&update.nearby), ["Oxford Circus"]);
        assert_eq!(update.added, ["Oxford Circus"]);
        assert!(update.removed.is_empty());
        assert_eq!(filter.last_reset(), Some(OXFORD_CIRCUS));
    }

    #[test]
    fn first_update_with_nothing_nearby_still_changes() {
        let catalog = catalog(&[("Oxford Circus", OXFORD_CIRCUS)]);
        let mut filter = ProximityFilter::default();

        let update = filter.update_location(OXFORD_CIRCUS.offset_north(5_000.0), &catalog);
        assert!(update.changed);
        assert!(update.nearby.is_empty());
    }

    #[test]
    fn radius_is_strict() {
        let user = OXFORD_CIRCUS.offset_north(-3_000.0);
        let catalog = catalog(&[
            ("Inside", user.offset_north(799.0)),
            ("JustOutside", user.offset_north(-800.001)),
            ("Outside", user.offset_north(801.0)),
        ]);
        let mut filter = ProximityFilter::default();

        let update = filter.update_location(user, &catalog);
        assert_eq!(names(&update.nearby), ["Inside"]);
    }

    #[test]
    fn jitter_within_reset_distance_is_ignored() {
        let catalog = catalog(&[("Oxford Circus", OXFORD_CIRCUS)]);
        let mut filter = ProximityFilter::default();
        let start = OXFORD_CIRCUS.offset_north(790.0);

        assert!(filter.update_location(start, &catalog).changed);

        for metres in [1.0, 29.0, 29.999, -29.999] {
            let update = filter.update_location(start.offset_north(metres), &catalog);
            assert!(!update.changed, "{metres}");
            assert_eq!(names(&update.nearby), ["Oxford Circus"]);
            assert!(update.added.is_empty() && update.removed.is_empty());
        }
        assert_eq!(filter.last_reset(), Some(start));
    }

    #[test]
    fn reset_distance_boundary() {
        let catalog = catalog(&[("Oxford Circus", OXFORD_CIRCUS)]);
        let start = OXFORD_CIRCUS.offset_north(900.0);

        let mut filter = ProximityFilter::default();
        filter.update_location(start, &catalog);
        assert!(!filter.update_location(start.offset_north(29.9999), &catalog).changed);
        assert!(filter.update_location(start.offset_north(30.0001), &catalog).changed);

        // a fix exactly at the reset distance is not a move
        let moved = start.offset_north(30.0);
        let exact = start.distance_to(&moved);
        let mut filter = ProximityFilter::new(ProximityConfig::new(exact, 800.0));
        filter.update_location(start, &catalog);
        assert!(!filter.update_location(moved, &catalog).changed);
        assert_eq!(filter.last_reset(), Some(start));
    }

    #[test]
    fn ignored_update_does_not_see_catalog_changes() {
        let before = catalog(&[("Oxford Circus", OXFORD_CIRCUS)]);
        let after = catalog(&[
            ("Oxford Circus", OXFORD_CIRCUS),
            ("Bond Street", OXFORD_CIRCUS.offset_north(100.0)),
        ]);
        let mut filter = ProximityFilter::default();

        filter.update_location(OXFORD_CIRCUS, &before);
        let update = filter.update_location(OXFORD_CIRCUS.offset_north(10.0), &after);

        assert!(!update.changed);
        assert_eq!(names(&update.nearby), ["Oxford Circus"]);
    }

    #[test]
    fn move_from_801m_to_799m_adds_station() {
        let catalog = catalog(&[("Oxford Circus", OXFORD_CIRCUS)]);
        let mut filter = ProximityFilter::default();

        let far = filter.update_location(OXFORD_CIRCUS.offset_north(801.0), &catalog);
        assert!(far.changed);
        assert!(far.nearby.is_empty());

        // 2m closer is jitter, not a reset
        let jitter = filter.update_location(OXFORD_CIRCUS.offset_north(799.0), &catalog);
        assert!(!jitter.changed);
        assert!(jitter.nearby.is_empty());

        // Walk away past the reset distance, then come back to 799m
        let away = filter.update_location(OXFORD_CIRCUS.offset_north(850.0), &catalog);
        assert!(away.changed);
        assert!(away.nearby.is_empty());

        let near = filter.update_location(OXFORD_CIRCUS.offset_north(799.0), &catalog);
        assert!(near.changed);
        assert_eq!(names(&near.nearby), ["Oxford Circus"]);
        assert_eq!(near.added, ["Oxford Circus"]);
    }

    #[test]
    fn leaving_reports_removed() {
        let catalog = catalog(&[
            ("Oxford Circus", OXFORD_CIRCUS),
            ("Warren Street", OXFORD_CIRCUS.offset_north(1_100.0)),
        ]);
        let mut filter = ProximityFilter::default();

        let first = filter.update_location(OXFORD_CIRCUS.offset_north(100.0), &catalog);
        assert_eq!(names(&first.nearby), ["Oxford Circus"]);

        let second = filter.update_location(OXFORD_CIRCUS.offset_north(1_000.0), &catalog);
        assert!(second.changed);
        assert_eq!(names(&second.nearby), ["Warren Street"]);
        assert_eq!(second.added, ["Warren Street"]);
        assert_eq!(second.removed, ["Oxford Circus"]);
    }

    #[test]
    fn reset_forgets_location() {
        let catalog = catalog(&[("Oxford Circus", OXFORD_CIRCUS)]);
        let mut filter = ProximityFilter::default();

        filter.update_location(OXFORD_CIRCUS, &catalog);
        filter.reset();
        assert!(filter.last_reset().is_none());
        assert!(filter.nearby().is_empty());

        let update = filter.update_location(OXFORD_CIRCUS.offset_north(5.0), &catalog);
        assert!(update.changed);
    }

    #[test]
    fn custom_thresholds() {
        let catalog = catalog(&[("Oxford Circus", OXFORD_CIRCUS)]);
        let mut filter = ProximityFilter::new(ProximityConfig::new(5.0, 100.0));

        assert!(
            filter
                .update_location(OXFORD_CIRCUS.offset_north(150.0), &catalog)
                .nearby
                .is_empty()
        );
        let update = filter.update_location(OXFORD_CIRCUS.offset_north(90.0), &catalog);
        assert!(update.changed);
        assert_eq!(names(&update.nearby), ["Oxford Circus"]);
    }
}
