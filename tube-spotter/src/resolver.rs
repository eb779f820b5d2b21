//! Joins a station against line associations and the status feed.
//!
//! A line with no record in the feed, or a record with no statuses, simply
//! has no status. That is an expected outcome, not an error: the feed does
//! not cover every operator.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::{LineAssociation, StatusFeed};
use crate::domain::{LineId, Status, classify};

/// A line serving a station, with its status when the feed has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLine {
    pub line: LineId,
    pub status: Option<Status>,
    /// Feed wording for the status, e.g. "Part Suspended".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ResolvedLine {
    pub fn new(line: LineId, status: Option<Status>) -> Self {
        Self {
            line,
            status,
            description: None,
        }
    }
}

/// Resolve the lines serving `station_name` and their statuses.
///
/// Lines come from associations whose `from` station matches exactly;
/// the `to` side is not consulted. The result has one entry per distinct
/// line, sorted by [`LineId`].
pub fn resolve(
    station_name: &str,
    associations: &[LineAssociation],
    statuses: &StatusFeed,
) -> Vec<ResolvedLine> {
    let lines: BTreeSet<LineId> = associations
        .iter()
        .filter(|a| a.from == station_name)
        .map(|a| a.line)
        .collect();

    lines
        .into_iter()
        .map(|line| {
            let current = statuses.get(line.feed_id()).and_then(|r| r.current());
            ResolvedLine {
                line,
                status: current.map(|s| classify(s.status_severity)),
                description: current.map(|s| s.status_severity_description.clone()),
            }
        })
        .collect()
}
