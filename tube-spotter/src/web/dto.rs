//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{LineColor, LineId, Mode};
use crate::markers::Marker;
use crate::resolver::ResolvedLine;

/// A location fix from the client.
#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of a location fix.
#[derive(Debug, Serialize, Deserialize)]
pub struct LocationResponse {
    /// Whether the client should redraw its markers
    pub changed: bool,

    /// Stations that became nearby
    pub added: Vec<String>,

    /// Stations that are no longer nearby
    pub removed: Vec<String>,

    /// All current markers
    pub markers: Vec<MarkerResult>,
}

/// A station marker.
#[derive(Debug, Serialize, Deserialize)]
pub struct MarkerResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub lines: Vec<LineResult>,
}

/// A line on a marker.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineResult {
    /// Line display name
    pub line: String,

    /// Display colour, `#rrggbb`
    pub color: String,

    /// Transport mode
    pub mode: String,

    /// `good`, `disrupted`, `notRunning`, or absent when the feed has no entry
    pub status: Option<String>,

    /// Feed wording for the status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Lines serving one station.
#[derive(Debug, Serialize, Deserialize)]
pub struct StationLinesResponse {
    pub station: String,
    pub lines: Vec<LineResult>,
}

/// Static line metadata.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineInfo {
    pub name: String,
    pub feed_id: String,
    pub color: String,
    pub mode: String,
}

/// All known lines.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinesResponse {
    pub lines: Vec<LineInfo>,

    /// When the status feed was last fetched (RFC 3339)
    pub statuses_fetched_at: String,
}

/// Result of a status refresh.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub statuses: usize,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn mode_name(mode: Mode) -> String {
    mode.as_str().to_string()
}

fn color_hex(color: LineColor) -> String {
    color.to_string()
}

impl From<&ResolvedLine> for LineResult {
    fn from(resolved: &ResolvedLine) -> Self {
        Self {
            line: resolved.line.display_name().to_string(),
            color: color_hex(resolved.line.color()),
            mode: mode_name(resolved.line.mode()),
            status: resolved.status.map(|s| s.as_str().to_string()),
            description: resolved.description.clone(),
        }
    }
}

impl From<&Marker> for MarkerResult {
    fn from(marker: &Marker) -> Self {
        Self {
            name: marker.name.clone(),
            latitude: marker.latitude,
            longitude: marker.longitude,
            lines: marker.lines.iter().map(LineResult::from).collect(),
        }
    }
}

impl From<LineId> for LineInfo {
    fn from(line: LineId) -> Self {
        Self {
            name: line.display_name().to_string(),
            feed_id: line.feed_id().to_string(),
            color: color_hex(line.color()),
            mode: mode_name(line.mode()),
        }
    }
}
