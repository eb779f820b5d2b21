//! TfL line status response DTOs.
//!
//! These map to the objects returned by `Line/Mode/{modes}/Status`. Only
//! the fields the engine reads are kept; everything else in the response
//! is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// One line in the status feed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatusRecord {
    /// Normalized line identifier, e.g. `"hammersmith-city"`.
    pub id: String,

    /// Human-readable line name.
    #[serde(default)]
    pub name: String,

    /// Feed mode, e.g. `"tube"` or `"national-rail"`.
    #[serde(default)]
    pub mode_name: String,

    /// Current statuses, most relevant first. May be empty.
    #[serde(default)]
    pub line_statuses: Vec<LineStatus>,
}

/// A status entry for a line.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatus {
    /// Severity code; 10 is good service.
    #[serde(alias = "severity")]
    pub status_severity: i32,

    /// E.g. "Good Service", "Part Suspended".
    #[serde(default, alias = "severityDescription")]
    pub status_severity_description: String,

    /// Free-text explanation, present when the line is disrupted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LineStatusRecord {
    /// The entry that determines the line's status, if any.
    pub fn current(&self) -> Option<&LineStatus> {
        self.line_statuses.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_tfl_response() {
        let json = r#"[
            {
                "$type": "Tfl.Api.Presentation.Entities.Line, Tfl.Api.Presentation.Entities",
                "id": "hammersmith-city",
                "name": "Hammersmith & City",
                "modeName": "tube",
                "disruptions": [],
                "created": "2024-03-12T13:45:11.543Z",
                "lineStatuses": [
                    {
                        "$type": "Tfl.Api.Presentation.Entities.LineStatus, Tfl.Api.Presentation.Entities",
                        "id": 0,
                        "statusSeverity": 6,
                        "statusSeverityDescription": "Severe Delays",
                        "reason": "Signal failure at Baker Street.",
                        "validityPeriods": []
                    },
                    {
                        "statusSeverity": 10,
                        "statusSeverityDescription": "Good Service"
                    }
                ],
                "routeSections": []
            }
        ]"#;

        let records: Vec<LineStatusRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.id, "hammersmith-city");
        assert_eq!(record.mode_name, "tube");
        assert_eq!(record.line_statuses.len(), 2);

        let current = record.current().unwrap();
        assert_eq!(current.status_severity, 6);
        assert_eq!(current.status_severity_description, "Severe Delays");
        assert_eq!(
            current.reason.as_deref(),
            Some("Signal failure at Baker Street.")
        );
    }

    #[test]
    fn missing_statuses_default_to_empty() {
        let record: LineStatusRecord = serde_json::from_str(r#"{"id": "c2c"}"#).unwrap();
        assert!(record.line_statuses.is_empty());
        assert!(record.current().is_none());
    }

    #[test]
    fn accepts_short_field_names() {
        let status: LineStatus =
            serde_json::from_str(r#"{"severity": 3, "severityDescription": "Suspended"}"#)
                .unwrap();
        assert_eq!(status.status_severity, 3);
        assert_eq!(status.status_severity_description, "Suspended");
    }
}
