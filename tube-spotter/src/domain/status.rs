//! Line operational status.

use std::fmt;

use serde::Serialize;

/// Operational status of a line, derived from the feed's severity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Good,
    Disrupted,
    NotRunning,
}

/// Classify a feed severity code.
///
/// Above 9 is good service, below 5 is not running, and everything in
/// between is disrupted. Out-of-range codes follow the same rule.
///
/// # Examples
///
/// ```
/// use tube_spotter::domain::{Status, classify};
///
/// assert_eq!(classify(10), Status::Good);
/// assert_eq!(classify(9), Status::Disrupted);
/// assert_eq!(classify(5), Status::Disrupted);
/// assert_eq!(classify(4), Status::NotRunning);
/// ```
pub fn classify(severity: i32) -> Status {
    if severity > 9 {
        Status::Good
    } else if severity < 5 {
        Status::NotRunning
    } else {
        Status::Disrupted
    }
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Good => "good",
            Status::Disrupted => "disrupted",
            Status::NotRunning => "notRunning",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Good iff above 9, not running iff below 5, disrupted otherwise
        #[test]
        fn threshold_rule(s in any::<i32>()) {
            let status = classify(s);
            prop_assert_eq!(status == Status::Good, s > 9);
            prop_assert_eq!(status == Status::NotRunning, s < 5);
            prop_assert_eq!(status == Status::Disrupted, (5..=9).contains(&s));
        }

        /// Same input, same output
        #[test]
        fn deterministic(s in any::<i32>()) {
            prop_assert_eq!(classify(s), classify(s));
        }
    }
}
