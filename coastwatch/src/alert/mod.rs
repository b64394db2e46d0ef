//! Violation alerts and the append-only alert log.
//!
//! Alerts are immutable records: once raised they are never mutated or
//! removed. The log preserves insertion order, which is the order the
//! violations were detected. That is call order, not timestamp order:
//! callers may submit reports with out-of-order timestamps.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The kind of rule a violation alert refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    /// The boat reported outside the permitted operating hours.
    TimeExceeded,
    /// The boat left the permitted geographical area.
    AreaBreach,
    /// The boat entered a restricted zone.
    RestrictedZone,
}

impl AlertKind {
    /// Stable uppercase name, used in console output and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::TimeExceeded => "TIME_EXCEEDED",
            AlertKind::AreaBreach => "AREA_BREACH",
            AlertKind::RestrictedZone => "RESTRICTED_ZONE",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable record of a detected violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// System id of the offending boat.
    pub boat_id: String,
    /// Which rule was broken.
    pub kind: AlertKind,
    /// Human-readable description of the violation.
    pub message: String,
    /// Timestamp of the position report that triggered the alert.
    pub timestamp: NaiveDateTime,
}

impl Alert {
    /// Create a new alert.
    pub fn new(
        boat_id: impl Into<String>,
        kind: AlertKind,
        message: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            boat_id: boat_id.into(),
            kind,
            message: message.into(),
            timestamp,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.kind,
            self.message
        )
    }
}

/// Append-only, insertion-ordered log of raised alerts.
#[derive(Debug, Default)]
pub struct AlertLog {
    entries: Vec<Alert>,
}

impl AlertLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alert. Alerts are never deduplicated: two identical
    /// violations produce two entries.
    pub fn push(&mut self, alert: Alert) {
        self.entries.push(alert);
    }

    /// Number of alerts raised so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any alert has been raised.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over alerts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.entries.iter()
    }

    /// Cloned snapshot of the full log, in insertion order.
    pub fn snapshot(&self) -> Vec<Alert> {
        self.entries.clone()
    }
}
