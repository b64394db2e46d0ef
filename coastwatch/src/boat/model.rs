//! The boat entity and its position.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Status;

/// A geographic position in signed decimal degrees.
///
/// No range validation is applied here; positions outside the plausible
/// WGS84 ranges simply never pass the region containment checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees (positive = north).
    pub latitude: f64,
    /// Longitude in degrees (positive = east).
    pub longitude: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.latitude, self.longitude)
    }
}

/// A tracked boat.
///
/// Owned exclusively by the registry; mutated only through the tracking
/// service's report operation. Position and last-update time stay `None`
/// until the first report arrives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boat {
    /// System-assigned identifier, unique within one registry.
    pub id: String,
    /// Hardware chip identifier supplied at registration. Not guaranteed
    /// unique; two boats may carry chips with the same id.
    pub chip_id: String,
    /// Most recently reported position, if any report has been received.
    pub position: Option<Position>,
    /// Current derived status.
    pub status: Status,
    /// Timestamp of the most recent position report.
    pub last_update: Option<NaiveDateTime>,
}

impl Boat {
    /// Create a freshly registered boat with no position and [`Status::Normal`].
    pub fn new(id: impl Into<String>, chip_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            chip_id: chip_id.into(),
            position: None,
            status: Status::Normal,
            last_update: None,
        }
    }

    /// Record a new position and report time.
    ///
    /// Status is not touched here; the tracking service writes the
    /// evaluated status separately so the two stay in one lock hold.
    pub fn record_position(&mut self, latitude: f64, longitude: f64, time: NaiveDateTime) {
        self.position = Some(Position::new(latitude, longitude));
        self.last_update = Some(time);
    }

    /// Overwrite the derived status.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl fmt::Display for Boat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} {} - {}", self.id, pos, self.status),
            None => write!(f, "{} (no position) - {}", self.id, self.status),
        }
    }
}
