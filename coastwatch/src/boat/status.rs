//! Operational status classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operational status of a tracked boat.
///
/// Derived from the most recent position report; recomputed by the
/// evaluator on every report and written back by the tracking service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Operating within the permitted area and hours.
    Normal,
    /// Close to breaching either the time or the area constraints.
    NearLimit,
    /// A time, area, or restricted-zone rule has been broken.
    Violation,
}

impl Status {
    /// Stable uppercase name, used in console output and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "NORMAL",
            Status::NearLimit => "NEAR_LIMIT",
            Status::Violation => "VIOLATION",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_are_stable() {
        assert_eq!(Status::Normal.to_string(), "NORMAL");
        assert_eq!(Status::NearLimit.to_string(), "NEAR_LIMIT");
        assert_eq!(Status::Violation.to_string(), "VIOLATION");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Status::Normal, Status::Normal);
        assert_ne!(Status::Normal, Status::Violation);
    }
}
