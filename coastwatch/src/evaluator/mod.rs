//! Status evaluation for position reports.
//!
//! [`evaluate`] is the decision core of the system: a pure function from
//! the region rules and one position report to a [`Status`] and, for
//! violations, the alert to raise. It performs no I/O and mutates nothing;
//! the tracking service applies the result.
//!
//! # Decision order
//!
//! Checks run in a fixed priority order and the first match wins:
//!
//! 1. time-of-day outside operating hours → `TIME_EXCEEDED`
//! 2. position outside the region box → `AREA_BREACH`
//! 3. position inside a restricted zone (first matching zone in
//!    configuration order) → `RESTRICTED_ZONE`
//! 4. near a region edge or near the end of the operating window →
//!    [`Status::NearLimit`], otherwise [`Status::Normal`]
//!
//! A report outside both the hours and the area is therefore always a
//! `TIME_EXCEEDED` violation. Only violations carry an alert; near-limit
//! and normal results do not.

use chrono::{Duration, NaiveDateTime};

use crate::alert::AlertKind;
use crate::boat::Status;
use crate::region::RegionConfig;

/// How close to a region edge (in degrees) a boat may come before it is
/// flagged as near-limit.
pub const NEAR_BOUNDARY_MARGIN_DEG: f64 = 0.1;

/// How close to the end of the operating window (in minutes) a report may
/// come before the boat is flagged as near-limit.
pub const CLOSING_WINDOW_MINUTES: i64 = 30;

/// A violation detected by the evaluator: which rule was broken and the
/// message for the alert to be raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationNotice {
    /// Which rule was broken.
    pub kind: AlertKind,
    /// Human-readable description, referencing the boat id.
    pub message: String,
}

/// Result of evaluating one position report.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The status the boat transitions to.
    pub status: Status,
    /// Present exactly when `status` is [`Status::Violation`].
    pub violation: Option<ViolationNotice>,
}

impl Evaluation {
    fn ok(status: Status) -> Self {
        Self {
            status,
            violation: None,
        }
    }

    fn violation(kind: AlertKind, message: String) -> Self {
        Self {
            status: Status::Violation,
            violation: Some(ViolationNotice { kind, message }),
        }
    }
}

/// Evaluate one position report against the region rules.
///
/// `boat_id` is only used to compose alert messages. Latitude and
/// longitude are not range-validated; implausible values simply fail the
/// area check.
pub fn evaluate(
    config: &RegionConfig,
    boat_id: &str,
    latitude: f64,
    longitude: f64,
    timestamp: NaiveDateTime,
) -> Evaluation {
    let time = timestamp.time();

    // Operating hours come first: a boat reporting outside hours is a
    // violation regardless of where it is.
    if !config.hours.contains(time) {
        return Evaluation::violation(
            AlertKind::TimeExceeded,
            format!(
                "Boat {} exceeded operating hours at {}",
                boat_id,
                time.format("%H:%M")
            ),
        );
    }

    if !config.bounds.contains(latitude, longitude) {
        return Evaluation::violation(
            AlertKind::AreaBreach,
            format!(
                "Boat {} left permitted area at ({:.2}, {:.2})",
                boat_id, latitude, longitude
            ),
        );
    }

    // First matching zone wins; later overlapping zones are not reported.
    for zone in &config.restricted_zones {
        if zone.contains(latitude, longitude) {
            return Evaluation::violation(
                AlertKind::RestrictedZone,
                format!(
                    "Boat {} entered restricted zone '{}' at ({:.2}, {:.2})",
                    boat_id, zone.name, latitude, longitude
                ),
            );
        }
    }

    let near_boundary = config
        .bounds
        .near_edge(latitude, longitude, NEAR_BOUNDARY_MARGIN_DEG);
    let near_close = config
        .hours
        .near_close(time, Duration::minutes(CLOSING_WINDOW_MINUTES));

    if near_boundary || near_close {
        Evaluation::ok(Status::NearLimit)
    } else {
        Evaluation::ok(Status::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{BoundingBox, RestrictedZone};
    use chrono::NaiveDate;

    fn config() -> RegionConfig {
        RegionConfig::default()
    }

    fn ts(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_normal_report() {
        let eval = evaluate(&config(), "B0001", 20.0, 40.0, ts(10, 0));
        assert_eq!(eval.status, Status::Normal);
        assert!(eval.violation.is_none());
    }

    #[test]
    fn test_time_exceeded_after_hours() {
        let eval = evaluate(&config(), "B0001", 19.5, 40.0, ts(19, 0));
        assert_eq!(eval.status, Status::Violation);
        let notice = eval.violation.unwrap();
        assert_eq!(notice.kind, AlertKind::TimeExceeded);
        assert!(notice.message.contains("B0001"));
        assert!(notice.message.contains("19:00"));
    }

    #[test]
    fn test_time_exceeded_before_hours() {
        let eval = evaluate(&config(), "B0001", 20.0, 40.0, ts(5, 30));
        assert_eq!(eval.violation.unwrap().kind, AlertKind::TimeExceeded);
    }

    #[test]
    fn test_time_check_outranks_area_check() {
        // Outside both the hours and the region: time wins.
        let eval = evaluate(&config(), "B0001", 25.0, 43.0, ts(19, 0));
        assert_eq!(eval.violation.unwrap().kind, AlertKind::TimeExceeded);
    }

    #[test]
    fn test_area_breach() {
        let eval = evaluate(&config(), "B0001", 25.0, 43.0, ts(10, 0));
        assert_eq!(eval.status, Status::Violation);
        let notice = eval.violation.unwrap();
        assert_eq!(notice.kind, AlertKind::AreaBreach);
        assert!(notice.message.contains("B0001"));
    }

    #[test]
    fn test_region_edge_is_inside() {
        // Exactly on min_lat: inside the region, but near the edge.
        let eval = evaluate(&config(), "B0001", 18.0, 40.0, ts(10, 0));
        assert_eq!(eval.status, Status::NearLimit);
        assert!(eval.violation.is_none());
    }

    #[test]
    fn test_just_below_min_lat_is_breach() {
        let eval = evaluate(&config(), "B0001", 17.9999, 40.0, ts(10, 0));
        assert_eq!(eval.violation.unwrap().kind, AlertKind::AreaBreach);
    }

    #[test]
    fn test_restricted_zone_entry() {
        let eval = evaluate(&config(), "B0001", 20.6, 40.6, ts(9, 0));
        assert_eq!(eval.status, Status::Violation);
        let notice = eval.violation.unwrap();
        assert_eq!(notice.kind, AlertKind::RestrictedZone);
        assert!(notice.message.contains("protected-fishery"));
    }

    #[test]
    fn test_first_matching_zone_wins() {
        let mut config = config();
        config.restricted_zones = vec![
            RestrictedZone::new("outer", BoundingBox::new(20.0, 21.5, 40.0, 41.5)),
            RestrictedZone::new("inner", BoundingBox::new(20.5, 21.0, 40.5, 41.0)),
        ];

        // Position inside both zones reports the first in config order.
        let eval = evaluate(&config, "B0001", 20.6, 40.6, ts(9, 0));
        assert!(eval.violation.unwrap().message.contains("outer"));
    }

    #[test]
    fn test_near_boundary_is_near_limit() {
        let eval = evaluate(&config(), "B0001", 18.05, 40.0, ts(11, 0));
        assert_eq!(eval.status, Status::NearLimit);
        assert!(eval.violation.is_none());
    }

    #[test]
    fn test_near_closing_time_is_near_limit() {
        let eval = evaluate(&config(), "B0001", 19.5, 40.0, ts(17, 45));
        assert_eq!(eval.status, Status::NearLimit);
    }

    #[test]
    fn test_exactly_thirty_minutes_before_close_is_normal() {
        let eval = evaluate(&config(), "B0001", 19.5, 40.0, ts(17, 30));
        assert_eq!(eval.status, Status::Normal);
    }

    #[test]
    fn test_exactly_at_close_is_within_hours() {
        // 18:00 is inclusive: no violation, but within the closing window.
        let eval = evaluate(&config(), "B0001", 19.5, 40.0, ts(18, 0));
        assert_eq!(eval.status, Status::NearLimit);
        assert!(eval.violation.is_none());
    }

    #[test]
    fn test_implausible_coordinates_fail_area_check() {
        let eval = evaluate(&config(), "B0001", 123.0, -500.0, ts(10, 0));
        assert_eq!(eval.violation.unwrap().kind, AlertKind::AreaBreach);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let a = evaluate(&config(), "B0001", 20.6, 40.6, ts(9, 0));
        let b = evaluate(&config(), "B0001", 20.6, 40.6, ts(9, 0));
        assert_eq!(a, b);
    }
}
