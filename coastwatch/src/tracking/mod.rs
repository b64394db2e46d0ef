//! The tracking service: registry + evaluator + alert log orchestration.
//!
//! # Architecture
//!
//! ```text
//! report_position ──► BoatRegistry (position write)
//!                 ──► evaluator::evaluate (pure decision)
//!                 ──► BoatRegistry (status write)
//!                 ──► AlertLog (append on violation)
//! ```
//!
//! All mutable state lives behind one `parking_lot::Mutex`, so a report's
//! position write, status write, and alert append happen atomically with
//! respect to other callers, and reads are consistent snapshots. Every
//! operation is synchronous and completes in bounded local computation;
//! there is no I/O in this module.

use chrono::NaiveDateTime;
use parking_lot::Mutex;
use tracing::{info, warn};

use crate::alert::{Alert, AlertLog};
use crate::boat::{Boat, Position, Status};
use crate::evaluator;
use crate::region::RegionConfig;
use crate::registry::{BoatRegistry, RegistryError};

/// Mutable state guarded by the service lock.
#[derive(Debug, Default)]
struct TrackingState {
    registry: BoatRegistry,
    alerts: AlertLog,
}

/// Orchestrates boat registration, position reports, and alerting for one
/// monitored region.
///
/// # Example
///
/// ```ignore
/// use coastwatch::{RegionConfig, TrackingService};
///
/// let service = TrackingService::new(RegionConfig::default());
/// let boat = service.register_boat("chip-17")?;
/// let alerts = service.report_position(&boat.id, 20.0, 40.0, timestamp);
/// ```
#[derive(Debug)]
pub struct TrackingService {
    config: RegionConfig,
    state: Mutex<TrackingState>,
}

impl TrackingService {
    /// Create a tracking service for the given region rules.
    pub fn new(config: RegionConfig) -> Self {
        Self {
            config,
            state: Mutex::new(TrackingState::default()),
        }
    }

    /// The region rules this service enforces.
    pub fn region(&self) -> &RegionConfig {
        &self.config
    }

    /// Register a new boat for the given chip id.
    ///
    /// Fails with [`RegistryError::MissingChipId`] on a blank chip id,
    /// before any mutation.
    pub fn register_boat(&self, chip_id: &str) -> Result<Boat, RegistryError> {
        let boat = self.state.lock().registry.register(chip_id)?;
        info!(boat_id = %boat.id, chip_id = %boat.chip_id, "registered boat");
        Ok(boat)
    }

    /// Process one position report for a boat.
    ///
    /// Writes the position, evaluates the new status, writes it back, and
    /// appends an alert to the log when the report is a violation. Returns
    /// the alerts raised by this report (at most one).
    ///
    /// A report for an unknown boat id is a no-op returning an empty vec:
    /// it never creates a boat and never touches existing state.
    pub fn report_position(
        &self,
        boat_id: &str,
        latitude: f64,
        longitude: f64,
        timestamp: NaiveDateTime,
    ) -> Vec<Alert> {
        let mut state = self.state.lock();

        let Some(boat) = state.registry.get_mut(boat_id) else {
            warn!(boat_id = %boat_id, "position report for unknown boat id ignored");
            return Vec::new();
        };

        boat.record_position(latitude, longitude, timestamp);
        let evaluation = evaluator::evaluate(&self.config, boat_id, latitude, longitude, timestamp);
        boat.set_status(evaluation.status);

        match evaluation.violation {
            Some(notice) => {
                let alert = Alert::new(boat_id, notice.kind, notice.message, timestamp);
                warn!(
                    boat_id = %boat_id,
                    kind = %alert.kind,
                    "violation detected: {}",
                    alert.message
                );
                state.alerts.push(alert.clone());
                vec![alert]
            }
            None => Vec::new(),
        }
    }

    /// Look up a boat by system id.
    pub fn boat(&self, boat_id: &str) -> Option<Boat> {
        self.state.lock().registry.get(boat_id).cloned()
    }

    /// The most recently reported position of a boat.
    ///
    /// `None` when the id is unknown or the boat has never reported.
    pub fn boat_location(&self, boat_id: &str) -> Option<Position> {
        self.state
            .lock()
            .registry
            .get(boat_id)
            .and_then(|boat| boat.position)
    }

    /// Snapshot of all registered boats, ordered by id.
    pub fn list_all(&self) -> Vec<Boat> {
        self.state.lock().registry.list_all()
    }

    /// Snapshot of the boats whose status matches exactly.
    pub fn filter_by_status(&self, status: Status) -> Vec<Boat> {
        self.state.lock().registry.filter_by_status(status)
    }

    /// Snapshot of every alert ever raised, in the order raised.
    pub fn alert_log(&self) -> Vec<Alert> {
        self.state.lock().alerts.snapshot()
    }
}

impl Default for TrackingService {
    fn default() -> Self {
        Self::new(RegionConfig::default())
    }
}
