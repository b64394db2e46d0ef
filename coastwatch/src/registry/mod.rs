//! The boat registry.
//!
//! Owns every registered [`Boat`] and assigns system identifiers from a
//! monotonic per-registry counter (no global state). Identifiers follow
//! the stable, human-readable `B0001` format. Boats are never removed;
//! they live until the registry is dropped.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::boat::{Boat, Status};

/// Errors raised by registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Registration requires a non-blank chip id.
    #[error("chip id must not be blank")]
    MissingChipId,

    /// The referenced boat id is not registered.
    #[error("no boat registered with id '{0}'")]
    BoatNotFound(String),
}

/// Registry of all boats, keyed by system id.
///
/// Storage is a `BTreeMap`, so [`BoatRegistry::list_all`] returns boats in
/// id order, giving deterministic output for console renderers.
#[derive(Debug)]
pub struct BoatRegistry {
    boats: BTreeMap<String, Boat>,
    next_id: u64,
}

impl Default for BoatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BoatRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            boats: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register a new boat for the given chip.
    ///
    /// Rejects blank chip ids before any mutation. Chip ids are not
    /// required to be unique; each registration gets a fresh system id.
    pub fn register(&mut self, chip_id: &str) -> Result<Boat, RegistryError> {
        if chip_id.trim().is_empty() {
            return Err(RegistryError::MissingChipId);
        }

        let id = self.assign_id();
        let boat = Boat::new(id.clone(), chip_id);
        self.boats.insert(id, boat.clone());
        Ok(boat)
    }

    /// Look up a boat by system id.
    pub fn get(&self, boat_id: &str) -> Option<&Boat> {
        self.boats.get(boat_id)
    }

    /// Mutable lookup for the tracking service, which writes position and
    /// status in one lock hold.
    pub(crate) fn get_mut(&mut self, boat_id: &str) -> Option<&mut Boat> {
        self.boats.get_mut(boat_id)
    }

    /// Write a new position and report time onto a boat.
    pub fn update_position(
        &mut self,
        boat_id: &str,
        latitude: f64,
        longitude: f64,
        time: NaiveDateTime,
    ) -> Result<(), RegistryError> {
        let boat = self
            .boats
            .get_mut(boat_id)
            .ok_or_else(|| RegistryError::BoatNotFound(boat_id.to_string()))?;
        boat.record_position(latitude, longitude, time);
        Ok(())
    }

    /// Write a derived status onto a boat.
    pub fn set_status(&mut self, boat_id: &str, status: Status) -> Result<(), RegistryError> {
        let boat = self
            .boats
            .get_mut(boat_id)
            .ok_or_else(|| RegistryError::BoatNotFound(boat_id.to_string()))?;
        boat.set_status(status);
        Ok(())
    }

    /// Number of registered boats.
    pub fn len(&self) -> usize {
        self.boats.len()
    }

    /// Whether no boat has been registered.
    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    /// Cloned snapshot of all boats, ordered by id.
    ///
    /// The snapshot does not track later mutations.
    pub fn list_all(&self) -> Vec<Boat> {
        self.boats.values().cloned().collect()
    }

    /// Cloned snapshot of the boats whose status matches exactly.
    pub fn filter_by_status(&self, status: Status) -> Vec<Boat> {
        self.boats
            .values()
            .filter(|boat| boat.status == status)
            .cloned()
            .collect()
    }

    fn assign_id(&mut self) -> String {
        let id = format!("B{:04}", self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut registry = BoatRegistry::new();
        let b1 = registry.register("chipA").unwrap();
        let b2 = registry.register("chipB").unwrap();

        assert_eq!(b1.id, "B0001");
        assert_eq!(b2.id, "B0002");
        assert_ne!(b1.id, b2.id);
    }

    #[test]
    fn test_registered_boat_is_retrievable() {
        let mut registry = BoatRegistry::new();
        let boat = registry.register("chipX").unwrap();

        let stored = registry.get(&boat.id).unwrap();
        assert_eq!(stored.chip_id, "chipX");
        assert_eq!(stored.status, Status::Normal);
        assert!(stored.position.is_none());
    }

    #[test]
    fn test_blank_chip_id_is_rejected() {
        let mut registry = BoatRegistry::new();
        assert_eq!(registry.register("").unwrap_err(), RegistryError::MissingChipId);
        assert_eq!(
            registry.register("   ").unwrap_err(),
            RegistryError::MissingChipId
        );
        // Rejected before any mutation: the counter did not advance.
        assert_eq!(registry.register("chipA").unwrap().id, "B0001");
    }

    #[test]
    fn test_duplicate_chip_ids_are_allowed() {
        let mut registry = BoatRegistry::new();
        let b1 = registry.register("same-chip").unwrap();
        let b2 = registry.register("same-chip").unwrap();
        assert_ne!(b1.id, b2.id);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_update_position_unknown_boat() {
        let mut registry = BoatRegistry::new();
        let err = registry
            .update_position("B9999", 20.0, 40.0, ts(10, 0))
            .unwrap_err();
        assert_eq!(err, RegistryError::BoatNotFound("B9999".to_string()));
    }

    #[test]
    fn test_update_position_mutates_in_place() {
        let mut registry = BoatRegistry::new();
        let boat = registry.register("chipA").unwrap();
        registry
            .update_position(&boat.id, 20.0, 40.0, ts(10, 0))
            .unwrap();

        let stored = registry.get(&boat.id).unwrap();
        let pos = stored.position.unwrap();
        assert!((pos.latitude - 20.0).abs() < f64::EPSILON);
        assert_eq!(stored.last_update, Some(ts(10, 0)));
    }

    #[test]
    fn test_list_all_is_ordered_by_id() {
        let mut registry = BoatRegistry::new();
        for chip in ["c1", "c2", "c3"] {
            registry.register(chip).unwrap();
        }
        let ids: Vec<String> = registry.list_all().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["B0001", "B0002", "B0003"]);
    }

    #[test]
    fn test_list_all_is_a_snapshot() {
        let mut registry = BoatRegistry::new();
        registry.register("c1").unwrap();
        let snapshot = registry.list_all();
        registry.register("c2").unwrap();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_filter_by_status() {
        let mut registry = BoatRegistry::new();
        let b1 = registry.register("c1").unwrap();
        let b2 = registry.register("c2").unwrap();
        registry.set_status(&b1.id, Status::Violation).unwrap();

        let violating = registry.filter_by_status(Status::Violation);
        assert_eq!(violating.len(), 1);
        assert_eq!(violating[0].id, b1.id);

        let normal = registry.filter_by_status(Status::Normal);
        assert_eq!(normal.len(), 1);
        assert_eq!(normal[0].id, b2.id);

        assert!(registry.filter_by_status(Status::NearLimit).is_empty());
    }
}
