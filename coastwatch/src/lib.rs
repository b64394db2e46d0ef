//! CoastWatch - coastal fleet tracking and violation alerting.
//!
//! Tracks a small fleet of chip-identified boats within a bounded coastal
//! region, classifying each boat's operational status (normal, near-limit,
//! violating) from periodic position reports and raising alerts on
//! violations.
//!
//! # Architecture
//!
//! - [`region`] - immutable region rules: bounding box, operating hours,
//!   restricted zones, INI config loading
//! - [`boat`] - the tracked entity and its derived [`Status`]
//! - [`evaluator`] - the pure decision core: one report in, one status and
//!   at most one violation out
//! - [`registry`] - boat storage and id assignment
//! - [`alert`] - immutable alerts and the append-only log
//! - [`tracking`] - the orchestrating service; the only mutation entry
//!   point
//! - [`ingest`] - report-file collaborator feeding the service
//! - [`log`] - tracing subscriber bootstrap for binaries
//!
//! # Example
//!
//! ```ignore
//! use coastwatch::{RegionConfig, TrackingService};
//!
//! let service = TrackingService::new(RegionConfig::default());
//! let boat = service.register_boat("chip-204")?;
//!
//! let alerts = service.report_position(&boat.id, 20.0, 40.0, timestamp);
//! assert!(alerts.is_empty());
//! ```

pub mod alert;
pub mod boat;
pub mod evaluator;
pub mod ingest;
pub mod log;
pub mod region;
pub mod registry;
pub mod tracking;

pub use alert::{Alert, AlertKind, AlertLog};
pub use boat::{Boat, Position, Status};
pub use evaluator::{evaluate, Evaluation, ViolationNotice};
pub use region::{BoundingBox, OperatingHours, RegionConfig, RegionConfigError, RestrictedZone};
pub use registry::{BoatRegistry, RegistryError};
pub use tracking::TrackingService;
