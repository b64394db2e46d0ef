//! Region and rules configuration.
//!
//! The monitored region is a rectangular lat/lon bounding box with a daily
//! operating-hours window and an ordered list of restricted rectangular
//! zones. The whole configuration is immutable for the lifetime of a
//! tracking service instance.
//!
//! # Configuration file
//!
//! A region can be loaded from an INI file:
//!
//! ```ini
//! [region]
//! min_latitude = 18.0
//! max_latitude = 23.0
//! min_longitude = 39.0
//! max_longitude = 42.0
//!
//! [hours]
//! start = 06:00
//! end = 18:00
//!
//! [zone:protected-fishery]
//! min_latitude = 20.5
//! max_latitude = 21.0
//! min_longitude = 40.5
//! max_longitude = 41.0
//! ```
//!
//! Zone sections are scanned in file order; that order is the overlap
//! priority used by the evaluator.

mod bounds;
mod config;
mod hours;

pub use bounds::BoundingBox;
pub use config::{RegionConfig, RegionConfigError, RestrictedZone};
pub use hours::OperatingHours;
