//! Boat entities and their operational status.
//!
//! A [`Boat`] is the tracked entity: a system-assigned identifier, the
//! hardware chip id it reports with, its most recent position, and the
//! [`Status`] derived from that position. Status is never set by callers
//! directly; the tracking service recomputes it on every position report.

mod model;
mod status;

pub use model::{Boat, Position};
pub use status::Status;
