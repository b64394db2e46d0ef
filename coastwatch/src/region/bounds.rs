//! Rectangular lat/lon bounding boxes.

use std::fmt;

/// A geographic bounding box in signed decimal degrees.
///
/// Containment is inclusive on all four edges: a position exactly on
/// `min_lat` (or any other edge) is inside the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum (southernmost) latitude.
    pub min_lat: f64,
    /// Maximum (northernmost) latitude.
    pub max_lat: f64,
    /// Minimum (westernmost) longitude.
    pub min_lon: f64,
    /// Maximum (easternmost) longitude.
    pub max_lon: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Whether the position lies inside the box (edges inclusive).
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_lat
            && latitude <= self.max_lat
            && longitude >= self.min_lon
            && longitude <= self.max_lon
    }

    /// Whether a position inside the box lies within `margin` degrees of
    /// any of the four edges.
    ///
    /// Distances are signed, so the result is only meaningful for positions
    /// that already pass [`BoundingBox::contains`].
    pub fn near_edge(&self, latitude: f64, longitude: f64, margin: f64) -> bool {
        (latitude - self.min_lat) < margin
            || (self.max_lat - latitude) < margin
            || (longitude - self.min_lon) < margin
            || (self.max_lon - longitude) < margin
    }

    /// Latitude extent of the box in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude extent of the box in degrees.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat [{}, {}], lon [{}, {}]",
            self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}
