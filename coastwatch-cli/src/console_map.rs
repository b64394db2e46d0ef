//! ASCII map rendering for the fleet.
//!
//! Renders the monitored region as a character grid and plots each boat at
//! the cell its latitude/longitude falls into. This is a display concern
//! only: it reads registry snapshots and never mutates the core.

use coastwatch::{Boat, BoundingBox, Status};

/// Marker drawn for each status on the map.
///
/// Pure status-to-display mapping, deliberately kept out of the core.
pub fn status_marker(status: Status) -> char {
    match status {
        Status::Normal => 'N',
        Status::NearLimit => 'L',
        Status::Violation => 'V',
    }
}

/// Render the fleet on a `rows` × `cols` grid covering `bounds`.
///
/// North is the top row. Boats without a position, or positioned outside
/// the grid (including boats in breach of the area), are not plotted.
pub fn render(boats: &[Boat], bounds: &BoundingBox, rows: usize, cols: usize) -> String {
    let mut grid = vec![vec!['.'; cols]; rows];

    for boat in boats {
        let Some(pos) = boat.position else { continue };

        let lat_ratio = (pos.latitude - bounds.min_lat) / bounds.lat_span();
        let lon_ratio = (pos.longitude - bounds.min_lon) / bounds.lon_span();
        let row = rows as i64 - 1 - (lat_ratio * rows as f64).floor() as i64;
        let col = (lon_ratio * cols as f64).floor() as i64;

        if row < 0 || row >= rows as i64 || col < 0 || col >= cols as i64 {
            continue;
        }
        grid[row as usize][col as usize] = status_marker(boat.status);
    }

    let mut out = String::with_capacity(rows * (cols * 2 + 1));
    for row in grid {
        for cell in row {
            out.push(cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
