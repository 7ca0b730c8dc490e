//! Overview ("six-pack") grid rendering.

use std::path::Path;

use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;

use crate::domain::Viewport;
use crate::error::AppError;

use super::{draw_polyline, render_error};

/// Grid canvas in pixels (3 rows × 2 columns of square-ish cells).
const GRID_SIZE: (u32, u32) = (1_000, 1_500);

/// Render up to six curves into one PNG, one cell each.
///
/// A short final batch leaves its trailing cells blank; more than six curves
/// is a scheduling bug and is rejected.
pub fn render_grid(path: &Path, curves: &[(Vec<(f64, f64)>, Viewport)]) -> Result<(), AppError> {
    if curves.len() > 6 {
        return Err(AppError::new(
            3,
            format!("Overview grid got {} curves, at most 6 fit.", curves.len()),
        ));
    }

    let root = BitMapBackend::new(path, GRID_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;

    let cells = root.split_evenly((3, 2));
    for ((points, viewport), cell) in curves.iter().zip(cells.iter()) {
        draw_polyline(cell, viewport, points).map_err(|e| render_error(path, e))?;
    }

    root.present().map_err(|e| render_error(path, e))?;
    Ok(())
}
