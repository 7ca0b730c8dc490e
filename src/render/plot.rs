//! Static single-curve PNG rendering.

use std::path::Path;

use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;

use crate::domain::Viewport;
use crate::error::AppError;

use super::{PX_PER_SIZE, draw_polyline, render_error};

/// Render one curve to a square PNG of `size * 100` pixels.
pub fn render_plot(
    path: &Path,
    points: &[(f64, f64)],
    viewport: &Viewport,
    size: u32,
) -> Result<(), AppError> {
    let px = size.max(1) * PX_PER_SIZE;
    let root = BitMapBackend::new(path, (px, px)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;
    draw_polyline(&root, viewport, points).map_err(|e| render_error(path, e))?;
    root.present().map_err(|e| render_error(path, e))?;
    Ok(())
}
