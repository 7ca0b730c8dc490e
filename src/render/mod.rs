//! Image rendering via Plotters.
//!
//! Three output shapes, all built from the same primitive (one polyline drawn
//! over a fixed square viewport, no axes or labels):
//!
//! - `plot`: one curve, one PNG
//! - `grid`: up to six curves composited into one PNG (3 × 2)
//! - `anim`: one curve revealed progressively, encoded as a GIF

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::domain::Viewport;
use crate::error::AppError;

pub mod anim;
pub mod grid;
pub mod plot;

pub use anim::*;
pub use grid::*;
pub use plot::*;

/// Line color for every curve (matplotlib's default blue).
pub(crate) const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Polyline stroke width in pixels.
pub(crate) const STROKE_WIDTH: u32 = 2;

/// Pixels per unit of figure size.
pub(crate) const PX_PER_SIZE: u32 = 100;

/// Draw one curve as a polyline over its viewport, into any drawing area.
pub(crate) fn draw_polyline<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    viewport: &Viewport,
    points: &[(f64, f64)],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let mut chart =
        ChartBuilder::on(area).build_cartesian_2d(viewport.x_range(), viewport.y_range())?;
    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        LINE_COLOR.stroke_width(STROKE_WIDTH),
    ))?;
    Ok(())
}

/// Wrap a backend/encoder failure into an `AppError` (exit code 2).
pub(crate) fn render_error(path: &Path, err: impl std::fmt::Display) -> AppError {
    AppError::new(2, format!("Failed to render '{}': {err}", path.display()))
}
