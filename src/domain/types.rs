//! Shared domain types.
//!
//! These types are intentionally lightweight: a job is fully described by its
//! parameter tuples plus a destination, so jobs can be built up front and then
//! handed to the worker pool without any shared mutable state.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

use crate::math::{CurveError, check_params};

/// An ordered tuple of positive integers parameterizing one exponential sum.
///
/// For the calendar-date use case the tuple is `(month, day, year mod 100)`,
/// but arbitrary positive integers are accepted (`expsum nums`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamTuple(Vec<i64>);

impl ParamTuple {
    /// Build a validated tuple. Every element must be a positive integer.
    pub fn new(values: Vec<i64>) -> Result<Self, CurveError> {
        check_params(&values)?;
        Ok(Self(values))
    }

    /// Derive the `(month, day, year mod 100)` tuple for a calendar date.
    ///
    /// Years that are multiples of 100 map to a zero component and are
    /// rejected; the formula divides by each tuple element.
    pub fn from_date(date: NaiveDate) -> Result<Self, CurveError> {
        let year = i64::from(date.year()).rem_euclid(100);
        Self::new(vec![i64::from(date.month()), i64::from(date.day()), year])
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }

    /// Dash-joined label used in file names, e.g. `"12-25-24"`.
    pub fn label(&self) -> String {
        self.0
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// A square, aspect-preserving viewing window around a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center_x: f64,
    pub center_y: f64,
    pub half_extent: f64,
}

impl Viewport {
    /// Horizontal plotting range.
    pub fn x_range(&self) -> std::ops::Range<f64> {
        (self.center_x - self.half_extent)..(self.center_x + self.half_extent)
    }

    /// Vertical plotting range.
    pub fn y_range(&self) -> std::ops::Range<f64> {
        (self.center_y - self.half_extent)..(self.center_y + self.half_extent)
    }

    /// Whether a point lies inside the window (inclusive of the border,
    /// with a few ulps of slack since center and extent are themselves
    /// rounded).
    pub fn contains(&self, point: (f64, f64)) -> bool {
        let tol = 4.0 * f64::EPSILON * self.half_extent.abs().max(1.0);
        (point.0 - self.center_x).abs() <= self.half_extent + tol
            && (point.1 - self.center_y).abs() <= self.half_extent + tol
    }
}

/// What the renderer should produce for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    /// One curve, one static PNG.
    Plot,
    /// Up to six curves composited into one PNG.
    Grid,
    /// One curve, progressive-reveal GIF.
    Animate,
}

/// One independent unit of rendering work.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub kind: JobKind,
    /// One tuple for `Plot`/`Animate`, up to six for `Grid`.
    pub curves: Vec<ParamTuple>,
    pub dir: PathBuf,
    pub file_name: String,
}

impl RenderJob {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Resolved rendering options shared by every job of a run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Figure size; the canvas is `size * 100` pixels square.
    pub size: u32,
    /// Extra padding added to the viewport half-extent.
    pub margin: f64,
    /// Cap on displayed animation frames; longer curves are chunked.
    pub max_frames: usize,
    /// Approximate total animation playback time.
    pub duration_ms: u64,
    /// Minimum job count before the rayon pool is used.
    pub parallel_threshold: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: 5,
            margin: 0.0,
            max_frames: 500,
            duration_ms: 5_000,
            parallel_threshold: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_from_date_uses_month_day_year_mod_100() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let tuple = ParamTuple::from_date(date).unwrap();
        assert_eq!(tuple.values(), &[12, 25, 24]);
        assert_eq!(tuple.label(), "12-25-24");
    }

    #[test]
    fn tuple_from_century_date_is_rejected() {
        // 2000 % 100 == 0, which would mean dividing by zero in the formula.
        let date = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        assert!(ParamTuple::from_date(date).is_err());
    }

    #[test]
    fn tuple_rejects_non_positive_values() {
        assert!(ParamTuple::new(vec![0, 5, 3]).is_err());
        assert!(ParamTuple::new(vec![-1, 2]).is_err());
        assert!(ParamTuple::new(vec![]).is_err());
    }

    #[test]
    fn viewport_ranges_are_symmetric_around_center() {
        let vp = Viewport {
            center_x: 1.0,
            center_y: -2.0,
            half_extent: 3.0,
        };
        assert_eq!(vp.x_range(), -2.0..4.0);
        assert_eq!(vp.y_range(), -5.0..1.0);
        assert!(vp.contains((4.0, -5.0)));
        assert!(!vp.contains((4.1, 0.0)));
    }
}
