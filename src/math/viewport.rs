//! View normalization: fit a square window around a curve.
//!
//! Both axes of an exponential-sum curve live on comparable scales (each term
//! is a point on the unit circle), so a square, equal-extent window preserves
//! the curve's natural proportions instead of stretching it to the canvas.

use crate::domain::Viewport;

use super::CurveError;

/// Compute the square viewing window for a point sequence.
///
/// The window is centered on the midpoint of the bounding box and extends
/// half of the larger bounding-box side (plus `margin`) in every direction,
/// so nothing is clipped and the aspect ratio is 1:1. Single-day plots pass
/// `margin = 0.0`; free-number plots pad with `0.5`.
pub fn compute_viewport(points: &[(f64, f64)], margin: f64) -> Result<Viewport, CurveError> {
    let (first, rest) = points.split_first().ok_or(CurveError::EmptyCurve)?;

    let (mut x_min, mut x_max) = (first.0, first.0);
    let (mut y_min, mut y_max) = (first.1, first.1);
    for &(x, y) in rest {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    Ok(Viewport {
        center_x: x_min + (x_max - x_min) / 2.0,
        center_y: y_min + (y_max - y_min) / 2.0,
        half_extent: (x_max - x_min).max(y_max - y_min) / 2.0 + margin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::generate_curve;

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(compute_viewport(&[], 0.0), Err(CurveError::EmptyCurve));
    }

    #[test]
    fn centering_is_exact() {
        let points = [(-1.0, 2.0), (3.0, 6.0), (1.0, 4.0)];
        let vp = compute_viewport(&points, 0.0).unwrap();
        assert_eq!(vp.center_x, 1.0);
        assert_eq!(vp.center_y, 4.0);
        // Both sides span 4, so the half-extent is 2.
        assert_eq!(vp.half_extent, 2.0);
    }

    #[test]
    fn wider_axis_wins() {
        let points = [(0.0, 0.0), (10.0, 1.0)];
        let vp = compute_viewport(&points, 0.0).unwrap();
        assert_eq!(vp.half_extent, 5.0);
        let points = [(0.0, 0.0), (1.0, 8.0)];
        let vp = compute_viewport(&points, 0.0).unwrap();
        assert_eq!(vp.half_extent, 4.0);
    }

    #[test]
    fn margin_pads_the_half_extent() {
        let points = [(0.0, 0.0), (2.0, 2.0)];
        let vp = compute_viewport(&points, 0.5).unwrap();
        assert_eq!(vp.half_extent, 1.5);
    }

    #[test]
    fn single_point_collapses_to_margin() {
        let vp = compute_viewport(&[(3.0, -1.0)], 0.5).unwrap();
        assert_eq!(vp.center_x, 3.0);
        assert_eq!(vp.center_y, -1.0);
        assert_eq!(vp.half_extent, 0.5);
    }

    #[test]
    fn every_curve_point_is_contained() {
        let points = generate_curve(&[5, 17, 23]).unwrap();
        let vp = compute_viewport(&points, 0.0).unwrap();
        for &p in &points {
            assert!(vp.contains(p), "{p:?} outside {vp:?}");
        }
    }
}
