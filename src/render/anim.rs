//! Progressive-reveal GIF animation.
//!
//! Long curves cannot be animated one segment per frame (lcm-sized curves
//! run to tens of thousands of points), so the reveal is chunked: each frame
//! extends the drawn prefix by `chunk` points, with `chunk` chosen so the
//! frame count stays within the configured cap. The per-frame delay is then
//! derived so total playback lands near the target duration.

use std::path::Path;

use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;

use crate::domain::{RunConfig, Viewport};
use crate::error::AppError;

use super::{PX_PER_SIZE, draw_polyline, render_error};

/// Chunking/timing plan for one animation.
///
/// Pure arithmetic, kept separate from encoding so it can be tested without
/// producing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePlan {
    len: usize,
    /// Points revealed per frame.
    pub chunk: usize,
    /// Total frames; the last frame always shows the complete curve.
    pub frame_count: usize,
    /// Per-frame delay deriving the target playback duration.
    pub interval_ms: u64,
}

impl FramePlan {
    pub fn new(len: usize, max_frames: usize, duration_ms: u64) -> Self {
        let len = len.max(1);
        let chunk = len.div_ceil(max_frames.max(1)).max(1);
        let frame_count = len.div_ceil(chunk);
        let interval_ms = (duration_ms / frame_count as u64).max(1);
        Self {
            len,
            chunk,
            frame_count,
            interval_ms,
        }
    }

    /// Prefix lengths to draw, one per frame.
    pub fn prefixes(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=self.frame_count).map(|i| (i * self.chunk).min(self.len))
    }
}

/// Encode the progressive reveal of one curve as a GIF.
pub fn render_animation(
    path: &Path,
    points: &[(f64, f64)],
    viewport: &Viewport,
    config: &RunConfig,
) -> Result<(), AppError> {
    let plan = FramePlan::new(points.len(), config.max_frames, config.duration_ms);
    let px = config.size.max(1) * PX_PER_SIZE;

    let backend = BitMapBackend::gif(path, (px, px), plan.interval_ms as u32)
        .map_err(|e| render_error(path, e))?;
    let root = backend.into_drawing_area();

    for prefix in plan.prefixes() {
        root.fill(&WHITE).map_err(|e| render_error(path, e))?;
        draw_polyline(&root, viewport, &points[..prefix]).map_err(|e| render_error(path, e))?;
        root.present().map_err(|e| render_error(path, e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_curves_reveal_one_point_per_frame() {
        let plan = FramePlan::new(31, 500, 5_000);
        assert_eq!(plan.chunk, 1);
        assert_eq!(plan.frame_count, 31);
        assert_eq!(plan.interval_ms, 5_000 / 31);
        let prefixes: Vec<usize> = plan.prefixes().collect();
        assert_eq!(prefixes.first(), Some(&1));
        assert_eq!(prefixes.last(), Some(&31));
        assert!(prefixes.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn long_curves_respect_the_frame_cap() {
        // (12, 31, 97) has lcm 36084, so 36085 points: a realistic worst
        // case for a date-derived curve.
        let plan = FramePlan::new(36_085, 500, 5_000);
        assert!(plan.frame_count <= 500);
        assert!(plan.chunk >= 36_085 / 500);
        assert_eq!(plan.prefixes().last(), Some(36_085));
    }

    #[test]
    fn final_frame_always_contains_the_full_curve() {
        for len in [1, 2, 499, 500, 501, 1_000, 12_277] {
            let plan = FramePlan::new(len, 500, 5_000);
            assert_eq!(plan.prefixes().last(), Some(len), "len={len}");
            assert!(plan.prefixes().all(|p| p <= len));
        }
    }

    #[test]
    fn interval_never_drops_to_zero() {
        let plan = FramePlan::new(400, 500, 10);
        assert_eq!(plan.interval_ms, 1);
    }

    #[test]
    fn playback_lands_near_the_target_duration() {
        let plan = FramePlan::new(10_000, 500, 5_000);
        let total = plan.interval_ms * plan.frame_count as u64;
        assert!((4_000..=6_000).contains(&total), "total={total}");
    }
}
