//! Shared rendering pipeline used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! tuple -> curve points -> viewport -> render to disk
//!
//! The CLI front-end only decides *which* jobs exist; each job then runs the
//! same end-to-end path here, with no cross-job shared state.

use rayon::prelude::*;

use crate::domain::{JobKind, ParamTuple, RenderJob, RunConfig};
use crate::error::AppError;
use crate::math::{compute_viewport, generate_curve};
use crate::render;

/// Run a batch of independent jobs, fanning out over the rayon pool once the
/// batch is large enough to be worth it.
///
/// Jobs are pure fan-out: the first error aborts the batch (a failure here is
/// deterministic, so there is nothing to retry).
pub fn run_jobs(jobs: &[RenderJob], config: &RunConfig) -> Result<(), AppError> {
    if jobs.len() < config.parallel_threshold {
        jobs.iter().try_for_each(|job| render_job(job, config))
    } else {
        jobs.par_iter().try_for_each(|job| render_job(job, config))
    }
}

/// Execute a single job end to end: generate, normalize, render, report.
pub fn render_job(job: &RenderJob, config: &RunConfig) -> Result<(), AppError> {
    std::fs::create_dir_all(&job.dir).map_err(|e| {
        AppError::new(
            2,
            format!(
                "Failed to create output directory '{}': {e}",
                job.dir.display()
            ),
        )
    })?;

    let path = job.path();
    match job.kind {
        JobKind::Plot => {
            let (points, viewport) = generate(single_tuple(job)?, config)?;
            render::render_plot(&path, &points, &viewport, config.size)?;
        }
        JobKind::Grid => {
            let curves = job
                .curves
                .iter()
                .map(|tuple| generate(tuple, config))
                .collect::<Result<Vec<_>, _>>()?;
            render::render_grid(&path, &curves)?;
        }
        JobKind::Animate => {
            let (points, viewport) = generate(single_tuple(job)?, config)?;
            render::render_animation(&path, &points, &viewport, config)?;
        }
    }

    println!("\t{} ... ready.", path.display());
    Ok(())
}

fn generate(
    tuple: &ParamTuple,
    config: &RunConfig,
) -> Result<(Vec<(f64, f64)>, crate::domain::Viewport), AppError> {
    let points = generate_curve(tuple.values())?;
    let viewport = compute_viewport(&points, config.margin)?;
    Ok((points, viewport))
}

fn single_tuple(job: &RenderJob) -> Result<&ParamTuple, AppError> {
    job.curves
        .first()
        .ok_or_else(|| AppError::new(3, "Render job carries no curves."))
}
