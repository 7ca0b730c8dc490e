//! Job scheduling: turn a date range or number list into independent
//! rendering jobs.
//!
//! Each job carries everything the renderer needs (tuples, destination
//! directory, file name), so the whole batch can be handed to the worker
//! pool with no cross-job state. Date output is grouped into
//! `<root>/<year>/<month>/` folders; overview grids batch up to
//! [`GRID_CAPACITY`] curves per image.

use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::domain::{JobKind, ParamTuple, RenderJob};
use crate::error::AppError;

/// Curves per overview grid image (3 rows × 2 columns).
pub const GRID_CAPACITY: usize = 6;

/// All days from `start` to `end` inclusive, grouped into runs that share a
/// `(year, month)` pair. Groups come out in chronological order.
pub fn month_groups(start: NaiveDate, end: NaiveDate) -> Vec<Vec<NaiveDate>> {
    let mut groups: Vec<Vec<NaiveDate>> = Vec::new();
    let mut day = start;
    while day <= end {
        match groups.last_mut() {
            Some(group) if group[0].year() == day.year() && group[0].month() == day.month() => {
                group.push(day);
            }
            _ => groups.push(vec![day]),
        }
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    groups
}

/// Build one job per day (or per six-pack of days) in the range.
///
/// `kind` selects singles (`Plot`), overview grids (`Grid`) or animations
/// (`Animate`). Grids never span a month boundary; a short final batch
/// renders with blank trailing cells.
pub fn date_jobs(
    start: NaiveDate,
    end: NaiveDate,
    root: &Path,
    kind: JobKind,
) -> Result<Vec<RenderJob>, AppError> {
    let mut jobs = Vec::new();
    for group in month_groups(start, end) {
        let first = group[0];
        let dir = root
            .join(first.year().to_string())
            .join(format!("{:02}", first.month()));

        match kind {
            JobKind::Grid => {
                for batch in group.chunks(GRID_CAPACITY) {
                    let curves = batch
                        .iter()
                        .map(|&day| date_tuple(day))
                        .collect::<Result<Vec<_>, _>>()?;
                    jobs.push(RenderJob {
                        kind,
                        curves,
                        dir: dir.clone(),
                        file_name: format!("{} - {}.png", batch[0], batch[batch.len() - 1]),
                    });
                }
            }
            JobKind::Plot | JobKind::Animate => {
                let ext = if kind == JobKind::Animate { "gif" } else { "png" };
                for &day in &group {
                    jobs.push(RenderJob {
                        kind,
                        curves: vec![date_tuple(day)?],
                        dir: dir.clone(),
                        file_name: format!("{day}.{ext}"),
                    });
                }
            }
        }
    }
    Ok(jobs)
}

/// Build the single job for a user-supplied number tuple.
pub fn number_job(numbers: &[i64], root: &Path, animate: bool) -> Result<RenderJob, AppError> {
    let tuple = number_tuple(numbers)?;
    let (kind, ext) = if animate {
        (JobKind::Animate, "gif")
    } else {
        (JobKind::Plot, "png")
    };
    Ok(RenderJob {
        kind,
        file_name: format!("{}.{ext}", tuple.label()),
        curves: vec![tuple],
        dir: root.to_path_buf(),
    })
}

/// Build grid jobs covering every distinct permutation of the numbers.
///
/// Output lands in `<root>/<n1_n2_…>/` (sorted, underscore-joined) with one
/// grid image per batch of [`GRID_CAPACITY`] permutations, named after the
/// first and last permutation in the batch.
pub fn permutation_jobs(numbers: &[i64], root: &Path) -> Result<Vec<RenderJob>, AppError> {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();
    // Validate once up front; every permutation shares the same values.
    let _ = number_tuple(&sorted)?;

    let dir = root.join(
        sorted
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("_"),
    );

    let mut perms = Vec::new();
    let mut current = sorted;
    loop {
        // number_tuple cannot fail here, but routing through it keeps a
        // single construction path.
        perms.push(number_tuple(&current)?);
        if !next_permutation(&mut current) {
            break;
        }
    }

    Ok(perms
        .chunks(GRID_CAPACITY)
        .map(|batch| RenderJob {
            kind: JobKind::Grid,
            curves: batch.to_vec(),
            dir: dir.clone(),
            file_name: format!(
                "{}_{}.png",
                batch[0].label(),
                batch[batch.len() - 1].label()
            ),
        })
        .collect())
}

fn date_tuple(day: NaiveDate) -> Result<ParamTuple, AppError> {
    ParamTuple::from_date(day).map_err(|_| {
        AppError::new(
            1,
            format!("Error: cannot plot {day}: the year is a multiple of 100!"),
        )
    })
}

fn number_tuple(numbers: &[i64]) -> Result<ParamTuple, AppError> {
    ParamTuple::new(numbers.to_vec())
        .map_err(|_| AppError::new(1, "Only positive numbers allowed!"))
}

/// Advance `values` to the next lexicographic permutation.
///
/// Returns `false` once the sequence is in descending order (i.e., it was the
/// last permutation). Duplicate values yield each distinct arrangement once.
fn next_permutation(values: &mut [i64]) -> bool {
    if values.len() < 2 {
        return false;
    }
    let Some(pivot) = values.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let successor = values
        .iter()
        .rposition(|&v| v > values[pivot])
        .unwrap_or(pivot + 1);
    values.swap(pivot, successor);
    values[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_groups_split_on_boundaries() {
        let groups = month_groups(date(2024, 1, 30), date(2024, 3, 2));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0], vec![date(2024, 1, 30), date(2024, 1, 31)]);
        assert_eq!(groups[1].len(), 29); // leap-year February
        assert_eq!(groups[2], vec![date(2024, 3, 1), date(2024, 3, 2)]);
    }

    #[test]
    fn single_day_range_is_one_group() {
        let groups = month_groups(date(2025, 7, 4), date(2025, 7, 4));
        assert_eq!(groups, vec![vec![date(2025, 7, 4)]]);
    }

    #[test]
    fn single_jobs_use_year_month_folders_and_date_names() {
        let root = PathBuf::from("/out");
        let jobs = date_jobs(date(2024, 12, 30), date(2025, 1, 2), &root, JobKind::Plot).unwrap();
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs[0].dir, root.join("2024").join("12"));
        assert_eq!(jobs[0].file_name, "2024-12-30.png");
        assert_eq!(jobs[2].dir, root.join("2025").join("01"));
        assert_eq!(jobs[2].file_name, "2025-01-01.png");
        assert!(jobs.iter().all(|j| j.curves.len() == 1));
    }

    #[test]
    fn animate_jobs_get_gif_extension() {
        let jobs = date_jobs(
            date(2025, 3, 14),
            date(2025, 3, 14),
            Path::new("."),
            JobKind::Animate,
        )
        .unwrap();
        assert_eq!(jobs[0].file_name, "2025-03-14.gif");
        assert_eq!(jobs[0].kind, JobKind::Animate);
    }

    #[test]
    fn grid_jobs_batch_six_with_remainder() {
        // 1..=14 March: two full six-packs plus a batch of two.
        let jobs = date_jobs(
            date(2025, 3, 1),
            date(2025, 3, 14),
            Path::new("/out"),
            JobKind::Grid,
        )
        .unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].curves.len(), 6);
        assert_eq!(jobs[0].file_name, "2025-03-01 - 2025-03-06.png");
        assert_eq!(jobs[2].curves.len(), 2);
        assert_eq!(jobs[2].file_name, "2025-03-13 - 2025-03-14.png");
    }

    #[test]
    fn grids_never_span_months() {
        let jobs = date_jobs(
            date(2025, 4, 29),
            date(2025, 5, 3),
            Path::new("/out"),
            JobKind::Grid,
        )
        .unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].file_name, "2025-04-29 - 2025-04-30.png");
        assert_eq!(jobs[1].file_name, "2025-05-01 - 2025-05-03.png");
    }

    #[test]
    fn century_year_in_range_is_reported() {
        let err = date_jobs(
            date(2099, 12, 31),
            date(2100, 1, 1),
            Path::new("/out"),
            JobKind::Plot,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn number_job_uses_dash_joined_label() {
        let job = number_job(&[4, 5, 6], Path::new("/out"), false).unwrap();
        assert_eq!(job.file_name, "4-5-6.png");
        assert_eq!(job.dir, PathBuf::from("/out"));
        let job = number_job(&[4, 5, 6], Path::new("/out"), true).unwrap();
        assert_eq!(job.file_name, "4-5-6.gif");
    }

    #[test]
    fn permutation_jobs_cover_all_orderings() {
        let jobs = permutation_jobs(&[3, 1, 2], Path::new("/out")).unwrap();
        // 3! = 6 permutations fit exactly one grid.
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].curves.len(), 6);
        assert_eq!(jobs[0].dir, PathBuf::from("/out").join("1_2_3"));
        assert_eq!(jobs[0].file_name, "1-2-3_3-2-1.png");
    }

    #[test]
    fn duplicate_numbers_yield_distinct_permutations_once() {
        let jobs = permutation_jobs(&[1, 1, 2], Path::new("/out")).unwrap();
        assert_eq!(jobs.len(), 1);
        let labels: Vec<String> = jobs[0].curves.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["1-1-2", "1-2-1", "2-1-1"]);
    }

    #[test]
    fn four_element_permutations_split_into_batches() {
        let jobs = permutation_jobs(&[1, 2, 3, 4], Path::new("/out")).unwrap();
        // 4! = 24 permutations -> four full grids.
        assert_eq!(jobs.len(), 4);
        assert!(jobs.iter().all(|j| j.curves.len() == 6));
        assert_eq!(jobs[0].file_name, "1-2-3-4_1-4-3-2.png");
    }

    #[test]
    fn next_permutation_walks_lexicographically() {
        let mut v = vec![1, 2, 3];
        let mut seen = vec![v.clone()];
        while next_permutation(&mut v) {
            seen.push(v.clone());
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen.last().unwrap(), &vec![3, 2, 1]);
    }
}
