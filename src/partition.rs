//! Split an ordered subject list into contiguous, balanced job chunks.
//!
//! Every chunk holds `ceil(N / max_jobs)` subjects except the last, which holds
//! whatever is left (at least one). When fewer chunks are needed than allowed,
//! the job count shrinks instead of emitting empty trailing chunks.

use anyhow::{ensure, Result};
use log::{debug, info};

/// One job's share of the subject list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Zero-based job / array task index
    pub index: usize,
    pub subjects: &'a [String],
}

impl Chunk<'_> {
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

/// Subjects per chunk for `num_subjects` subjects and at most `max_jobs` jobs.
///
/// `None` means one job per subject. A job count above the subject count is
/// clamped. Zero subjects yield an empty list.
pub fn chunk_sizes(num_subjects: usize, max_jobs: Option<usize>) -> Result<Vec<usize>> {
    if let Some(requested) = max_jobs {
        ensure!(
            requested >= 1,
            "job count must be a positive integer, got {requested}"
        );
    }

    if num_subjects == 0 {
        info!("Received 0 subjects, nothing to split.");
        return Ok(Vec::new());
    }

    let mut num_jobs = max_jobs.unwrap_or(num_subjects);
    if num_subjects < num_jobs {
        info!(
            "Note: Received only {num_subjects} subjects, so will only run {num_subjects} jobs (even if {num_jobs} are allowed)."
        );
        num_jobs = num_subjects;
    }

    let per_job = num_subjects.div_ceil(num_jobs);
    let jobs_required = num_subjects.div_ceil(per_job);
    if jobs_required < num_jobs {
        info!("Will only use {jobs_required} out of {num_jobs} possible jobs.");
        num_jobs = jobs_required;
    }
    let in_last_job = num_subjects - per_job * (num_jobs - 1);

    info!("Received {num_subjects} subjects and max jobs = {num_jobs}");
    info!("Using {per_job} subjects per job, last job will contain {in_last_job} subjects.");

    let mut sizes = vec![per_job; num_jobs];
    sizes[num_jobs - 1] = in_last_job;

    debug_assert_eq!(sizes.iter().sum::<usize>(), num_subjects);
    Ok(sizes)
}

/// Partition `subjects` into chunks sized by [`chunk_sizes`].
pub fn partition(subjects: &[String], max_jobs: Option<usize>) -> Result<Vec<Chunk<'_>>> {
    let sizes = chunk_sizes(subjects.len(), max_jobs)?;
    let total = sizes.len();

    let mut chunks = Vec::with_capacity(total);
    let mut start = 0;
    for (index, size) in sizes.into_iter().enumerate() {
        let end = start + size;
        debug!(
            "At job {} (index {index}) of {total}: using subject indices {start} to {end}.",
            index + 1
        );
        chunks.push(Chunk {
            index,
            subjects: &subjects[start..end],
        });
        start = end;
    }
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("sub-{i:03}")).collect()
    }

    #[test]
    fn ten_subjects_three_jobs() {
        assert_eq!(chunk_sizes(10, Some(3)).unwrap(), vec![4, 4, 2]);
    }

    #[test]
    fn ten_subjects_four_jobs() {
        assert_eq!(chunk_sizes(10, Some(4)).unwrap(), vec![3, 3, 3, 1]);
    }

    #[test]
    fn shrinks_job_count_instead_of_empty_chunks() {
        // per_job = ceil(9/6) = 2, so only 5 jobs are needed
        assert_eq!(chunk_sizes(9, Some(6)).unwrap(), vec![2, 2, 2, 2, 1]);
    }

    #[test]
    fn clamps_to_subject_count() {
        assert_eq!(chunk_sizes(5, Some(20)).unwrap(), vec![1; 5]);
    }

    #[test]
    fn omitted_job_count_means_one_per_subject() {
        assert_eq!(chunk_sizes(7, None).unwrap(), vec![1; 7]);
    }

    #[test]
    fn evenly_divisible() {
        assert_eq!(chunk_sizes(12, Some(4)).unwrap(), vec![3, 3, 3, 3]);
        assert_eq!(chunk_sizes(12, Some(1)).unwrap(), vec![12]);
    }

    #[test]
    fn zero_subjects_gives_no_chunks() {
        assert!(chunk_sizes(0, Some(20)).unwrap().is_empty());
        assert!(chunk_sizes(0, None).unwrap().is_empty());
        assert!(partition(&[], Some(3)).unwrap().is_empty());
    }

    #[test]
    fn zero_job_count_is_rejected() {
        assert!(chunk_sizes(10, Some(0)).is_err());
        // validated even when there is nothing to split
        assert!(chunk_sizes(0, Some(0)).is_err());
    }

    #[test]
    fn partition_keeps_order_and_indices() {
        let subjects = ids(10);
        let chunks = partition(&subjects, Some(3)).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(
            chunks.iter().map(|c| c.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(chunks[0].subjects, &subjects[0..4]);
        assert_eq!(chunks[1].subjects, &subjects[4..8]);
        assert_eq!(chunks[2].subjects, &subjects[8..10]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let subjects: Vec<String> = ["a", "a", "b"].iter().map(|s| s.to_string()).collect();
        let chunks = partition(&subjects, Some(2)).unwrap();
        assert_eq!(chunks[0].subjects, &subjects[0..2]);
        assert_eq!(chunks[1].subjects, &subjects[2..3]);
    }

    #[test]
    fn invariants_hold_for_small_inputs() {
        for n in 0..=60 {
            let subjects = ids(n);
            for max_jobs in 1..=70 {
                let chunks = partition(&subjects, Some(max_jobs)).unwrap();

                let joined: Vec<String> = chunks
                    .iter()
                    .flat_map(|c| c.subjects.iter().cloned())
                    .collect();
                assert_eq!(joined, subjects, "n={n} max_jobs={max_jobs}");

                if n == 0 {
                    assert!(chunks.is_empty());
                    continue;
                }

                assert!(!chunks.is_empty());
                assert!(chunks.len() <= max_jobs && chunks.len() <= n);

                let per_job = n.div_ceil(max_jobs.min(n));
                let (last, rest) = chunks.split_last().unwrap();
                assert!(rest.iter().all(|c| c.len() == per_job));
                assert!((1..=per_job).contains(&last.len()));
            }
        }
    }

    #[test]
    fn is_deterministic() {
        let subjects = ids(37);
        assert_eq!(
            partition(&subjects, Some(8)).unwrap(),
            partition(&subjects, Some(8)).unwrap()
        );
    }
}
