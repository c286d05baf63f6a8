//! Repeated-build experiment runner.
//!
//! The construction is randomised, so array sizes are compared over many
//! seeded builds. Each run gets its own ChaCha8 RNG derived from the base
//! seed, which keeps whole experiments reproducible and lets a caller
//! fan runs out over independent `build` invocations if it wants to.

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::builder::build;
use crate::error::{Error, Result};
use crate::verify::verify;

/// Size statistics over repeated builds of one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialStats {
    pub runs: usize,
    pub min_rows: usize,
    pub max_rows: usize,
    pub mean_rows: f64,
}

/// Builds `CA(t, k, v)` at the given stride `runs` times, verifying every
/// result, and reports the row-count statistics.
///
/// Run r uses the seed `seed + r`.
///
/// # Errors
///
/// Propagates parameter validation from [`build`], and returns
/// [`Error::CoverageFailed`] if any run fails the independent check.
pub fn run_trials(
    t: usize,
    k: usize,
    v: u32,
    stride: usize,
    runs: usize,
    seed: u64,
) -> Result<TrialStats> {
    assert!(runs > 0, "Need at least one run");

    let mut min_rows = usize::MAX;
    let mut max_rows = 0;
    let mut total_rows = 0usize;

    for run in 0..runs {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(run as u64));
        let ca = build(t, k, v, stride, &mut rng)?;
        if !verify(ca.rows(), t, k, v) {
            return Err(Error::CoverageFailed { t, k, v, stride });
        }

        let n = ca.len();
        debug!("run {}: {} rows", run, n);
        min_rows = min_rows.min(n);
        max_rows = max_rows.max(n);
        total_rows += n;
    }

    Ok(TrialStats {
        runs,
        min_rows,
        max_rows,
        mean_rows: total_rows as f64 / runs as f64,
    })
}
