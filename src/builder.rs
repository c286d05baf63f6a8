//! Incremental covering array construction.
//!
//! This is the IPOG strategy of Lei et al. (*IPOG: A General Strategy for
//! T-Way Software Testing*): start from the exhaustive v^t seed over the
//! first t columns, then repeatedly widen the array by a block of fresh
//! columns, choosing each row's fresh symbols greedily (horizontal growth)
//! and appending completion rows for whatever the greedy pass missed
//! (vertical growth).
//!
//! The classical formulation adds one column per step. Here the block size
//! is a parameter: larger strides score v^g candidate blocks per row,
//! which costs more per row but tends to produce smaller arrays.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::array::CoveringArray;
use crate::combinat::Assignments;
use crate::error::{Error, Result};
use crate::horizontal::horizontal_growth;
use crate::interactions::Uncovered;
use crate::vertical::vertical_growth;

/// Builds a covering array of strength `t` with `k` columns over the
/// alphabet `[0, v)`, adding `stride` columns per outer step.
///
/// The RNG is consulted exactly twice per place it matters: the initial
/// shuffle of the seed rows and the don't-care fill after each vertical
/// growth, so a fixed seed reproduces the array bit for bit.
///
/// # Errors
///
/// Rejects `t < 1`, `k < t`, `v < 2` and `stride < 1` up front; the
/// construction itself always terminates.
///
/// # Examples
///
/// ```
/// use ipog_rs::builder::build;
/// use ipog_rs::verify::verify;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let ca = build(2, 6, 2, 1, &mut rng).unwrap();
/// assert!(verify(ca.rows(), 2, 6, 2));
/// ```
pub fn build<R: Rng + ?Sized>(
    t: usize,
    k: usize,
    v: u32,
    stride: usize,
    rng: &mut R,
) -> Result<CoveringArray> {
    if t < 1 {
        return Err(Error::InvalidStrength { t });
    }
    if k < t {
        return Err(Error::TooFewColumns { k, t });
    }
    if v < 2 {
        return Err(Error::InvalidAlphabet { v });
    }
    if stride < 1 {
        return Err(Error::InvalidStride { stride });
    }

    // Exhaustive seed over the first t columns, in shuffled order.
    let mut rows: Vec<Vec<u32>> = Assignments::new(t, v).collect();
    rows.shuffle(rng);
    let mut ca = CoveringArray::from_rows(t, rows);
    debug!("seeded {} rows of width {}", ca.len(), t);

    let mut i = t;
    while i < k {
        let g = stride.min(k - i);
        let mut uncovered = Uncovered::new(t, v, i + g, i..i + g);
        debug!(
            "stride at column {}: {} fresh columns, {} interactions over {} families",
            i,
            g,
            uncovered.len(),
            uncovered.family_count()
        );

        horizontal_growth(&mut ca, g, v, &mut uncovered);

        uncovered.purge_empty();
        if !uncovered.is_empty() {
            let added = vertical_growth(&mut ca, &uncovered);
            ca.fill_dont_cares(v, rng);
            debug!("stride at column {}: {} completion rows", i, added);
        }
        debug_assert!(!ca.has_dont_cares());

        i += g;
    }

    debug!("built {} x {} array", ca.len(), k);
    Ok(ca)
}
