//! Horizontal growth: greedy in-place widening of existing rows.

use log::debug;

use crate::array::CoveringArray;
use crate::extend::best_extension;
use crate::interactions::Uncovered;

/// Widens every row of `ca` by `g` fresh symbols.
///
/// Rows are processed strictly in index order: the extension chosen for
/// row i is scored against the uncovered set *after* the removals of rows
/// 0..i. This sequential dependence is what the greedy heuristic relies
/// on, so the loop cannot be reordered or parallelised.
pub fn horizontal_growth(ca: &mut CoveringArray, g: usize, v: u32, uncovered: &mut Uncovered) {
    let width = ca.width();
    debug!(
        "horizontal growth: {} rows, width {} -> {}, {} uncovered",
        ca.len(),
        width,
        width + g,
        uncovered.len()
    );

    for i in 0..ca.len() {
        let best = best_extension(ca.row(i), g, v, uncovered);
        let covered = uncovered.remove_covered(&best);
        debug!("row {}: covered {} ({} uncovered left)", i, covered, uncovered.len());
        ca.rows_mut()[i] = best;
    }

    ca.set_width(width + g);
}
