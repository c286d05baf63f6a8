//! Vertical growth: completion rows for interactions greedy widening missed.

use log::debug;

use crate::array::{CoveringArray, DONT_CARE};
use crate::interactions::Uncovered;

/// Appends rows to `ca` until every interaction left in `uncovered` is
/// present. Returns the number of rows added.
///
/// Interactions are taken in canonical order. Each one is merged into the
/// *first* in-progress row whose keyed cells are all [`DONT_CARE`] or
/// already equal (first-fit, the classical IPO completion; a best-fit scan
/// would sometimes pack tighter but is deliberately not used). Unmatched
/// interactions open a fresh row.
///
/// The appended rows keep their [`DONT_CARE`] cells; the caller fills them
/// before the stride ends.
pub fn vertical_growth(ca: &mut CoveringArray, uncovered: &Uncovered) -> usize {
    let width = ca.width();
    let mut fresh: Vec<Vec<u32>> = Vec::new();

    for (columns, tuple) in uncovered.remaining() {
        let compatible = fresh.iter_mut().find(|row| {
            columns
                .iter()
                .zip(&tuple)
                .all(|(&c, &value)| row[c] == DONT_CARE || row[c] == value)
        });

        match compatible {
            Some(row) => {
                for (&c, &value) in columns.iter().zip(&tuple) {
                    row[c] = value;
                }
            }
            None => {
                let mut row = vec![DONT_CARE; width];
                for (&c, &value) in columns.iter().zip(&tuple) {
                    row[c] = value;
                }
                fresh.push(row);
            }
        }
    }

    debug!(
        "vertical growth: {} uncovered -> {} completion rows",
        uncovered.len(),
        fresh.len()
    );

    let added = fresh.len();
    for row in fresh {
        ca.push_row(row);
    }
    added
}
