//! Independent coverage check.
//!
//! Reimplemented from first principles over `std` collections, sharing no
//! data structure with the construction side, so a builder defect cannot
//! hide behind its own bookkeeping.

use std::collections::HashSet;

/// Returns true iff `rows` is a covering array of strength `t` with `k`
/// columns over the alphabet `[0, v)`.
///
/// False on malformed input as well: a row of the wrong length, a cell
/// outside `[0, v)`, or parameters that admit no covering array.
pub fn verify(rows: &[Vec<u32>], t: usize, k: usize, v: u32) -> bool {
    if t < 1 || k < t || v < 2 {
        return false;
    }
    if rows.iter().any(|row| row.len() != k) {
        return false;
    }
    if rows.iter().flatten().any(|&cell| cell >= v) {
        return false;
    }
    missing_interactions(rows, t, k, v).is_empty()
}

/// Lists every `(columns, tuple)` interaction absent from `rows`: pairs of
/// a strictly increasing t-subset of `[0, k)` and a value tuple no row
/// projects onto.
///
/// Empty for a covering array. Unlike [`verify`], this assumes the rows
/// already have width `k`.
pub fn missing_interactions(
    rows: &[Vec<u32>],
    t: usize,
    k: usize,
    v: u32,
) -> Vec<(Vec<usize>, Vec<u32>)> {
    if t > k {
        // No t-subset of columns exists, so nothing can be missing.
        return Vec::new();
    }
    let mut missing = Vec::new();
    let mut columns = Vec::with_capacity(t);
    collect_missing(rows, t, k, v, 0, &mut columns, &mut missing);
    missing
}

/// Recursively enumerates t-subsets of `[start, k)` extending `columns`,
/// checking coverage at each complete subset.
fn collect_missing(
    rows: &[Vec<u32>],
    t: usize,
    k: usize,
    v: u32,
    start: usize,
    columns: &mut Vec<usize>,
    missing: &mut Vec<(Vec<usize>, Vec<u32>)>,
) {
    if columns.len() == t {
        let seen: HashSet<Vec<u32>> = rows
            .iter()
            .map(|row| columns.iter().map(|&c| row[c]).collect())
            .collect();

        if seen.len() < (v as usize).pow(t as u32) {
            for_each_tuple(t, v, |tuple| {
                if !seen.contains(tuple) {
                    missing.push((columns.clone(), tuple.to_vec()));
                }
            });
        }
        return;
    }

    // Leave room for the remaining t - len - 1 columns.
    let last_start = k - (t - columns.len()) + 1;
    for c in start..last_start {
        columns.push(c);
        collect_missing(rows, t, k, v, c + 1, columns, missing);
        columns.pop();
    }
}

/// Calls `f` with every tuple in `[0, v)^t`, in lexicographic order.
fn for_each_tuple(t: usize, v: u32, mut f: impl FnMut(&[u32])) {
    let mut tuple = vec![0u32; t];
    'outer: loop {
        f(&tuple);
        let mut j = t;
        loop {
            if j == 0 {
                break 'outer;
            }
            j -= 1;
            tuple[j] += 1;
            if tuple[j] < v {
                continue 'outer;
            }
            tuple[j] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// OA(4; 2, 3, 2): the rows of the binary parity-check design.
    fn complete_pairwise() -> Vec<Vec<u32>> {
        vec![
            vec![0, 0, 0],
            vec![0, 1, 1],
            vec![1, 0, 1],
            vec![1, 1, 0],
        ]
    }

    #[test]
    fn test_accepts_complete_array() {
        assert!(verify(&complete_pairwise(), 2, 3, 2));
    }

    #[test]
    fn test_rejects_out_of_range_cell() {
        let mut rows = complete_pairwise();
        rows[1][2] = 5;
        assert!(!verify(&rows, 2, 3, 2));
    }

    #[test]
    fn test_rejects_missing_tuple() {
        let mut rows = complete_pairwise();
        rows.pop();
        assert!(!verify(&rows, 2, 3, 2));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let rows = vec![vec![0, 0, 0], vec![0, 1]];
        assert!(!verify(&rows, 2, 3, 2));
    }

    #[test]
    fn test_rejects_empty_matrix() {
        assert!(!verify(&[], 2, 3, 2));
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let rows = complete_pairwise();
        assert!(!verify(&rows, 0, 3, 2));
        assert!(!verify(&rows, 4, 3, 2));
        assert!(!verify(&rows, 2, 3, 1));
    }

    #[test]
    fn test_missing_interactions_names_the_gap() {
        let mut rows = complete_pairwise();
        rows.retain(|row| row != &[1, 1, 0]);

        let missing = missing_interactions(&rows, 2, 3, 2);
        assert_eq!(
            missing,
            vec![
                (vec![0, 1], vec![1, 1]),
                (vec![0, 2], vec![1, 0]),
                (vec![1, 2], vec![1, 0]),
            ]
        );
    }

    #[test]
    fn test_missing_interactions_empty_for_complete() {
        assert!(missing_interactions(&complete_pairwise(), 2, 3, 2).is_empty());
    }

    #[test]
    fn test_higher_strength() {
        // The full enumeration of [0,2)^3 is a strength-3 covering array
        // of 3 columns, and remains strength-2 as well.
        let rows: Vec<Vec<u32>> = (0..8u32)
            .map(|x| vec![(x >> 2) & 1, (x >> 1) & 1, x & 1])
            .collect();
        assert!(verify(&rows, 3, 3, 2));
        assert!(verify(&rows, 2, 3, 2));
    }
}
