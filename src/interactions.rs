//! Bookkeeping of still-uncovered interactions.
//!
//! An *interaction* is a specific assignment of values to a specific
//! t-subset of columns (a *column family*). [`Uncovered`] holds, for each
//! family touched by the current stride, the set of value tuples no
//! existing row exhibits yet. Horizontal growth drains it greedily;
//! whatever survives is handed to vertical growth.
//!
//! # Performance
//!
//! [`score`][Uncovered::score] runs once per candidate extension, inside
//! the innermost loop of horizontal growth. Per family it needs only the
//! rank of the row's projection and one bit-set probe, so a scoring pass
//! is O(families) with no allocation.

use std::ops::Range;

use hashbrown::HashMap;

use crate::bitset::RankSet;
use crate::combinat::{binomial, rank, unrank, Combinations};

/// One column family and its uncovered value tuples, stored by rank.
struct Family {
    /// Strictly increasing column indices; the canonical key form.
    columns: Box<[usize]>,
    /// Ranks of value tuples not yet present in the array.
    tuples: RankSet,
}

/// The set of `(family, tuple)` pairs not yet covered by the array.
///
/// Families are kept in lexicographic order of their column keys, and the
/// tuples of a family iterate in lexicographic order, so every traversal of
/// the structure is deterministic.
pub struct Uncovered {
    t: usize,
    v: u32,
    /// Families in lexicographic key order.
    families: Vec<Family>,
    /// Canonical key -> slot in `families`.
    index: HashMap<Box<[usize]>, usize>,
    /// Total uncovered tuples across all families.
    remaining: usize,
}

/// Rank of `row`'s projection onto `columns`, read as a base-`v` number.
#[inline]
fn project(row: &[u32], columns: &[usize], v: u32) -> usize {
    columns.iter().fold(0usize, |acc, &c| {
        debug_assert!(row[c] < v, "Projection hit a cell outside [0, v)");
        acc * v as usize + row[c] as usize
    })
}

impl Uncovered {
    /// Builds the full uncovered set for one stride: every t-subset of
    /// `[0, width)` that intersects the `fresh` column range, crossed with
    /// every tuple in `[0, v)^t`.
    ///
    /// Families lying entirely in the old columns were covered by earlier
    /// strides and are skipped up front.
    pub fn new(t: usize, v: u32, width: usize, fresh: Range<usize>) -> Self {
        debug_assert_eq!(fresh.end, width, "Fresh columns form the suffix of the array");
        let tuple_space = (v as usize).pow(t as u32);
        let stale = width - fresh.len();
        let family_count = binomial(width, t) - binomial(stale, t);

        let mut families = Vec::with_capacity(family_count);
        let mut index = HashMap::with_capacity(family_count);
        for columns in Combinations::new(width, t) {
            if !columns.iter().any(|c| fresh.contains(c)) {
                continue;
            }
            let columns: Box<[usize]> = columns.into();
            index.insert(columns.clone(), families.len());
            families.push(Family {
                columns,
                tuples: RankSet::full(tuple_space),
            });
        }
        debug_assert_eq!(families.len(), family_count);

        let remaining = families.len() * tuple_space;
        Self {
            t,
            v,
            families,
            index,
            remaining,
        }
    }

    /// Total number of uncovered `(family, tuple)` pairs.
    pub fn len(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Number of families currently tracked.
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Counts the uncovered interactions that `row` would cover.
    ///
    /// This is the greedy objective of horizontal growth.
    pub fn score(&self, row: &[u32]) -> usize {
        let v = self.v;
        self.families
            .iter()
            .filter(|family| family.tuples.contains(project(row, &family.columns, v)))
            .count()
    }

    /// Removes every interaction that `row` covers. Returns how many were
    /// removed.
    pub fn remove_covered(&mut self, row: &[u32]) -> usize {
        let v = self.v;
        let mut removed = 0;
        for family in &mut self.families {
            if family.tuples.remove(project(row, &family.columns, v)) {
                removed += 1;
            }
        }
        self.remaining -= removed;
        removed
    }

    /// Removes a single interaction by its canonical key and tuple.
    /// Returns true if it was present.
    pub fn remove(&mut self, columns: &[usize], tuple: &[u32]) -> bool {
        let Some(&slot) = self.index.get(columns) else {
            return false;
        };
        let removed = self.families[slot].tuples.remove(rank(tuple, self.v));
        if removed {
            self.remaining -= 1;
        }
        removed
    }

    /// Drops families with no uncovered tuples left.
    pub fn purge_empty(&mut self) {
        self.families.retain(|family| !family.tuples.is_empty());
        self.index.clear();
        for (slot, family) in self.families.iter().enumerate() {
            self.index.insert(family.columns.clone(), slot);
        }
    }

    /// Iterates the uncovered interactions: families in lexicographic key
    /// order, tuples in lexicographic order within a family.
    pub fn remaining(&self) -> impl Iterator<Item = (&[usize], Vec<u32>)> + '_ {
        let (t, v) = (self.t, self.v);
        self.families.iter().flat_map(move |family| {
            family
                .tuples
                .iter()
                .map(move |r| (&*family.columns, unrank(r, t, v)))
        })
    }
}
