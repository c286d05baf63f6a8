//! Covering array storage.
//!
//! During construction the array widens column-block by column-block; rows
//! appended by vertical growth may transiently hold the [`DONT_CARE`]
//! sentinel until the stride's randomisation pass fills them. Finished
//! arrays never contain the sentinel.

use std::fmt;

use rand::Rng;

/// Sentinel for a cell that vertical growth has not pinned to a value yet.
///
/// Represented as an integer outside `[0, v)` rather than an `Option` so
/// rows stay plain `Vec<u32>`. Only rows between a vertical-growth step and
/// the fill at the end of the same stride may contain it.
pub const DONT_CARE: u32 = u32::MAX;

/// An N×width matrix of symbols, grown in place by the builder.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CoveringArray {
    width: usize,
    rows: Vec<Vec<u32>>,
}

impl CoveringArray {
    /// Creates an empty array with the given width.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    /// Creates an array from existing rows, all of length `width`.
    pub fn from_rows(width: usize, rows: Vec<Vec<u32>>) -> Self {
        assert!(
            rows.iter().all(|row| row.len() == width),
            "All rows must have length {}",
            width
        );
        Self { width, rows }
    }

    /// Current number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> &[u32] {
        &self.rows[index]
    }

    /// Appends a row of the current width.
    pub fn push_row(&mut self, row: Vec<u32>) {
        assert_eq!(row.len(), self.width, "Row width mismatch");
        self.rows.push(row);
    }

    /// Mutable access for horizontal growth, which replaces rows with wider
    /// ones before bumping the width via [`set_width`][Self::set_width].
    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<u32>> {
        &mut self.rows
    }

    /// Declares the new width after every row has been widened.
    pub(crate) fn set_width(&mut self, width: usize) {
        debug_assert!(
            self.rows.iter().all(|row| row.len() == width),
            "Not all rows have width {}",
            width
        );
        self.width = width;
    }

    /// Returns true if any cell still holds [`DONT_CARE`].
    pub fn has_dont_cares(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.iter().any(|&cell| cell == DONT_CARE))
    }

    /// Replaces every [`DONT_CARE`] cell with a uniform-random value in
    /// `[0, v)`.
    pub fn fill_dont_cares<R: Rng + ?Sized>(&mut self, v: u32, rng: &mut R) {
        for row in &mut self.rows {
            for cell in row.iter_mut() {
                if *cell == DONT_CARE {
                    *cell = rng.random_range(0..v);
                }
            }
        }
    }

    /// Consumes the array, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<u32>> {
        self.rows
    }
}

impl fmt::Display for CoveringArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (i, &cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if cell == DONT_CARE {
                    write!(f, "-")?;
                } else {
                    write!(f, "{}", cell)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
