//! Error type for construction and experiment entry points.

use thiserror::Error;

/// Errors surfaced by [`build`][crate::builder::build] and
/// [`run_trials`][crate::experiment::run_trials].
///
/// Parameter validation happens once, at entry; the construction itself
/// cannot fail after that point.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    /// The strength `t` must be at least 1.
    #[error("strength must be at least 1 (got t = {t})")]
    InvalidStrength { t: usize },

    /// The array needs at least as many columns as its strength.
    #[error("need at least t columns (got k = {k}, t = {t})")]
    TooFewColumns { k: usize, t: usize },

    /// Each column ranges over at least two values.
    #[error("alphabet must have at least two values (got v = {v})")]
    InvalidAlphabet { v: u32 },

    /// The outer loop adds at least one column per step.
    #[error("stride must be at least 1 (got stride = {stride})")]
    InvalidStride { stride: usize },

    /// A built array failed the independent coverage check.
    ///
    /// This indicates a construction bug, never bad input.
    #[error("array failed verification for CA({t}, {k}, {v}) at stride {stride}")]
    CoverageFailed {
        t: usize,
        k: usize,
        v: u32,
        stride: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
