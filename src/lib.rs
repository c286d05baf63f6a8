//! # ipog-rs: t-way covering arrays in Rust
//!
//! **`ipog-rs`** builds **covering arrays** with the In-Parameter-Order-General
//! (IPOG) strategy. A covering array CA(t, k, v) is an N×k matrix over
//! `[0, v)` whose projection onto *any* t columns contains *every* tuple in
//! `[0, v)^t` --- executing its N rows exercises every interaction among any
//! t of k parameters, without enumerating all v^k assignments.
//!
//! ## How it works
//!
//! Construction is incremental. The first t columns are seeded exhaustively
//! (all v^t rows); each further block of columns is added by
//! **horizontal growth** (every existing row greedily picks the fresh
//! symbols covering the most still-uncovered interactions) followed by
//! **vertical growth** (completion rows for whatever the greedy pass
//! missed, with don't-care slots filled randomly). The block size is the
//! *stride*: stride 1 is classical IPOG, larger strides consider v^stride
//! candidate blocks per row and tend to produce smaller arrays at a higher
//! cost per row.
//!
//! The result is a heuristic, not a minimum-size array. Randomness is
//! injected: pass any seeded [`rand::Rng`] and the construction is fully
//! reproducible.
//!
//! ## Basic Usage
//!
//! ```rust
//! use ipog_rs::builder::build;
//! use ipog_rs::verify::verify;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! // Pairwise coverage of 10 binary parameters.
//! let ca = build(2, 10, 2, 1, &mut rng).unwrap();
//!
//! assert!(ca.len() < 1 << 10); // Far fewer rows than exhaustive testing
//! assert!(verify(ca.rows(), 2, 10, 2));
//! ```
//!
//! ## Core Components
//!
//! - **[`builder`]**: The construction loop; [`build`][builder::build] is
//!   the main entry point.
//! - **[`verify`]**: An independent coverage check, implemented separately
//!   from the construction bookkeeping.
//! - **[`interactions`]**: The uncovered-interaction bookkeeping the greedy
//!   search drains.
//! - **[`experiment`]**: Repeated seeded builds with size statistics.

pub mod array;
pub mod bitset;
pub mod builder;
pub mod combinat;
pub mod error;
pub mod experiment;
pub mod extend;
pub mod horizontal;
pub mod interactions;
pub mod verify;
pub mod vertical;
