//! End-to-end coverage tests for the IPOG builder.
//!
//! Every scenario builds real arrays and checks them with the independent
//! verifier; the statistical ones pin the expected size range of the
//! heuristic under seeded repetition.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ipog_rs::builder::build;
use ipog_rs::combinat::Assignments;
use ipog_rs::experiment::run_trials;
use ipog_rs::verify::{missing_interactions, verify};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

// ─── Coverage Across Configurations ────────────────────────────────────────────

#[test]
fn coverage_grid() {
    let configs = [
        (2, 3, 2),
        (2, 4, 2),
        (2, 6, 3),
        (2, 8, 2),
        (3, 4, 2),
        (3, 5, 2),
        (3, 6, 3),
    ];

    for &(t, k, v) in &configs {
        for stride in [1, 2, 3] {
            for seed in 0..5 {
                let ca = build(t, k, v, stride, &mut rng(seed)).unwrap();

                assert_eq!(ca.width(), k);
                assert!(ca.rows().iter().all(|row| row.len() == k));
                assert!(
                    !ca.has_dont_cares(),
                    "don't-care leaked for CA({}, {}, {}) stride {}",
                    t,
                    k,
                    v,
                    stride
                );
                assert!(
                    verify(ca.rows(), t, k, v),
                    "coverage failed for CA({}, {}, {}) stride {} seed {}: missing {:?}",
                    t,
                    k,
                    v,
                    stride,
                    seed,
                    missing_interactions(ca.rows(), t, k, v)
                );
            }
        }
    }
}

#[test]
fn coverage_holds_for_every_stride() {
    for stride in 1..=12 {
        let ca = build(2, 10, 2, stride, &mut rng(7)).unwrap();
        assert!(
            verify(ca.rows(), 2, 10, 2),
            "coverage failed at stride {}",
            stride
        );
    }
}

// ─── Seed Phase ────────────────────────────────────────────────────────────────

#[test]
fn k_equals_t_returns_exhaustive_seed() {
    for &(t, v) in &[(1, 2), (2, 2), (2, 4), (3, 2)] {
        let ca = build(t, t, v, 1, &mut rng(11)).unwrap();
        assert_eq!(ca.len(), (v as usize).pow(t as u32));

        let mut rows = ca.into_rows();
        rows.sort();
        let expected: Vec<_> = Assignments::new(t, v).collect();
        assert_eq!(rows, expected, "seed is not a permutation of [0,{})^{}", v, t);
    }
}

// ─── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn fixed_seed_reproduces_the_array() {
    for stride in [1, 3] {
        let a = build(2, 12, 3, stride, &mut rng(123)).unwrap();
        let b = build(2, 12, 3, stride, &mut rng(123)).unwrap();
        assert_eq!(a, b);
    }
}

// ─── Concrete Size Scenarios ───────────────────────────────────────────────────

#[test]
fn pairwise_three_binary_columns_stays_small() {
    for seed in 0..50 {
        let ca = build(2, 3, 2, 1, &mut rng(seed)).unwrap();
        assert!(verify(ca.rows(), 2, 3, 2));
        assert!(
            (4..=6).contains(&ca.len()),
            "CA(2, 3, 2) had {} rows",
            ca.len()
        );
    }
}

#[test]
fn strength_three_single_extra_column() {
    // The seed alone is 8 rows; one extra column should not balloon it.
    for seed in 0..50 {
        let ca = build(3, 4, 2, 1, &mut rng(seed)).unwrap();
        assert!(verify(ca.rows(), 3, 4, 2));
        assert!(ca.len() <= 12, "CA(3, 4, 2) had {} rows", ca.len());
    }
}

// ─── Statistical Size Regressions ──────────────────────────────────────────────

#[test]
fn mean_size_of_pairwise_ten_binary_columns() {
    // Reference measurements sit in the 11-14 row range; above 15 means
    // the greedy search regressed.
    let stats = run_trials(2, 10, 2, 1, 1000, 0).unwrap();
    assert!(
        stats.mean_rows < 15.0,
        "mean size regressed to {:.2}",
        stats.mean_rows
    );
    assert!(stats.min_rows >= 6, "below the pairwise lower bound");
}

#[test]
fn wider_stride_does_not_grow_the_mean() {
    let narrow = run_trials(2, 10, 3, 1, 1000, 0).unwrap();
    let wide = run_trials(2, 10, 3, 2, 1000, 0).unwrap();
    assert!(
        wide.mean_rows <= narrow.mean_rows + 0.1,
        "stride 2 mean {:.2} vs stride 1 mean {:.2}",
        wide.mean_rows,
        narrow.mean_rows
    );
}

// ─── Verifier Spot Checks ──────────────────────────────────────────────────────

#[test]
fn verifier_accepts_and_rejects_hand_built_arrays() {
    // OA(4; 2, 3, 2), a complete pairwise design.
    let rows = vec![
        vec![0, 0, 0],
        vec![0, 1, 1],
        vec![1, 0, 1],
        vec![1, 1, 0],
    ];
    assert!(verify(&rows, 2, 3, 2));

    // Any single perturbed cell breaks it.
    for r in 0..rows.len() {
        for c in 0..3 {
            let mut bad = rows.clone();
            bad[r][c] = 9;
            assert!(!verify(&bad, 2, 3, 2), "perturbed ({}, {}) passed", r, c);
        }
    }
}

#[test]
fn built_arrays_cover_every_pair_explicitly() {
    let ca = build(2, 3, 2, 1, &mut rng(5)).unwrap();
    for a in 0..3 {
        for b in (a + 1)..3 {
            for x in 0..2u32 {
                for y in 0..2u32 {
                    assert!(
                        ca.rows().iter().any(|row| row[a] == x && row[b] == y),
                        "pair ({}, {}) = ({}, {}) not covered",
                        a,
                        b,
                        x,
                        y
                    );
                }
            }
        }
    }
}
