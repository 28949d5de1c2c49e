//! Generic genetic operators for fixed-length index genomes.
//!
//! These operate on plain slices and are domain-agnostic. None of them
//! preserve a "distinct elements" property: a child may repeat an index
//! that both parents carry at different positions. Problems that need
//! distinct genes must penalize or repair such children themselves.
//!
//! # Crossover Operators
//!
//! - [`two_point_crossover`]: exchange a contiguous interior segment
//!
//! # Mutation Operators
//!
//! - [`shuffle_indexes_mutation`]: swap each position with probability `indpb`
//!
//! # Initialization
//!
//! - [`sample_indices`]: draw `k` distinct indices from `0..n`
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Fortin et al. (2012), "DEAP: Evolutionary Algorithms Made Easy"

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Two-point crossover.
///
/// Picks cut points `1 <= a < b <= n` and swaps `parent1[a..b]` with
/// `parent2[a..b]`, returning the two children. Genes before `a` are
/// never exchanged, so the first gene always stays with its parent.
///
/// Genomes shorter than 2 are returned unchanged.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn two_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    if n < 2 {
        return (child1, child2);
    }

    let (start, end) = cut_points(n, rng);
    child1[start..end].clone_from_slice(&parent2[start..end]);
    child2[start..end].clone_from_slice(&parent1[start..end]);

    (child1, child2)
}

/// Cut points `1 <= start < end <= n` for a genome of length `n >= 2`.
fn cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(1..=n);
    let b = rng.random_range(1..n);
    if b >= a {
        (a, b + 1)
    } else {
        (b, a)
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Shuffle-indexes mutation.
///
/// Visits every position `i` and, with probability `indpb`, swaps it with
/// a uniformly chosen different position.
///
/// # Complexity
/// O(n)
pub fn shuffle_indexes_mutation<T, R: Rng>(genes: &mut [T], indpb: f64, rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        if rng.random::<f64>() < indpb {
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            genes.swap(i, j);
        }
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Samples `k` distinct indices from `0..n` without replacement, in random
/// order.
///
/// # Panics
/// Panics if `k > n`.
pub fn sample_indices<R: Rng>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    assert!(k <= n, "cannot sample {k} distinct indices from {n}");
    rand::seq::index::sample(rng, n, k).into_vec()
}

// ============================================================================
// Tests
// ============================================================================
