//! Binary genetic operators.
//!
//! Sampling, crossover and mutation for [`Chromosome`] bit strings.
//!
//! # Operators
//!
//! - [`random_sampling`]: uniform random bit string, each gene set with p = 0.5
//! - [`two_point_crossover`]: exchange the segment between two random cuts
//! - [`bit_flip_mutation`]: flip each gene independently with probability `rate`
//!
//! # References
//!
//! - Spears & De Jong (1991), "An Analysis of Multi-Point Crossover"
//! - Bäck (1993), "Optimal Mutation Rates in Genetic Search"

use super::chromosome::Chromosome;
use rand::Rng;

// ============================================================================
// Sampling
// ============================================================================

/// Uniform random binary chromosome of length `len`.
pub fn random_sampling<R: Rng>(len: usize, rng: &mut R) -> Chromosome {
    Chromosome::from_bits((0..len).map(|_| rng.random_bool(0.5)).collect())
}

// ============================================================================
// Crossover
// ============================================================================

/// Two-point crossover.
///
/// Picks cut positions `0 <= p1 < p2 <= n` uniformly among all such pairs.
/// Child 1 takes `parent1` outside `[p1, p2)` and `parent2` inside it;
/// child 2 is the complement.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn two_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let (p1, p2) = random_cuts(n, rng);
    crossover_segment(parent1, parent2, p1, p2)
}

/// Exchanges the genes in `[start, end)` between two parents.
///
/// # Panics
/// Panics if parents have different lengths or `start > end` or `end > n`.
pub fn crossover_segment(
    parent1: &Chromosome,
    parent2: &Chromosome,
    start: usize,
    end: usize,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end <= n, "invalid segment [{start}, {end}) for length {n}");

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    child1.bits_mut()[start..end].copy_from_slice(&parent2.bits()[start..end]);
    child2.bits_mut()[start..end].copy_from_slice(&parent1.bits()[start..end]);
    (child1, child2)
}

/// Two distinct cut positions from `0..=n`, returned ascending.
fn random_cuts<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..=n);
    let mut b = rng.random_range(0..n);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Bit-flip mutation: flips each gene independently with probability `rate`.
///
/// Returns the number of flipped genes.
///
/// # Complexity
/// O(n)
pub fn bit_flip_mutation<R: Rng>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) -> usize {
    if rate <= 0.0 {
        return 0;
    }
    let rate = rate.min(1.0);
    let mut flipped = 0;
    for bit in chromosome.bits_mut() {
        if rng.random_bool(rate) {
            *bit = !*bit;
            flipped += 1;
        }
    }
    flipped
}

// ============================================================================
// Tests
// ============================================================================
