//! Parent and survivor selection.
//!
//! - [`binary_tournament`]: parent selection on (rank, crowding distance)
//! - [`elitist_survival`]: NSGA-II replacement, whole fronts first, the
//!   boundary front trimmed by crowding distance
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::ranking::rank_population;
use super::types::Individual;
use rand::Rng;
use std::cmp::Ordering;

/// Crowded-comparison: `Less` means `a` is preferred over `b`.
///
/// Lower rank wins; on equal rank the larger crowding distance wins.
pub fn crowded_cmp(a: &Individual, b: &Individual) -> Ordering {
    a.rank
        .cmp(&b.rank)
        .then_with(|| b.crowding_distance.total_cmp(&a.crowding_distance))
}

/// Binary tournament: draw two individuals with replacement, return the index
/// of the winner under [`crowded_cmp`].
///
/// On a full tie the first drawn wins.
///
/// # Complexity
/// O(1) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn binary_tournament<R: Rng>(population: &[Individual], rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);

    match crowded_cmp(&population[b], &population[a]) {
        Ordering::Less => b,
        _ => a,
    }
}

/// Fills a mating pool of `size` parent indices by repeated binary tournament.
pub fn mating_pool<R: Rng>(population: &[Individual], size: usize, rng: &mut R) -> Vec<usize> {
    (0..size).map(|_| binary_tournament(population, rng)).collect()
}

/// Elitist replacement.
///
/// Ranks `pool`, then fills the survivors with whole fronts in rank order
/// while they fit. The first front that would overflow `size` is sorted by
/// descending crowding distance (stable, so ties keep pool order) and cut
/// to fill exactly `size` slots.
///
/// Survivors keep the rank and crowding distance computed on `pool`.
///
/// # Panics
/// Panics if `pool` is empty or holds fewer than `size` individuals.
pub fn elitist_survival(mut pool: Vec<Individual>, size: usize) -> Vec<Individual> {
    assert!(
        pool.len() >= size,
        "pool of {} cannot fill {size} survivors",
        pool.len()
    );

    let fronts = rank_population(&mut pool);

    let mut keep: Vec<usize> = Vec::with_capacity(size);
    for mut front in fronts {
        if keep.len() + front.len() <= size {
            keep.extend(front);
        } else {
            front.sort_by(|&a, &b| {
                pool[b]
                    .crowding_distance
                    .total_cmp(&pool[a].crowding_distance)
            });
            let missing = size - keep.len();
            keep.extend(front.into_iter().take(missing));
        }
        if keep.len() == size {
            break;
        }
    }

    let mut slots: Vec<Option<Individual>> = pool.into_iter().map(Some).collect();
    keep.into_iter()
        .map(|i| slots[i].take().expect("fronts partition the pool; each index appears once"))
        .collect()
}
