//! Constrained non-dominated sorting and crowding distance.
//!
//! Problem-agnostic ranking for NSGA-II over [`Evaluation`]s.
//! All objectives are **maximized**: higher values are better.
//!
//! # Algorithms
//!
//! - [`constrained_dominance`]: Deb's constrained-domination comparison
//! - [`non_dominated_sort`]: Fast non-dominated sorting (Deb et al., 2002)
//! - [`crowding_distance`]: Crowding distance assignment for diversity preservation
//! - [`rank_population`]: both of the above, written back into [`Individual`]s
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197
//! - Deb (2000), "An efficient constraint handling method for genetic algorithms"

use super::types::{Evaluation, Individual};

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the front index of the solution
/// at the same position. Rank 0 is the Pareto front (non-dominated solutions).
#[derive(Debug, Clone)]
pub struct NondominatedSortResult {
    /// Front index for each solution (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    ///
    /// Within a front, indices appear in the order they were peeled, which
    /// depends only on the input order.
    pub fronts: Vec<Vec<usize>>,
}

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Compare two objective vectors for Pareto dominance (maximization).
///
/// `a` dominates `b` iff `a >= b` in every objective and `a > b` in at
/// least one.
pub fn pareto_dominance(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va > vb {
            a_better_in_some = true;
        } else if vb > va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Constrained-domination comparison.
///
/// - both feasible: Pareto dominance on the objectives
/// - one feasible: the feasible one dominates
/// - both infeasible: the one with strictly smaller total violation dominates
///
/// # Example
///
/// ```
/// use gdp_nsga2::nsga2::ranking::{constrained_dominance, Dominance};
/// use gdp_nsga2::nsga2::Evaluation;
///
/// let feasible = Evaluation::new(vec![1.0, 1.0], vec![0.0]);
/// let infeasible = Evaluation::new(vec![9.0, 9.0], vec![2.0]);
/// assert_eq!(constrained_dominance(&feasible, &infeasible), Dominance::Left);
/// ```
pub fn constrained_dominance(a: &Evaluation, b: &Evaluation) -> Dominance {
    match (a.is_feasible(), b.is_feasible()) {
        (true, true) => pareto_dominance(&a.objectives, &b.objectives),
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        (false, false) => {
            let (va, vb) = (a.total_violation(), b.total_violation());
            if va < vb {
                Dominance::Left
            } else if vb < va {
                Dominance::Right
            } else {
                Dominance::Neither
            }
        }
    }
}

/// `true` if `a` constrained-dominates `b`.
pub fn dominates(a: &Evaluation, b: &Evaluation) -> bool {
    constrained_dominance(a, b) == Dominance::Left
}

/// Fast non-dominated sorting under constrained domination.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For each pair of solutions, determine dominance
/// 2. Solutions dominated by no other belong to front 0 (rank 0)
/// 3. Remove front 0, repeat to find subsequent fronts
///
/// This produces the same partition as repeatedly peeling off the
/// currently non-dominated set.
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of solutions
///
/// # Panics
///
/// Panics if `evaluations` is empty.
///
/// # Example
///
/// ```
/// use gdp_nsga2::nsga2::ranking::non_dominated_sort;
/// use gdp_nsga2::nsga2::Evaluation;
///
/// let pool = vec![
///     Evaluation::new(vec![5.0, 1.0], vec![]), // A
///     Evaluation::new(vec![3.0, 3.0], vec![]), // B
///     Evaluation::new(vec![1.0, 5.0], vec![]), // C
///     Evaluation::new(vec![2.0, 2.0], vec![]), // D — dominated by B
/// ];
///
/// let result = non_dominated_sort(&pool);
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(result.fronts, vec![vec![0, 1, 2], vec![3]]);
/// ```
pub fn non_dominated_sort(evaluations: &[Evaluation]) -> NondominatedSortResult {
    let refs: Vec<&Evaluation> = evaluations.iter().collect();
    sort_refs(&refs)
}

fn sort_refs(evaluations: &[&Evaluation]) -> NondominatedSortResult {
    let n = evaluations.len();
    assert!(n > 0, "evaluations must not be empty");

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            match constrained_dominance(evaluations[i], evaluations[j]) {
                Dominance::Left => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        // All pairs involving i have been compared by now
        if domination_count[i] == 0 {
            front_0.push(i);
        }
    }

    let mut fronts = vec![front_0];
    loop {
        let current = fronts.last().expect("fronts is initialized with front_0; never empty");
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len();
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    NondominatedSortResult { ranks, fronts }
}

/// Crowding distance assignment for diversity preservation.
///
/// Computes the crowding distance for each solution of one front. Higher
/// distance means the solution is more isolated.
///
/// Boundary solutions (min/max for any objective) receive `f64::INFINITY`.
/// An objective whose range is zero or not finite (e.g. when a member
/// scores `-inf`) adds nothing to interior solutions.
///
/// # Algorithm (Deb et al., 2002)
///
/// For each objective:
/// 1. Sort solutions by objective value
/// 2. Assign infinity to boundary solutions
/// 3. For interior solutions, add normalized distance to neighbors
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = number of solutions
///
/// # Example
///
/// ```
/// use gdp_nsga2::nsga2::ranking::crowding_distance;
///
/// let front: Vec<&[f64]> = vec![&[1.0, 5.0], &[3.0, 3.0], &[5.0, 1.0]];
/// let distances = crowding_distance(&front);
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!((distances[1] - 2.0).abs() < 1e-12);
/// ```
pub fn crowding_distance(objectives: &[&[f64]]) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = objectives[0].len();
    let mut distances = vec![0.0f64; n];

    for obj_idx in 0..m {
        // Stable sort keeps input order among equal values
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| objectives[a][obj_idx].total_cmp(&objectives[b][obj_idx]));

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let min_val = objectives[indices[0]][obj_idx];
        let max_val = objectives[indices[n - 1]][obj_idx];
        let range = max_val - min_val;

        if range.is_finite() && range > 0.0 {
            for i in 1..(n - 1) {
                let prev = objectives[indices[i - 1]][obj_idx];
                let next = objectives[indices[i + 1]][obj_idx];
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    distances
}

/// Ranks a pool in place and returns its fronts.
///
/// Writes `rank` and `crowding_distance` on every individual. Crowding is
/// computed per front.
///
/// # Panics
///
/// Panics if `pool` is empty.
pub fn rank_population(pool: &mut [Individual]) -> Vec<Vec<usize>> {
    let sorted = {
        let refs: Vec<&Evaluation> = pool.iter().map(|ind| &ind.evaluation).collect();
        sort_refs(&refs)
    };

    for front in &sorted.fronts {
        let distances = {
            let objs: Vec<&[f64]> = front.iter().map(|&i| pool[i].objectives()).collect();
            crowding_distance(&objs)
        };
        for (&i, d) in front.iter().zip(distances) {
            pool[i].rank = sorted.ranks[i];
            pool[i].crowding_distance = d;
        }
    }

    sorted.fronts
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nsga2::Chromosome;

    fn feasible(objs: &[f64]) -> Evaluation {
        Evaluation::new(objs.to_vec(), vec![0.0, -1.0])
    }

    fn infeasible(objs: &[f64], violation: f64) -> Evaluation {
        Evaluation::new(objs.to_vec(), vec![violation, -1.0])
    }

    // ---- Dominance ----

    #[test]
    fn test_pareto_dominance_maximizes() {
        assert_eq!(pareto_dominance(&[2.0, 2.0], &[1.0, 2.0]), Dominance::Left);
        assert_eq!(pareto_dominance(&[1.0, 1.0], &[1.0, 2.0]), Dominance::Right);
        assert_eq!(pareto_dominance(&[3.0, 1.0], &[1.0, 3.0]), Dominance::Neither);
        assert_eq!(pareto_dominance(&[2.0, 2.0], &[2.0, 2.0]), Dominance::Neither);
    }

    #[test]
    fn test_neg_infinity_is_dominated() {
        let degenerate = feasible(&[f64::NEG_INFINITY, f64::NEG_INFINITY]);
        let pair = feasible(&[0.0, 0.0]);
        assert!(dominates(&pair, &degenerate));
        assert!(!dominates(&degenerate, &degenerate));
    }

    #[test]
    fn test_feasible_beats_infeasible() {
        let weak = feasible(&[0.0, 0.0]);
        let strong = infeasible(&[100.0, 100.0], 0.1);
        assert_eq!(constrained_dominance(&weak, &strong), Dominance::Left);
        assert_eq!(constrained_dominance(&strong, &weak), Dominance::Right);
    }

    #[test]
    fn test_infeasible_compared_by_total_violation() {
        let a = infeasible(&[0.0, 0.0], 1.0);
        let b = infeasible(&[50.0, 50.0], 3.0);
        let c = Evaluation::new(vec![9.0, 9.0], vec![0.5, 0.5]);
        assert_eq!(constrained_dominance(&a, &b), Dominance::Left);
        // equal total violation, objectives ignored
        assert_eq!(constrained_dominance(&a, &c), Dominance::Neither);
    }

    // ---- Non-dominated sort ----

    #[test]
    fn test_single_solution() {
        let result = non_dominated_sort(&[feasible(&[1.0, 2.0])]);
        assert_eq!(result.ranks, vec![0]);
        assert_eq!(result.fronts, vec![vec![0]]);
    }

    #[test]
    fn test_clear_dominance_chain() {
        let pool = vec![
            feasible(&[1.0, 1.0]),
            feasible(&[3.0, 3.0]),
            feasible(&[2.0, 2.0]),
        ];
        let result = non_dominated_sort(&pool);
        assert_eq!(result.ranks, vec![2, 0, 1]);
        assert_eq!(result.fronts, vec![vec![1], vec![2], vec![0]]);
    }

    #[test]
    fn test_mixed_fronts() {
        let pool = vec![
            feasible(&[5.0, 1.0]), // front 0
            feasible(&[3.0, 3.0]), // front 0
            feasible(&[1.0, 5.0]), // front 0
            feasible(&[2.0, 2.0]), // dominated by [1] → front 1
            feasible(&[0.0, 0.0]), // dominated by [3] → front 2
        ];
        let result = non_dominated_sort(&pool);
        assert_eq!(result.ranks, vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_all_infeasible_ranked_by_violation() {
        let pool = vec![
            infeasible(&[9.0, 9.0], 3.0),
            infeasible(&[0.0, 0.0], 1.0),
            infeasible(&[5.0, 5.0], 2.0),
        ];
        let result = non_dominated_sort(&pool);
        assert_eq!(result.ranks, vec![2, 0, 1]);
    }

    #[test]
    fn test_infeasible_behind_every_feasible() {
        let pool = vec![
            infeasible(&[9.0, 9.0], 0.5),
            feasible(&[1.0, 1.0]),
            feasible(&[0.0, 0.0]),
        ];
        let result = non_dominated_sort(&pool);
        assert_eq!(result.ranks, vec![2, 0, 1]);
    }

    #[test]
    fn test_all_equal() {
        let pool = vec![feasible(&[2.0, 2.0]); 3];
        let result = non_dominated_sort(&pool);
        assert!(result.ranks.iter().all(|&r| r == 0));
    }

    // ---- Crowding distance ----

    #[test]
    fn test_crowding_two() {
        let dist = crowding_distance(&[&[1.0, 3.0], &[3.0, 1.0]]);
        assert!(dist.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_crowding_evenly_spaced() {
        let objs: Vec<&[f64]> = vec![
            &[0.0, 4.0],
            &[1.0, 3.0],
            &[2.0, 2.0],
            &[3.0, 1.0],
            &[4.0, 0.0],
        ];
        let dist = crowding_distance(&objs);

        assert!(dist[0].is_infinite());
        assert!(dist[4].is_infinite());
        for d in &dist[1..4] {
            assert!((d - 1.0).abs() < 1e-10, "expected 1.0, got {d}");
        }
    }

    #[test]
    fn test_crowding_zero_range_objective() {
        let dist = crowding_distance(&[&[1.0, 5.0], &[2.0, 5.0], &[3.0, 5.0]]);
        assert!(dist[0].is_infinite());
        assert!(dist[2].is_infinite());
        assert!((dist[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_crowding_with_neg_infinity_member() {
        let ninf = f64::NEG_INFINITY;
        let dist = crowding_distance(&[&[ninf, ninf], &[ninf, ninf], &[ninf, ninf], &[1.0, 1.0]]);
        assert!(dist.iter().all(|d| !d.is_nan()));
        assert!(dist[3].is_infinite());
        assert!(dist.iter().all(|&d| d >= 0.0));
    }

    // ---- Ranking a population ----

    #[test]
    fn test_rank_population_writes_fields() {
        let mut pool: Vec<Individual> = [
            feasible(&[5.0, 1.0]),
            feasible(&[3.0, 3.0]),
            feasible(&[1.0, 5.0]),
            feasible(&[2.0, 2.0]),
        ]
        .into_iter()
        .map(|e| Individual::new(Chromosome::empty(1), e))
        .collect();

        let fronts = rank_population(&mut pool);

        assert_eq!(fronts, vec![vec![0, 1, 2], vec![3]]);
        assert_eq!(
            pool.iter().map(|i| i.rank).collect::<Vec<_>>(),
            vec![0, 0, 0, 1]
        );
        assert!(pool[0].crowding_distance.is_infinite());
        assert!((pool[1].crowding_distance - 2.0).abs() < 1e-12);
        // a lone front member is a boundary point
        assert!(pool[3].crowding_distance.is_infinite());
    }
}
