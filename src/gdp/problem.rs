//! Bi-objective GDP evaluator.
//!
//! Maps a node-selection chromosome to Max-Sum, Max-Min and the two
//! constraint violations, and plugs that into the NSGA-II engine through
//! [`MoProblem`].

use super::instance::Instance;
use super::report::SolutionRecord;
use crate::nsga2::{Chromosome, Evaluation, Individual, MoProblem};

/// Everything the evaluator computes for one selection.
///
/// `max_sum` and `max_min` are `-inf` when fewer than two nodes are
/// selected: such a selection is valid but loses to every selection of two
/// or more feasible nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GdpScore {
    pub selected_count: usize,
    /// Sum of distances over all unordered pairs of selected nodes.
    pub max_sum: f64,
    /// Smallest distance over all unordered pairs of selected nodes.
    pub max_min: f64,
    pub total_cost: u64,
    pub total_capacity: u64,
    /// `total_cost - K`, feasible when `<= 0`.
    pub cost_violation: f64,
    /// `B - total_capacity`, feasible when `<= 0`.
    pub capacity_violation: f64,
}

impl GdpScore {
    pub fn is_feasible(&self) -> bool {
        self.cost_violation <= 0.0 && self.capacity_violation <= 0.0
    }
}

/// The Generalized Diversity Problem over a borrowed [`Instance`].
#[derive(Debug, Clone, Copy)]
pub struct GdpProblem<'a> {
    instance: &'a Instance,
}

impl<'a> GdpProblem<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Scores a selection.
    ///
    /// # Complexity
    /// O(k²) for k selected nodes
    ///
    /// # Panics
    /// Panics if the chromosome length differs from the node count.
    pub fn score(&self, chromosome: &Chromosome) -> GdpScore {
        let inst = self.instance;
        assert_eq!(
            chromosome.len(),
            inst.n(),
            "chromosome length does not match instance size"
        );

        let selected: Vec<usize> = chromosome.selected().collect();
        let total_cost: u64 = selected.iter().map(|&i| inst.cost(i)).sum();
        let total_capacity: u64 = selected.iter().map(|&i| inst.capacity(i)).sum();

        let (max_sum, max_min) = if selected.len() < 2 {
            (f64::NEG_INFINITY, f64::NEG_INFINITY)
        } else {
            let mut sum = 0.0;
            let mut min = f64::INFINITY;
            for (a, &i) in selected.iter().enumerate() {
                for &j in &selected[a + 1..] {
                    let d = inst.distance(i, j);
                    sum += d;
                    min = min.min(d);
                }
            }
            (sum, min)
        };

        GdpScore {
            selected_count: selected.len(),
            max_sum,
            max_min,
            total_cost,
            total_capacity,
            cost_violation: total_cost as f64 - inst.budget() as f64,
            capacity_violation: inst.capacity_floor() as f64 - total_capacity as f64,
        }
    }

    /// The reporting record for an evaluated individual.
    ///
    /// Objectives come from the stored evaluation; only the cost and
    /// capacity sums are recomputed.
    ///
    /// # Complexity
    /// O(n)
    pub fn record(&self, individual: &Individual) -> SolutionRecord {
        let inst = self.instance;
        let chromosome = &individual.chromosome;
        let objectives = individual.objectives();
        SolutionRecord {
            nodes: chromosome.selected().map(|i| i + 1).collect(),
            max_sum: objectives[0],
            max_min: objectives[1],
            total_cost: chromosome.selected().map(|i| inst.cost(i)).sum(),
            total_capacity: chromosome.selected().map(|i| inst.capacity(i)).sum(),
        }
    }
}

impl MoProblem for GdpProblem<'_> {
    fn num_genes(&self) -> usize {
        self.instance.n()
    }

    fn num_objectives(&self) -> usize {
        2
    }

    fn evaluate(&self, chromosome: &Chromosome) -> Evaluation {
        let s = self.score(chromosome);
        Evaluation::new(
            vec![s.max_sum, s.max_min],
            vec![s.cost_violation, s.capacity_violation],
        )
    }
}
