//! Core trait and data definitions for the NSGA-II engine.
//!
//! [`MoProblem`] is the contract between the generic engine and a concrete
//! problem; [`Individual`] is what the engine ranks, selects and keeps.
//!
//! # Conventions
//!
//! - Every objective is **maximized**. Problems must not negate objectives.
//! - Every constraint is reported as a violation value `g`; `g <= 0` means
//!   satisfied. Only the positive part counts towards the total violation.

use super::chromosome::Chromosome;

/// Objective and constraint values of one chromosome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Objective values, all maximized.
    pub objectives: Vec<f64>,

    /// Constraint values, `<= 0` is satisfied.
    pub violations: Vec<f64>,
}

impl Evaluation {
    pub fn new(objectives: Vec<f64>, violations: Vec<f64>) -> Self {
        Self {
            objectives,
            violations,
        }
    }

    /// Sum of the positive parts of all constraint values.
    ///
    /// Zero for a feasible solution.
    pub fn total_violation(&self) -> f64 {
        self.violations.iter().map(|&g| g.max(0.0)).sum()
    }

    /// `true` if every constraint value is `<= 0`.
    pub fn is_feasible(&self) -> bool {
        self.violations.iter().all(|&g| g <= 0.0)
    }
}

/// A multi-objective, constrained problem over binary chromosomes.
///
/// This is the only thing the engine knows about a problem. Ranking,
/// selection and the generational loop never look past it, so new problem
/// variants plug in without touching the engine.
///
/// # Thread Safety
///
/// `MoProblem` must be `Send + Sync` because the runner may evaluate
/// offspring in parallel using rayon.
///
/// # Implementing
///
/// ```
/// use gdp_nsga2::nsga2::{Chromosome, Evaluation, MoProblem};
///
/// /// Maximize the number of set bits and the number of unset bits.
/// struct Balance {
///     len: usize,
/// }
///
/// impl MoProblem for Balance {
///     fn num_genes(&self) -> usize {
///         self.len
///     }
///
///     fn num_objectives(&self) -> usize {
///         2
///     }
///
///     fn evaluate(&self, c: &Chromosome) -> Evaluation {
///         let ones = c.selected_count() as f64;
///         let zeros = self.len as f64 - ones;
///         Evaluation::new(vec![ones, zeros], vec![])
///     }
/// }
///
/// let p = Balance { len: 4 };
/// let e = p.evaluate(&Chromosome::from_indices(4, &[0]));
/// assert_eq!(e.objectives, vec![1.0, 3.0]);
/// assert!(e.is_feasible());
/// ```
pub trait MoProblem: Send + Sync {
    /// Chromosome length.
    fn num_genes(&self) -> usize;

    /// Number of objectives every [`Evaluation`] carries.
    fn num_objectives(&self) -> usize;

    /// Evaluates a chromosome.
    ///
    /// Must be pure: the same chromosome always yields the same evaluation.
    fn evaluate(&self, chromosome: &Chromosome) -> Evaluation;
}

/// An evaluated chromosome plus its ranking state.
///
/// `rank` and `crowding_distance` are only meaningful after the ranking
/// stage has run on the pool the individual belongs to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    pub chromosome: Chromosome,
    pub evaluation: Evaluation,

    /// Front index, 0 is the non-dominated front.
    pub rank: usize,

    /// Crowding distance within the individual's front.
    pub crowding_distance: f64,
}

impl Individual {
    /// Wraps an evaluated chromosome. The individual is unranked.
    pub fn new(chromosome: Chromosome, evaluation: Evaluation) -> Self {
        Self {
            chromosome,
            evaluation,
            rank: usize::MAX,
            crowding_distance: 0.0,
        }
    }

    pub fn objectives(&self) -> &[f64] {
        &self.evaluation.objectives
    }

    pub fn is_feasible(&self) -> bool {
        self.evaluation.is_feasible()
    }

    pub fn total_violation(&self) -> f64 {
        self.evaluation.total_violation()
    }
}
