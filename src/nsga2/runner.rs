//! NSGA-II generational loop execution.
//!
//! [`Nsga2Runner`] orchestrates the complete evolutionary process:
//! sampling → evaluation → ranking → tournament → crossover → mutation →
//! duplicate elimination → merge → elitist survival → repeat.

use super::chromosome::Chromosome;
use super::config::Nsga2Config;
use super::operators::{bit_flip_mutation, random_sampling, two_point_crossover};
use super::ranking::rank_population;
use super::selection::{elitist_survival, mating_pool};
use super::types::{Individual, MoProblem};
use crate::error::Nsga2Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Summary of one generation's surviving population.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; 0 is the initial population.
    pub generation: usize,

    /// Number of survivors in front 0.
    pub front_size: usize,

    /// Number of feasible survivors.
    pub feasible_count: usize,

    /// Best value of each objective within front 0.
    pub best_objectives: Vec<f64>,
}

/// Result of an NSGA-II run.
///
/// Owns the final ranked population. Individuals are only reachable through
/// shared references, so the result is an immutable snapshot.
#[derive(Debug, Clone)]
pub struct Nsga2Result {
    population: Vec<Individual>,

    /// Total number of generations executed after the initial one.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Seed the run used. Feeding it back through
    /// [`Nsga2Config::with_seed`] replays the run exactly.
    pub seed: u64,

    /// Statistics of the initial population and of every generation.
    pub history: Vec<GenerationStats>,
}

impl Nsga2Result {
    /// The whole final population, ranked.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Members of the final population in front 0.
    pub fn pareto_front(&self) -> impl Iterator<Item = &Individual> {
        self.population.iter().filter(|ind| ind.rank == 0)
    }

    /// Consumes the result, returning the final population.
    pub fn into_population(self) -> Vec<Individual> {
        self.population
    }
}

/// Executes the NSGA-II loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = Nsga2Config::default().with_seed(1);
/// let result = Nsga2Runner::run(&problem, &config)?;
/// for ind in result.pareto_front() {
///     println!("{:?}", ind.objectives());
/// }
/// ```
pub struct Nsga2Runner;

impl Nsga2Runner {
    /// Runs the optimization for `config.generations` generations.
    pub fn run<P: MoProblem>(problem: &P, config: &Nsga2Config) -> Result<Nsga2Result, Nsga2Error> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// The flag is checked only between generations, so the returned
    /// population always carries consistent rank and crowding values.
    #[instrument(level = "debug", skip_all, fields(population_size = config.population_size, generations = config.generations))]
    pub fn run_with_cancel<P: MoProblem>(
        problem: &P,
        config: &Nsga2Config,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Nsga2Result, Nsga2Error> {
        config.validate()?;

        let num_genes = problem.num_genes();
        if num_genes == 0 {
            return Err(Nsga2Error::EmptyProblem);
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let mutation_rate = config.effective_mutation_rate(num_genes);
        let size = config.population_size;

        info!(
            seed,
            num_genes,
            population_size = size,
            generations = config.generations,
            mutation_rate,
            "starting NSGA-II run"
        );

        // 1. Initialize population
        let mut seen = HashSet::with_capacity(2 * size);
        let initial: Vec<Chromosome> = (0..size)
            .map(|_| {
                let c = random_sampling(num_genes, &mut rng);
                admit(c, &mut seen, num_genes, config, &mut rng)
            })
            .collect();

        // 2. Evaluate and rank initial population
        let mut population = evaluate_batch(problem, initial, config.parallel)?;
        rank_population(&mut population);

        let mut history = Vec::with_capacity(config.generations + 1);
        history.push(generation_stats(0, &population));

        let mut cancelled = false;
        let mut completed = 0;

        // 3. Generational loop
        for generation in 1..=config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let offspring = make_offspring(&population, num_genes, mutation_rate, config, &mut rng);
            let offspring = evaluate_batch(problem, offspring, config.parallel)?;

            let mut pool = population;
            pool.extend(offspring);
            population = elitist_survival(pool, size);

            let stats = generation_stats(generation, &population);
            debug!(
                generation,
                front_size = stats.front_size,
                feasible = stats.feasible_count,
                best = ?stats.best_objectives,
                "generation complete"
            );
            history.push(stats);
            completed = generation;
        }

        let result = Nsga2Result {
            population,
            generations: completed,
            cancelled,
            seed,
            history,
        };

        info!(
            generations = result.generations,
            cancelled,
            front_size = result.pareto_front().count(),
            "NSGA-II run finished"
        );

        Ok(result)
    }
}

/// Builds `config.population_size` offspring from the current population.
///
/// Parents come from binary tournaments; consecutive pairs are recombined
/// with probability `crossover_rate`, then every child is mutated. With
/// duplicate elimination on, a child already present among the parents or
/// earlier children is replaced by a fresh sample.
fn make_offspring<R: Rng>(
    population: &[Individual],
    num_genes: usize,
    mutation_rate: f64,
    config: &Nsga2Config,
    rng: &mut R,
) -> Vec<Chromosome> {
    let size = config.population_size;
    let parents = mating_pool(population, size + size % 2, rng);

    let mut children = Vec::with_capacity(size + 1);
    for pair in parents.chunks_exact(2) {
        let a = &population[pair[0]].chromosome;
        let b = &population[pair[1]].chromosome;
        let (c1, c2) = if rng.random_bool(config.crossover_rate) {
            two_point_crossover(a, b, rng)
        } else {
            (a.clone(), b.clone())
        };
        children.push(c1);
        children.push(c2);
    }
    children.truncate(size);

    for child in &mut children {
        bit_flip_mutation(child, mutation_rate, rng);
    }

    let mut seen: HashSet<Chromosome> = population.iter().map(|ind| ind.chromosome.clone()).collect();
    children
        .into_iter()
        .map(|child| admit(child, &mut seen, num_genes, config, rng))
        .collect()
}

/// Returns `candidate` if it is new, otherwise a fresh sample that is.
///
/// Gives up after `duplicate_retries` samples and returns the last one.
fn admit<R: Rng>(
    candidate: Chromosome,
    seen: &mut HashSet<Chromosome>,
    num_genes: usize,
    config: &Nsga2Config,
    rng: &mut R,
) -> Chromosome {
    if !config.eliminate_duplicates || seen.insert(candidate.clone()) {
        return candidate;
    }

    let mut last = candidate;
    for _ in 0..config.duplicate_retries {
        let fresh = random_sampling(num_genes, rng);
        if seen.insert(fresh.clone()) {
            return fresh;
        }
        last = fresh;
    }
    last
}

/// Evaluate a batch of chromosomes, preserving order.
#[cfg(feature = "parallel")]
fn evaluate_batch<P: MoProblem>(
    problem: &P,
    chromosomes: Vec<Chromosome>,
    parallel: bool,
) -> Result<Vec<Individual>, Nsga2Error> {
    use rayon::prelude::*;

    if parallel {
        chromosomes
            .into_par_iter()
            .map(|c| evaluate_one(problem, c))
            .collect()
    } else {
        chromosomes
            .into_iter()
            .map(|c| evaluate_one(problem, c))
            .collect()
    }
}

/// Evaluate a batch of chromosomes, preserving order.
#[cfg(not(feature = "parallel"))]
fn evaluate_batch<P: MoProblem>(
    problem: &P,
    chromosomes: Vec<Chromosome>,
    _parallel: bool,
) -> Result<Vec<Individual>, Nsga2Error> {
    chromosomes
        .into_iter()
        .map(|c| evaluate_one(problem, c))
        .collect()
}

fn evaluate_one<P: MoProblem>(problem: &P, chromosome: Chromosome) -> Result<Individual, Nsga2Error> {
    let evaluation = problem.evaluate(&chromosome);
    let expected = problem.num_objectives();
    if evaluation.objectives.len() != expected {
        return Err(Nsga2Error::ObjectiveCount {
            expected,
            found: evaluation.objectives.len(),
        });
    }
    Ok(Individual::new(chromosome, evaluation))
}

fn generation_stats(generation: usize, population: &[Individual]) -> GenerationStats {
    let front: Vec<&Individual> = population.iter().filter(|ind| ind.rank == 0).collect();
    let m = population.first().map_or(0, |ind| ind.objectives().len());
    let best_objectives = (0..m)
        .map(|k| {
            front
                .iter()
                .map(|ind| ind.objectives()[k])
                .fold(f64::NEG_INFINITY, f64::max)
        })
        .collect();

    GenerationStats {
        generation,
        front_size: front.len(),
        feasible_count: population.iter().filter(|ind| ind.is_feasible()).count(),
        best_objectives,
    }
}

// ============================================================================
// Tests
// ============================================================================
