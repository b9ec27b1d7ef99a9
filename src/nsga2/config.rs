//! NSGA-II configuration.
//!
//! [`Nsga2Config`] holds all parameters that control the generational loop.

use crate::error::ConfigError;

/// Configuration for the NSGA-II engine.
///
/// # Defaults
///
/// ```
/// use gdp_nsga2::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 200);
/// assert!(config.eliminate_duplicates);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use gdp_nsga2::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default()
///     .with_population_size(40)
///     .with_generations(50)
///     .with_mutation_rate(0.05)
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Config {
    /// Number of individuals kept from one generation to the next (P).
    pub population_size: usize,

    /// Number of variation rounds after the initial population. There is no
    /// early stop.
    ///
    /// The initial population is generation 0 and is not counted, so a run
    /// evaluates `generations + 1` populations. A budget that counts the
    /// initial population as generation 1 (200 generations in total) maps to
    /// `generations = 199`.
    pub generations: usize,

    /// Probability that a mating pair is recombined (0.0–1.0).
    ///
    /// When crossover is not applied, the children are copies of the parents.
    pub crossover_rate: f64,

    /// Per-gene flip probability.
    ///
    /// `None` uses `1 / num_genes`.
    pub mutation_rate: Option<f64>,

    /// Discard offspring identical to a member of the parent + offspring pool.
    pub eliminate_duplicates: bool,

    /// Sampling attempts made to replace one discarded duplicate.
    ///
    /// When all attempts produce duplicates too, the last sample is admitted
    /// anyway so the offspring count stays at P. Small search spaces (fewer
    /// than 2P distinct chromosomes) always end up here.
    pub duplicate_retries: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            crossover_rate: 0.9,
            mutation_rate: None,
            eliminate_duplicates: true,
            duplicate_retries: 16,
            parallel: false,
            seed: None,
        }
    }
}

impl Nsga2Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = Some(rate.clamp(0.0, 1.0));
        self
    }

    /// Enables or disables duplicate elimination.
    pub fn with_eliminate_duplicates(mut self, on: bool) -> Self {
        self.eliminate_duplicates = on;
        self
    }

    /// Sets the number of resampling attempts per discarded duplicate.
    pub fn with_duplicate_retries(mut self, n: usize) -> Self {
        self.duplicate_retries = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The per-gene flip probability for a chromosome of length `num_genes`.
    pub fn effective_mutation_rate(&self, num_genes: usize) -> f64 {
        match self.mutation_rate {
            Some(rate) => rate,
            None if num_genes == 0 => 0.0,
            None => 1.0 / num_genes as f64,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::InvalidCrossoverRate(self.crossover_rate));
        }
        if let Some(rate) = self.mutation_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::InvalidMutationRate(rate));
            }
        }
        Ok(())
    }
}
