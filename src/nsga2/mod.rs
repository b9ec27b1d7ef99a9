//! NSGA-II engine for binary subset-selection problems.
//!
//! A generic, problem-agnostic implementation of the elitist non-dominated
//! sorting genetic algorithm with constraint handling. Users define their
//! problem by implementing [`MoProblem`], which maps a [`Chromosome`] to an
//! [`Evaluation`] of maximized objectives and constraint violations.
//!
//! # Key Types
//!
//! - [`Nsga2Config`]: Algorithm parameters (population size, generations, rates, seed)
//! - [`Nsga2Runner`]: Executes the generational loop
//! - [`Nsga2Result`]: Final ranked population with per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Random sampling, two-point crossover, bit-flip mutation
//! - [`ranking`]: Constrained domination, non-dominated sorting, crowding distance
//! - [`selection`]: Binary tournament and elitist survival
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Deb (2000), *An efficient constraint handling method for genetic algorithms*

mod chromosome;
mod config;
pub mod operators;
pub mod ranking;
mod runner;
pub mod selection;
mod types;

pub use chromosome::Chromosome;
pub use config::Nsga2Config;
pub use runner::{GenerationStats, Nsga2Result, Nsga2Runner};
pub use types::{Evaluation, Individual, MoProblem};
