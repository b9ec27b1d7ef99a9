//! Bi-objective Generalized Diversity Problem.
//!
//! - [`Instance`]: nodes, distances, costs, capacities, budget `K`, floor `B`
//! - [`GdpProblem`]: Max-Sum / Max-Min evaluator with cost and capacity
//!   constraints, implementing [`MoProblem`](crate::nsga2::MoProblem)
//! - [`solve`]: run the engine and build a [`RunReport`]
//! - [`Reporter`]: seam to external persistence and plotting

mod instance;
mod problem;
mod report;
mod solver;

pub use instance::Instance;
pub use problem::{GdpProblem, GdpScore};
pub use report::{ReportScope, Reporter, RunContext, RunReport, SolutionRecord};
pub use solver::{solve, solve_with_scope};
