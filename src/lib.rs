//! Bi-objective Generalized Diversity Problem solved with NSGA-II.
//!
//! Picks a subset of nodes that maximizes two conflicting diversity
//! measures at once:
//!
//! - **Max-Sum**: total pairwise distance among the selected nodes
//! - **Max-Min**: smallest pairwise distance among the selected nodes
//!
//! subject to a cost budget `K` (total cost `<= K`) and a capacity floor `B`
//! (total capacity `>= B`).
//!
//! # Architecture
//!
//! - [`nsga2`]: the problem-agnostic engine. It only knows the
//!   [`MoProblem`](nsga2::MoProblem) trait, so other problem variants plug in
//!   without touching ranking or the generational loop.
//! - [`gdp`]: the diversity problem itself: instance model, evaluator,
//!   solution records and the run report handed to external reporting.
//!
//! The crate performs no I/O. Instances come in already parsed; results go
//! out as plain records through the [`Reporter`](gdp::Reporter) seam.
//!
//! # Example
//!
//! ```
//! use gdp_nsga2::gdp::{solve, Instance, RunContext};
//! use gdp_nsga2::nsga2::Nsga2Config;
//!
//! let instance = Instance::from_edges(
//!     4,
//!     &[(1, 2, 1.0), (1, 3, 2.0), (1, 4, 3.0), (2, 3, 4.0), (2, 4, 5.0), (3, 4, 6.0)],
//!     vec![1; 4],
//!     vec![1; 4],
//!     2,
//!     1,
//! )
//! .unwrap();
//!
//! let config = Nsga2Config::default()
//!     .with_population_size(8)
//!     .with_generations(20)
//!     .with_seed(1);
//! let report = solve(&instance, &config, RunContext::new(1, "toy")).unwrap();
//!
//! assert!(report.records.iter().any(|r| r.nodes == vec![3, 4]));
//! ```

pub mod error;
pub mod gdp;
pub mod nsga2;
