//! One-call GDP solve: run NSGA-II on an instance and build the report.

use super::instance::Instance;
use super::problem::GdpProblem;
use super::report::{ReportScope, RunContext, RunReport};
use crate::error::Nsga2Error;
use crate::nsga2::{Individual, Nsga2Config, Nsga2Runner};
use std::time::Instant;
use tracing::{info, instrument};

/// Solves `instance` and reports front 0 of the final population.
pub fn solve(
    instance: &Instance,
    config: &Nsga2Config,
    context: RunContext,
) -> Result<RunReport, Nsga2Error> {
    solve_with_scope(instance, config, context, ReportScope::ParetoFront)
}

/// Solves `instance` and reports the individuals selected by `scope`.
#[instrument(
    level = "debug",
    skip(instance, config, context),
    fields(run = context.run_number, instance = %context.instance_name, n = instance.n())
)]
pub fn solve_with_scope(
    instance: &Instance,
    config: &Nsga2Config,
    context: RunContext,
    scope: ReportScope,
) -> Result<RunReport, Nsga2Error> {
    let problem = GdpProblem::new(instance);

    let start = Instant::now();
    let result = Nsga2Runner::run(&problem, config)?;
    let elapsed = start.elapsed();

    let chosen: Vec<&Individual> = match scope {
        ReportScope::ParetoFront => result.pareto_front().collect(),
        ReportScope::Population => result.population().iter().collect(),
    };
    let records: Vec<_> = chosen
        .into_iter()
        .map(|ind| problem.record(ind))
        .collect();

    info!(
        run = context.run_number,
        instance = %context.instance_name,
        records = records.len(),
        secs = elapsed.as_secs_f64(),
        "GDP solve finished"
    );

    Ok(RunReport {
        context,
        scope,
        records,
        generations: result.generations,
        seed: result.seed,
        elapsed,
        history: result.history,
    })
}
