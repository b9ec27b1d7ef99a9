//! Records handed to the external reporting collaborator.
//!
//! The crate builds these values; persisting or plotting them is the job of
//! whatever implements [`Reporter`].

use crate::nsga2::GenerationStats;
use std::fmt;
use std::time::Duration;

/// One surviving selection, in reporting form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionRecord {
    /// Selected nodes, 1-based and ascending.
    pub nodes: Vec<usize>,
    pub max_sum: f64,
    pub max_min: f64,
    pub total_cost: u64,
    pub total_capacity: u64,
}

impl SolutionRecord {
    /// Nodes joined as `"3 - 4"`.
    pub fn label(&self) -> String {
        self.nodes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

impl fmt::Display for SolutionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] max_sum={} max_min={} cost={} capacity={}",
            self.label(),
            self.max_sum,
            self.max_min,
            self.total_cost,
            self.total_capacity
        )
    }
}

/// Identifies one run for the reporting side.
///
/// Passed in explicitly by the caller; the crate keeps no run counter of
/// its own.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunContext {
    pub run_number: u32,
    pub instance_name: String,
}

impl RunContext {
    pub fn new(run_number: u32, instance_name: impl Into<String>) -> Self {
        Self {
            run_number,
            instance_name: instance_name.into(),
        }
    }

    /// The context for the run after this one on the same instance.
    pub fn next(&self) -> Self {
        Self {
            run_number: self.run_number + 1,
            instance_name: self.instance_name.clone(),
        }
    }
}

/// Which individuals of the final population end up in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportScope {
    /// Front 0 only.
    #[default]
    ParetoFront,
    /// The whole final population, for diagnostics.
    Population,
}

/// Outcome of one solve, ready for persistence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub context: RunContext,
    pub scope: ReportScope,
    pub records: Vec<SolutionRecord>,
    pub generations: usize,
    pub seed: u64,
    pub elapsed: Duration,
    pub history: Vec<GenerationStats>,
}

impl RunReport {
    /// Feasible records only.
    pub fn feasible(&self, budget: u64, capacity_floor: u64) -> impl Iterator<Item = &SolutionRecord> {
        self.records
            .iter()
            .filter(move |r| r.total_cost <= budget && r.total_capacity >= capacity_floor)
    }
}

/// The seam to whatever persists or visualizes a [`RunReport`].
pub trait Reporter {
    type Error;

    fn report(&mut self, report: &RunReport) -> Result<(), Self::Error>;
}
