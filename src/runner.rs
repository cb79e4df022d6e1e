use std::time::{Duration, Instant};

use crate::{error::RunError, registry::Registry, report::Reporter};

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of completed passes
    pub passes: usize,
    /// Total number of workload invocations
    pub invocations: usize,
    /// Wall-clock time of the whole multi-pass loop
    pub elapsed: Duration,
}

/// Runs every workload of a registry, pass after pass.
pub struct Runner<'a, R: Reporter> {
    registry: &'a Registry,
    passes: usize,
    reporter: R,
}

impl<'a, R: Reporter> Runner<'a, R> {
    pub fn new(registry: &'a Registry, passes: usize, reporter: R) -> Self {
        Self {
            registry,
            passes,
            reporter,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Execute all passes. The first failing workload aborts the run.
    pub fn run(&mut self) -> Result<RunSummary, RunError> {
        log::info!(
            "Running {} workloads for {} iters",
            self.registry.len(),
            self.passes
        );
        let start = Instant::now();
        let mut invocations = 0;
        for pass in 1..=self.passes {
            self.reporter.pass_begin(pass)?;
            for workload in self.registry {
                self.reporter.workload_begin(workload.name())?;
                workload.invoke().map_err(|source| RunError::Workload {
                    name: workload.name().to_owned(),
                    pass,
                    source,
                })?;
                invocations += 1;
                self.reporter.workload_end(workload.name())?;
            }
            self.reporter.pass_end(pass)?;
        }
        let elapsed = start.elapsed();
        self.reporter.finish(elapsed)?;
        Ok(RunSummary {
            passes: self.passes,
            invocations,
            elapsed,
        })
    }
}
