use std::io::Write;

use clap::Parser;

use super::ProfileArgs;
use crate::{
    config::{Overrides, Profile},
    RunSummary, Runner, TextReporter,
};

/// Run all the workloads
#[derive(Parser, Debug, Default, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
    #[arg(short = 'n', long)]
    /// Number of passes over all workloads
    pub passes: Option<usize>,
    #[arg(short = 'q', long, default_value = "false")]
    /// Only print the total elapsed time
    pub quiet: bool,
}

impl RunArgs {
    /// The resolved profile, with `-n` and `--quiet` applied on top of the shared flags.
    pub fn profile(&self) -> anyhow::Result<Profile> {
        let overrides = Overrides {
            passes: self.passes,
            quiet: self.quiet,
            ..self.profile.overrides()
        };
        self.profile.load(&overrides)
    }

    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<RunSummary> {
        let profile = self.profile()?;
        let registry = profile.build_registry()?;
        if registry.is_empty() {
            log::warn!("No workloads selected");
        }
        let reporter = if profile.quiet {
            TextReporter::summary_only(&mut *out)
        } else {
            TextReporter::new(&mut *out)
        };
        let summary = Runner::new(&registry, profile.passes, reporter).run()?;
        log::debug!(
            "{} invocations in {:.1} msec",
            summary.invocations,
            summary.elapsed.as_micros() as f64 / 1000.0
        );
        Ok(summary)
    }
}
