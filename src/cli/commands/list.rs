use std::io::Write;

use clap::Parser;

use super::ProfileArgs;

/// List the workloads a run would execute, in order
#[derive(Parser, Debug, Default, Clone)]
pub struct ListArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
}

impl ListArgs {
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let profile = self.profile.load(&self.profile.overrides())?;
        let registry = profile.build_registry()?;
        for name in registry.names() {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }
}
