use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{Config, Overrides, Profile, DEFAULT_PROFILE},
    suites::Suite,
};

pub mod list;
pub mod run;

/// Options shared by all commands for selecting workloads
#[derive(Parser, Debug, Default, Clone)]
pub struct ProfileArgs {
    #[arg(long)]
    /// Benchmarking profile [default: default]
    pub profile: Option<String>,
    #[arg(long)]
    /// TOML file with extra `[profiles.<name>]` tables
    pub config: Option<PathBuf>,
    #[arg(short = 's', long = "suite", value_enum)]
    /// Suites to run, replacing the profile's list
    pub suites: Vec<Suite>,
    #[arg(short = 'l', long)]
    /// Number of operations per workload invocation
    pub loop_count: Option<usize>,
    #[arg(long)]
    /// Only keep workloads whose name contains this text
    pub filter: Vec<String>,
}

impl ProfileArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            suites: self.suites.clone(),
            loop_count: self.loop_count,
            filter: self.filter.clone(),
            ..Overrides::default()
        }
    }

    /// Load the selected profile from the builtin profiles and an optional config file.
    pub fn load(&self, overrides: &Overrides) -> anyhow::Result<Profile> {
        let mut config = Config::builtin();
        if let Some(path) = &self.config {
            config = config.merge(Config::load(path)?);
        }
        let name = self.profile.as_deref().unwrap_or(DEFAULT_PROFILE);
        Ok(config.resolve(name, overrides)?)
    }
}
