use std::{collections::HashMap, path::Path};

use serde::Deserialize;

use crate::{
    error::{ConfigError, RegistrationError},
    registry::Registry,
    suites::{self, Suite, LOOP_COUNT},
};

pub const DEFAULT_PROFILE: &str = "default";

/// A set of named run profiles.
///
/// ```toml
/// [profiles.quick]
/// suites = ["arithmetic"]
/// passes = 1
/// loop-count = 1000
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

fn all_suites() -> Vec<Suite> {
    Suite::ALL.to_vec()
}

fn five() -> usize {
    5
}

fn default_loop_count() -> usize {
    LOOP_COUNT
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Suites to register, in run order
    #[serde(default = "all_suites")]
    pub suites: Vec<Suite>,
    /// Number of passes over the registry
    #[serde(default = "five")]
    pub passes: usize,
    /// Number of operations per workload invocation
    #[serde(default = "default_loop_count", rename = "loop-count")]
    pub loop_count: usize,
    /// Only print the final elapsed time
    #[serde(default)]
    pub quiet: bool,
    /// Only run workloads whose name contains one of these
    #[serde(default)]
    pub filter: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            suites: all_suites(),
            passes: five(),
            loop_count: default_loop_count(),
            quiet: false,
            filter: Vec::new(),
        }
    }
}

/// Command line values that take precedence over the selected profile.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub suites: Vec<Suite>,
    pub passes: Option<usize>,
    pub loop_count: Option<usize>,
    pub quiet: bool,
    pub filter: Vec<String>,
}

impl Profile {
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.loop_count == 0 {
            return Err(ConfigError::InvalidLoopCount(name.to_owned()));
        }
        Ok(())
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if !overrides.suites.is_empty() {
            self.suites = overrides.suites.clone();
        }
        if let Some(passes) = overrides.passes {
            self.passes = passes;
        }
        if let Some(loop_count) = overrides.loop_count {
            self.loop_count = loop_count;
        }
        if overrides.quiet {
            self.quiet = true;
        }
        if !overrides.filter.is_empty() {
            self.filter = overrides.filter.clone();
        }
    }

    /// Register the profile's suites and apply its name filter.
    pub fn build_registry(&self) -> Result<Registry, RegistrationError> {
        let registry = suites::build_registry(&self.suites, self.loop_count)?;
        Ok(registry.filter(&self.filter))
    }
}

impl Config {
    /// Profiles available without any config file.
    pub fn builtin() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(DEFAULT_PROFILE.to_owned(), Profile::default());
        profiles.insert(
            "arithmetic".to_owned(),
            Profile {
                suites: vec![Suite::Arithmetic],
                ..Profile::default()
            },
        );
        profiles.insert(
            "string".to_owned(),
            Profile {
                suites: vec![Suite::String],
                passes: 1,
                quiet: true,
                ..Profile::default()
            },
        );
        Self { profiles }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&s).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Profiles from `other` replace same-named profiles in `self`.
    pub fn merge(mut self, other: Config) -> Self {
        self.profiles.extend(other.profiles);
        self
    }

    pub fn profile(&self, name: &str) -> Result<Profile, ConfigError> {
        self.profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_owned()))
    }

    /// Look up `name` and apply `overrides` on top of it.
    pub fn resolve(&self, name: &str, overrides: &Overrides) -> Result<Profile, ConfigError> {
        let mut profile = self.profile(name)?;
        profile.apply(overrides);
        profile.validate(name)?;
        log::debug!("Using profile `{}`: {:?}", name, profile);
        Ok(profile)
    }
}
