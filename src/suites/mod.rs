use clap::ValueEnum;
use serde::Deserialize;

use crate::{error::RegistrationError, registry::Registry};

pub mod arithmetic;
pub mod string;

/// Default number of times each workload repeats its operation per invocation.
pub const LOOP_COUNT: usize = 100_000;

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[clap(rename_all = "kebab_case")]
#[serde(rename_all = "kebab-case")]
pub enum Suite {
    Arithmetic,
    String,
}

impl Suite {
    pub const ALL: [Suite; 2] = [Suite::Arithmetic, Suite::String];

    pub fn name(self) -> &'static str {
        match self {
            Suite::Arithmetic => "arithmetic",
            Suite::String => "string",
        }
    }
}

/// Build one registry holding the workloads of every suite in `suites`, in order.
pub fn build_registry(suites: &[Suite], loop_count: usize) -> Result<Registry, RegistrationError> {
    let mut builder = Registry::builder();
    for suite in suites {
        log::debug!("Registering {} workloads", suite.name());
        match suite {
            Suite::Arithmetic => arithmetic::register(&mut builder, loop_count)?,
            Suite::String => string::register(&mut builder, loop_count)?,
        }
    }
    Ok(builder.build())
}
