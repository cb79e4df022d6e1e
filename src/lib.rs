pub mod cli;
pub mod config;
mod error;
mod registry;
mod report;
mod runner;
pub mod suites;
mod workload;

pub use error::{ConfigError, RegistrationError, RunError, WorkloadError};
pub use registry::{Registry, RegistryBuilder};
pub use report::{Reporter, SilentReporter, TextReporter};
pub use runner::{RunSummary, Runner};
pub use workload::{discard, repeat, Workload, WorkloadResult};
