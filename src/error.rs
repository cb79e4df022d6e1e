use std::path::PathBuf;

use thiserror::Error;

/// A failure raised from inside a workload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkloadError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("slice {start}..{end} out of range for length {len}")]
    SliceOutOfRange { start: usize, end: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("workload name must not be empty")]
    EmptyName,
    #[error("workload `{0}` is already registered")]
    Duplicate(String),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("workload `{name}` failed in iter {pass}")]
    Workload {
        name: String,
        pass: usize,
        #[source]
        source: WorkloadError,
    },
    #[error("failed to write progress")]
    Report(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file `{}`", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not find profile `{0}`")]
    UnknownProfile(String),
    #[error("profile `{0}` has a zero loop count")]
    InvalidLoopCount(String),
}
