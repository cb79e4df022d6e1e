use std::collections::HashSet;

use crate::{
    error::RegistrationError,
    workload::{Workload, WorkloadResult},
};

/// Collects workloads before a run. Names are checked as they come in.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    workloads: Vec<Workload>,
    names: HashSet<String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        op: impl Fn() -> WorkloadResult + 'static,
    ) -> Result<&mut Self, RegistrationError> {
        self.add(Workload::new(name, op))
    }

    pub fn add(&mut self, workload: Workload) -> Result<&mut Self, RegistrationError> {
        if workload.name().is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        if !self.names.insert(workload.name().to_owned()) {
            return Err(RegistrationError::Duplicate(workload.name().to_owned()));
        }
        self.workloads.push(workload);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        log::debug!("Registry built with {} workloads", self.workloads.len());
        Registry {
            workloads: self.workloads,
        }
    }
}

/// The fixed, ordered set of workloads for one run.
#[derive(Debug, Default)]
pub struct Registry {
    workloads: Vec<Workload>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.workloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workloads.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Workload> {
        self.workloads.iter().find(|w| w.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.workloads.iter().map(|w| w.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workload> {
        self.workloads.iter()
    }

    /// Keep only the workloads whose name contains one of `patterns`.
    /// An empty pattern list keeps everything.
    pub fn filter<S: AsRef<str>>(self, patterns: &[S]) -> Registry {
        if patterns.is_empty() {
            return self;
        }
        let workloads = self
            .workloads
            .into_iter()
            .filter(|w| patterns.iter().any(|p| w.name().contains(p.as_ref())))
            .collect();
        Registry { workloads }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Workload;
    type IntoIter = std::slice::Iter<'a, Workload>;

    fn into_iter(self) -> Self::IntoIter {
        self.workloads.iter()
    }
}
