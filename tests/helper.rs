#![allow(unused)]

use std::{cell::Cell, rc::Rc, time::Duration};

use clap::Parser;
use primbench::{cli::Cli, Registry, Reporter, WorkloadError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PassBegin(usize),
    WorkloadBegin(String),
    WorkloadEnd(String),
    PassEnd(usize),
    Finish,
}

/// Remembers every hook call in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<Event>,
    pub elapsed: Option<Duration>,
}

impl Reporter for RecordingReporter {
    fn pass_begin(&mut self, pass: usize) -> std::io::Result<()> {
        self.events.push(Event::PassBegin(pass));
        Ok(())
    }

    fn workload_begin(&mut self, name: &str) -> std::io::Result<()> {
        self.events.push(Event::WorkloadBegin(name.to_owned()));
        Ok(())
    }

    fn workload_end(&mut self, name: &str) -> std::io::Result<()> {
        self.events.push(Event::WorkloadEnd(name.to_owned()));
        Ok(())
    }

    fn pass_end(&mut self, pass: usize) -> std::io::Result<()> {
        self.events.push(Event::PassEnd(pass));
        Ok(())
    }

    fn finish(&mut self, elapsed: Duration) -> std::io::Result<()> {
        self.events.push(Event::Finish);
        self.elapsed = Some(elapsed);
        Ok(())
    }
}

/// A registry whose workloads only count how often they were invoked.
pub fn counting_registry(names: &[&str]) -> anyhow::Result<(Registry, Vec<Rc<Cell<usize>>>)> {
    let mut builder = Registry::builder();
    let mut counters = vec![];
    for name in names {
        let counter = Rc::new(Cell::new(0));
        let c = counter.clone();
        builder.register(*name, move || {
            c.set(c.get() + 1);
            Ok(())
        })?;
        counters.push(counter);
    }
    Ok((builder.build(), counters))
}

/// Like [`counting_registry`], but the workload called `failing` always errors.
pub fn failing_registry(
    names: &[&str],
    failing: &str,
) -> anyhow::Result<(Registry, Vec<Rc<Cell<usize>>>)> {
    let mut builder = Registry::builder();
    let mut counters = vec![];
    for name in names {
        let counter = Rc::new(Cell::new(0));
        let c = counter.clone();
        let fail = *name == failing;
        builder.register(*name, move || {
            c.set(c.get() + 1);
            if fail {
                Err(WorkloadError::DivisionByZero)
            } else {
                Ok(())
            }
        })?;
        counters.push(counter);
    }
    Ok((builder.build(), counters))
}

/// Parse `args` as a command line and run it, returning what it printed.
pub fn run_cli(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut out = Vec::new();
    cli.run(&mut out)?;
    Ok(String::from_utf8(out)?)
}
