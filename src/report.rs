use std::{io::Write, time::Duration};

/// Hooks called by the [`Runner`](crate::Runner) around passes and workloads.
///
/// All hooks default to doing nothing.
#[allow(unused)]
pub trait Reporter {
    fn pass_begin(&mut self, pass: usize) -> std::io::Result<()> {
        Ok(())
    }

    fn workload_begin(&mut self, name: &str) -> std::io::Result<()> {
        Ok(())
    }

    fn workload_end(&mut self, name: &str) -> std::io::Result<()> {
        Ok(())
    }

    fn pass_end(&mut self, pass: usize) -> std::io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, elapsed: Duration) -> std::io::Result<()> {
        Ok(())
    }
}

/// Reports nothing at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// Plain text progress lines.
///
/// With `progress` disabled only the final elapsed-time line is written.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
    progress: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            progress: true,
        }
    }

    pub fn summary_only(out: W) -> Self {
        Self {
            out,
            progress: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn pass_begin(&mut self, pass: usize) -> std::io::Result<()> {
        if self.progress {
            writeln!(self.out, "Start running iter {pass}")?;
        }
        Ok(())
    }

    fn workload_begin(&mut self, name: &str) -> std::io::Result<()> {
        if self.progress {
            writeln!(self.out, "Running {name}")?;
        }
        Ok(())
    }

    fn workload_end(&mut self, name: &str) -> std::io::Result<()> {
        if self.progress {
            writeln!(self.out, "Finish running {name}")?;
        }
        Ok(())
    }

    fn pass_end(&mut self, pass: usize) -> std::io::Result<()> {
        if self.progress {
            writeln!(self.out, "Finish running iter {pass}")?;
        }
        Ok(())
    }

    fn finish(&mut self, elapsed: Duration) -> std::io::Result<()> {
        writeln!(
            self.out,
            "Finish running all. Time: {:.3}s",
            elapsed.as_secs_f64()
        )?;
        self.out.flush()
    }
}
