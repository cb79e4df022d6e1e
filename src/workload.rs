use std::{fmt, hint::black_box};

use crate::error::WorkloadError;

pub type WorkloadResult = Result<(), WorkloadError>;

/// One timed operation: a name and a zero-argument callable.
pub struct Workload {
    name: String,
    op: Box<dyn Fn() -> WorkloadResult>,
}

impl Workload {
    pub fn new(name: impl Into<String>, op: impl Fn() -> WorkloadResult + 'static) -> Self {
        Self {
            name: name.into(),
            op: Box::new(op),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&self) -> WorkloadResult {
        (self.op)()
    }
}

impl fmt::Debug for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workload").field("name", &self.name).finish()
    }
}

/// Run `op` for `count` times. Every result goes through [`black_box`] and is dropped.
///
/// The first error stops the loop and is returned.
pub fn repeat<T>(
    count: usize,
    mut op: impl FnMut() -> Result<T, WorkloadError>,
) -> WorkloadResult {
    for _ in 0..count {
        black_box(op()?);
    }
    Ok(())
}

/// Consume a kernel result so the computation is not optimized away.
pub fn discard<T>(value: T) -> WorkloadResult {
    black_box(value);
    Ok(())
}
