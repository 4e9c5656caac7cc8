//! Progress reporting for export runs.

/// Receives progress of an export run.
pub trait Reporter {
    /// Called before each step, `current` counting from 1 up to `total`.
    fn step(&mut self, current: usize, total: usize, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn step(&mut self, current: usize, total: usize, message: &str) {
        (**self).step(current, total, message)
    }
}

/// Ignores all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn step(&mut self, _current: usize, _total: usize, _message: &str) {}
}
