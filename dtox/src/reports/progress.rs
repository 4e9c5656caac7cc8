//! Progress lines printed while an export runs.

use dtox_codegen::Reporter;

/// Prints `[n/total] message` for every step.
#[derive(Debug, Default)]
pub struct TerminalProgress;

impl Reporter for TerminalProgress {
    fn step(&mut self, current: usize, total: usize, message: &str) {
        println!("[{}/{}] {}", current, total, message);
    }
}
