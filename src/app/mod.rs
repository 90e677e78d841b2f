//! Application runtime: terminal lifecycle, event loop, and background workers.

/// Runtime event loop and background workers.
pub mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{HEADLESS_ENV, run};
