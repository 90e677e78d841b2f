//! Command-line argument parsing and handling.

pub mod definition;
pub mod search;
pub mod utils;

pub use definition::{Args, apply_overrides};
pub use search::handle_search;
pub use utils::determine_log_level;
