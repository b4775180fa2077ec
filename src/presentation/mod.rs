//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, PolicyArgs};
pub use output::Console;
