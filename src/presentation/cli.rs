//! Command-line interface definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::domain::policies::{AmbiguityPolicy, FeatureRedeclaration};

/// dmodel - compile domain models into Java classes
#[derive(Parser, Debug)]
#[command(name = "dmodel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./dmodel.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate Java classes from .dmodel files
    Generate {
        /// Source files; the first one names the output directory
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,

        /// Destination directory
        #[arg(short, long, value_name = "DEST")]
        destination: Option<PathBuf>,

        /// Suppress the success message
        #[arg(short, long)]
        quiet: bool,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Validate .dmodel files without writing anything
    Check {
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Print the compiled units as JSON
    Inspect {
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,
    },
}

impl Commands {
    pub fn is_quiet(&self) -> bool {
        matches!(self, Commands::Generate { quiet: true, .. })
    }
}

/// Resolution policy flags shared by every subcommand
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyArgs {
    /// Reject references that match declarations at several nesting levels
    #[arg(long, conflicts_with = "nearest")]
    pub strict: bool,

    /// Resolve shadowed references to the innermost declaration
    #[arg(long)]
    pub nearest: bool,

    /// Reject features that redeclare an inherited feature
    #[arg(long)]
    pub deny_redeclaration: bool,
}

impl PolicyArgs {
    /// Flags win over every configuration layer
    pub fn apply(&self, config: &mut Config) {
        if self.strict {
            config.resolution.ambiguity = AmbiguityPolicy::Strict;
        }
        if self.nearest {
            config.resolution.ambiguity = AmbiguityPolicy::Nearest;
        }
        if self.deny_redeclaration {
            config.inheritance.feature_redeclaration = FeatureRedeclaration::Deny;
        }
    }
}
