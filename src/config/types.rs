//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::{AmbiguityPolicy, BuiltinTypes, FeatureRedeclaration};
use crate::domain::services::CompileOptions;
use crate::error::DmodelResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Name resolution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionConfig {
    #[serde(default)]
    pub ambiguity: AmbiguityPolicy,

    /// Value types usable without a `datatype` declaration
    #[serde(default = "default_builtin_types")]
    pub builtin_types: Vec<String>,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            ambiguity: AmbiguityPolicy::default(),
            builtin_types: default_builtin_types(),
        }
    }
}

fn default_builtin_types() -> Vec<String> {
    BuiltinTypes::default().iter().map(str::to_string).collect()
}

/// Inheritance configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InheritanceConfig {
    #[serde(default)]
    pub feature_redeclaration: FeatureRedeclaration,
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            language: default_language(),
            parallel: true,
        }
    }
}

fn default_destination() -> PathBuf {
    PathBuf::from("generated")
}

fn default_language() -> String {
    "java".to_string()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether to style output, given the terminal and `NO_COLOR` state
    pub fn enabled(self, is_terminal: bool, no_color: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal && !no_color,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the configured level by the number of `-v` flags
    pub fn raised_by(self, count: u8) -> Self {
        match (self as u8).saturating_add(count) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resolution: ResolutionConfig,

    #[serde(default)]
    pub inheritance: InheritanceConfig,

    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DmodelResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DmodelResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file, project `dmodel.toml`, user config, or defaults; then env
    pub fn discover(explicit: Option<&Path>, project_root: &Path) -> DmodelResult<LoadedConfig> {
        loader::discover(explicit, project_root)
    }

    /// Apply environment variable overrides (DMODEL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Compiler policies selected by this configuration
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            ambiguity: self.resolution.ambiguity,
            feature_redeclaration: self.inheritance.feature_redeclaration,
            builtins: BuiltinTypes::new(self.resolution.builtin_types.iter().cloned()),
            parallel: self.generate.parallel,
        }
    }
}
