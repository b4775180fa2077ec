//! Configuration module for dmodel
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DMODEL_*)
//! 3. `--config PATH`, or project config (`dmodel.toml`)
//! 4. User config (~/.config/dmodel/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{
    parse_with_warnings, user_config_path, with_overrides_from, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{
    ColorMode, Config, GenerateConfig, InheritanceConfig, OutputConfig, ResolutionConfig,
    Verbosity,
};
