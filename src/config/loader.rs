//! Configuration loading
//!
//! Picks the first config file that exists (explicit `--config`, project
//! `dmodel.toml`, user `config.toml`), then applies `DMODEL_*` overrides.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::policies::{AmbiguityPolicy, FeatureRedeclaration};
use crate::domain::ports::FsError;
use crate::error::{DmodelError, DmodelResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "dmodel.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        write!(f, ": unknown config key '{}'", self.key)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DmodelResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| DmodelError::Read {
        file: path.to_path_buf(),
        source: FsError::from_io(path, e),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `path` is only used for diagnostics
pub fn parse_with_warnings(content: &str, path: &Path) -> DmodelResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DmodelError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for a run rooted at `project_root`
///
/// An explicit path must exist. Otherwise the project file and then the user
/// file are tried; a file that exists but fails to parse is an error.
pub fn discover(explicit: Option<&Path>, project_root: &Path) -> DmodelResult<LoadedConfig> {
    let candidates: Vec<PathBuf> = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => std::iter::once(project_root.join(PROJECT_CONFIG_FILE))
            .chain(user_config_path())
            .filter(|path| path.is_file())
            .collect(),
    };

    let loaded = match candidates.into_iter().next() {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => LoadedConfig {
            config: Config::default(),
            source: None,
            warnings: Vec::new(),
        },
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

/// Apply environment variable overrides (DMODEL_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`; invalid values warn and are ignored
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("DMODEL_AMBIGUITY") {
        config.resolution.ambiguity = EnvVarValidator::new(
            "DMODEL_AMBIGUITY",
            &["strict", "nearest"],
        )
        .parse(
            &value,
            |s| match s.to_lowercase().as_str() {
                "strict" => Some(AmbiguityPolicy::Strict),
                "nearest" => Some(AmbiguityPolicy::Nearest),
                _ => None,
            },
            config.resolution.ambiguity,
        );
    }

    if let Some(value) = lookup("DMODEL_FEATURE_REDECLARATION") {
        config.inheritance.feature_redeclaration = EnvVarValidator::new(
            "DMODEL_FEATURE_REDECLARATION",
            &["allow", "deny"],
        )
        .parse(
            &value,
            |s| match s.to_lowercase().as_str() {
                "allow" => Some(FeatureRedeclaration::Allow),
                "deny" => Some(FeatureRedeclaration::Deny),
                _ => None,
            },
            config.inheritance.feature_redeclaration,
        );
    }

    if let Some(value) = lookup("DMODEL_DESTINATION") {
        if !value.trim().is_empty() {
            config.generate.destination = PathBuf::from(value);
        }
    }

    if let Some(value) = lookup("DMODEL_VERBOSITY") {
        config.output.verbosity = EnvVarValidator::new(
            "DMODEL_VERBOSITY",
            &["quiet", "normal", "verbose", "debug"],
        )
        .parse(
            &value,
            |s| match s.to_lowercase().as_str() {
                "quiet" => Some(Verbosity::Quiet),
                "normal" => Some(Verbosity::Normal),
                "verbose" => Some(Verbosity::Verbose),
                "debug" => Some(Verbosity::Debug),
                _ => None,
            },
            config.output.verbosity,
        );
    }

    config
}

/// `$XDG_CONFIG_HOME/dmodel/config.toml`, falling back to `~/.config`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .map(|dir| dir.join("dmodel").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "resolution",
        "ambiguity",
        "builtin_types",
        "inheritance",
        "feature_redeclaration",
        "generate",
        "destination",
        "language",
        "parallel",
        "output",
        "verbosity",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
