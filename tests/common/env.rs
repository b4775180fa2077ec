//! Isolated test environment for running the dmodel binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a dmodel CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Project directory plus a private config home, so the user's own
/// `~/.config/dmodel/config.toml` and `DMODEL_*` variables never leak in.
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            config_home: TempDir::new().expect("create config dir"),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file relative to the project root
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, content: &str) {
        let dir = self.config_home.path().join("dmodel");
        fs::create_dir_all(&dir).expect("create user config dir");
        fs::write(dir.join("config.toml"), content).expect("write user config");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("read {}: {}", relative, e))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project_path(relative).exists()
    }

    /// Sorted entry names of a directory under the project root
    pub fn list(&self, relative: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.project_path(relative))
            .unwrap_or_else(|e| panic!("list {}: {}", relative, e))
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = dmodel_command(self.project_root.path(), self.config_home.path());
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("run dmodel");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

fn dmodel_command(cwd: &Path, config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dmodel"));
    cmd.current_dir(cwd)
        .env("XDG_CONFIG_HOME", config_home)
        .env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .env_remove("RUST_LOG")
        .env_remove("DMODEL_AMBIGUITY")
        .env_remove("DMODEL_FEATURE_REDECLARATION")
        .env_remove("DMODEL_DESTINATION")
        .env_remove("DMODEL_VERBOSITY");
    cmd
}
