//! dmodel CLI - domain model to Java class compiler
//!
//! Usage: dmodel <COMMAND>
//!
//! Commands:
//!   generate  Generate Java classes from .dmodel files
//!   check     Validate .dmodel files without writing anything
//!   inspect   Print the compiled units as JSON

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dmodel::application::GenerateOptions;
use dmodel::config::{ColorMode, Config, Verbosity};
use dmodel::presentation::factory::{create_check_use_case, create_generate_use_case};
use dmodel::presentation::output::{self, Console};
use dmodel::presentation::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;
    let mut color = ColorMode::default();

    match run(cli, &mut color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json {
                println!("{}", output::json_error(&err));
            } else {
                let console = Console::stderr(color);
                eprintln!("{}", output::error_line(&console, &err));
            }
            ExitCode::FAILURE
        }
    }
}

/// `color` receives the configured mode as soon as it is known
fn run(cli: Cli, color: &mut ColorMode) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let loaded = Config::discover(cli.config.as_deref(), &cwd)?;
    let mut config = loaded.config;
    *color = config.output.color;

    let verbosity = if cli.command.is_quiet() {
        Verbosity::Quiet
    } else {
        config.output.verbosity.raised_by(cli.verbose)
    };
    init_tracing(verbosity);

    let err_console = Console::stderr(config.output.color);
    for warning in &loaded.warnings {
        eprintln!("{}", output::config_warning(&err_console, warning));
    }
    if let Some(source) = &loaded.source {
        tracing::debug!(config = %source.display(), "configuration loaded");
    }

    let console = Console::stdout(config.output.color);

    match cli.command {
        Commands::Generate {
            files,
            destination,
            quiet,
            policy,
        } => {
            policy.apply(&mut config);
            if let Some(destination) = destination {
                config.generate.destination = destination;
            }

            let options = GenerateOptions::new(files)
                .with_destination(config.generate.destination.clone())
                .with_compile_options(config.compile_options());
            let result = create_generate_use_case(&config.generate.language)?.execute(&options)?;

            if cli.json {
                println!("{}", output::json_event("generate", &result)?);
            } else if !quiet {
                println!("{}", output::generate_summary(&console, &result));
            }
        }
        Commands::Check { files, policy } => {
            policy.apply(&mut config);
            let report = create_check_use_case().execute(&files, &config.compile_options())?;

            if cli.json {
                println!("{}", output::json_event("check", &report)?);
            } else {
                println!("{}", output::check_summary(&console, &report));
            }
        }
        Commands::Inspect { files, policy } => {
            policy.apply(&mut config);
            let compiled = create_check_use_case().inspect(&files, &config.compile_options())?;
            println!("{}", serde_json::to_string_pretty(&compiled)?);
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured verbosity
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
