//! `levelfold` binary.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use levelfold_core::tracing_setup;
use levelfold_core::LevelfoldConfig;
use levelfold_factor::JsonWriter;
use tracing::{error, info};

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing_setup::init_tracing();
            error!(error = %format!("{e:#}"), "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing_setup::init_tracing_from_config(&config.observability);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "levelfold failed");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<LevelfoldConfig> {
    let mut config = match &cli.config {
        Some(path) => LevelfoldConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => LevelfoldConfig::default(),
    };
    if let Some(dir) = &cli.output_dir {
        config.export.output_dir = dir.display().to_string();
    }
    if cli.compact {
        config.export.pretty = false;
    }
    Ok(config)
}

fn run(cli: &Cli, config: &LevelfoldConfig) -> Result<()> {
    let writer = JsonWriter::new(&config.export);
    info!(dir = %writer.output_dir().display(), "writing documents");
    let written = match &cli.command {
        Commands::Factor { input, name } => commands::factor(config, &writer, input, name)?,
        Commands::Gems { input, name } => commands::gems(config, &writer, input, name)?,
    };
    for path in &written {
        info!(path = %path.display(), "wrote");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn global_flags_override_config() {
        let cli = Cli::try_parse_from([
            "levelfold",
            "gems",
            "--input",
            "in.json",
            "--output-dir",
            "out",
            "--compact",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.export.output_dir, "out");
        assert!(!config.export.pretty);
        assert!(matches!(cli.command, Commands::Gems { ref name, .. } if name == "gems"));
    }

    #[test]
    fn factor_defaults() {
        let cli = Cli::try_parse_from(["levelfold", "factor", "--input", "g.json"]).unwrap();
        match cli.command {
            Commands::Factor { input, name } => {
                assert_eq!(input, PathBuf::from("g.json"));
                assert_eq!(name, "factored");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn version_flag_reports_crate_version() {
        let err = Cli::try_parse_from(["levelfold", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert!(err.to_string().contains(levelfold_core::constants::VERSION));
    }

    #[test]
    fn missing_config_file_fails() {
        let cli = Cli::try_parse_from([
            "levelfold",
            "--config",
            "/nonexistent/levelfold.toml",
            "factor",
            "--input",
            "g.json",
        ])
        .unwrap();
        let err = load_config(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("not found"), "{err:#}");
    }
}
