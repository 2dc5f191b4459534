//! Solar sizer entry point: CLI wiring, config loading and report output.

mod cli;

use std::io;
use std::path::Path;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use solar_sizer::config::{ConfigError, SizerConfig};
use solar_sizer::scenario::Scenario;

use crate::cli::{Args, CalculateArgs, Command};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref());

    match args.command {
        Command::Calculate(calc) => calculate(&calc, &config),
        Command::Catalog => {
            print_catalog(&config);
            Ok(())
        }
        Command::Presets => {
            for name in Scenario::PRESETS {
                println!("{name}");
            }
            Ok(())
        }
        #[cfg(feature = "api")]
        Command::Serve(serve) => {
            use std::net::SocketAddr;
            use std::sync::Arc;

            let state = Arc::new(solar_sizer::api::AppState::new(config));
            let addr = SocketAddr::from(([0, 0, 0, 0], serve.port));
            let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
            rt.block_on(solar_sizer::api::serve(state, addr))
                .context("API server failed")
        }
        #[cfg(feature = "tui")]
        Command::Tui(tui) => {
            solar_sizer::tui::run(&tui.preset, config).context("TUI crashed")
        }
    }
}

/// Loads and validates the config, or the defaults when no path is given.
///
/// Exits with status 1 after printing every error.
fn load_config(path: Option<&Path>) -> SizerConfig {
    let config = match path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            SizerConfig::from_toml_file(path).unwrap_or_else(|e| fail(&[e]))
        }
        None => SizerConfig::default(),
    };
    let errors = config.validate();
    if !errors.is_empty() {
        fail(&errors);
    }
    config
}

fn calculate(args: &CalculateArgs, config: &SizerConfig) -> anyhow::Result<()> {
    // --scenario takes priority, then --preset, then the default preset
    let mut scenario = match &args.scenario {
        Some(path) => Scenario::from_toml_file(path),
        None => Scenario::from_preset(args.preset_name()),
    }
    .unwrap_or_else(|e| fail(&[e]));

    if let Some(project_type) = args.project_type {
        scenario.project.project_type = Some(project_type);
    }
    if let Some(description) = &args.description {
        scenario.project.other_description = Some(description.clone());
    }
    if args.mobile_chassis {
        scenario.project.needs_mobile_chassis = true;
    }

    let report = scenario.evaluate(config).unwrap_or_else(|errors| fail(&errors));
    debug!(station = %report.result.station_model, "calculated");

    match &args.out {
        Some(path) => {
            args.format
                .export(&report, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => args.format.write(&report, io::stdout().lock())?,
    }
    Ok(())
}

fn print_catalog(config: &SizerConfig) {
    println!(
        "{:<28} {:>8} {:>10} {:>8}",
        "Load", "Power W", "Peak W", "Hours"
    );
    for entry in config.catalog().iter() {
        println!(
            "{:<28} {:>8.0} {:>10.0} {:>8.1}",
            entry.name, entry.power_w, entry.peak_power_w, entry.usage_hours
        );
    }
}

/// Prints one line per error to stderr and exits with status 1.
fn fail(errors: &[ConfigError]) -> ! {
    for e in errors {
        eprintln!("{e}");
    }
    process::exit(1);
}
