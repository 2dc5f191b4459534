use std::path::PathBuf;

use clap::{Parser, Subcommand};

use solar_sizer::project::ProjectType;
use solar_sizer::report::OutputFormat;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Calculator config file (constants, extra catalog loads, contacts).
    #[clap(long, global = true, env = "SOLAR_SIZER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Size a power station for a scenario file or preset.
    #[clap(name = "calculate")]
    Calculate(CalculateArgs),

    /// List the load catalog with default attributes.
    #[clap(name = "catalog")]
    Catalog,

    /// List the built-in scenario presets.
    #[clap(name = "presets")]
    Presets,

    /// Serve the REST API.
    #[cfg(feature = "api")]
    #[clap(name = "serve")]
    Serve(ServeArgs),

    /// Open the interactive form.
    #[cfg(feature = "tui")]
    #[clap(name = "tui")]
    Tui(TuiArgs),
}

#[derive(Parser)]
pub struct CalculateArgs {
    /// Scenario TOML file.
    #[clap(long, conflicts_with = "preset")]
    pub scenario: Option<PathBuf>,

    /// Built-in preset name, used when no scenario file is given.
    #[clap(long)]
    pub preset: Option<String>,

    /// Override the project category (domestic, commercial, condominium,
    /// outdoor, enterprise or other).
    #[clap(long)]
    pub project_type: Option<ProjectType>,

    /// Description for `--project-type other`.
    #[clap(long)]
    pub description: Option<String>,

    /// Force the mobile-chassis battery rule on.
    #[clap(long)]
    pub mobile_chassis: bool,

    /// Output format: text, json or csv.
    #[clap(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout.
    #[clap(long)]
    pub out: Option<PathBuf>,
}

impl CalculateArgs {
    pub const DEFAULT_PRESET: &str = "weekend_cabin";

    /// The preset to load when no scenario file is given.
    pub fn preset_name(&self) -> &str {
        self.preset.as_deref().unwrap_or(Self::DEFAULT_PRESET)
    }
}

#[cfg(feature = "api")]
#[derive(Parser)]
pub struct ServeArgs {
    /// Port to listen on.
    #[clap(long, default_value = "3000", env = "SOLAR_SIZER_PORT")]
    pub port: u16,
}

#[cfg(feature = "tui")]
#[derive(Parser)]
pub struct TuiArgs {
    /// Preset to fill the form with.
    #[clap(long, default_value = "empty")]
    pub preset: String,
}
