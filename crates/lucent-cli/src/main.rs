//! Lucent CLI - Command-line interface for PWM light control.

mod commands;
mod progress;
mod sink;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lucent")]
#[command(author, version, about = "Lucent PWM light control", long_about = None)]
struct Cli {
    #[command(flatten)]
    globals: commands::common::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the light to a power level (0-100) immediately
    Set(commands::level::SetArgs),

    /// Switch the light fully on
    On(commands::level::PinArgs),

    /// Switch the light fully off
    Off(commands::level::PinArgs),

    /// Fade from off to fully on
    Up(commands::ramp::FadeArgs),

    /// Fade from fully on to off
    Down(commands::ramp::FadeArgs),

    /// Fade between two power levels
    Range(commands::ramp::RangeArgs),

    /// Full-range fade that lingers at the start, like a sunrise or sunset
    Fx(commands::ramp::FxArgs),

    /// Run a named lighting profile (dawn, sunrise, noon, sunset, dusk)
    Profile(commands::profile::ProfileArgs),

    /// List available profiles and their breakpoints
    Profiles,

    /// List supported GPIO pins
    Pins,

    /// Create, show and locate the config file
    Config(commands::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.globals.verbose > 0 { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // The engine has no cancellation; an interrupt leaves the light wherever
    // the last write put it.
    ctrlc::set_handler(|| {
        tracing::warn!("interrupted, output left at the last written level");
        std::process::exit(130);
    })?;

    match cli.command {
        Commands::Set(args) => commands::level::run_set(&cli.globals, args),
        Commands::On(args) => commands::level::run_on(&cli.globals, args),
        Commands::Off(args) => commands::level::run_off(&cli.globals, args),
        Commands::Up(args) => commands::ramp::run_up(&cli.globals, args),
        Commands::Down(args) => commands::ramp::run_down(&cli.globals, args),
        Commands::Range(args) => commands::ramp::run_range(&cli.globals, args),
        Commands::Fx(args) => commands::ramp::run_fx(&cli.globals, args),
        Commands::Profile(args) => commands::profile::run(&cli.globals, args),
        Commands::Profiles => commands::profile::run_list(),
        Commands::Pins => commands::pins::run(),
        Commands::Config(args) => commands::config::run(&cli.globals, args),
    }
}
