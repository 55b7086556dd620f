//! Configuration file commands.
//!
//! Provides commands to create, show and locate the lucent config file.

use super::common::GlobalArgs;
use clap::{Args, Subcommand};
use lucent_config::{
    Config, ensure_user_config_dir, find_config, system_config_file, user_config_file,
};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a new config file (to --config, or the user config location)
    Init {
        /// Default GPIO pin
        #[arg(short, long)]
        pin: Option<u8>,

        /// Default duration in minutes
        #[arg(short, long)]
        duration: Option<f64>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration in effect as TOML
    Show,

    /// Show config file locations
    Paths,
}

pub fn run(globals: &GlobalArgs, args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Init {
            pin,
            duration,
            force,
        } => init_config(globals, pin, duration, force),
        ConfigCommand::Show => show_config(globals),
        ConfigCommand::Paths => show_paths(),
    }
}

fn init_config(
    globals: &GlobalArgs,
    pin: Option<u8>,
    duration: Option<f64>,
    force: bool,
) -> anyhow::Result<()> {
    let path = match &globals.config {
        Some(path) => path.clone(),
        None => {
            ensure_user_config_dir()?;
            user_config_file()
        }
    };

    if path.exists() && !force {
        anyhow::bail!(
            "Config file '{}' already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let mut config = Config::default();
    if let Some(device) = &globals.device {
        config = config.with_device(device.clone());
    }
    if let Some(pin) = pin {
        config = config.with_default_pin(pin);
    }
    if let Some(minutes) = duration {
        config = config.with_default_duration(minutes);
    }
    config.validate()?;
    config.save(&path)?;

    tracing::debug!(path = %path.display(), "config written");
    println!("Wrote config to {}", path.display());
    Ok(())
}

fn show_config(globals: &GlobalArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(globals.config.as_deref())?;
    if let Some(device) = &globals.device {
        config = config.with_device(device.clone());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}

fn show_paths() -> anyhow::Result<()> {
    println!("Config Locations");
    println!("================\n");
    println!("  User:   {}", user_config_file().display());
    println!("  System: {}", system_config_file().display());

    match find_config() {
        Some(path) => println!("\n  In use: {}", path.display()),
        None => println!("\n  In use: (none, built-in defaults)"),
    }
    Ok(())
}
