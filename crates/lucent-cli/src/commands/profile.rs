//! Named lighting profiles.

use super::common::{GlobalArgs, Session, engine_error};
use clap::Args;
use lucent_core::{Error, PROFILES, profile};

#[derive(Args)]
pub struct ProfileArgs {
    /// Profile name (see 'lucent profiles')
    pub name: String,

    /// GPIO pin (defaults to the configured default_pin)
    pub pin: Option<u8>,

    /// Total duration in minutes, shared equally by the profile's ramps
    pub minutes: Option<f64>,
}

pub fn run(globals: &GlobalArgs, args: ProfileArgs) -> anyhow::Result<()> {
    let session = Session::load(globals)?;
    let duration = session.duration(args.minutes)?;
    let mut engine = session.engine(session.pin(args.pin)?);
    engine
        .run_profile(&args.name, duration)
        .map_err(|err| match err {
            Error::UnknownProfile(_) => {
                let known: Vec<_> = profile::names().collect();
                anyhow::anyhow!("{err}. Available profiles: {}", known.join(", "))
            }
            err => engine_error(err),
        })?;
    Ok(())
}

pub fn run_list() -> anyhow::Result<()> {
    println!("Available Profiles");
    println!("==================\n");

    for profile in &PROFILES {
        let levels: Vec<String> = profile
            .breakpoints
            .iter()
            .map(|level| format!("{level}%"))
            .collect();
        println!("  {:<10} {}", profile.name, levels.join(" -> "));
    }

    println!("\nUsage: lucent profile <NAME> [PIN] [MINUTES]");
    Ok(())
}
