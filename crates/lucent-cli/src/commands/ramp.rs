//! Ramp commands: up, down, range and the sunrise/sunset effects.

use super::common::{GlobalArgs, Session, engine_error};
use clap::{Args, ValueEnum};

#[derive(Args)]
pub struct FadeArgs {
    /// GPIO pin (defaults to the configured default_pin)
    pub pin: Option<u8>,

    /// Fade duration in minutes (defaults to the configured default_duration)
    #[arg(short, long)]
    pub duration: Option<f64>,
}

#[derive(Args)]
pub struct RangeArgs {
    /// Starting power level in percent
    #[arg(allow_negative_numbers = true)]
    pub begin: f64,

    /// Final power level in percent
    #[arg(allow_negative_numbers = true)]
    pub end: f64,

    /// GPIO pin (defaults to the configured default_pin)
    pub pin: Option<u8>,

    /// Fade duration in minutes (defaults to the configured default_duration)
    pub minutes: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Effect {
    /// Off to full, slow at first
    Sunrise,
    /// Full to off, slow at first
    Sunset,
}

#[derive(Args)]
pub struct FxArgs {
    /// Effect to run
    #[arg(value_enum)]
    pub effect: Effect,

    /// GPIO pin (defaults to the configured default_pin)
    pub pin: Option<u8>,

    /// Effect duration in minutes (defaults to the configured default_duration)
    #[arg(short, long)]
    pub duration: Option<f64>,
}

pub fn run_up(globals: &GlobalArgs, args: FadeArgs) -> anyhow::Result<()> {
    let session = Session::load(globals)?;
    let duration = session.duration(args.duration)?;
    let mut engine = session.engine(session.pin(args.pin)?);
    engine.ramp_up(duration).map_err(engine_error)?;
    Ok(())
}

pub fn run_down(globals: &GlobalArgs, args: FadeArgs) -> anyhow::Result<()> {
    let session = Session::load(globals)?;
    let duration = session.duration(args.duration)?;
    let mut engine = session.engine(session.pin(args.pin)?);
    engine.ramp_down(duration).map_err(engine_error)?;
    Ok(())
}

pub fn run_range(globals: &GlobalArgs, args: RangeArgs) -> anyhow::Result<()> {
    let session = Session::load(globals)?;
    let duration = session.duration(args.minutes)?;
    let mut engine = session.engine(session.pin(args.pin)?);
    engine.modulate(args.begin, args.end, duration).map_err(engine_error)?;
    Ok(())
}

pub fn run_fx(globals: &GlobalArgs, args: FxArgs) -> anyhow::Result<()> {
    let session = Session::load(globals)?;
    let duration = session.duration(args.duration)?;
    let mut engine = session.engine(session.pin(args.pin)?);
    match args.effect {
        Effect::Sunrise => engine.sunrise(duration).map_err(engine_error)?,
        Effect::Sunset => engine.sunset(duration).map_err(engine_error)?,
    }
    Ok(())
}
