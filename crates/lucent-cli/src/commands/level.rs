//! Immediate level commands: set, on, off.

use super::common::{GlobalArgs, Session, engine_error};
use clap::Args;

#[derive(Args)]
pub struct SetArgs {
    /// Power level in percent (0-100)
    #[arg(allow_negative_numbers = true)]
    pub percent: f64,

    /// GPIO pin (defaults to the configured default_pin)
    pub pin: Option<u8>,
}

#[derive(Args)]
pub struct PinArgs {
    /// GPIO pin (defaults to the configured default_pin)
    pub pin: Option<u8>,
}

pub fn run_set(globals: &GlobalArgs, args: SetArgs) -> anyhow::Result<()> {
    let session = Session::load(globals)?;
    let mut engine = session.engine(session.pin(args.pin)?);
    engine.set_immediate(args.percent).map_err(engine_error)?;
    Ok(())
}

pub fn run_on(globals: &GlobalArgs, args: PinArgs) -> anyhow::Result<()> {
    let session = Session::load(globals)?;
    let mut engine = session.engine(session.pin(args.pin)?);
    engine.on().map_err(engine_error)?;
    Ok(())
}

pub fn run_off(globals: &GlobalArgs, args: PinArgs) -> anyhow::Result<()> {
    let session = Session::load(globals)?;
    let mut engine = session.engine(session.pin(args.pin)?);
    engine.off().map_err(engine_error)?;
    Ok(())
}
