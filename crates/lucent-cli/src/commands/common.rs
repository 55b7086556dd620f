//! Shared CLI helpers used across multiple commands.

use crate::progress::ProgressObserver;
use crate::sink::StdoutSink;
use clap::Args;
use lucent_config::Config;
use lucent_core::{
    Channel, DeviceFileSink, Minutes, ModulationEngine, Pacer, Percent, Pin, RecordingPacer, Sink,
    ThreadPacer,
};
use std::path::PathBuf;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// PWM device file (overrides the config file)
    #[arg(long, global = true)]
    pub device: Option<PathBuf>,

    /// Config file to load instead of the user/system locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print records to stdout instead of writing the device, without waiting
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Hide the progress bar
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Convert an engine failure for the command's exit.
///
/// Failures past validation may have stopped a ramp part way, so the light
/// is wherever the last successful write put it.
pub fn engine_error(err: lucent_core::Error) -> anyhow::Error {
    if !err.is_preflight() {
        tracing::warn!("output left at the last written level");
    }
    err.into()
}

/// Engine type driven by the CLI.
pub type CliEngine = ModulationEngine<Box<dyn Sink>, Box<dyn Pacer>, ProgressObserver>;

/// Resolved settings for one command invocation.
pub struct Session {
    config: Config,
    globals: GlobalArgs,
}

impl Session {
    /// Load the config named by `--config`, or the first one found on disk.
    pub fn load(globals: &GlobalArgs) -> anyhow::Result<Self> {
        let config = Config::load_or_default(globals.config.as_deref())?;
        Ok(Self {
            config,
            globals: globals.clone(),
        })
    }

    /// Device file to write, with `--device` taking precedence.
    pub fn device(&self) -> PathBuf {
        self.globals
            .device
            .clone()
            .unwrap_or_else(|| self.config.device.clone())
    }

    /// Pin given on the command line, or the configured default.
    pub fn pin(&self, arg: Option<u8>) -> anyhow::Result<Pin> {
        if let Some(id) = arg {
            return Ok(Pin::new(id)?);
        }
        self.config.default_pin()?.ok_or_else(|| {
            anyhow::anyhow!(
                "No GPIO pin given and no default_pin configured. Use 'lucent pins' to list pins."
            )
        })
    }

    /// Duration given on the command line, or the configured default.
    pub fn duration(&self, arg: Option<f64>) -> anyhow::Result<Minutes> {
        match arg {
            Some(minutes) => Ok(Minutes::new(minutes)?),
            None => Ok(self.config.default_duration()?),
        }
    }

    /// Build an engine for `pin`, starting from the off level.
    pub fn engine(&self, pin: Pin) -> CliEngine {
        let (sink, pacer): (Box<dyn Sink>, Box<dyn Pacer>) = if self.globals.dry_run {
            tracing::info!(%pin, "dry run, records go to stdout");
            (Box::new(StdoutSink), Box::new(RecordingPacer::new()))
        } else {
            let device = self.device();
            tracing::debug!(%pin, device = %device.display(), "opening channel");
            (Box::new(DeviceFileSink::new(device)), Box::new(ThreadPacer))
        };

        let channel = Channel::new(pin, sink, Percent::OFF);
        let observer = ProgressObserver::new(!self.globals.quiet && !self.globals.dry_run);
        ModulationEngine::with_parts(channel, pacer, observer)
    }
}
