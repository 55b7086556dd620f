//! CLI command implementations.

pub mod common;
pub mod config;
pub mod level;
pub mod pins;
pub mod profile;
pub mod ramp;
