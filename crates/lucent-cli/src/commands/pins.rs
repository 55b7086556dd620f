//! Supported GPIO pins.

use lucent_core::SUPPORTED_PINS;

pub fn run() -> anyhow::Result<()> {
    println!("Supported GPIO pins (BCM numbering):");
    for pin in SUPPORTED_PINS {
        println!("  {pin}");
    }
    Ok(())
}
