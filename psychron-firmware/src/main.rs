//! Psychron - AC Display Register Reader Firmware
//!
//! Main firmware binary for RP2040-based boards. Sniffs the clock/data
//! pair feeding an AC unit's multiplexed display shift register and
//! reconstructs the register bytes from edge timing alone.
//!
//! Named after the Greek "psychros" (cold) and "chronos" (time) -
//! the display state is recovered purely from when the clock line moves.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use {defmt_rtt as _, panic_probe as _};

mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Psychron firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Display bus inputs, driven push-pull by the AC controller, so no
    // pull resistors. GPIO14 = shift clock, GPIO15 = serial data.
    let clock = Input::new(p.PIN_14, Pull::None);
    let data = Input::new(p.PIN_15, Pull::None);
    info!("Display bus pins initialized");

    // Spawn tasks
    spawner.spawn(tasks::capture_task(clock, data)).unwrap();
    spawner.spawn(tasks::status_task()).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
