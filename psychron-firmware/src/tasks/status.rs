//! Status publisher task
//!
//! Renders capture snapshots into human-readable status text: one compact
//! JSON line plus the raw register bytes as hex. These are the lines a host
//! integration would re-expose as readable variables.

use defmt::*;
use heapless::String;
use portable_atomic::Ordering;

use psychron_core::report::{write_register_hex, write_status};
use psychron_core::REGISTER_LEN;

use crate::channels::REGISTER_STATUS;
use crate::tasks::capture::EDGE_COUNT;

/// Status line capacity, sized for a 10-digit frame count
const STATUS_LEN: usize = 64;

/// Hex register line capacity: three characters per byte
const REGISTER_HEX_LEN: usize = REGISTER_LEN * 3;

/// Status task - logs each published snapshot
#[embassy_executor::task]
pub async fn status_task() {
    info!("Status task started");

    loop {
        let report = REGISTER_STATUS.wait().await;

        // Capacities cover the worst-case line lengths, so these writes
        // cannot truncate
        let mut status: String<STATUS_LEN> = String::new();
        let _ = write_status(&mut status, &report);
        let mut register: String<REGISTER_HEX_LEN> = String::new();
        let _ = write_register_hex(&mut register, &report.register);

        let edges = EDGE_COUNT.load(Ordering::Relaxed);
        info!("{} edges={}", status.as_str(), edges);
        info!("register: {}", register.as_str());
    }
}
