//! Clock-edge capture task
//!
//! Single owner of the capture context and the two display bus inputs.
//! Samples the data line on every rising clock edge, applies model change
//! requests, and publishes periodic snapshots for the status task. Because
//! one task serializes all three, edge handling never overlaps a model
//! change or a snapshot and the context needs no locking.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Ticker};
use portable_atomic::{AtomicU32, Ordering};

use psychron_core::{Capture, REGISTER_LEN};

use crate::channels::{MODEL_CODE, MODEL_NAME, REGISTER_STATUS};

/// Snapshot publish interval in milliseconds
pub const STATUS_INTERVAL_MS: u64 = 1_000;

/// Rising edges sampled since boot (diagnostics)
pub static EDGE_COUNT: AtomicU32 = AtomicU32::new(0);

/// Capture task
///
/// An edge arriving while a model change or snapshot is being serviced is
/// not sampled; at display bus clock rates the next frame recovers.
#[embassy_executor::task]
pub async fn capture_task(mut clock: Input<'static>, data: Input<'static>) {
    info!("Capture task started");

    let mut capture: Capture<REGISTER_LEN> = Capture::new();
    let mut ticker = Ticker::every(Duration::from_millis(STATUS_INTERVAL_MS));

    loop {
        match select3(
            clock.wait_for_rising_edge(),
            MODEL_NAME.receive(),
            ticker.next(),
        )
        .await
        {
            Either3::First(()) => {
                // Sample the timestamp and data level as close to the edge
                // as possible
                let now_us = Instant::now().as_micros();
                capture.on_clock_edge(now_us, data.is_high());
                EDGE_COUNT.fetch_add(1, Ordering::Relaxed);
            }
            Either3::Second(name) => {
                let code = capture.set_model(name.as_str());
                info!("Model set to {} (code {})", capture.model().name(), code);
                MODEL_CODE.signal(code);
            }
            Either3::Third(()) => {
                REGISTER_STATUS.signal(capture.report());
            }
        }
    }
}
