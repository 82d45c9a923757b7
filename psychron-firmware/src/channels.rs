//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use psychron_core::model::ModelName;
use psychron_core::{StatusReport, REGISTER_LEN};

/// Channel capacity for model change requests
const MODEL_CHANNEL_SIZE: usize = 4;

/// Model change requests by name
///
/// Fed by whatever host integration exposes the model setter (cloud
/// function, serial console); the capture task applies them between edges.
pub static MODEL_NAME: Channel<CriticalSectionRawMutex, ModelName, MODEL_CHANNEL_SIZE> =
    Channel::new();

/// Numeric code returned by the most recent model change
pub static MODEL_CODE: Signal<CriticalSectionRawMutex, i32> = Signal::new();

/// Latest capture snapshot for the status publisher
pub static REGISTER_STATUS: Signal<CriticalSectionRawMutex, StatusReport<REGISTER_LEN>> =
    Signal::new();
