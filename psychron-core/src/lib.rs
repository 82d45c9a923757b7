//! Board-agnostic core logic for the AC display reader firmware
//!
//! This crate contains all capture logic that does not depend on
//! specific hardware implementations:
//!
//! - Display model selection (V1_2 / V1_4)
//! - Circular register buffer for captured bytes
//! - Clock-edge sampler with gap-based frame detection
//! - Status report types and text rendering

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod buffer;
pub mod capture;
pub mod model;
pub mod report;

pub use buffer::RegisterBuffer;
pub use capture::{Capture, FRAME_GAP_US, REGISTER_LEN};
pub use model::AcModel;
pub use report::StatusReport;
