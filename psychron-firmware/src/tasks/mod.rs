//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod capture;
pub mod status;

pub use capture::capture_task;
pub use status::status_task;
