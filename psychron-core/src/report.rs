//! Status reporting
//!
//! Read model for the status publisher. The capture task snapshots its
//! state into a [`StatusReport`] between edge events; the publisher renders
//! it into caller-supplied buffers. Rendering never allocates, so the same
//! helpers serve firmware log lines and host-side tests alike.

use core::fmt::{self, Write};

use crate::model::AcModel;

/// Snapshot of capture state for the status publisher
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport<const N: usize> {
    /// Selected display model
    pub model: AcModel,
    /// Register bytes (the cursor slot may be a partial frame)
    pub register: [u8; N],
    /// Write cursor at snapshot time
    pub cursor: usize,
    /// Frames begun since startup
    pub frames: u32,
}

/// Render a status line as a compact JSON object
///
/// Layout: `{"model":"V1_4","code":14,"frames":12,"cursor":3}`
pub fn write_status<W: Write, const N: usize>(
    out: &mut W,
    report: &StatusReport<N>,
) -> fmt::Result {
    write!(
        out,
        "{{\"model\":\"{}\",\"code\":{},\"frames\":{},\"cursor\":{}}}",
        report.model.name(),
        report.model.code(),
        report.frames,
        report.cursor,
    )
}

/// Render register bytes as space-separated uppercase hex pairs
///
/// Three output characters per byte except the last, e.g. `00 FF 0A`.
pub fn write_register_hex<W: Write>(out: &mut W, register: &[u8]) -> fmt::Result {
    for (i, byte) in register.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{:02X}", byte)?;
    }
    Ok(())
}
