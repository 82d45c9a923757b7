//! Clock-edge sampler with gap-based frame detection
//!
//! The display controller shifts register bytes out in tight bursts: eight
//! clock pulses a few hundred microseconds apart, then a long idle before
//! the next byte. There is no framing protocol on the wire, so byte
//! boundaries are inferred purely from elapsed time: an edge arriving long
//! after the current frame began must belong to a new byte.
//!
//! [`Capture`] consolidates everything the edge routine touches into one
//! owned context. A single task owns it and calls [`Capture::on_clock_edge`]
//! once per rising edge; invocations never overlap.

use crate::buffer::RegisterBuffer;
use crate::model::AcModel;
use crate::report::StatusReport;

/// Register length of the supported display controllers (bytes)
pub const REGISTER_LEN: usize = 16;

/// Frame gap threshold in microseconds
///
/// An edge whose elapsed time since the current frame's first edge strictly
/// exceeds this value starts a new frame. The threshold bounds the whole
/// burst length of one byte, not the spacing between adjacent edges.
/// Critical tuning parameter: too low splits bytes, too high merges them.
pub const FRAME_GAP_US: u64 = 1_000;

/// Clock-edge capture context
///
/// Owns the register buffer, the frame timer, and the model selection.
/// Single-writer: the owning task serializes edge handling, model changes,
/// and snapshots, so no locking is needed.
#[derive(Debug, Clone)]
pub struct Capture<const N: usize> {
    /// Captured register bytes
    buffer: RegisterBuffer<N>,
    /// First-edge timestamp of the current frame (µs); None before any edge
    cycle_start_us: Option<u64>,
    /// Elapsed time above which an edge opens a new frame (µs)
    frame_gap_us: u64,
    /// Frames begun since startup (saturating)
    frames: u32,
    /// Active display model
    model: AcModel,
}

impl<const N: usize> Default for Capture<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Capture<N> {
    /// Create a capture context with the default frame gap threshold
    pub const fn new() -> Self {
        Self::with_frame_gap(FRAME_GAP_US)
    }

    /// Create a capture context with a specific frame gap threshold (µs)
    pub const fn with_frame_gap(frame_gap_us: u64) -> Self {
        Self {
            buffer: RegisterBuffer::new(),
            cycle_start_us: None,
            frame_gap_us,
            frames: 0,
            model: AcModel::V14,
        }
    }

    /// Handle one rising edge of the display clock line.
    ///
    /// The caller samples the monotonic timestamp and the data line level at
    /// edge delivery and passes both in; the routine itself performs no I/O.
    /// Must be invoked exactly once per rising edge, in order.
    ///
    /// Elapsed time is measured from the current frame's first edge, not
    /// from the previous edge. An edge with elapsed strictly greater than
    /// the gap threshold (or the first edge ever) begins a new frame:
    /// the cursor advances (first frame excepted), the frame timer restarts
    /// and the slot is zeroed, discarding any partial bits a stale frame
    /// left there. Every edge then shifts the sampled level into the
    /// current byte.
    ///
    /// Total: no return value, no error path. A frame cut short by the gap
    /// leaves its high bits at 0, indistinguishable from leading zero data;
    /// consumers of the buffer must treat the cursor byte as ambiguous.
    pub fn on_clock_edge(&mut self, now_us: u64, data_high: bool) {
        let new_frame = match self.cycle_start_us {
            None => true,
            Some(start_us) => now_us.saturating_sub(start_us) > self.frame_gap_us,
        };

        if new_frame {
            // The first frame ever accumulates into slot 0 where the
            // cursor already rests; only later frames claim the next slot.
            if self.cycle_start_us.is_some() {
                self.buffer.advance();
            }
            self.cycle_start_us = Some(now_us);
            self.buffer.reset_current();
            self.frames = self.frames.saturating_add(1);
        }

        self.buffer.push_bit(data_high);
    }

    /// Select the display model by name, returning its numeric code.
    ///
    /// Unrecognized names silently select V1_4 (code 14). Model selection
    /// is independent of capture state: switching mid-frame does not
    /// disturb the buffer or retag already-captured bytes.
    pub fn set_model(&mut self, name: &str) -> i32 {
        self.model = AcModel::from_name(name);
        self.model.code()
    }

    /// Currently selected display model
    pub fn model(&self) -> AcModel {
        self.model
    }

    /// Copy of the register buffer (cursor byte may be partial)
    pub fn snapshot(&self) -> [u8; N] {
        self.buffer.snapshot()
    }

    /// Current write cursor position
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Number of frames begun since startup
    pub fn frame_count(&self) -> u32 {
        self.frames
    }

    /// Configured frame gap threshold (µs)
    pub fn frame_gap_us(&self) -> u64 {
        self.frame_gap_us
    }

    /// Snapshot everything the status publisher needs
    pub fn report(&self) -> StatusReport<N> {
        StatusReport {
            model: self.model,
            register: self.buffer.snapshot(),
            cursor: self.buffer.cursor(),
            frames: self.frames,
        }
    }
}
