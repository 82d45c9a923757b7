//! Circular register buffer
//!
//! Fixed-capacity byte buffer that mirrors the display's shift register
//! history. The capture routine is the only writer; readers take whole
//! snapshot copies. On wraparound the oldest byte is overwritten with no
//! overflow signal - the buffer is a rolling window, not a queue.

/// Circular byte buffer with a wrapping write cursor
///
/// The write cursor always stays in `[0, N)`. Capacity is fixed at
/// construction and must be at least 1.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterBuffer<const N: usize> {
    /// Captured bytes, index 0 first
    bytes: [u8; N],
    /// Slot currently being written
    cursor: usize,
}

impl<const N: usize> Default for RegisterBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RegisterBuffer<N> {
    /// Create a zeroed buffer with the cursor at slot 0
    pub const fn new() -> Self {
        assert!(N >= 1, "register buffer capacity must be at least 1");
        Self {
            bytes: [0; N],
            cursor: 0,
        }
    }

    /// Shift the current byte left and set the low bit if `high`
    ///
    /// A ninth bit pushed into the same slot shifts the oldest bit out of
    /// the byte (u8 truncation).
    pub fn push_bit(&mut self, high: bool) {
        self.bytes[self.cursor] <<= 1;
        if high {
            self.bytes[self.cursor] |= 1;
        }
    }

    /// Move the write cursor forward one slot, wrapping to 0 at capacity
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % N;
    }

    /// Zero the byte at the write cursor
    pub fn reset_current(&mut self) {
        self.bytes[self.cursor] = 0;
    }

    /// Copy of the whole buffer
    ///
    /// The byte at the write cursor may belong to a frame still being
    /// accumulated; an under-filled byte keeps its high bits at 0 and is
    /// indistinguishable from a genuine zero pattern. Consumers must treat
    /// the cursor slot as partial.
    pub fn snapshot(&self) -> [u8; N] {
        self.bytes
    }

    /// Current write cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte at the write cursor
    pub fn current(&self) -> u8 {
        self.bytes[self.cursor]
    }

    /// Fixed capacity in bytes
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }
}
