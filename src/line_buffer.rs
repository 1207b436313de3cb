//! Receive-side line framing
//!
//! Collects bytes from the UART until a line terminator arrives or the
//! buffer is full, mirroring the serial driver's fixed receive buffer.

use heapless::Vec;

/// Receive buffer size including the terminator slot
pub const LINE_CAPACITY: usize = 16;

/// Byte-at-a-time line assembler
#[derive(Debug, Default)]
pub struct LineBuffer<const N: usize = LINE_CAPACITY> {
    bytes: Vec<u8, N>,
    complete: bool,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            complete: false,
        }
    }

    /// Feed one received byte.
    ///
    /// Returns the completed line (without its terminator) on `\r`, `\n`, or
    /// once `N - 1` bytes are buffered. Empty lines, such as the second half
    /// of a `\r\n` pair, are swallowed.
    pub fn push(&mut self, byte: u8) -> Option<&[u8]> {
        if self.complete {
            self.bytes.clear();
            self.complete = false;
        }

        let terminator = matches!(byte, b'\r' | b'\n');
        if !terminator {
            let _ = self.bytes.push(byte);
        }

        let full = self.bytes.len() >= N.saturating_sub(1).max(1);
        if (terminator && !self.bytes.is_empty()) || full {
            self.complete = true;
            return Some(&self.bytes);
        }
        None
    }

    /// Drop any partially received line
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.complete = false;
    }
}
