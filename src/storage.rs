//! Persistent state layout
//!
//! Fields are stored as single bytes at fixed offsets from a configurable
//! base address. There is no version byte and no checksum: the mode byte
//! doubles as the "ever saved" marker.
//!
//! | offset | field                         |
//! |--------|-------------------------------|
//! | 0      | mode                          |
//! | 1..=3  | current r, g, b               |
//! | 4..=6  | hue, saturation, value/lum    |
//! | 7..=9  | offset r, g, b (two's compl.) |
//! | 10     | wait ticks                    |
//! | 11..=13| bound r, g, b                 |
//! | 14     | white (4-channel boards only) |

use heapless::Vec;

use crate::color::{HueColor, Rgb};
use crate::math8::clip_signed;
use crate::mode::ModeId;
use crate::state::{ChannelOffset, EngineState, MAX_OFFSET};

/// Default base address of the record
pub const DEFAULT_BASE: u16 = 0x10;

/// Record length without the white channel
pub const RECORD_LEN: usize = 14;

/// Record length with the white channel
pub const RECORD_LEN_WHITE: usize = RECORD_LEN + 1;

/// Byte-addressed non-volatile memory.
///
/// Every access is assumed to succeed and each written byte is durable on
/// its own.
pub trait Eeprom {
    fn read_byte(&self, offset: u16) -> u8;

    fn write_byte(&mut self, offset: u16, value: u8);
}

/// Result of reading the record at boot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Every field was loaded from storage
    Restored,
    /// The mode byte was unset (or unknown); defaults were kept
    Unset,
}

/// Reads and writes [`EngineState`] at a fixed base address
#[derive(Debug, Clone, Copy)]
pub struct PersistentStore {
    base: u16,
}

impl Default for PersistentStore {
    fn default() -> Self {
        Self::new(DEFAULT_BASE)
    }
}

impl PersistentStore {
    pub const fn new(base: u16) -> Self {
        Self { base }
    }

    pub const fn base(&self) -> u16 {
        self.base
    }

    /// Write every persisted field, in layout order
    pub fn save_all<E: Eeprom>(&self, eeprom: &mut E, state: &EngineState) {
        let record = encode(state);
        let mut address = self.base;
        for &byte in &record {
            eeprom.write_byte(address, byte);
            address = address.wrapping_add(1);
        }

        #[cfg(feature = "esp32-log")]
        esp_println::println!("storage: saved {} bytes at {:#x}", record.len(), self.base);
    }

    /// Load every persisted field into `state`.
    ///
    /// Stops after the mode byte if it holds the unset marker or any code
    /// that is not a known mode (erased cells read back as `0xff`); `state`
    /// then keeps its compiled-in defaults. Offsets read back out of range
    /// are clipped to `-MAX_OFFSET..=MAX_OFFSET`.
    pub fn restore_all<E: Eeprom>(&self, eeprom: &E, state: &mut EngineState) -> RestoreOutcome {
        let raw_mode = eeprom.read_byte(self.base);
        let Some(mode) = ModeId::from_raw(raw_mode) else {
            #[cfg(feature = "esp32-log")]
            esp_println::println!("storage: no saved state (mode byte {})", raw_mode);
            return RestoreOutcome::Unset;
        };

        let mut address = self.base;
        let mut next = || {
            address = address.wrapping_add(1);
            eeprom.read_byte(address)
        };

        state.mode = mode;
        state.current = Rgb::new(next(), next(), next());
        state.hue = HueColor::new(next(), next(), next());
        let mut next_offset =
            || clip_signed(i32::from(i8::from_ne_bytes([next()])), MAX_OFFSET);
        state.offset = ChannelOffset::new(next_offset(), next_offset(), next_offset());
        state.wait_ticks = next();
        state.bound = Rgb::new(next(), next(), next());
        if state.white.is_some() {
            state.white = Some(next());
        }
        state.remaining_ticks = state.wait_ticks;

        RestoreOutcome::Restored
    }
}

/// Serialize the persisted fields in layout order
fn encode(state: &EngineState) -> Vec<u8, RECORD_LEN_WHITE> {
    let mut record = Vec::new();
    let fields = [
        state.mode.as_raw(),
        state.current.r,
        state.current.g,
        state.current.b,
        state.hue.hue,
        state.hue.sat,
        state.hue.level,
        state.offset.r.to_ne_bytes()[0],
        state.offset.g.to_ne_bytes()[0],
        state.offset.b.to_ne_bytes()[0],
        state.wait_ticks,
        state.bound.r,
        state.bound.g,
        state.bound.b,
    ];
    // Capacity covers the optional white byte, so these pushes cannot fail
    let _ = record.extend_from_slice(&fields);
    if let Some(white) = state.white {
        let _ = record.push(white);
    }
    record
}

/// In-memory [`Eeprom`] for hosts and tests.
///
/// Starts erased (`0xff`). Out-of-range reads return `0xff` and out-of-range
/// writes are dropped.
#[derive(Debug, Clone)]
pub struct RamEeprom<const N: usize> {
    cells: [u8; N],
}

impl<const N: usize> RamEeprom<N> {
    pub const ERASED: u8 = 0xff;

    pub const fn new() -> Self {
        Self {
            cells: [Self::ERASED; N],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }
}

impl<const N: usize> Default for RamEeprom<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Eeprom for RamEeprom<N> {
    fn read_byte(&self, offset: u16) -> u8 {
        self.cells
            .get(usize::from(offset))
            .copied()
            .unwrap_or(Self::ERASED)
    }

    fn write_byte(&mut self, offset: u16, value: u8) {
        if let Some(cell) = self.cells.get_mut(usize::from(offset)) {
            *cell = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_places_fields_at_fixed_offsets() {
        let mut state = EngineState::new(true);
        state.mode = ModeId::Fixed;
        state.current = Rgb::new(1, 2, 3);
        state.offset = ChannelOffset::new(-1, 0, 5);
        state.wait_ticks = 42;
        state.white = Some(77);

        let record = encode(&state);
        assert_eq!(record.len(), RECORD_LEN_WHITE);
        assert_eq!(record[0], 2);
        assert_eq!(&record[1..4], &[1, 2, 3]);
        assert_eq!(&record[7..10], &[0xff, 0, 5]);
        assert_eq!(record[10], 42);
        assert_eq!(record[14], 77);
    }
}
