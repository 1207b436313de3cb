#![no_std]

pub mod color;
pub mod controller;
pub mod engine;
pub mod line_buffer;
pub mod math8;
pub mod mode;
pub mod protocol;
pub mod random;
pub mod shared;
pub mod state;
pub mod storage;

pub use controller::{ControllerConfig, DEFAULT_TICK_PERIOD, LightController};
pub use engine::ColorEngine;
pub use line_buffer::LineBuffer;
pub use mode::ModeId;
pub use protocol::{Ack, Command, CommandError, Reply};
pub use random::{EntropySource, Mwc};
pub use shared::SharedController;
pub use state::{ChannelOffset, EngineState};
pub use storage::{Eeprom, PersistentStore, RamEeprom, RestoreOutcome};

pub use color::{HueColor, HueModel, Hsl, Hsv, Rgb};
pub use embassy_time::Duration;

/// Abstract light output
///
/// Implement this trait for the PWM channels of the target board.
/// The engine calls it once per color update.
pub trait OutputDriver {
    /// Write the channel levels; `white` is `Some` on four-channel boards
    fn write(&mut self, color: Rgb, white: Option<u8>);

    /// Flip the liveness indicator
    fn toggle_heartbeat(&mut self) {}
}
