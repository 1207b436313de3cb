//! Runtime light state shared by the tick and command handlers

use crate::color::{BLACK, HueColor, Rgb};
use crate::mode::ModeId;

/// Ticks between color updates after boot
pub const DEFAULT_WAIT_TICKS: u8 = 100;
/// Saturation the hue fade starts with
pub const DEFAULT_SATURATION: u8 = 254;
/// Value (or lightness) the hue fade starts with
pub const DEFAULT_LEVEL: u8 = 255;
/// Random draw ceiling per channel
pub const DEFAULT_BOUND: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
/// Largest magnitude accepted for a channel offset
pub const MAX_OFFSET: i8 = 99;

/// Signed per-channel bias added to random targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelOffset {
    pub r: i8,
    pub g: i8,
    pub b: i8,
}

impl ChannelOffset {
    pub const fn new(r: i8, g: i8, b: i8) -> Self {
        Self { r, g, b }
    }
}

/// Light output state.
///
/// `target` is only meaningful while [`ModeId::RandomFade`] is active.
/// `white` is `Some` only when the hardware has a fourth channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    pub mode: ModeId,
    pub current: Rgb,
    pub target: Rgb,
    pub hue: HueColor,
    pub offset: ChannelOffset,
    pub bound: Rgb,
    pub wait_ticks: u8,
    pub remaining_ticks: u8,
    pub autosave: bool,
    pub white: Option<u8>,
}

impl EngineState {
    /// Compiled-in defaults used until a persisted state is restored
    pub const fn new(white_channel: bool) -> Self {
        Self {
            mode: ModeId::HueFade,
            current: BLACK,
            target: BLACK,
            hue: HueColor::new(0, DEFAULT_SATURATION, DEFAULT_LEVEL),
            offset: ChannelOffset::new(0, 0, 0),
            bound: DEFAULT_BOUND,
            wait_ticks: DEFAULT_WAIT_TICKS,
            remaining_ticks: DEFAULT_WAIT_TICKS,
            autosave: true,
            white: if white_channel { Some(0) } else { None },
        }
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new(false)
    }
}
