//! Color modes advanced by the tick handler
//!
//! Each fading mode is a step function over the engine registers; the fixed
//! mode has no step and only holds the last color written to it.

mod hue_fade;
mod random_fade;

pub use hue_fade::step_hue_fade;
pub use random_fade::step_random_fade;

const MODE_NAME_RANDOM_FADE: &str = "random_fade";
const MODE_NAME_FIXED: &str = "fixed";
const MODE_NAME_HUE_FADE: &str = "hue_fade";

/// Raw code stored when no state has been persisted yet
pub const MODE_ID_UNSET: u8 = 0;
const MODE_ID_RANDOM_FADE: u8 = 1;
const MODE_ID_FIXED: u8 = 2;
const MODE_ID_HUE_FADE: u8 = 3;

/// Known mode ids that can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    /// Per-channel fade toward independently drawn random targets
    RandomFade = MODE_ID_RANDOM_FADE,
    /// Hold a directly set color
    Fixed = MODE_ID_FIXED,
    /// Rotate the hue through the active hue model
    #[default]
    HueFade = MODE_ID_HUE_FADE,
}

impl ModeId {
    /// Decode a raw mode code.
    ///
    /// Returns `None` for [`MODE_ID_UNSET`] and any unknown code.
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_RANDOM_FADE => Self::RandomFade,
            MODE_ID_FIXED => Self::Fixed,
            MODE_ID_HUE_FADE => Self::HueFade,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RandomFade => MODE_NAME_RANDOM_FADE,
            Self::Fixed => MODE_NAME_FIXED,
            Self::HueFade => MODE_NAME_HUE_FADE,
        }
    }
}
