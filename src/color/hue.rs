//! Hue model selection for the fading mode
//!
//! Exactly one model is active per controller. Both share the same three
//! persisted bytes, only the interpretation of the third one differs.

use crate::color::{Hsl, Hsv, Rgb, hsl_to_rgb, hsv_to_rgb};

/// Color model the hue fade renders through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HueModel {
    /// Hue, saturation, value
    #[default]
    Hsv,
    /// Hue, saturation, lightness
    Hsl,
}

impl HueModel {
    /// Protocol token that sets the full hue triple for this model
    pub const fn set_token(self) -> &'static str {
        match self {
            Self::Hsv => "SHSV:",
            Self::Hsl => "SHSL:",
        }
    }

    /// Short label used in status output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hsv => "hsv",
            Self::Hsl => "hsl",
        }
    }
}

/// Hue triple driving the fade mode.
///
/// `level` is the value under [`HueModel::Hsv`] and the lightness under
/// [`HueModel::Hsl`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HueColor {
    pub hue: u8,
    pub sat: u8,
    pub level: u8,
}

impl HueColor {
    pub const fn new(hue: u8, sat: u8, level: u8) -> Self {
        Self { hue, sat, level }
    }

    /// Advance the hue by one step, wrapping after a full rotation
    pub const fn rotate(&mut self) {
        self.hue = self.hue.wrapping_add(1);
    }

    /// Render the triple through the given model
    pub fn to_rgb(self, model: HueModel) -> Rgb {
        match model {
            HueModel::Hsv => hsv_to_rgb(Hsv {
                hue: self.hue,
                sat: self.sat,
                val: self.level,
            }),
            HueModel::Hsl => hsl_to_rgb(Hsl {
                hue: self.hue,
                sat: self.sat,
                lum: self.level,
            }),
        }
    }
}
