mod hue;
mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use hue::{HueColor, HueModel};
pub use utils::{hsl_to_rgb, hsv_to_rgb, step_toward};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Hue, saturation and lightness on 8-bit scales.
///
/// Hue is cyclic over `0..=255`, matching [`Hsv`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u8,
    pub sat: u8,
    pub lum: u8,
}

/// Black, the power-on output before the first update
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
