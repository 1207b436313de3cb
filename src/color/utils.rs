use crate::color::{Hsl, Hsv, Rgb};
use crate::math8::clip8;

/// Width of one hue region on the 0-255 wheel.
const HSV_REGION_WIDTH: u8 = 43;

/// Convert HSV to RGB using 8-bit integer math.
///
/// Six regions of 43 hue steps each; the remainder inside a region is scaled
/// by 6 and drives the `p`/`q`/`t` ramps. Truncation makes the output jitter
/// slightly at region boundaries while the hue is cycled.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { hue, sat, val } = hsv;
    if sat == 0 {
        return Rgb {
            r: val,
            g: val,
            b: val,
        };
    }

    let region = hue / HSV_REGION_WIDTH;
    let remainder = u16::from(hue - region * HSV_REGION_WIDTH) * 6;

    let v = u16::from(val);
    let s = u16::from(sat);
    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * remainder) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;

    let (r, g, b) = match region {
        0 => (val, t, p),
        1 => (q, val, p),
        2 => (p, val, t),
        3 => (p, q, val),
        4 => (t, p, val),
        _ => (val, p, q),
    };
    Rgb { r, g, b }
}

/// Convert HSL to RGB using integer math.
///
/// Lightness below 128 scales up by saturation, above it blends toward white.
/// Every channel is clipped into `0..=255`.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = i32::from(hsl.hue);
    let s = i32::from(hsl.sat);
    let l = i32::from(hsl.lum);

    let v = if l < 128 {
        (l * (256 + s)) >> 8
    } else {
        (((l + s) << 8) - l * s) >> 8
    };
    if v <= 0 {
        return Rgb { r: 0, g: 0, b: 0 };
    }

    let m = l + l - v;
    let h = h * 6;
    let sextant = h >> 8;
    let fract = h - (sextant << 8);
    let vsf = (v * fract * (v - m) / v) >> 8;
    let mid1 = m + vsf;
    let mid2 = v - vsf;

    let (r, g, b) = match sextant {
        0 => (v, mid1, m),
        1 => (mid2, v, m),
        2 => (m, v, mid1),
        3 => (m, mid2, v),
        4 => (mid1, m, v),
        _ => (v, m, mid2),
    };
    Rgb {
        r: clip8(r),
        g: clip8(g),
        b: clip8(b),
    }
}

/// Move `current` one unit toward `target`.
///
/// Returns `current` unchanged once both are equal.
pub const fn step_toward(current: u8, target: u8) -> u8 {
    if current < target {
        current + 1
    } else if current > target {
        current - 1
    } else {
        current
    }
}
