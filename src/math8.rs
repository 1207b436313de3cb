/// Clip a wide signed value into the 8-bit channel range
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clip8(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 0xff {
        0xff
    } else {
        value as u8
    }
}

/// Clip a wide signed value into `-limit..=limit`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn clip_signed(value: i32, limit: i8) -> i8 {
    let limit = limit as i32;
    if value < -limit {
        -limit as i8
    } else if value > limit {
        limit as i8
    } else {
        value as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip8_saturates_both_ends() {
        assert_eq!(clip8(-5), 0);
        assert_eq!(clip8(300), 255);
        assert_eq!(clip8(128), 128);
    }

    #[test]
    fn clip_signed_respects_limit() {
        assert_eq!(clip_signed(-120, 99), -99);
        assert_eq!(clip_signed(999, 99), 99);
        assert_eq!(clip_signed(-7, 99), -7);
    }
}
