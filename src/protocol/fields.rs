//! Fixed-width decimal field reader
//!
//! Every field occupies a fixed number of characters. The cursor always
//! advances by the full width, whatever was actually consumed, so a short or
//! garbled field shifts nothing after it. Characters that are not part of a
//! leading `[+-]?[0-9]*` prefix are ignored and the field is counted as
//! malformed; a field without digits reads as zero.

use crate::math8::{clip8, clip_signed};

/// Width of a regular numeric field
pub(crate) const FIELD_WIDTH: usize = 3;

/// Width of a single-digit flag field
pub(crate) const FLAG_WIDTH: usize = 1;

pub(crate) struct FieldReader<'a> {
    rest: &'a [u8],
    malformed: u8,
}

impl<'a> FieldReader<'a> {
    pub(crate) const fn new(params: &'a [u8]) -> Self {
        Self {
            rest: params,
            malformed: 0,
        }
    }

    /// Number of fields read so far that were empty or had stray characters
    pub(crate) const fn malformed(&self) -> u8 {
        self.malformed
    }

    /// Read the next `width` characters as a signed decimal
    pub(crate) fn next_raw(&mut self, width: usize) -> i32 {
        let (slot, rest) = self.rest.split_at(width.min(self.rest.len()));
        self.rest = rest;

        let (value, clean) = parse_decimal(slot);
        if !clean {
            self.malformed = self.malformed.saturating_add(1);
        }
        value
    }

    /// Read an unsigned channel value, clipped to `0..=255`
    pub(crate) fn next_u8(&mut self) -> u8 {
        clip8(self.next_raw(FIELD_WIDTH))
    }

    /// Read a signed offset, clipped to `-limit..=limit`
    pub(crate) fn next_offset(&mut self, limit: i8) -> i8 {
        clip_signed(self.next_raw(FIELD_WIDTH), limit)
    }

    /// Read a one-character flag; any positive digit enables it
    pub(crate) fn next_flag(&mut self) -> bool {
        self.next_raw(FLAG_WIDTH) > 0
    }
}

/// Parse `[+-]?[0-9]*` from the start of `slot`.
///
/// The flag is `false` when the slot holds no digit or anything follows the
/// digits.
fn parse_decimal(slot: &[u8]) -> (i32, bool) {
    let (negative, digits) = match slot.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, slot),
    };

    let mut value: i32 = 0;
    let mut consumed = 0;
    for &c in digits.iter().take_while(|c| c.is_ascii_digit()) {
        value = value * 10 + i32::from(c - b'0');
        consumed += 1;
    }

    let clean = consumed > 0 && consumed == digits.len();
    (if negative { -value } else { value }, clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_consecutive_fields() {
        let mut reader = FieldReader::new(b"100050025");
        assert_eq!(reader.next_u8(), 100);
        assert_eq!(reader.next_u8(), 50);
        assert_eq!(reader.next_u8(), 25);
        assert_eq!(reader.malformed(), 0);
    }

    #[test]
    fn garbage_reads_as_zero_and_still_advances() {
        let mut reader = FieldReader::new(b"ab1042");
        assert_eq!(reader.next_u8(), 0);
        assert_eq!(reader.next_u8(), 42);
        assert_eq!(reader.malformed(), 1);
    }

    #[test]
    fn partial_digits_keep_the_prefix() {
        let mut reader = FieldReader::new(b"7x9");
        assert_eq!(reader.next_u8(), 7);
        assert_eq!(reader.malformed(), 1);
    }

    #[test]
    fn signed_fields_accept_both_signs() {
        let mut reader = FieldReader::new(b"-20+05099");
        assert_eq!(reader.next_offset(99), -20);
        assert_eq!(reader.next_offset(99), 5);
        assert_eq!(reader.next_offset(99), 99);
    }

    #[test]
    fn oversized_values_are_clipped() {
        let mut reader = FieldReader::new(b"999");
        assert_eq!(reader.next_u8(), 255);
    }

    #[test]
    fn missing_fields_count_as_malformed() {
        let mut reader = FieldReader::new(b"12");
        assert_eq!(reader.next_u8(), 12);
        assert_eq!(reader.next_u8(), 0);
        assert_eq!(reader.malformed(), 1);
    }

    #[test]
    fn flag_uses_a_single_character() {
        let mut reader = FieldReader::new(b"10");
        assert!(reader.next_flag());
        assert!(!reader.next_flag());
    }
}
