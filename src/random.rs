//! Multiply-with-carry pseudo random generator
//!
//! Two 16-bit lag-1 generators combined into one 32-bit output. Each word is
//! seeded lazily from an [`EntropySource`] the first time it is needed, which
//! on hardware is a noise sample taken at boot.

use crate::math8::clip8;

/// Boot-time noise sampler (e.g. XOR over uninitialized RAM)
pub type EntropySource = fn() -> u16;

/// Maximum draws before [`Mwc::next_distinct`] gives up on finding a new value.
pub const MAX_DRAW_ATTEMPTS: u8 = 32;

const Z_MULTIPLIER: u32 = 36_969;
const W_MULTIPLIER: u32 = 18_000;

/// Seed used when the entropy source yields zero, which would stall the words
const FALLBACK_SEED: u32 = 0x2f6b;

/// Multiply-with-carry generator state
#[derive(Debug, Clone)]
pub struct Mwc {
    z: u32,
    w: u32,
    entropy: EntropySource,
}

impl Mwc {
    /// Create an unseeded generator drawing its seed from `entropy`
    pub const fn new(entropy: EntropySource) -> Self {
        Self { z: 0, w: 0, entropy }
    }

    /// Seed each word that has not been seeded yet
    pub fn seed_if_needed(&mut self) {
        if self.z == 0 {
            self.z = self.sample();
        }
        if self.w == 0 {
            self.w = self.sample();
        }
    }

    fn sample(&self) -> u32 {
        match (self.entropy)() {
            0 => FALLBACK_SEED,
            seed => u32::from(seed),
        }
    }

    /// Advance both words and return their combination
    pub fn next_u32(&mut self) -> u32 {
        self.seed_if_needed();
        self.z = Z_MULTIPLIER
            .wrapping_mul(self.z & 0xffff)
            .wrapping_add(self.z >> 16);
        self.w = W_MULTIPLIER
            .wrapping_mul(self.w & 0xffff)
            .wrapping_add(self.w >> 16);
        (self.z << 16).wrapping_add(self.w)
    }

    /// Draw `next_u32() % bound + offset`, clipped to a channel value, until
    /// it differs from `current`.
    ///
    /// A `bound` of zero is treated as one. After [`MAX_DRAW_ATTEMPTS`] draws
    /// the last candidate is returned even if it equals `current`, so
    /// degenerate bounds (e.g. `bound = 1`, `offset = 0`) cannot hang the tick.
    #[allow(clippy::cast_possible_wrap)]
    pub fn next_distinct(&mut self, bound: u8, offset: i8, current: u8) -> u8 {
        let bound = u32::from(bound.max(1));
        let mut candidate = current;
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let draw = (self.next_u32() % bound) as i32;
            candidate = clip8(draw + i32::from(offset));
            if candidate != current {
                return candidate;
            }
        }

        #[cfg(feature = "esp32-log")]
        esp_println::println!(
            "random: no distinct value for bound={} offset={} current={}",
            bound,
            offset,
            current
        );
        candidate
    }
}
