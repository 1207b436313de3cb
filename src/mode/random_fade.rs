//! Random per-channel fade
//!
//! Every channel walks one unit per update toward its own target. A channel
//! that has reached its target draws a new one from the bounded random range.

use crate::color::step_toward;
use crate::random::Mwc;
use crate::state::EngineState;

/// Advance the random fade by one update
pub fn step_random_fade(state: &mut EngineState, rng: &mut Mwc) {
    let EngineState {
        current,
        target,
        bound,
        offset,
        ..
    } = state;

    if target.r == current.r {
        target.r = rng.next_distinct(bound.r, offset.r, current.r);
    }
    if target.g == current.g {
        target.g = rng.next_distinct(bound.g, offset.g, current.g);
    }
    if target.b == current.b {
        target.b = rng.next_distinct(bound.b, offset.b, current.b);
    }

    current.r = step_toward(current.r, target.r);
    current.g = step_toward(current.g, target.g);
    current.b = step_toward(current.b, target.b);
}
