//! Tick-driven color engine
//!
//! The hardware tick fires at a fast fixed rate; the engine sub-samples it
//! with a countdown so the color only moves once every `wait_ticks + 1` ticks.

use embassy_time::Duration;

use crate::OutputDriver;
use crate::color::HueModel;
use crate::mode::{ModeId, step_hue_fade, step_random_fade};
use crate::random::{EntropySource, Mwc};
use crate::state::EngineState;

/// Owns the light state and advances it on every tick
#[derive(Debug, Clone)]
pub struct ColorEngine {
    state: EngineState,
    rng: Mwc,
    model: HueModel,
}

impl ColorEngine {
    pub fn new(state: EngineState, model: HueModel, entropy: EntropySource) -> Self {
        Self {
            state,
            rng: Mwc::new(entropy),
            model,
        }
    }

    /// Handle one hardware tick.
    ///
    /// Returns `true` when the countdown expired and a color was pushed to
    /// the output; all other ticks only decrement the countdown.
    pub fn tick<O: OutputDriver>(&mut self, output: &mut O) -> bool {
        if self.state.remaining_ticks > 0 {
            self.state.remaining_ticks -= 1;
            return false;
        }
        self.state.remaining_ticks = self.state.wait_ticks;

        match self.state.mode {
            ModeId::RandomFade => step_random_fade(&mut self.state, &mut self.rng),
            ModeId::HueFade => step_hue_fade(&mut self.state, self.model),
            ModeId::Fixed => {}
        }

        output.write(self.state.current, self.state.white);
        output.toggle_heartbeat();
        true
    }

    /// Re-render `current` from the hue triple without advancing the hue
    pub fn render_hue(&mut self) {
        self.state.current = self.state.hue.to_rgb(self.model);
    }

    /// Wall-clock time between two color updates for a given tick period
    pub fn update_interval(&self, tick_period: Duration) -> Duration {
        tick_period * (u32::from(self.state.wait_ticks) + 1)
    }

    pub const fn hue_model(&self) -> HueModel {
        self.model
    }

    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    pub const fn state_mut(&mut self) -> &mut EngineState {
        &mut self.state
    }
}
