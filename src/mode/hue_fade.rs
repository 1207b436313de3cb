use crate::color::HueModel;
use crate::state::EngineState;

/// Rotate the hue one step and re-render the current color
pub fn step_hue_fade(state: &mut EngineState, model: HueModel) {
    state.hue.rotate();
    state.current = state.hue.to_rgb(model);
}
