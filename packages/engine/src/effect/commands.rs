use crate::lattice::GridDimensions;
use crate::presets::EffectPreset;

use super::EffectCore;

pub(super) fn click(core: &mut EffectCore, row: u32, col: u32) -> bool {
    if !core.lattice.in_bounds(row as i32, col as i32) {
        return false;
    }

    core.clicked = Some((row, col));
    // Every accepted click restarts the ripple, identical coordinates included.
    core.replay_key += 1;
    core.rebuild_timings();
    true
}

pub(super) fn clear_click(core: &mut EffectCore) {
    core.clicked = None;
    core.rebuild_timings();
}

pub(super) fn load_preset(core: &mut EffectCore, preset: EffectPreset) {
    core.preset = preset;
    core.clicked = None;

    // A new cell size changes how many tiles the last measurement needs.
    if let Some((width, height)) = core.last_measurement {
        let dims = GridDimensions::cover(width, height, core.preset.cell_size_px);
        core.lattice.resize(dims);
    }

    core.rebuild_timings();
}
