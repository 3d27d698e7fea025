use crate::lattice::GridDimensions;

use super::EffectCore;

pub(super) fn measure(core: &mut EffectCore, width: f64, height: f64) -> bool {
    core.last_measurement = Some((width, height));

    let dims = GridDimensions::cover(width, height, core.preset.cell_size_px);
    if !core.lattice.resize(dims) {
        return false;
    }

    core.rebuild_timings();
    true
}
