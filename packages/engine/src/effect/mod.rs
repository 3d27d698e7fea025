//! Effect orchestration - single owner of the ripple state
//!
//! Refactored around one rule: `EffectCore` is the only mutable state in
//! the engine (measured grid, active tile, replay key, timing buffers),
//! and it changes only on discrete page events. The wasm facade in
//! facade.rs is a thin delegation layer over it.
//!
//! Geometry lives in lattice/, the stagger math in timing.rs and
//! presets.rs; this module wires them to the click/measure lifecycle.

use crate::lattice::{GridDimensions, Lattice};
use crate::presets::EffectPreset;
use crate::timing::tile_distance;

mod commands;
mod facade;
mod measure;

pub use facade::{RippleField, TimingLayout};

/// The ripple effect state
pub struct EffectCore {
    preset: EffectPreset,
    lattice: Lattice,

    // Last container size the page reported, None before first paint
    last_measurement: Option<(f64, f64)>,

    // Click state: at most one active tile, newest click wins
    clicked: Option<(u32, u32)>,
    replay_key: u64,

    // Per-tile timing in row-major order, rebuilt on every state change
    delays_ms: Vec<f32>,
    durations_ms: Vec<f32>,
}

impl EffectCore {
    pub fn new(preset: EffectPreset) -> Self {
        let mut core = Self {
            preset,
            lattice: Lattice::new(GridDimensions::unmeasured()),
            last_measurement: None,
            clicked: None,
            replay_key: 0,
            delays_ms: Vec::new(),
            durations_ms: Vec::new(),
        };
        core.rebuild_timings();
        core
    }

    pub fn with_cell_size(cell_size_px: f64) -> Self {
        Self::new(EffectPreset::with_cell_size(cell_size_px))
    }

    pub fn preset(&self) -> &EffectPreset {
        &self.preset
    }

    pub fn dims(&self) -> GridDimensions {
        self.lattice.dims()
    }

    pub fn rows(&self) -> u32 {
        self.lattice.rows()
    }

    pub fn cols(&self) -> u32 {
        self.lattice.cols()
    }

    pub fn tile_count(&self) -> usize {
        self.lattice.len()
    }

    pub fn cell_size(&self) -> f64 {
        self.preset.cell_size_px
    }

    pub fn is_measured(&self) -> bool {
        self.last_measurement.is_some()
    }

    pub fn clicked(&self) -> Option<(u32, u32)> {
        self.clicked
    }

    pub fn replay_key(&self) -> u64 {
        self.replay_key
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Report a container measurement; true when the grid changed.
    pub fn measure(&mut self, width: f64, height: f64) -> bool {
        measure::measure(self, width, height)
    }

    /// Start a ripple centered on the tile; true when the click was accepted.
    pub fn click(&mut self, row: u32, col: u32) -> bool {
        commands::click(self, row, col)
    }

    /// Return to the inert state (no active tile).
    pub fn clear_click(&mut self) {
        commands::clear_click(self)
    }

    pub fn load_preset_json(&mut self, json: &str) -> Result<(), String> {
        let preset = EffectPreset::from_json(json)?;
        commands::load_preset(self, preset);
        Ok(())
    }

    pub fn preset_json(&self) -> String {
        self.preset.to_json()
    }

    /// Start offset in ms for the tile at a row-major index.
    pub fn delay_at(&self, idx: usize) -> f32 {
        self.delays_ms.get(idx).copied().unwrap_or(0.0)
    }

    /// Animation length in ms for the tile at a row-major index.
    pub fn duration_at(&self, idx: usize) -> f32 {
        self.durations_ms
            .get(idx)
            .copied()
            .unwrap_or(self.preset.base_duration_ms as f32)
    }

    pub fn delays(&self) -> &[f32] {
        &self.delays_ms
    }

    pub fn durations(&self) -> &[f32] {
        &self.durations_ms
    }

    /// Get pointer to the delay array (for JS rendering)
    pub fn delays_ptr(&self) -> *const f32 {
        self.delays_ms.as_ptr()
    }

    /// Get pointer to the duration array (for JS rendering)
    pub fn durations_ptr(&self) -> *const f32 {
        self.durations_ms.as_ptr()
    }

    pub fn timings_len(&self) -> usize {
        self.delays_ms.len()
    }

    pub fn timings_byte_len(&self) -> usize {
        self.delays_ms.len() * std::mem::size_of::<f32>()
    }

    /// Recompute every tile's delay/duration against the active tile.
    ///
    /// O(rows * cols) per call; the lattice tops out at a few hundred
    /// tiles so there is nothing to stream or cache here.
    pub(crate) fn rebuild_timings(&mut self) {
        let count = self.lattice.len();
        self.delays_ms.clear();
        self.durations_ms.clear();

        match self.clicked {
            None => {
                let inert = self.preset.inert_timing();
                self.delays_ms.resize(count, inert.delay_ms as f32);
                self.durations_ms.resize(count, inert.duration_ms as f32);
            }
            Some(clicked) => {
                self.delays_ms.reserve(count);
                self.durations_ms.reserve(count);
                for idx in 0..count {
                    let tile = self.lattice.coords(idx);
                    let timing = self.preset.timing_at(tile_distance(clicked, tile));
                    self.delays_ms.push(timing.delay_ms as f32);
                    self.durations_ms.push(timing.duration_ms as f32);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
