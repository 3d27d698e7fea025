//! Tunable effect constants, loadable from a JSON preset
//!
//! The page ships with the built-in numbers; design iterations can swap
//! them at runtime without rebuilding the wasm binary.

use serde::{Deserialize, Serialize};

use crate::timing::{RippleTiming, BASE_DURATION_MS, DELAY_PER_UNIT_MS, DURATION_PER_UNIT_MS};

pub const DEFAULT_CELL_SIZE_PX: f64 = 56.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectPreset {
    pub cell_size_px: f64,
    pub delay_per_unit_ms: f64,
    pub base_duration_ms: f64,
    pub duration_per_unit_ms: f64,
}

impl Default for EffectPreset {
    fn default() -> Self {
        Self {
            cell_size_px: DEFAULT_CELL_SIZE_PX,
            delay_per_unit_ms: DELAY_PER_UNIT_MS,
            base_duration_ms: BASE_DURATION_MS,
            duration_per_unit_ms: DURATION_PER_UNIT_MS,
        }
    }
}

impl EffectPreset {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let preset: EffectPreset = serde_json::from_str(json).map_err(|e| e.to_string())?;
        preset.validate()?;
        Ok(preset)
    }

    /// Built-in timing with a custom tile edge length.
    pub fn with_cell_size(cell_size_px: f64) -> Self {
        Self {
            cell_size_px,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.cell_size_px.is_finite() && self.cell_size_px > 0.0) {
            return Err(format!(
                "cell_size_px must be a positive number, got {}",
                self.cell_size_px
            ));
        }
        let timings = [
            ("delay_per_unit_ms", self.delay_per_unit_ms),
            ("base_duration_ms", self.base_duration_ms),
            ("duration_per_unit_ms", self.duration_per_unit_ms),
        ];
        for (name, value) in timings {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Timing for a tile at the given distance from the clicked tile.
    #[inline]
    pub fn timing_at(&self, distance: f64) -> RippleTiming {
        RippleTiming {
            delay_ms: (distance * self.delay_per_unit_ms).max(0.0),
            duration_ms: self.base_duration_ms + distance * self.duration_per_unit_ms,
        }
    }

    /// Timing applied to every tile while no tile is clicked.
    #[inline]
    pub fn inert_timing(&self) -> RippleTiming {
        self.timing_at(0.0)
    }
}
