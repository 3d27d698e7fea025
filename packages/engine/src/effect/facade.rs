use wasm_bindgen::prelude::*;

use crate::presets::EffectPreset;

use super::EffectCore;

/// Pointer/length map of the timing buffers inside wasm memory.
///
/// The page reads both arrays as Float32Array views over the exported
/// memory and copies each tile's pair into its CSS animation variables.
#[wasm_bindgen]
pub struct TimingLayout {
    delays_ptr: u32,
    durations_ptr: u32,
    len_elements: u32,
    len_bytes: u32,
}

#[wasm_bindgen]
impl TimingLayout {
    #[wasm_bindgen(getter)]
    pub fn delays_ptr(&self) -> u32 {
        self.delays_ptr
    }
    #[wasm_bindgen(getter)]
    pub fn durations_ptr(&self) -> u32 {
        self.durations_ptr
    }
    #[wasm_bindgen(getter)]
    pub fn len_elements(&self) -> u32 {
        self.len_elements
    }
    #[wasm_bindgen(getter)]
    pub fn len_bytes(&self) -> u32 {
        self.len_bytes
    }
}

#[wasm_bindgen]
pub struct RippleField {
    core: EffectCore,
}

#[wasm_bindgen]
impl RippleField {
    /// Create a field with the built-in preset and an optional cell size
    #[wasm_bindgen(constructor)]
    pub fn new(cell_size_px: Option<f64>) -> Self {
        let preset = match cell_size_px {
            Some(size) if size.is_finite() && size > 0.0 => EffectPreset::with_cell_size(size),
            _ => EffectPreset::default(),
        };
        Self {
            core: EffectCore::new(preset),
        }
    }

    /// Create a field from a full JSON preset
    #[wasm_bindgen(js_name = fromPresetJson)]
    pub fn from_preset_json(json: String) -> Result<RippleField, JsValue> {
        let preset = EffectPreset::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: EffectCore::new(preset),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.core.rows()
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 {
        self.core.cols()
    }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> f64 {
        self.core.cell_size()
    }

    #[wasm_bindgen(getter)]
    pub fn tile_count(&self) -> u32 {
        self.core.tile_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn replay_key(&self) -> u64 {
        self.core.replay_key()
    }

    #[wasm_bindgen(getter)]
    pub fn has_click(&self) -> bool {
        self.core.clicked().is_some()
    }

    /// Active tile row, or -1 while inert
    #[wasm_bindgen(getter)]
    pub fn clicked_row(&self) -> i32 {
        self.core.clicked().map_or(-1, |(row, _)| row as i32)
    }

    /// Active tile column, or -1 while inert
    #[wasm_bindgen(getter)]
    pub fn clicked_col(&self) -> i32 {
        self.core.clicked().map_or(-1, |(_, col)| col as i32)
    }

    /// Report the container size; true when the grid changed
    pub fn measure(&mut self, width: f64, height: f64) -> bool {
        self.core.measure(width, height)
    }

    /// Start a ripple centered on the tile; true when the click was accepted
    pub fn click(&mut self, row: u32, col: u32) -> bool {
        self.core.click(row, col)
    }

    /// Return to the inert state
    pub fn clear_click(&mut self) {
        self.core.clear_click()
    }

    /// Swap the active preset; resets the ripple and rescales the grid
    pub fn load_preset_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_preset_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn preset_json(&self) -> String {
        self.core.preset_json()
    }

    /// Start offset in ms for the tile at a row-major index
    pub fn delay_at(&self, idx: usize) -> f32 {
        self.core.delay_at(idx)
    }

    /// Animation length in ms for the tile at a row-major index
    pub fn duration_at(&self, idx: usize) -> f32 {
        self.core.duration_at(idx)
    }

    /// Get pointer to the delay array (for JS rendering)
    pub fn delays_ptr(&self) -> *const f32 {
        self.core.delays_ptr()
    }

    /// Get pointer to the duration array (for JS rendering)
    pub fn durations_ptr(&self) -> *const f32 {
        self.core.durations_ptr()
    }

    pub fn timings_len(&self) -> usize {
        self.core.timings_len()
    }

    pub fn timings_byte_len(&self) -> usize {
        self.core.timings_byte_len()
    }

    pub fn timing_layout(&self) -> TimingLayout {
        TimingLayout {
            delays_ptr: self.core.delays_ptr() as u32,
            durations_ptr: self.core.durations_ptr() as u32,
            len_elements: self.core.timings_len() as u32,
            len_bytes: self.core.timings_byte_len() as u32,
        }
    }
}
