//! Lumen Ripple Engine - interactive background grid for the landing page
//!
//! The page's JS glue owns the DOM and the CSS keyframes; this crate owns
//! the numbers behind them:
//! - lattice/   - grid dimensions and row-major tile indexing
//! - timing     - per-tile ripple delay/duration
//! - presets    - tunable constants, loadable from JSON
//! - effect/    - state orchestration and the wasm facade

pub mod effect;
pub mod lattice;
pub mod presets;
pub mod timing;

pub use effect::{EffectCore, RippleField, TimingLayout};
pub use lattice::{GridDimensions, Lattice};
pub use presets::EffectPreset;
pub use timing::RippleTiming;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Lumen ripple engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
