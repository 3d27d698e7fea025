//! Ripple timing - expanding-ring stagger around the clicked tile
//!
//! Near tiles start sooner and finish faster; far tiles start later and
//! stretch longer. Both numbers are pure functions of the tile distance.

/// Milliseconds of start offset per unit of tile distance.
pub const DELAY_PER_UNIT_MS: f64 = 55.0;
/// Animation length for the clicked tile itself.
pub const BASE_DURATION_MS: f64 = 200.0;
/// Extra animation length per unit of tile distance.
pub const DURATION_PER_UNIT_MS: f64 = 80.0;

/// Start offset and length of one tile's ripple animation, in ms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleTiming {
    pub delay_ms: f64,
    pub duration_ms: f64,
}

/// Euclidean distance between two tiles, in tile units.
#[inline]
pub fn tile_distance(a: (u32, u32), b: (u32, u32)) -> f64 {
    let dr = a.0 as f64 - b.0 as f64;
    let dc = a.1 as f64 - b.1 as f64;
    (dr * dr + dc * dc).sqrt()
}

/// Timing at a given distance with the built-in constants.
#[inline]
pub fn timing_at_distance(distance: f64) -> RippleTiming {
    RippleTiming {
        delay_ms: (distance * DELAY_PER_UNIT_MS).max(0.0),
        duration_ms: BASE_DURATION_MS + distance * DURATION_PER_UNIT_MS,
    }
}

/// Timing for `tile` when the ripple is centered on `clicked`.
#[inline]
pub fn timing_for(clicked: (u32, u32), tile: (u32, u32)) -> RippleTiming {
    timing_at_distance(tile_distance(clicked, tile))
}
