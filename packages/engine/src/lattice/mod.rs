//! Lattice - the rows x cols tiling that covers the page container
//!
//! Dimensions always overshoot the measured size by a two-tile margin per
//! axis so partial-cell leftovers never expose a bare container edge.

mod indexing;

/// Placeholder dimensions used until the page reports a real measurement.
pub const UNMEASURED_ROWS: u32 = 20;
pub const UNMEASURED_COLS: u32 = 27;

/// Extra tiles per axis beyond the minimum cover.
const OVERSCAN_TILES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl GridDimensions {
    /// Row/column count covering `width` x `height` pixels plus overscan.
    ///
    /// Total over any measurement: non-finite or negative inputs count as
    /// zero-size, and both axes stay at one tile minimum.
    pub fn cover(width: f64, height: f64, cell_size: f64) -> Self {
        Self {
            rows: axis_tiles(height, cell_size),
            cols: axis_tiles(width, cell_size),
        }
    }

    pub fn unmeasured() -> Self {
        Self {
            rows: UNMEASURED_ROWS,
            cols: UNMEASURED_COLS,
        }
    }

    pub fn tile_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }
}

fn axis_tiles(dimension: f64, cell_size: f64) -> u32 {
    let dimension = if dimension.is_finite() && dimension > 0.0 {
        dimension
    } else {
        0.0
    };
    let minimum = (dimension / cell_size).ceil() as u32;
    minimum.saturating_add(OVERSCAN_TILES).max(1)
}

/// Memoized row-major tile list for the current dimensions.
pub struct Lattice {
    dims: GridDimensions,
    cells: Vec<u32>,
}

impl Lattice {
    pub fn new(dims: GridDimensions) -> Self {
        let cells = (0..dims.tile_count() as u32).collect();
        Self { dims, cells }
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    pub fn rows(&self) -> u32 {
        self.dims.rows
    }

    pub fn cols(&self) -> u32 {
        self.dims.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Tile indices in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Rebuild the cell list, but only when the dimensions actually changed.
    pub fn resize(&mut self, dims: GridDimensions) -> bool {
        if dims == self.dims {
            return false;
        }
        self.dims = dims;
        self.cells.clear();
        self.cells.extend(0..dims.tile_count() as u32);
        true
    }
}
