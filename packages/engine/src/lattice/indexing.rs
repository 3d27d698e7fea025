use super::*;

impl Lattice {
    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row * self.dims.cols + col) as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let row = (idx as u32) / self.dims.cols;
        let col = (idx as u32) % self.dims.cols;
        (row, col)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.dims.rows as i32 && col >= 0 && col < self.dims.cols as i32
    }
}
