// grid.rs - Grid types for Conway's Game of Life

use rand::Rng;
use std::fmt;

// Neighbor offsets around a cell, (0, 0) excluded
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Fixed-size field of alive/dead flags, stored row by row.
///
/// Dimensions never change after construction. Every accessor treats an
/// out-of-range coordinate as a caller bug and panics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![false; rows * cols] }
    }

    /// Each cell is independently alive with probability `density`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, density: f64, rng: &mut R) -> Self {
        // NaN would make gen_bool panic
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let cells = (0..rows * cols).map(|_| rng.gen_bool(density)).collect();
        Self { rows, cols, cells }
    }

    pub fn from_live_cells(rows: usize, cols: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::empty(rows, cols);
        for &(row, col) in live {
            let idx = grid.index(row, col);
            grid.cells[idx] = true;
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Flips the cell in place.
    pub fn toggle(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = !self.cells[idx];
    }

    /// Copy of this grid with one cell flipped.
    pub fn toggled(&self, row: usize, col: usize) -> Self {
        let mut next = self.clone();
        next.toggle(row, col);
        next
    }

    /// Number of live cells among the (up to) 8 in-bounds neighbors.
    /// Cells past the edge count as dead; there is no wraparound.
    pub fn alive_neighbors(&self, row: usize, col: usize) -> usize {
        self.check_bounds(row, col);
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let nr = row.checked_add_signed(dr).filter(|&r| r < self.rows)?;
                let nc = col.checked_add_signed(dc).filter(|&c| c < self.cols)?;
                Some(self.cells[nr * self.cols + nc])
            })
            .filter(|&alive| alive)
            .count()
    }

    pub fn row(&self, row: usize) -> &[bool] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[bool]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.cols.max(1))
    }

    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Share of live cells in percent.
    pub fn population(&self) -> f32 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.live_count() as f32 / self.cells.len() as f32 * 100.0
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        self.check_bounds(row, col);
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
