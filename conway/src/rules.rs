// rules.rs - Conway's B3/S23 transition rule

use crate::grid::Grid;

/// Next state of one cell given its current state and live neighbor count.
pub fn next_state(alive: bool, neighbors: usize) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Computes the following generation from a snapshot.
///
/// Every cell is evaluated against `current` only, so no cell ever observes
/// a partially updated generation.
pub fn step_grid(current: &Grid) -> Grid {
    let (rows, cols) = (current.rows(), current.cols());
    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        cells.extend(next_row(current, row));
    }
    Grid::from_cells(rows, cols, cells)
}

fn next_row(current: &Grid, row: usize) -> impl Iterator<Item = bool> + '_ {
    (0..current.cols()).map(move |col| {
        next_state(current.get(row, col), current.alive_neighbors(row, col))
    })
}
