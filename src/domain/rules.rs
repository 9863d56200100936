//! Pure next-generation engine for a bounded N×N plane.
//!
//! The grid does not wrap: neighbor positions outside [0, N) on either axis
//! simply do not exist, so edge cells see at most 5 candidate neighbors and
//! corner cells at most 3. Output depends only on `previous`; the input
//! slice is never mutated.

use super::Cell;
use rayon::prelude::*;

/// Count live Moore neighbors of (x, y), excluding positions outside the grid.
fn count_live_neighbors(previous: &[Cell], size: usize, x: usize, y: usize) -> u8 {
    let n = size as i32;

    (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter_map(|(dx, dy)| {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            // Row stride multiplies the y component; the x component only
            // offsets within the row.
            (nx >= 0 && nx < n && ny >= 0 && ny < n)
                .then(|| previous[(nx + n * ny) as usize])
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// Compute the next generation from a frozen previous state (serial).
pub fn next_generation(previous: &[Cell], size: usize) -> Vec<Cell> {
    debug_assert_eq!(previous.len(), size * size);

    (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .map(|(x, y)| {
            let current = previous[x + size * y];
            current.evolve(count_live_neighbors(previous, size, x, y))
        })
        .collect()
}

/// Row-parallel variant using rayon. Identical output to `next_generation`
/// since every output cell reads only `previous`.
pub fn next_generation_parallel(previous: &[Cell], size: usize) -> Vec<Cell> {
    debug_assert_eq!(previous.len(), size * size);

    (0..size)
        .into_par_iter()
        .flat_map_iter(|y| (0..size).map(move |x| (x, y)))
        .map(|(x, y)| {
            let current = previous[x + size * y];
            current.evolve(count_live_neighbors(previous, size, x, y))
        })
        .collect()
}
