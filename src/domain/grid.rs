use super::{Cell, rules};
use rand::Rng;

/// Grid owns the N×N cell array and the generation counter.
///
/// Cells live at linear index `x + size * y`. The generation counter starts
/// at 1 and is reset to 1 whenever the grid is reseeded.
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    generation: u64,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
            generation: 1,
        }
    }

    /// Grid side length (the grid is always square)
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Generations elapsed since the last reseed
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Convert 2D coordinates to the linear index
    const fn index(&self, x: usize, y: usize) -> usize {
        x + self.size * y
    }

    /// Read the cell at (x, y). Coordinates must be in range; the input
    /// handler is responsible for clamping before calling in.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Flip the cell at (x, y). Same caller contract as `get`.
    pub fn toggle(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.cells[idx] = self.cells[idx].toggle();
    }

    /// Borrow the full cell array in linear-index order (renderer path)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Frozen copy of the current cell array
    pub fn snapshot(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    /// Reseed: every cell becomes alive independently with the given
    /// probability. Resets the generation counter to 1.
    pub fn randomize(&mut self, live_probability: f64) {
        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(live_probability) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        self.generation = 1;
    }

    /// Advance one generation. The rule engine reads the previous state in
    /// full and produces a fresh array, so neighbor counts are never computed
    /// against half-updated cells.
    pub fn step(&mut self) {
        self.cells = rules::next_generation_parallel(&self.cells, self.size);
        self.generation += 1;
    }
}
