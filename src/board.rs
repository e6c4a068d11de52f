use std::path::Path;

use rand::Rng;

use crate::codec;
use crate::codec::LoadError;
use crate::codec::SaveError;
use crate::grid::Grid;
use crate::pattern::Pattern;

/// The automaton engine: a [`Grid`] plus the step rule, an edge policy, and
/// cumulative statistics.
///
/// Steps are double-buffered. Every neighbor count in a step is taken against
/// the grid as it was when the step began; the new generation is staged in a
/// scratch buffer and swapped in at the end.
pub struct Board {
    grid: Grid,

    /// Staging buffer for the next generation, same size as the grid
    scratch: Vec<bool>,

    /// Edge policy, fixed at construction. `true` means toroidal: neighbor
    /// lookups wrap modulo the dimensions. `false` treats out-of-range
    /// neighbors as dead.
    wrap_around: bool,

    iterations: u64,
    births: u64,
    deaths: u64,
}

impl Board {
    /// Create a board with every cell dead and all counters at zero.
    pub fn new(wrap_around: bool, height: usize, width: usize) -> Self {
        Self::with_grid(wrap_around, Grid::new(height, width))
    }

    pub(crate) fn with_grid(wrap_around: bool, grid: Grid) -> Self {
        let scratch = vec![false; grid.height() * grid.width()];

        Self {
            grid,
            scratch,
            wrap_around,
            iterations: 0,
            births: 0,
            deaths: 0,
        }
    }

    /// Load a board from a `.brd` file.
    ///
    /// The file format does not store the edge policy, so it is supplied here
    /// just as it is to [`Board::new`]. Counters start at zero.
    pub fn load(wrap_around: bool, path: impl AsRef<Path>) -> Result<Self, LoadError> {
        codec::load(wrap_around, path)
    }

    /// Write the board to a `.brd` file. The exact inverse of [`Board::load`]
    /// on grid contents; counters are not persisted.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        codec::save(self, path)
    }

    /// Advance the board by one generation.
    ///
    /// Classic Life rule: a cell with exactly 3 live neighbors is alive next
    /// generation, a cell with exactly 2 keeps its state, every other count
    /// leaves it dead. Increments `iterations` by one and `births`/`deaths`
    /// by the number of cells that changed in each direction.
    pub fn run_iteration(&mut self) {
        let (height, width) = (self.grid.height(), self.grid.width());

        for row in 0..height {
            for col in 0..width {
                let alive = self.grid.get(row, col);

                let next = match self.live_neighbors(row, col) {
                    3 => true,
                    2 => alive,
                    _ => false,
                };

                self.scratch[row * width + col] = next;
            }
        }

        let mut births = 0;
        let mut deaths = 0;
        for (&old, &new) in self.grid.cells().iter().zip(&self.scratch) {
            match (old, new) {
                (false, true) => births += 1,
                (true, false) => deaths += 1,
                _ => {}
            }
        }

        self.grid.swap_cells(&mut self.scratch);

        self.iterations += 1;
        self.births += births;
        self.deaths += deaths;
    }

    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let (height, width) = (self.grid.height() as isize, self.grid.width() as isize);

        let mut count = 0;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let (r, c) = (row as isize + dr, col as isize + dc);

                let (r, c) = if self.wrap_around {
                    (r.rem_euclid(height), c.rem_euclid(width))
                } else if r < 0 || r >= height || c < 0 || c >= width {
                    continue;
                } else {
                    (r, c)
                };

                if self.grid.get(r as usize, c as usize) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Flip a single cell. Does not affect the counters.
    pub fn toggle(&mut self, row: usize, col: usize) {
        self.grid.toggle(row, col);
    }

    /// Stamp `pattern` with its top-left corner at `(origin_row, origin_col)`.
    ///
    /// Live pattern cells are set alive on the board; dead ones leave the
    /// board untouched. Placement always wraps modulo the board dimensions,
    /// whatever the edge policy. Does not affect the counters.
    pub fn add_pattern(&mut self, pattern: &Pattern, origin_row: usize, origin_col: usize) {
        let (height, width) = (self.grid.height(), self.grid.width());

        for (r, row) in pattern.rows().enumerate() {
            for (c, &alive) in row.iter().enumerate() {
                if alive {
                    self.grid.set((origin_row + r) % height, (origin_col + c) % width, true);
                }
            }
        }
    }

    /// Kill every cell. Does not affect the counters.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Re-roll every cell alive with probability `ratio`. Counters are left
    /// untouched; only construction resets them.
    pub fn randomize(&mut self, ratio: f64) {
        self.grid.randomize(ratio);
    }

    /// Like [`Board::randomize`], with a caller-supplied random source.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R, ratio: f64) {
        self.grid.randomize_with(rng, ratio);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn wrap_around(&self) -> bool {
        self.wrap_around
    }

    /// Generations advanced since construction.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Cells that went dead → alive across all iterations.
    pub fn births(&self) -> u64 {
        self.births
    }

    /// Cells that went alive → dead across all iterations.
    pub fn deaths(&self) -> u64 {
        self.deaths
    }
}
