use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A dense board of cells, stored row-major.
///
/// Dimensions are fixed for the grid's lifetime. Row/column arguments must be
/// in range; callers clamp before calling, the grid never does.
pub struct Grid {
    height: usize,
    width: usize,

    /// `height * width` cells, row-major
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0, "height must be positive");
        assert!(width > 0, "width must be positive");

        Self {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    pub(crate) fn from_cells(height: usize, width: usize, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), height * width);

        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        let i = self.index(row, col);

        self.cells[i]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.index(row, col);

        self.cells[i] = alive;
    }

    /// Flip the cell at `(row, col)`.
    pub fn toggle(&mut self, row: usize, col: usize) {
        let i = self.index(row, col);

        self.cells[i] = !self.cells[i];
    }

    /// The full matrix as a flat row-major slice.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// The matrix one row at a time, each row `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Set each cell alive independently with probability `ratio`.
    ///
    /// Draws from a fresh entropy-seeded [`StdRng`], so two calls will not
    /// produce the same board. Use [`Grid::randomize_with`] for a seeded run.
    pub fn randomize(&mut self, ratio: f64) {
        self.randomize_with(&mut StdRng::from_entropy(), ratio);
    }

    /// Like [`Grid::randomize`], with a caller-supplied random source.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R, ratio: f64) {
        assert!(
            (0.0..=1.0).contains(&ratio),
            "ratio must be within [0, 1], got {ratio}"
        );

        for cell in &mut self.cells {
            *cell = rng.gen_bool(ratio);
        }
    }

    /// Swap the cell buffer with `other`, which must be the same size.
    pub(crate) fn swap_cells(&mut self, other: &mut Vec<bool>) {
        assert_eq!(other.len(), self.cells.len());

        std::mem::swap(&mut self.cells, other);
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.height, "row is out of bounds");
        assert!(col < self.width, "col is out of bounds");

        row * self.width + col
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::Grid;

    #[test]
    fn starts_dead() {
        let grid = Grid::new(3, 4);

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn toggle_flips() {
        let mut grid = Grid::new(2, 2);

        grid.toggle(1, 0);
        assert!(grid.get(1, 0));

        grid.toggle(1, 0);
        assert!(!grid.get(1, 0));
    }

    #[test]
    fn rows_are_width_wide() {
        let mut grid = Grid::new(3, 5);
        grid.set(2, 4, true);

        let rows: Vec<&[bool]> = grid.rows().collect();

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 5));
        assert!(rows[2][4]);
    }

    #[test]
    #[should_panic(expected = "row is out of bounds")]
    fn out_of_range_row_panics() {
        let mut grid = Grid::new(2, 2);

        grid.toggle(2, 0);
    }

    #[test]
    fn randomize_extremes() {
        let mut grid = Grid::new(4, 4);

        grid.randomize(1.0);
        assert_eq!(grid.population(), 16);

        grid.randomize(0.0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn randomize_is_reproducible_when_seeded() {
        let mut a = Grid::new(8, 8);
        let mut b = Grid::new(8, 8);

        a.randomize_with(&mut StdRng::seed_from_u64(7), 0.5);
        b.randomize_with(&mut StdRng::seed_from_u64(7), 0.5);

        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn population_tracks_toggles() {
        let mut grid = Grid::new(3, 3);

        grid.toggle(0, 0);
        grid.toggle(2, 2);
        assert_eq!(grid.population(), 2);

        grid.toggle(0, 0);
        assert_eq!(grid.population(), 1);

        grid.clear();
        assert_eq!(grid.population(), 0);
    }
}
