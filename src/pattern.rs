use std::fmt;
use std::path::Path;

use crate::codec;
use crate::codec::LoadError;

/// A stamp: a small boolean matrix placed onto a board with
/// [`Board::add_pattern`](crate::board::Board::add_pattern).
///
/// Loaded from the same file format as boards. Immutable once loaded, except
/// for [`Pattern::rotate`], which replaces the matrix with its rotated form.
pub struct Pattern {
    height: usize,
    width: usize,

    /// `height * width` cells, row-major
    cells: Vec<bool>,
}

impl Pattern {
    /// Load a pattern from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let raw = codec::parse_file(path)?;

        Ok(Self {
            height: raw.height,
            width: raw.width,
            cells: raw.cells,
        })
    }

    /// Rotate the pattern 90° clockwise in place, swapping its dimensions.
    ///
    /// The cell at `(r, c)` moves to `(c, height - 1 - r)`. Four rotations
    /// restore the original matrix bit-for-bit.
    pub fn rotate(&mut self) {
        let (height, width) = (self.height, self.width);

        let mut rotated = vec![false; height * width];
        for r in 0..height {
            for c in 0..width {
                if self.cells[r * width + c] {
                    rotated[c * height + (height - 1 - r)] = true;
                }
            }
        }

        self.cells = rotated;
        self.height = width;
        self.width = height;
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < self.height, "row is out of bounds");
        assert!(col < self.width, "col is out of bounds");

        self.cells[row * self.width + col]
    }

    /// The matrix one row at a time, each row `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[cfg(test)]
    pub(crate) fn from_cells(height: usize, width: usize, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), height * width);

        Self {
            height,
            width,
            cells,
        }
    }

    /// A 2x2 block, the smallest still life. Test fixture.
    #[cfg(test)]
    pub(crate) fn block() -> Self {
        Self::from_cells(2, 2, vec![true; 4])
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}
