//! The board/pattern file format, conventionally `.brd`:
//!
//! ```notrust
//! <height>
//! <width>
//! <height lines of at least <width> '0'/'1' characters>
//! ```
//!
//! Characters past column `width` on a data line are ignored. [`save`] is the
//! exact inverse of [`load`] on grid contents; counters are not persisted.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;
use tracing::warn;

use crate::board::Board;
use crate::grid::Grid;
use crate::parse;
use crate::parse::ConvertError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] io::Error),

    #[error("Missing {name} line")]
    MissingHeader { name: &'static str },

    #[error("Invalid {name} line: {source}")]
    Dimension {
        name: &'static str,
        #[source]
        source: ConvertError,
    },

    #[error("The {name} must be positive")]
    ZeroDimension { name: &'static str },

    #[error("Expected {expected} data rows, found {found}")]
    MissingRows { expected: usize, found: usize },

    #[error("Row {row} is {len} cells wide, expected at least {expected}")]
    ShortRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Invalid cell marker '{got}' at row {row}, column {col}")]
    BadCell { row: usize, col: usize, got: char },
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to write file: {0}")]
    Io(#[from] io::Error),
}

/// A parsed board or pattern file, before it becomes either.
#[derive(Debug)]
pub struct RawGrid {
    pub height: usize,
    pub width: usize,
    pub cells: Vec<bool>,
}

/// Parse the board file format.
pub fn parse(bytes: &[u8]) -> Result<RawGrid, LoadError> {
    let (height, bytes) = read_dimension("height", bytes)?;
    let (width, mut bytes) = read_dimension("width", bytes)?;

    let mut cells = Vec::with_capacity(height * width);
    for row in 0..height {
        let (Some(line), rest) = parse::take_line(bytes) else {
            return Err(LoadError::MissingRows {
                expected: height,
                found: row,
            });
        };
        bytes = rest;

        if line.len() < width {
            return Err(LoadError::ShortRow {
                row,
                len: line.len(),
                expected: width,
            });
        }

        if line.len() > width {
            warn!(row, extra = line.len() - width, "Ignoring trailing characters on data row");
        }

        for (col, &b) in line[..width].iter().enumerate() {
            match b {
                b'0' => cells.push(false),
                b'1' => cells.push(true),
                got => {
                    return Err(LoadError::BadCell {
                        row,
                        col,
                        got: got as char,
                    });
                }
            }
        }
    }

    Ok(RawGrid {
        height,
        width,
        cells,
    })
}

fn read_dimension<'a>(
    name: &'static str,
    bytes: &'a [u8],
) -> Result<(usize, &'a [u8]), LoadError> {
    let (Some(line), rest) = parse::take_line(bytes) else {
        return Err(LoadError::MissingHeader { name });
    };

    let n = parse::convert(line).map_err(|source| LoadError::Dimension { name, source })?;
    if n == 0 {
        return Err(LoadError::ZeroDimension { name });
    }

    Ok((n, rest))
}

/// Read and parse a board or pattern file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<RawGrid, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    let raw = parse(&bytes)?;
    debug!(
        path = %path.display(),
        height = raw.height,
        width = raw.width,
        "Parsed grid file"
    );

    Ok(raw)
}

/// Load a [`Board`] from a file. The edge policy is not stored in the format,
/// so the caller supplies it; counters start at zero.
pub fn load(wrap_around: bool, path: impl AsRef<Path>) -> Result<Board, LoadError> {
    let raw = parse_file(path)?;
    let grid = Grid::from_cells(raw.height, raw.width, raw.cells);

    Ok(Board::with_grid(wrap_around, grid))
}

/// Render a board's grid in the board file format.
pub fn encode(board: &Board) -> String {
    let (height, width) = (board.height(), board.width());

    let mut out = String::with_capacity((height + 2) * (width + 1));
    out.push_str(&height.to_string());
    out.push('\n');
    out.push_str(&width.to_string());
    out.push('\n');

    for row in board.grid().rows() {
        for &alive in row {
            out.push(if alive { '1' } else { '0' });
        }
        out.push('\n');
    }

    out
}

/// Write a board to a file.
pub fn save(board: &Board, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    fs::write(path, encode(board))?;

    debug!(path = %path.display(), "Saved board");

    Ok(())
}
