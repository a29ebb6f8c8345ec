//! 9×9 puzzle grid and its backtracking solver.
//!
//! Givens are not validated: a grid with duplicate pre-filled digits is
//! searched exhaustively and reported as unsolvable.

use crate::DomainError;
use std::fmt;

pub const SIZE: usize = 9;
const BOX: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

impl Grid {
    pub fn from_cells(cells: [[u8; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Parses nine dot-separated rows of digits, `0` meaning empty.
    ///
    /// Only the row count is checked. Characters that are not digits count
    /// as empty cells, short rows are padded with empty cells and anything
    /// past the ninth column is ignored.
    pub fn parse(argument: &str) -> Result<Self, DomainError> {
        let rows: Vec<&str> = argument.split('.').collect();
        if rows.len() != SIZE {
            return Err(DomainError::InvalidArgument(
                "Invalid puzzle format".to_string(),
            ));
        }

        let mut cells = [[0u8; SIZE]; SIZE];
        for (row, text) in rows.iter().enumerate() {
            for (col, ch) in text.chars().take(SIZE).enumerate() {
                cells[row][col] = ch.to_digit(10).map_or(0, |d| d as u8);
            }
        }
        Ok(Self { cells })
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// Fills the grid in place. Returns `false` when no assignment exists,
    /// in which case the grid is left as it was given.
    pub fn solve(&mut self) -> bool {
        let Some((row, col)) = self.find_empty() else {
            return true;
        };

        for digit in 1..=9 {
            if self.is_valid(row, col, digit) {
                self.cells[row][col] = digit;
                if self.solve() {
                    return true;
                }
                self.cells[row][col] = 0;
            }
        }
        false
    }

    fn find_empty(&self) -> Option<(usize, usize)> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .find(|&(row, col)| self.cells[row][col] == 0)
    }

    fn is_valid(&self, row: usize, col: usize, digit: u8) -> bool {
        if self.cells[row].contains(&digit) {
            return false;
        }
        if (0..SIZE).any(|r| self.cells[r][col] == digit) {
            return false;
        }

        let box_row = row / BOX * BOX;
        let box_col = col / BOX * BOX;
        !(box_row..box_row + BOX)
            .any(|r| (box_col..box_col + BOX).any(|c| self.cells[r][c] == digit))
    }
}

impl fmt::Display for Grid {
    /// Same layout as the query: nine rows of digits joined by dots.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            for digit in row {
                write!(f, "{}", digit)?;
            }
        }
        Ok(())
    }
}
