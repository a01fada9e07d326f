/*
grid.rs

Copyright 2025 Hervé Quatremain

This file is part of Minicross.

Minicross is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Minicross is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Minicross. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Square grid of cells holding grapheme clusters.
//!
//! A cell is either empty or holds one grapheme cluster.
//! Once a cell is filled, its content never changes: a new word can only go through an occupied
//! cell if it has the same grapheme at that position.

use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Direction of a word in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Left to right, along a row.
    Across,

    /// Top to bottom, along a column.
    Down,
}

impl Direction {
    /// Return the coordinates of the cell at the given offset from the start cell.
    pub fn step(&self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Direction::Across => (row, col + offset),
            Direction::Down => (row + offset, col),
        }
    }
}

/// Grid object.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cells in row-major order. [`None`] is an empty cell.
    cells: Vec<Option<String>>,
}

impl Grid {
    /// Create an empty [`Grid`] object of `size`×`size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the content of the cell, or [`None`] if the cell is empty or outside the grid.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col].as_deref()
    }

    /// Return the occupied cells as (row, column, grapheme) tuples, in row-major order.
    pub fn occupied(&self) -> Vec<(usize, usize, String)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| {
                c.as_ref()
                    .map(|unit| (i / self.size, i % self.size, unit.clone()))
            })
            .collect()
    }

    /// Return the cells in row-major order, with an empty string for empty cells.
    pub fn flatten(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|c| c.clone().unwrap_or_default())
            .collect()
    }

    /// Whether the word fits in the grid at the given position.
    ///
    /// The word must not go beyond the grid borders, and each cell it covers must be empty or
    /// already hold the same grapheme.
    pub fn can_place(&self, units: &[String], row: usize, col: usize, direction: Direction) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let start: usize = match direction {
            Direction::Across => col,
            Direction::Down => row,
        };
        if start + units.len() > self.size {
            return false;
        }
        units.iter().enumerate().all(|(i, unit)| {
            let (r, c) = direction.step(row, col, i);
            match self.get_cell(r, c) {
                Some(current) => current == unit,
                None => true,
            }
        })
    }

    /// Write the word in the grid.
    ///
    /// The caller must first verify that the word fits with [`Grid::can_place`].
    pub fn place(&mut self, units: &[String], row: usize, col: usize, direction: Direction) {
        for (i, unit) in units.iter().enumerate() {
            let (r, c) = direction.step(row, col, i);
            self.cells[r * self.size + c] = Some(unit.clone());
        }
    }

    /// Read `len` cells from the given position, or return [`None`] if one of the cells is
    /// empty or outside the grid.
    pub fn read(&self, row: usize, col: usize, direction: Direction, len: usize) -> Option<String> {
        let mut word: String = String::new();
        for i in 0..len {
            let (r, c) = direction.step(row, col, i);
            word.push_str(self.get_cell(r, c)?);
        }
        Some(word)
    }

    /// Print the grid.
    pub fn debug(&self) {
        for row in self.cells.chunks(self.size) {
            let s: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("·")).collect();
            debug!("    {}", s.join(" "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::graphemes;

    #[test]
    fn test_place_across_and_read_back() {
        let mut grid = Grid::new(5);
        let units = graphemes::units("किताब");

        assert!(grid.can_place(&units, 1, 2, Direction::Across));
        grid.place(&units, 1, 2, Direction::Across);
        assert_eq!(grid.get_cell(1, 2), Some("कि"));
        assert_eq!(grid.get_cell(1, 3), Some("ता"));
        assert_eq!(grid.get_cell(1, 4), Some("ब"));
        assert_eq!(grid.read(1, 2, Direction::Across, 3), Some(String::from("किताब")));
        assert_eq!(grid.occupied().len(), 3);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let grid = Grid::new(5);
        let units = graphemes::units("abcd");

        assert!(grid.can_place(&units, 0, 1, Direction::Across));
        assert!(!grid.can_place(&units, 0, 2, Direction::Across));
        assert!(grid.can_place(&units, 1, 4, Direction::Down));
        assert!(!grid.can_place(&units, 2, 4, Direction::Down));
        assert!(!grid.can_place(&units, 5, 0, Direction::Across));
        assert!(!grid.can_place(&units, 0, 5, Direction::Down));
    }

    #[test]
    fn test_crossing_must_match() {
        let mut grid = Grid::new(5);
        let across = graphemes::units("abcde");
        grid.place(&across, 2, 0, Direction::Across);

        // "xcz" crosses "abcde" on "c"
        assert!(grid.can_place(&graphemes::units("xcz"), 1, 2, Direction::Down));
        // "xyz" would overwrite "c" with "y"
        assert!(!grid.can_place(&graphemes::units("xyz"), 1, 2, Direction::Down));
    }

    #[test]
    fn test_place_is_idempotent() {
        let mut grid = Grid::new(5);
        let units = graphemes::units("abc");
        grid.place(&units, 0, 0, Direction::Down);
        let copy = grid.clone();

        assert!(grid.can_place(&units, 0, 0, Direction::Down));
        grid.place(&units, 0, 0, Direction::Down);
        assert_eq!(grid, copy);
    }

    #[test]
    fn test_flatten_row_major() {
        let mut grid = Grid::new(3);
        grid.place(&graphemes::units("ab"), 1, 1, Direction::Across);
        assert_eq!(grid.flatten(), vec!["", "", "", "", "a", "b", "", "", ""]);
    }

    #[test]
    fn test_read_stops_on_empty_cell() {
        let mut grid = Grid::new(5);
        grid.place(&graphemes::units("ab"), 0, 0, Direction::Across);
        assert_eq!(grid.read(0, 0, Direction::Across, 3), None);
        assert_eq!(grid.read(0, 0, Direction::Across, 2), Some(String::from("ab")));
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Across.to_string(), "across");
        assert_eq!(Direction::Down.step(1, 2, 3), (4, 2));
        assert_eq!(Direction::Across.step(1, 2, 3), (1, 5));
    }
}
