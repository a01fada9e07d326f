/*
puzzle_record.rs

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

//! Puzzle as consumed by the web front-end.
//!
//! The [`PuzzleRecord`] object is built from a completed [`Crossword`] and serialized to JSON
//! with [`serde`]:
//!
//! ```json
//! {
//!   "grid": ["", "कि", "ता", "ब", "", ...],
//!   "gridnums": [0, 1, 0, 0, 0, ...],
//!   "across_clues": [{"number": 1, "clue": "पढ़ने की वस्तु"}],
//!   "down_clues": [{"number": 2, "clue": "..."}],
//!   "answers": {"across": {"1": "किताब"}, "down": {"2": "..."}}
//! }
//! ```
//!
//! `grid` and `gridnums` are flattened row by row.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::crossword::{Crossword, Placement};
use super::graphemes;
use super::grid::Direction;

/// Numbered clue.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Clue {
    pub number: usize,
    pub clue: String,
}

/// Answers indexed by clue number, for each direction.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Answers {
    pub across: BTreeMap<String, String>,
    pub down: BTreeMap<String, String>,
}

/// Puzzle record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PuzzleRecord {
    /// Cell contents, with an empty string for empty cells.
    pub grid: Vec<String>,

    /// Clue number of each cell, or 0 for cells that do not start a word.
    pub gridnums: Vec<usize>,

    /// Across clues, sorted by number.
    pub across_clues: Vec<Clue>,

    /// Down clues, sorted by number.
    pub down_clues: Vec<Clue>,

    /// Answer key.
    pub answers: Answers,
}

impl PuzzleRecord {
    /// Create a [`PuzzleRecord`] object from a completed crossword.
    ///
    /// Words are numbered in reading order of their first cell (row by row, then column by
    /// column). A cell that starts both an across and a down word gets a single number.
    pub fn new(crossword: &Crossword) -> Self {
        let size: usize = crossword.grid().size();
        let mut gridnums: Vec<usize> = vec![0; size * size];
        let mut across_clues: Vec<Clue> = Vec::new();
        let mut down_clues: Vec<Clue> = Vec::new();
        let mut answers: Answers = Answers::default();
        let mut next_number: usize = 1;

        let mut placements: Vec<&Placement> = crossword.placements().iter().collect();
        placements.sort_by_key(|p| (p.row, p.col));

        for p in placements {
            let index: usize = p.row * size + p.col;
            if gridnums[index] == 0 {
                gridnums[index] = next_number;
                next_number += 1;
            }
            let number: usize = gridnums[index];

            let (clues, answer_map) = match p.direction {
                Direction::Across => (&mut across_clues, &mut answers.across),
                Direction::Down => (&mut down_clues, &mut answers.down),
            };
            if !clues.iter().any(|c| c.number == number) {
                clues.push(Clue {
                    number,
                    clue: p.entry.clue.clone(),
                });
            }
            answer_map.insert(number.to_string(), p.entry.word.clone());
        }

        across_clues.sort_by_key(|c| c.number);
        down_clues.sort_by_key(|c| c.number);

        Self {
            grid: crossword.grid().flatten(),
            gridnums,
            across_clues,
            down_clues,
            answers,
        }
    }

    /// Number of rows (and columns) in the grid.
    pub fn size(&self) -> usize {
        self.grid.len().isqrt()
    }

    /// Return the number of words in the puzzle.
    pub fn num_words(&self) -> usize {
        self.answers.across.len() + self.answers.down.len()
    }

    /// Verify that the record is consistent.
    ///
    /// - The grid is square and `gridnums` has the same size.
    /// - Numbers increase in reading order, without duplicates.
    /// - Each clue has an answer and each answer has a clue.
    /// - Each answer reads back from the grid, starting at the cell with its number.
    ///
    /// # Errors
    ///
    /// The method returns a message that describes the first inconsistency.
    pub fn check(&self) -> Result<(), String> {
        let size: usize = self.size();
        if size * size != self.grid.len() || self.gridnums.len() != self.grid.len() {
            return Err(format!(
                "Grid of {} cells and {} numbers is not square",
                self.grid.len(),
                self.gridnums.len()
            ));
        }

        let numbers: Vec<usize> = self.gridnums.iter().copied().filter(|n| *n > 0).collect();
        if numbers.iter().enumerate().any(|(i, n)| *n != i + 1) {
            return Err(format!("Numbers are not in reading order: {numbers:?}"));
        }

        for (direction, clues, answers) in [
            (Direction::Across, &self.across_clues, &self.answers.across),
            (Direction::Down, &self.down_clues, &self.answers.down),
        ] {
            if clues.len() != answers.len() {
                return Err(format!(
                    "{} {direction} clues for {} answers",
                    clues.len(),
                    answers.len()
                ));
            }
            for clue in clues {
                let word: &String = answers.get(&clue.number.to_string()).ok_or_else(|| {
                    format!("No {direction} answer for clue {}", clue.number)
                })?;
                let index: usize = self
                    .gridnums
                    .iter()
                    .position(|n| *n == clue.number)
                    .ok_or_else(|| format!("Number {} not in the grid", clue.number))?;
                let read: String =
                    self.read(index / size, index % size, direction, graphemes::unit_len(word));
                if read != *word {
                    return Err(format!(
                        "{direction} answer {} is {word} but the grid reads {read}",
                        clue.number
                    ));
                }
            }
        }
        Ok(())
    }

    /// Concatenate `len` cells from the given position, stopping at the grid border.
    fn read(&self, row: usize, col: usize, direction: Direction, len: usize) -> String {
        let size: usize = self.size();
        (0..len)
            .map(|i| direction.step(row, col, i))
            .take_while(|(r, c)| *r < size && *c < size)
            .map(|(r, c)| self.grid[r * size + c].as_str())
            .collect()
    }
}
