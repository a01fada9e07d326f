/*
crossword.rs

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

//! Grid and the words placed in it.
//!
//! A [`Crossword`] object is the working state of one generation attempt.
//! Words are only added through [`Crossword::try_add`], which keeps the grid and the placement
//! list consistent.

use std::collections::HashSet;

use super::grid::{Direction, Grid};
use super::vocabulary::WordEntry;

/// Word placed in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Word and its clue.
    pub entry: WordEntry,

    /// Row of the first grapheme.
    pub row: usize,

    /// Column of the first grapheme.
    pub col: usize,

    /// Direction of the word.
    pub direction: Direction,
}

impl Placement {
    /// Number of cells the word covers.
    pub fn len(&self) -> usize {
        self.entry.len()
    }

    /// Whether the word covers the given cell.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        let len: usize = self.len();
        match self.direction {
            Direction::Across => row == self.row && col >= self.col && col < self.col + len,
            Direction::Down => col == self.col && row >= self.row && row < self.row + len,
        }
    }

    /// Whether a word of `len` cells at the given position would run along this word, on the
    /// same line and in the same direction, sharing at least one cell.
    fn overlaps(&self, row: usize, col: usize, direction: Direction, len: usize) -> bool {
        if direction != self.direction {
            return false;
        }
        let (same_line, start, other_start) = match direction {
            Direction::Across => (row == self.row, col, self.col),
            Direction::Down => (col == self.col, row, self.row),
        };
        same_line && start < other_start + self.len() && other_start < start + len
    }
}

/// Grid with its placed words.
#[derive(Debug, Clone)]
pub struct Crossword {
    /// Cell contents.
    grid: Grid,

    /// Words in the order they were placed.
    placements: Vec<Placement>,
}

impl Crossword {
    /// Create an empty [`Crossword`] object of `size`×`size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            placements: Vec::new(),
        }
    }

    /// Return the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the placed words.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of placed words.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether no word has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Whether the word is already in the grid.
    pub fn contains(&self, word: &str) -> bool {
        self.placements.iter().any(|p| p.entry.word == word)
    }

    /// Whether an across word goes through the given cell.
    pub fn is_across_at(&self, row: usize, col: usize) -> bool {
        self.placements
            .iter()
            .any(|p| p.direction == Direction::Across && p.covers(row, col))
    }

    /// Place the word in the grid if possible, and return whether the word has been placed.
    ///
    /// On top of the grid rules (see [`Grid::can_place`]), a word is rejected if it is already
    /// in the grid, or if it would run along a placed word in the same direction.
    pub fn try_add(
        &mut self,
        entry: &WordEntry,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> bool {
        if entry.is_empty()
            || self.contains(&entry.word)
            || !self.grid.can_place(&entry.units, row, col, direction)
            || self
                .placements
                .iter()
                .any(|p| p.overlaps(row, col, direction, entry.len()))
        {
            return false;
        }
        self.grid.place(&entry.units, row, col, direction);
        self.placements.push(Placement {
            entry: entry.clone(),
            row,
            col,
            direction,
        });
        true
    }

    /// Verify that the grid and the placed words are consistent.
    ///
    /// Each word must read back from the grid at its position, words must be unique, and
    /// there must be at least `min_words` words.
    ///
    /// # Errors
    ///
    /// The method returns a message that describes the first inconsistency.
    pub fn verify(&self, min_words: usize) -> Result<(), String> {
        if self.placements.len() < min_words {
            return Err(format!(
                "{} words instead of at least {min_words}",
                self.placements.len()
            ));
        }

        let mut words: HashSet<&str> = HashSet::with_capacity(self.placements.len());
        for p in &self.placements {
            if !words.insert(p.entry.word.as_str()) {
                return Err(format!("Word {} placed twice", p.entry.word));
            }
            match self.grid.read(p.row, p.col, p.direction, p.len()) {
                Some(w) if w == p.entry.word => (),
                Some(w) => {
                    return Err(format!(
                        "Word {} at ({}, {}) {} reads {w} in the grid",
                        p.entry.word, p.row, p.col, p.direction
                    ));
                }
                None => {
                    return Err(format!(
                        "Word {} at ({}, {}) {} is outside the grid or has empty cells",
                        p.entry.word, p.row, p.col, p.direction
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> WordEntry {
        WordEntry::new(word, &format!("clue for {word}"))
    }

    #[test]
    fn test_try_add_crossing_words() {
        let mut crossword = Crossword::new(5);

        assert!(crossword.try_add(&entry("abcde"), 2, 0, Direction::Across));
        assert!(crossword.try_add(&entry("xcz"), 1, 2, Direction::Down));
        assert!(!crossword.try_add(&entry("xyz"), 1, 3, Direction::Down));
        assert_eq!(crossword.len(), 2);
        assert!(crossword.is_across_at(2, 4));
        assert!(!crossword.is_across_at(1, 2));
        assert_eq!(crossword.verify(2), Ok(()));
    }

    #[test]
    fn test_same_word_is_not_placed_twice() {
        let mut crossword = Crossword::new(5);

        assert!(crossword.try_add(&entry("abc"), 0, 0, Direction::Across));
        assert!(!crossword.try_add(&entry("abc"), 4, 0, Direction::Across));
    }

    #[test]
    fn test_word_running_along_another_is_rejected() {
        let mut crossword = Crossword::new(5);

        assert!(crossword.try_add(&entry("abcd"), 0, 0, Direction::Across));
        // "bc" matches the grid but would hide inside "abcd"
        assert!(!crossword.try_add(&entry("bc"), 0, 1, Direction::Across));
        // Same letters, perpendicular direction
        assert!(crossword.try_add(&entry("bq"), 0, 1, Direction::Down));
    }

    #[test]
    fn test_placement_covers() {
        let p = Placement {
            entry: entry("abc"),
            row: 1,
            col: 2,
            direction: Direction::Down,
        };
        assert!(p.covers(1, 2));
        assert!(p.covers(3, 2));
        assert!(!p.covers(4, 2));
        assert!(!p.covers(2, 3));
    }

    #[test]
    fn test_verify_reports_missing_words() {
        let mut crossword = Crossword::new(5);
        crossword.try_add(&entry("abc"), 0, 0, Direction::Across);
        assert!(crossword.verify(5).is_err());
        assert!(crossword.verify(1).is_ok());
    }
}
