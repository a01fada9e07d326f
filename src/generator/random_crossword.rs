/*
random_crossword.rs

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

//! Generate a random crossword.
//!
//! Each attempt starts from an empty grid:
//!
//! 1. A long word (the seed) is written at a random position.
//! 2. Words are then added one at a time, each one crossing an occupied cell on a matching
//!    grapheme.
//! 3. If the grid ends up with enough words, the attempt succeeds. Otherwise the grid is dropped
//!    and a new attempt starts.

use log::{Level, debug, log_enabled};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::crossword::Crossword;
use super::grid::Direction;
use super::vocabulary::{Vocabulary, WordEntry};

/// Generation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Number of rows and columns in the grid.
    pub grid_size: usize,

    /// Minimum number of words for the puzzle to be accepted.
    pub min_words: usize,

    /// Number of attempts before giving up.
    pub max_attempts: usize,

    /// Maximum number of crossing words to try to add during an attempt.
    pub crossing_iterations: usize,

    /// Minimum length of the seed word.
    pub seed_min_len: usize,

    /// Probability of selecting a word as the seed when scanning the vocabulary.
    pub seed_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: 5,
            min_words: 5,
            max_attempts: 100,
            crossing_iterations: 25,
            seed_min_len: 4,
            seed_probability: 0.5,
        }
    }
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GenerateError {
    /// The vocabulary does not have enough words that fit in the grid.
    NotEnoughWords { available: usize, required: usize },

    /// No attempt produced a grid with enough words.
    AttemptsExceeded(usize),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::NotEnoughWords {
                available,
                required,
            } => write!(
                f,
                "only {available} words fit in the grid, at least {required} are required"
            ),
            GenerateError::AttemptsExceeded(attempts) => {
                write!(f, "no puzzle found after {attempts} attempts")
            }
        }
    }
}

impl Error for GenerateError {}

/// [`RandomCrossword`] object.
pub struct RandomCrossword {
    /// Generation parameters.
    pub config: GeneratorConfig,

    /// Number of attempts it took to generate the last crossword.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last crossword.
    pub duration: f32,

    /// Words that fit in the grid, longest first.
    words: Vec<WordEntry>,

    /// Random number generator.
    rng: StdRng,
}

impl RandomCrossword {
    /// Create the object.
    pub fn new(config: GeneratorConfig, vocabulary: &Vocabulary) -> Self {
        Self::with_rng(config, vocabulary, StdRng::from_os_rng())
    }

    /// Create the object with a seeded random number generator, for reproducible puzzles.
    pub fn with_seed(config: GeneratorConfig, vocabulary: &Vocabulary, seed: u64) -> Self {
        Self::with_rng(config, vocabulary, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GeneratorConfig, vocabulary: &Vocabulary, rng: StdRng) -> Self {
        Self {
            config,
            iteration: 0,
            duration: 0.0,
            words: vocabulary.valid_words(config.grid_size),
            rng,
        }
    }

    /// Number of words that fit in the grid.
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Generate and return a random crossword.
    ///
    /// # Errors
    ///
    /// The method returns an error if the vocabulary cannot fill a puzzle (there are fewer
    /// words than [`GeneratorConfig::min_words`]), or if no attempt reached the minimum number
    /// of words. In that later case, the method can be retried.
    pub fn generate(&mut self) -> Result<Crossword, GenerateError> {
        self.iteration = 0;
        self.duration = 0.0;
        let start: Instant = Instant::now();

        if self.words.len() < self.config.min_words {
            return Err(GenerateError::NotEnoughWords {
                available: self.words.len(),
                required: self.config.min_words,
            });
        }

        while self.iteration < self.config.max_attempts {
            self.iteration += 1;
            let crossword: Crossword = self.attempt();
            debug!(
                "Attempt {}: {} words placed",
                self.iteration,
                crossword.len()
            );
            if crossword.len() >= self.config.min_words {
                self.duration = start.elapsed().as_secs_f32();
                if log_enabled!(Level::Debug) {
                    crossword.grid().debug();
                }
                return Ok(crossword);
            }
        }
        self.duration = start.elapsed().as_secs_f32();
        Err(GenerateError::AttemptsExceeded(self.iteration))
    }

    /// Fill a new grid. The returned crossword might not have enough words.
    fn attempt(&mut self) -> Crossword {
        let mut crossword: Crossword = Crossword::new(self.config.grid_size);

        self.place_seed(&mut crossword);
        if crossword.is_empty() {
            debug!("    No seed word selected");
            return crossword;
        }
        for _ in 0..self.config.crossing_iterations {
            // Every occupied cell and every word have been tried: the next iterations would not
            // find anything either
            if !self.place_crossing(&mut crossword) {
                break;
            }
        }
        crossword
    }

    /// Write the first word at a random position.
    ///
    /// Words are scanned longest first, and each long enough word is selected with a
    /// [`GeneratorConfig::seed_probability`] chance.
    fn place_seed(&mut self, crossword: &mut Crossword) {
        let size: usize = self.config.grid_size;
        // Small grids cannot hold long seeds
        let min_len: usize = self.config.seed_min_len.min(size);

        for entry in &self.words {
            if entry.len() < min_len
                || !self.rng.random_bool(self.config.seed_probability)
            {
                continue;
            }
            let max_start: usize = size - entry.len();
            let (direction, row, col) = if self.rng.random_bool(0.5) {
                (
                    Direction::Across,
                    self.rng.random_range(0..size),
                    self.rng.random_range(0..=max_start),
                )
            } else {
                (
                    Direction::Down,
                    self.rng.random_range(0..=max_start),
                    self.rng.random_range(0..size),
                )
            };
            if crossword.try_add(entry, row, col, direction) {
                debug!(
                    "    Seed {} at ({row}, {col}) {direction}",
                    entry.word
                );
                return;
            }
        }
    }

    /// Add one word that crosses an occupied cell and return whether a word has been placed.
    fn place_crossing(&mut self, crossword: &mut Crossword) -> bool {
        // Randomize the order in which to test the cells and the words
        let mut slots: Vec<(usize, usize, String)> = crossword.grid().occupied();
        slots.shuffle(&mut self.rng);
        let mut order: Vec<usize> = (0..self.words.len()).collect();

        for (r, c, unit) in slots {
            // Cells of an across word get a down word, other cells get an across word
            let direction: Direction = if crossword.is_across_at(r, c) {
                Direction::Down
            } else {
                Direction::Across
            };

            order.shuffle(&mut self.rng);
            for &w in &order {
                let entry: &WordEntry = &self.words[w];
                if crossword.contains(&entry.word) {
                    continue;
                }
                for (i, u) in entry.units.iter().enumerate() {
                    if *u != unit {
                        continue;
                    }
                    let (row, col) = match direction {
                        Direction::Across if i <= c => (r, c - i),
                        Direction::Down if i <= r => (r - i, c),
                        _ => continue,
                    };
                    if crossword.try_add(entry, row, col, direction) {
                        debug!(
                            "    {} at ({row}, {col}) {direction}, crossing {unit} at ({r}, {c})",
                            entry.word
                        );
                        return true;
                    }
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_builtin() {
        let config = GeneratorConfig {
            max_attempts: 5000,
            ..GeneratorConfig::default()
        };
        for seed in 0..5 {
            let mut generator = RandomCrossword::with_seed(config, &Vocabulary::builtin(), seed);
            let crossword = generator.generate().expect("no crossword generated");

            assert!(crossword.len() >= 5);
            assert!(generator.iteration >= 1);
            assert_eq!(crossword.verify(5), Ok(()));
        }
    }

    #[test]
    fn test_same_seed_same_crossword() {
        let config = GeneratorConfig {
            max_attempts: 5000,
            ..GeneratorConfig::default()
        };
        let vocabulary = Vocabulary::builtin();
        let c1 = RandomCrossword::with_seed(config, &vocabulary, 7)
            .generate()
            .expect("no crossword generated");
        let c2 = RandomCrossword::with_seed(config, &vocabulary, 7)
            .generate()
            .expect("no crossword generated");
        assert_eq!(c1.placements(), c2.placements());
    }

    #[test]
    fn test_words_cross_on_matching_graphemes() {
        let vocabulary = Vocabulary::new(&[
            ("abcde", "1"),
            ("bxdy", "2"),
            ("cyb", "3"),
            ("eab", "4"),
            ("dace", "5"),
            ("ybe", "6"),
            ("xa", "7"),
            ("ad", "8"),
        ]);
        let config = GeneratorConfig {
            max_attempts: 5000,
            ..GeneratorConfig::default()
        };
        let mut generator = RandomCrossword::with_seed(config, &vocabulary, 3);
        let crossword = generator.generate().expect("no crossword generated");

        assert_eq!(crossword.verify(5), Ok(()));
        // Every word after the seed shares at least one cell with another word
        let placements = crossword.placements();
        for p in &placements[1..] {
            let shared = (0..p.len()).any(|i| {
                let (r, c) = p.direction.step(p.row, p.col, i);
                placements
                    .iter()
                    .any(|other| other.entry.word != p.entry.word && other.covers(r, c))
            });
            assert!(shared, "{} does not cross any word", p.entry.word);
        }
    }

    #[test]
    fn test_not_enough_words() {
        let vocabulary = Vocabulary::new(&[
            ("abcd", "1"),
            ("bcda", "2"),
            ("cdab", "3"),
            ("dabc", "4"),
            ("abcdefgh", "too long"),
        ]);
        let mut generator =
            RandomCrossword::with_seed(GeneratorConfig::default(), &vocabulary, 1);

        assert_eq!(
            generator.generate().err(),
            Some(GenerateError::NotEnoughWords {
                available: 4,
                required: 5
            })
        );
    }

    #[test]
    fn test_attempts_exceeded_without_shared_graphemes() {
        let vocabulary = Vocabulary::new(&[
            ("abcd", "1"),
            ("efgh", "2"),
            ("ijkl", "3"),
            ("mnop", "4"),
            ("qrst", "5"),
        ]);
        let config = GeneratorConfig {
            max_attempts: 20,
            ..GeneratorConfig::default()
        };
        let mut generator = RandomCrossword::with_seed(config, &vocabulary, 1);

        assert_eq!(
            generator.generate().err(),
            Some(GenerateError::AttemptsExceeded(20))
        );
        assert_eq!(generator.iteration, 20);
    }
}
