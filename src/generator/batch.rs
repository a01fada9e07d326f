/*
batch.rs

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

//! Generate a list of puzzles.
//!
//! A failed generation is retried with fresh random attempts until the requested number of
//! puzzles is reached.
//! The total number of failures is capped so that a vocabulary unable to produce puzzles does not
//! loop forever.

use log::{debug, info, warn};
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::crossword::Crossword;
use super::puzzle_record::PuzzleRecord;
use super::random_crossword::{GenerateError, RandomCrossword};

/// Batch parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchConfig {
    /// Number of puzzles to generate.
    pub count: usize,

    /// Number of failed generations after which the batch is abandoned.
    pub max_failures: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            count: 100,
            max_failures: 1000,
        }
    }
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum BatchError {
    /// The generator cannot produce any puzzle.
    Generate(GenerateError),

    /// Too many generations failed.
    TooManyFailures { generated: usize, failures: usize },

    /// A generated puzzle is inconsistent (this is a bug).
    InvalidPuzzle(String),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BatchError::Generate(e) => write!(f, "{e}"),
            BatchError::TooManyFailures {
                generated,
                failures,
            } => write!(
                f,
                "giving up after {failures} failed generations ({generated} puzzles generated)"
            ),
            BatchError::InvalidPuzzle(msg) => write!(f, "invalid puzzle: {msg}"),
        }
    }
}

impl Error for BatchError {}

/// [`Batch`] object.
pub struct Batch {
    /// Batch parameters.
    pub config: BatchConfig,

    /// Total number of attempts, including the attempts of failed generations.
    pub attempts: usize,

    /// Number of failed generations.
    pub failures: usize,

    /// Duration in seconds it took to generate the batch.
    pub duration: f32,

    /// Longest duration in seconds for a single successful generation.
    pub max_duration: f32,

    /// Puzzle generator.
    generator: RandomCrossword,
}

impl Batch {
    /// Create a [`Batch`] object.
    pub fn new(config: BatchConfig, generator: RandomCrossword) -> Self {
        Self {
            config,
            attempts: 0,
            failures: 0,
            duration: 0.0,
            max_duration: 0.0,
            generator,
        }
    }

    /// Generate and return the puzzles.
    ///
    /// # Errors
    ///
    /// The method returns an error if the vocabulary cannot produce puzzles, if the number of
    /// failed generations reaches [`BatchConfig::max_failures`], or if a generated puzzle is
    /// inconsistent.
    pub fn generate(&mut self) -> Result<Vec<PuzzleRecord>, BatchError> {
        let start: Instant = Instant::now();
        self.attempts = 0;
        self.failures = 0;
        self.max_duration = 0.0;

        let mut puzzles: Vec<PuzzleRecord> = Vec::with_capacity(self.config.count);
        while puzzles.len() < self.config.count {
            let ret: Result<Crossword, GenerateError> = self.generator.generate();
            self.attempts += self.generator.iteration;
            match ret {
                Ok(crossword) => {
                    if self.generator.duration > self.max_duration {
                        self.max_duration = self.generator.duration;
                    }

                    // Verify the crossword and the resulting record before keeping the puzzle
                    crossword
                        .verify(self.generator.config.min_words)
                        .map_err(BatchError::InvalidPuzzle)?;
                    let record: PuzzleRecord = PuzzleRecord::new(&crossword);
                    record.check().map_err(BatchError::InvalidPuzzle)?;

                    puzzles.push(record);
                    info!(
                        "Generated puzzle #{} ({} words, {} attempts)",
                        puzzles.len(),
                        crossword.len(),
                        self.generator.iteration
                    );
                }
                Err(GenerateError::AttemptsExceeded(n)) => {
                    self.failures += 1;
                    warn!(
                        "No puzzle after {n} attempts, retrying (failure {}/{})",
                        self.failures, self.config.max_failures
                    );
                    if self.failures >= self.config.max_failures {
                        self.duration = start.elapsed().as_secs_f32();
                        return Err(BatchError::TooManyFailures {
                            generated: puzzles.len(),
                            failures: self.failures,
                        });
                    }
                }
                Err(e) => return Err(BatchError::Generate(e)),
            }
        }
        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Batch of {} puzzles: attempts = {}  failures = {}  duration = {}",
            puzzles.len(),
            self.attempts,
            self.failures,
            self.duration
        );
        Ok(puzzles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random_crossword::GeneratorConfig;
    use crate::generator::vocabulary::Vocabulary;

    #[test]
    fn test_generate_builtin_batch() {
        let generator = RandomCrossword::with_seed(
            GeneratorConfig::default(),
            &Vocabulary::builtin(),
            42,
        );
        let mut batch = Batch::new(
            BatchConfig {
                count: 3,
                ..BatchConfig::default()
            },
            generator,
        );
        let puzzles = batch.generate().expect("batch failed");

        assert_eq!(puzzles.len(), 3);
        for puzzle in &puzzles {
            assert!(puzzle.num_words() >= 5);
            assert_eq!(puzzle.grid.len(), 25);
            assert_eq!(puzzle.check(), Ok(()));
        }
        assert!(batch.attempts >= 3);
    }

    #[test]
    fn test_degenerate_vocabulary_stops() {
        let vocabulary = Vocabulary::new(&[("ab", "1"), ("bc", "2"), ("ca", "3")]);
        let generator = RandomCrossword::with_seed(GeneratorConfig::default(), &vocabulary, 1);
        let mut batch = Batch::new(BatchConfig::default(), generator);

        assert_eq!(
            batch.generate(),
            Err(BatchError::Generate(GenerateError::NotEnoughWords {
                available: 3,
                required: 5
            }))
        );
    }

    #[test]
    fn test_failure_ceiling() {
        let vocabulary = Vocabulary::new(&[
            ("abcd", "1"),
            ("efgh", "2"),
            ("ijkl", "3"),
            ("mnop", "4"),
            ("qrst", "5"),
        ]);
        let config = GeneratorConfig {
            max_attempts: 5,
            ..GeneratorConfig::default()
        };
        let generator = RandomCrossword::with_seed(config, &vocabulary, 1);
        let mut batch = Batch::new(
            BatchConfig {
                count: 10,
                max_failures: 3,
            },
            generator,
        );

        assert_eq!(
            batch.generate(),
            Err(BatchError::TooManyFailures {
                generated: 0,
                failures: 3
            })
        );
        assert_eq!(batch.attempts, 15);
    }
}
