/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Minicross generates 100 puzzles from the built-in Hindi word list and saves
//! them in `public/hindi_crosswords.json`, where the web front-end loads them.
//!
//! # Examples
//!
//! List the words that fit in the default 5×5 grid:
//!
//! ```
//! $ minicross --ls
//! किताब (3) पढ़ने की वस्तु
//! ...
//! ```
//!
//! Generate ten reproducible puzzles and print some statistics:
//!
//! ```
//! $ minicross -c 10 --seed 42 -o /tmp/puzzles.json -s
//! ```

use clap::Parser;
use log::{debug, error};
use std::path::PathBuf;

use crate::generator::batch::{Batch, BatchConfig};
use crate::generator::puzzle_record::PuzzleRecord;
use crate::generator::random_crossword::{GeneratorConfig, RandomCrossword};
use crate::generator::vocabulary::Vocabulary;
use crate::saver::puzzles::SaverPuzzles;
use crate::saver::vocabulary::SaverVocabulary;

/// Generate mini crossword puzzles for the web front-end.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the words that fit in the grid
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = BatchConfig::default().count)]
    count: usize,

    /// Output JSON file
    #[arg(short, long, default_value = "public/hindi_crosswords.json")]
    output: PathBuf,

    /// JSON word list to use instead of the built-in Hindi words
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Number of rows and columns in the grid
    #[arg(short, long, default_value_t = GeneratorConfig::default().grid_size)]
    grid_size: usize,

    /// Minimum number of words in a puzzle
    #[arg(short, long, default_value_t = GeneratorConfig::default().min_words)]
    min_words: usize,

    /// Number of attempts per puzzle before retrying
    #[arg(short, long, default_value_t = GeneratorConfig::default().max_attempts)]
    attempts: usize,

    /// Maximum number of crossing words added during an attempt
    #[arg(short, long, default_value_t = GeneratorConfig::default().crossing_iterations)]
    iterations: usize,

    /// Number of failed puzzle generations after which to give up
    #[arg(long, default_value_t = BatchConfig::default().max_failures)]
    max_failures: usize,

    /// Seed for the random number generator, for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Verify the puzzles of an existing JSON file instead of generating puzzles
    #[arg(long, value_name = "FILE", conflicts_with = "ls")]
    check: Option<PathBuf>,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let level: &str = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if args.grid_size == 0 || args.min_words == 0 || args.attempts == 0 || args.max_failures == 0
    {
        eprintln!("The grid size, minimum words, attempts, and max failures must be at least 1");
        return 2;
    }

    //
    // Verify an existing puzzle file
    //
    if let Some(path) = args.check {
        return check_file(path);
    }

    let vocabulary: Vocabulary = match &args.words {
        Some(path) => match SaverVocabulary::new(path.clone()).get_vocabulary() {
            Ok(v) => v,
            Err(e) => {
                error!("Cannot load the word list {path:?}: {e}");
                return 1;
            }
        },
        None => Vocabulary::builtin(),
    };
    if vocabulary.is_empty() {
        error!("The word list is empty");
        return 1;
    }

    let generator_config: GeneratorConfig = GeneratorConfig {
        grid_size: args.grid_size,
        min_words: args.min_words,
        max_attempts: args.attempts,
        crossing_iterations: args.iterations,
        ..GeneratorConfig::default()
    };
    debug!("{generator_config:?}");

    //
    // List the words
    //
    if args.ls {
        for entry in vocabulary.valid_words(generator_config.grid_size) {
            println!("{} ({}) {}", entry.word, entry.len(), entry.clue);
        }
        return 0;
    }

    //
    // Generate the puzzles
    //
    let generator: RandomCrossword = match args.seed {
        Some(seed) => RandomCrossword::with_seed(generator_config, &vocabulary, seed),
        None => RandomCrossword::new(generator_config, &vocabulary),
    };
    debug!(
        "{} of {} words fit in the grid",
        generator.num_words(),
        vocabulary.len()
    );
    let mut batch: Batch = Batch::new(
        BatchConfig {
            count: args.count,
            max_failures: args.max_failures,
        },
        generator,
    );

    println!(
        "Generating {} crossword puzzles (this may take a moment)...",
        args.count
    );
    let puzzles: Vec<PuzzleRecord> = match batch.generate() {
        Ok(p) => p,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };

    let saver: SaverPuzzles = SaverPuzzles::new(args.output);
    if let Err(e) = saver.save_puzzles(&puzzles) {
        error!("Cannot save the puzzles to {:?}: {e}", saver.path());
        return 1;
    }
    println!(
        "\nSuccessfully generated {} puzzles in {}",
        puzzles.len(),
        saver.path().display()
    );

    // Print some stats
    if args.summary {
        let count: usize = puzzles.len().max(1);
        let words: usize = puzzles.iter().map(PuzzleRecord::num_words).sum();
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
    total attempts = {}
  average attempts = {}
     average words = {:.1}
          failures = {}",
            batch.duration,
            batch.duration / count as f32,
            batch.max_duration,
            batch.attempts,
            batch.attempts / count,
            words as f32 / count as f32,
            batch.failures
        );
    }
    0
}


/// Load the puzzles from the given file, verify them, and return the exit code.
fn check_file(path: PathBuf) -> u8 {
    let saver: SaverPuzzles = SaverPuzzles::new(path);
    let puzzles: Vec<PuzzleRecord> = match saver.get_puzzles() {
        Ok(p) => p,
        Err(e) => {
            error!("Cannot load the puzzles from {:?}: {e}", saver.path());
            return 1;
        }
    };

    let mut errors: usize = 0;
    for (i, puzzle) in puzzles.iter().enumerate() {
        if let Err(msg) = puzzle.check() {
            eprintln!("Puzzle #{}: {msg}", i + 1);
            errors += 1;
        }
    }
    println!(
        "{} puzzles checked in {}, {errors} with errors",
        puzzles.len(),
        saver.path().display()
    );
    if errors > 0 { 1 } else { 0 }
}
