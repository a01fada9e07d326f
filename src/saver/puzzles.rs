/*
puzzles.rs

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

//! Save and restore the generated puzzles.
//!
//! The saved object is a JSON array of [`PuzzleRecord`] objects, indented for readability.
//! Non-ASCII characters are written as is (UTF-8), not escaped.

use log::debug;
use std::error::Error;
use std::fs::{File, create_dir_all};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::generator::puzzle_record::PuzzleRecord;

/// Object to save and restore a list of puzzles.
pub struct SaverPuzzles {
    /// Path to the output file.
    save_file: PathBuf,
}

impl SaverPuzzles {
    /// Create a [`SaverPuzzles`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Puzzles file: {save_file:?}");
        Self { save_file }
    }

    /// Return the path to the file.
    pub fn path(&self) -> &PathBuf {
        &self.save_file
    }

    /// Save the provided puzzles.
    ///
    /// The parent directory is created if it does not exist.
    pub fn save_puzzles(&self, puzzles: &[PuzzleRecord]) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent()
            && !dir.as_os_str().is_empty()
        {
            create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, puzzles)?;
        writer.flush()?;
        Ok(())
    }

    /// Retrieve the puzzles from the file.
    pub fn get_puzzles(&self) -> Result<Vec<PuzzleRecord>, Box<dyn Error>> {
        let file: File = File::open(&self.save_file)?;
        let reader: BufReader<File> = BufReader::new(file);
        let puzzles: Vec<PuzzleRecord> = serde_json::from_reader(reader)?;
        Ok(puzzles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::crossword::Crossword;
    use crate::generator::grid::Direction;
    use crate::generator::vocabulary::WordEntry;
    use std::fs;

    #[test]
    fn test_save_creates_directory_and_keeps_unicode() {
        let mut crossword = Crossword::new(5);
        crossword.try_add(
            &WordEntry::new("किताब", "पढ़ने की वस्तु"),
            0,
            0,
            Direction::Across,
        );
        let puzzles = vec![PuzzleRecord::new(&crossword)];

        let dir = std::env::temp_dir().join(format!("minicross-test-{}", std::process::id()));
        let saver = SaverPuzzles::new(dir.join("public").join("puzzles.json"));
        saver.save_puzzles(&puzzles).expect("cannot save");

        let text = fs::read_to_string(saver.path()).expect("cannot read");
        assert!(text.contains("किताब"));
        assert!(!text.contains("\\u"));
        assert!(text.starts_with("[\n  {"));

        let restored = saver.get_puzzles().expect("cannot restore");
        assert_eq!(restored, puzzles);

        let _ = fs::remove_dir_all(&dir);
    }
}
