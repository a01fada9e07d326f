/*
vocabulary.rs

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

//! Load a word list from a JSON file.
//!
//! The file contains an array of objects with the `word` and `clue` keys:
//!
//! ```json
//! [
//!   {"word": "भारत", "clue": "एक देश का नाम"},
//!   {"word": "कलम", "clue": "लिखने का साधन"}
//! ]
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::generator::vocabulary::{Vocabulary, WordEntry};

/// Entry in the word list file.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct VocabularyItem {
    word: String,
    clue: String,
}

/// Object to restore a [`Vocabulary`] object.
pub struct SaverVocabulary {
    /// Path to the word list file.
    words_file: PathBuf,
}

impl SaverVocabulary {
    /// Create a [`SaverVocabulary`] object for the given file.
    pub fn new(words_file: PathBuf) -> Self {
        debug!("Word list file: {words_file:?}");
        Self { words_file }
    }

    /// Retrieve the [`Vocabulary`] object from the file.
    pub fn get_vocabulary(&self) -> Result<Vocabulary, Box<dyn Error>> {
        let file: File = File::open(&self.words_file)?;
        let reader: BufReader<File> = BufReader::new(file);
        let items: Vec<VocabularyItem> = serde_json::from_reader(reader)?;
        debug!("{} words loaded", items.len());
        Ok(Vocabulary::from_entries(
            items
                .iter()
                .map(|i| WordEntry::new(i.word.trim(), i.clue.trim()))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_word_list() {
        let path = std::env::temp_dir().join(format!("minicross-words-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"[{"word": "भारत", "clue": "एक देश का नाम"}, {"word": " कलम ", "clue": "लिखने का साधन"}]"#,
        )
        .expect("cannot write");

        let vocabulary = SaverVocabulary::new(path.clone())
            .get_vocabulary()
            .expect("cannot load");
        assert_eq!(vocabulary.len(), 2);
        let words = vocabulary.valid_words(5);
        assert_eq!(words[1].word, "कलम");
        assert_eq!(words[1].len(), 3);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let saver = SaverVocabulary::new(PathBuf::from("/nonexistent/minicross/words.json"));
        assert!(saver.get_vocabulary().is_err());
    }
}
