/*
graphemes.rs

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

//! Split words into the characters the player sees.
//!
//! In Devanagari, a single visible character is often made of several code points: a consonant
//! followed by a vowel sign (`कि`), a nukta (`ड़`), or a candrabindu (`चाँ`).
//! Each grid cell holds one of these extended grapheme clusters, never a single code point, so
//! all length and bounds computations use the number of clusters.

use unicode_segmentation::UnicodeSegmentation;

/// Return the ordered list of grapheme clusters for the given word.
///
/// Concatenating the returned units gives back the original word.
pub fn units(word: &str) -> Vec<String> {
    word.graphemes(true).map(String::from).collect()
}

/// Return the number of grapheme clusters in the given word.
pub fn unit_len(word: &str) -> usize {
    word.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_signs_stay_with_consonant() {
        assert_eq!(units("कमरा"), vec!["क", "म", "रा"]);
        assert_eq!(units("किताब"), vec!["कि", "ता", "ब"]);
        assert_eq!(unit_len("किताब"), 3);
    }

    #[test]
    fn test_candrabindu_and_nukta() {
        assert_eq!(units("चाँद"), vec!["चाँ", "द"]);
        assert_eq!(unit_len("सड़क"), 3);
    }

    #[test]
    fn test_concatenation_gives_back_word() {
        for word in ["भारत", "गाड़ी", "पाँच", "दुःख", "hello"] {
            assert_eq!(units(word).concat(), word);
            assert_eq!(units(word).len(), unit_len(word));
        }
    }

    #[test]
    fn test_combining_latin_accent() {
        assert_eq!(units("e\u{301}te\u{301}"), vec!["e\u{301}", "t", "e\u{301}"]);
    }

    #[test]
    fn test_empty_word() {
        assert!(units("").is_empty());
        assert_eq!(unit_len(""), 0);
    }
}
