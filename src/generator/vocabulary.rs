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

//! Words and clues used to fill the puzzles.
//!
//! The built-in list is a set of common Hindi words with short Hindi clues.
//! Another list can be loaded from a JSON file (see [`crate::saver::vocabulary`]).

use std::collections::HashSet;

use super::graphemes;

/// Built-in list of (word, clue) pairs.
// For developers: add new words to this list. Words longer than the grid are ignored.
const HINDI_WORDS: [(&str, &str); 84] = [
    ("भारत", "एक देश का नाम"),
    ("दिल्ली", "भारत की राजधानी"),
    ("मुंबई", "भारत का आर्थिक केंद्र"),
    ("कलम", "लिखने का साधन"),
    ("किताब", "पढ़ने की वस्तु"),
    ("कागज", "जिस पर लिखते हैं"),
    ("पानी", "जीवन के लिए ज़रूरी"),
    ("हवा", "साँस लेने के लिए ज़रूरी"),
    ("आगरा", "ताज महल का शहर"),
    ("गंगा", "भारत की पवित्र नदी"),
    ("नदी", "बहता हुआ पानी"),
    ("पहाड़", "ऊँची ज़मीन"),
    ("सागर", "विशाल जलराशि"),
    ("राजा", "राज्य का शासक"),
    ("रानी", "राजा की पत्नी"),
    ("घर", "रहने की जगह"),
    ("कमरा", "घर का एक हिस्सा"),
    ("आराम", "थकान मिटाना"),
    ("काम", "कार्य"),
    ("मेहनत", "परिश्रम"),
    ("सड़क", "गाड़ियाँ चलने का रास्ता"),
    ("गाड़ी", "यातायात का साधन"),
    ("रेल", "पटरी पर चलने वाली गाड़ी"),
    ("समय", "घड़ी बताती है"),
    ("दिन", "रात का उल्टा"),
    ("रात", "जब चाँद निकलता है"),
    ("सूरज", "दिन में रोशनी देता है"),
    ("तारा", "रात में चमकता है"),
    ("चाँद", "रात का राजा"),
    ("फल", "पेड़ से मिलता है, जैसे आम"),
    ("फूल", "पौधे का सुंदर भाग"),
    ("आम", "फलों का राजा"),
    ("सेब", "एक लाल फल"),
    ("कला", "आर्ट"),
    ("रंग", "होली में उपयोग होता है"),
    ("लाल", "एक रंग"),
    ("हरा", "पेड़ों का रंग"),
    ("पीला", "हल्दी का रंग"),
    ("नीला", "आसमान का रंग"),
    ("बात", "वार्तालाप"),
    ("नाम", "किसी व्यक्ति की पहचान"),
    ("प्यार", "प्रेम, स्नेह"),
    ("दोस्त", "मित्र"),
    ("माफ", "क्षमा करना"),
    ("साफ", "स्वच्छ"),
    ("सच", "झूठ का उल्टा"),
    ("खेल", "मनोरंजन की गतिविधि"),
    ("जीत", "हार का उल्टा"),
    ("हार", "पराजय"),
    ("पाँच", "एक संख्या"),
    ("सात", "एक संख्या"),
    ("भाषा", "बोलने का माध्यम"),
    ("हिंदी", "हमारी राजभाषा"),
    ("गीत", "जो गाया जाए"),
    ("गाना", "गीत गाना"),
    ("नाच", "नृत्य"),
    ("गाँव", "छोटा कस्बा"),
    ("शहर", "बड़ा नगर"),
    ("किसान", "खेती करने वाला"),
    ("मेला", "उत्सव का बाज़ार"),
    ("सेवा", "खिदमत"),
    ("माता", "माँ"),
    ("पिता", "पापा"),
    ("बेटा", "पुत्र"),
    ("बेटी", "पुत्री"),
    ("चाचा", "पिता का भाई"),
    ("मामा", "माँ का भाई"),
    ("नानी", "माँ की माँ"),
    ("दादी", "पिता की माँ"),
    ("खाना", "भोजन"),
    ("रोटी", "चपाती"),
    ("चावल", "भात"),
    ("दाल", "एक प्रकार का अन्न"),
    ("दूध", "सफ़ेद पेय"),
    ("दही", "जमा हुआ दूध"),
    ("चीनी", "शक्कर"),
    ("नमक", "लवण"),
    ("तेल", "स्निग्ध पदार्थ"),
    ("पूरी", "तली हुई रोटी"),
    ("सपना", "नींद में दिखता है"),
    ("जीवन", "ज़िंदगी"),
    ("मौत", "मृत्यु"),
    ("सुख", "दुःख का उल्टा"),
    ("दुःख", "पीड़ा"),
];

/// A word, its clue, and the grapheme clusters of the word.
#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    /// Answer, as displayed in the answer key.
    pub word: String,

    /// Clue displayed to the player.
    pub clue: String,

    /// Grapheme clusters of [`WordEntry::word`], one per grid cell.
    pub units: Vec<String>,
}

impl WordEntry {
    /// Create a [`WordEntry`] object.
    pub fn new(word: &str, clue: &str) -> Self {
        Self {
            word: String::from(word),
            clue: String::from(clue),
            units: graphemes::units(word),
        }
    }

    /// Number of grid cells the word occupies.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the word is empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// List of the words available to build puzzles.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Words, without duplicates, in their original order.
    entries: Vec<WordEntry>,
}

impl Vocabulary {
    /// Create a [`Vocabulary`] object from a list of (word, clue) pairs.
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self::from_entries(pairs.iter().map(|(w, c)| WordEntry::new(w, c)).collect())
    }

    /// Create a [`Vocabulary`] object from word entries.
    ///
    /// Empty words are ignored. When a word is listed several times, only the first entry
    /// (and therefore the first clue) is kept.
    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
        Self {
            entries: entries
                .into_iter()
                .filter(|e| !e.is_empty() && seen.insert(e.word.clone()))
                .collect(),
        }
    }

    /// Return the built-in Hindi vocabulary.
    pub fn builtin() -> Self {
        Self::new(&HINDI_WORDS)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the words that fit in a grid of the given size, longest first.
    ///
    /// Words with the same length keep their vocabulary order.
    pub fn valid_words(&self, grid_size: usize) -> Vec<WordEntry> {
        let mut words: Vec<WordEntry> = self
            .entries
            .iter()
            .filter(|e| e.len() <= grid_size)
            .cloned()
            .collect();
        words.sort_by(|a, b| b.len().cmp(&a.len()));
        words
    }
}
