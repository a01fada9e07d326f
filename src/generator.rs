/*
generator.rs

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

//! Generate random crossword puzzles.
//!
//! Words come from a [`vocabulary::Vocabulary`] object, either the built-in Hindi word list or a
//! list loaded from a file.
//! Each word is split into grapheme clusters (see [`graphemes`]), and each cluster takes one
//! cell in the [`grid::Grid`].
//!
//! To build a puzzle:
//!
//! * Create a [`random_crossword::RandomCrossword`] object and use its
//!   [`random_crossword::RandomCrossword::generate`] method.
//!   The method returns a [`crossword::Crossword`] object, which is a grid and the list of the
//!   words placed in it.
//!   If no attempt reaches the minimum number of words, then the method returns an error and
//!   can be retried.
//!
//! * Convert the [`crossword::Crossword`] object to a [`puzzle_record::PuzzleRecord`] object,
//!   which numbers the words and collects the clues and the answers.
//!
//! A [`batch::Batch`] object repeats these two steps until it has the requested number of
//! puzzles.

pub mod batch;
pub mod crossword;
pub mod graphemes;
pub mod grid;
pub mod puzzle_record;
pub mod random_crossword;
pub mod vocabulary;
