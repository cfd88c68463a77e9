/*
placement.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordsearch.

Wordsearch is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordsearch is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordsearch. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Words and where they are in the grid.

use serde::{Deserialize, Serialize};

use super::path::Path;

/// Whether the character can be written into a grid cell: a letter that is uppercase.
///
/// Letters without case (for example ideographs) and modifier letters are not grid letters.
pub fn is_grid_letter(ch: char) -> bool {
    ch.is_alphabetic() && ch.is_uppercase()
}

/// Return the form of the word that is written into the grid: uppercase letters only.
///
/// The word is uppercased first, and then everything that is not a grid letter is removed
/// (spaces, punctuation, digits, caseless letters). The result is empty when nothing is left.
pub fn normalize(word: &str) -> String {
    word.trim()
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|ch| is_grid_letter(*ch))
        .collect()
}

/// Where a word ended up on the board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordPlacement {
    /// Word as provided, for example "Wasser".
    pub original: String,

    /// Normalized form written into the grid, for example "WASSER".
    pub normalized: String,

    /// Cells the word occupies, from its first letter to its last letter.
    pub cells: Path,
}
