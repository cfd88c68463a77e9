/*
letter_grid.rs

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

//! Square grid of letters.
//!
//! [`WorkGrid`] is the mutable buffer used while words are being placed.
//! Once all the words are placed, it is converted into a [`LetterGrid`], which cannot be modified
//! anymore and in which every cell has a letter.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use super::path::Path;
use super::placement::is_grid_letter;
use super::position::Position;

/// Errors when parsing a grid from text.
#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// The text has no row.
    Empty,

    /// A character is not an uppercase letter (line number, character).
    UnexpectedCharacter(usize, char),

    /// A row does not have the same number of letters as the first row (line number).
    RaggedRow(usize),

    /// The number of rows differs from the number of columns.
    NotSquare,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty grid"),
            ParseError::UnexpectedCharacter(line_num, ch) => {
                write!(f, "line {}: unexpected character: {ch:?}", line_num + 1)
            }
            ParseError::RaggedRow(line_num) => {
                write!(f, "line {}: wrong number of letters", line_num + 1)
            }
            ParseError::NotSquare => write!(f, "the grid is not square"),
        }
    }
}

impl Error for ParseError {}

/// Final puzzle grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct LetterGrid {
    /// Number of rows and columns.
    size: usize,

    /// Letters, row after row.
    letters: Vec<char>,
}

impl LetterGrid {
    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the letter at the given position, or None outside of the grid.
    pub fn get(&self, position: Position) -> Option<char> {
        if position.row < self.size && position.col < self.size {
            Some(self.letters[position.row * self.size + position.col])
        } else {
            None
        }
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(self.size)
    }

    /// Read the letters along the given path, or None if the path leaves the grid.
    pub fn word_at(&self, path: &Path) -> Option<String> {
        path.get().iter().map(|p| self.get(*p)).collect()
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            for (i, letter) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for LetterGrid {
    type Err = ParseError;

    /// Parse one row per line. Spaces between letters are ignored, and so are blank lines.
    fn from_str(s: &str) -> Result<LetterGrid, ParseError> {
        let mut letters: Vec<char> = Vec::new();
        let mut size: Option<usize> = None;
        let mut num_rows: usize = 0;

        for (line_num, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut row_len: usize = 0;
            for ch in line.chars().filter(|ch| !ch.is_whitespace()) {
                if !is_grid_letter(ch) {
                    return Err(ParseError::UnexpectedCharacter(line_num, ch));
                }
                letters.push(ch);
                row_len += 1;
            }

            match size {
                Some(s) if s != row_len => return Err(ParseError::RaggedRow(line_num)),
                Some(_) => (),
                None => size = Some(row_len),
            }
            num_rows += 1;
        }

        match size {
            None => Err(ParseError::Empty),
            Some(s) if s != num_rows => Err(ParseError::NotSquare),
            Some(s) => Ok(LetterGrid { size: s, letters }),
        }
    }
}

impl From<LetterGrid> for Vec<String> {
    fn from(grid: LetterGrid) -> Self {
        grid.rows().map(|row| row.iter().collect()).collect()
    }
}

impl TryFrom<Vec<String>> for LetterGrid {
    type Error = ParseError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        rows.join("\n").parse()
    }
}

/// Grid under construction.
///
/// Cells start empty. Words are written into the grid, and then the remaining empty cells are
/// filled by [`WorkGrid::into_letter_grid`].
#[derive(Debug, Clone)]
pub(crate) struct WorkGrid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl WorkGrid {
    /// Create an empty `size` by `size` grid.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Letter at the given position, or None if the cell is still empty.
    /// The position must be inside the grid.
    pub(crate) fn get(&self, position: Position) -> Option<char> {
        self.cells[position.row * self.size + position.col]
    }

    /// Write a letter. The position must be inside the grid.
    pub(crate) fn set(&mut self, position: Position, letter: char) {
        self.cells[position.row * self.size + position.col] = Some(letter);
    }

    /// Number of cells that have no letter yet.
    pub(crate) fn num_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Fill the empty cells with the letters that `filler` returns, and return the final grid.
    ///
    /// Cells are filled row after row.
    pub(crate) fn into_letter_grid<F>(self, mut filler: F) -> LetterGrid
    where
        F: FnMut() -> char,
    {
        LetterGrid {
            size: self.size,
            letters: self
                .cells
                .into_iter()
                .map(|c| c.unwrap_or_else(&mut filler))
                .collect(),
        }
    }
}
