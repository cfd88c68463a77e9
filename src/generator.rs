/*
generator.rs

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

//! Build word-search grids.
//!
//! A puzzle is built from a list of words and a [`random_grid::GridOptions`] object.
//! The words are placed one at a time along straight lines in a square grid:
//!
//! * Each word is first normalized (see [`placement::normalize`]).
//!   Words that contain no letter are ignored.
//!
//! * For each word, random directions ([`position::Direction`]) and random starting cells
//!   ([`position::Position`]) are tried until the word fits, or until
//!   [`random_grid::MAX_ATTEMPTS_PER_WORD`] attempts have been made.
//!   In that later case the word is reported as skipped.
//!
//! * The remaining empty cells are filled with random letters.
//!
//! The result is a [`random_grid::GridBuild`] object that stores the final
//! [`letter_grid::LetterGrid`], the [`placement::WordPlacement`] of every placed word (its
//! [`path::Path`] in the grid), and the skipped words.
//!
//! The random source is provided by the caller, so that a given seed always produces the same
//! puzzle.
//! The [`random_grid::GenerateGrid`] trait abstracts the placement strategy; the
//! [`random_grid::RandomGrid`] object is the only strategy so far.

pub mod letter_grid;
pub mod path;
pub mod placement;
pub mod position;
pub mod random_grid;
