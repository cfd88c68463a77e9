/*
path.rs

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

//! Ordered list of grid cells.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::position::Position;

/// Path object.
///
/// A path is used for the cells a word occupies, from its first letter to its last letter, and for
/// the cells the player selects.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(from = "Vec<Position>", into = "Vec<Position>")]
pub struct Path {
    /// Path as an ordered list of cells.
    cells: Vec<Position>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::cells`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Position>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Path {}

impl From<Vec<Position>> for Path {
    fn from(cells: Vec<Position>) -> Self {
        let visited: HashSet<Position> = cells.iter().copied().collect();
        Self { cells, visited }
    }
}

impl From<Path> for Vec<Position> {
    fn from(path: Path) -> Self {
        path.cells
    }
}

impl FromIterator<Position> for Path {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<Position>>())
    }
}

impl Path {
    /// Create an empty [`Path`] object with room for `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            cells: Vec::with_capacity(len),
            visited: HashSet::with_capacity(len),
        }
    }

    /// Add a cell at the end of the path.
    pub fn push(&mut self, cell: Position) {
        self.cells.push(cell);
        self.visited.insert(cell);
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path has no cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: &Position) -> bool {
        self.visited.contains(cell)
    }

    /// Return the cells in order.
    pub fn get(&self) -> &[Position] {
        &self.cells
    }

    /// Return the first cell of the path.
    pub fn get_first(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    /// Return the last cell of the path.
    pub fn get_last(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// Whether the path follows the opposite cells of `other`, element by element.
    pub fn is_reverse_of(&self, other: &Path) -> bool {
        self.len() == other.len() && self.cells.iter().eq(other.cells.iter().rev())
    }
}
