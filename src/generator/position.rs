/*
position.rs

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

//! Grid coordinates and placement directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Cell coordinates in the grid.
///
/// Positions are ordered row first, then column (the derived ordering follows the field order).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row, starting at 0 (top).
    pub row: usize,

    /// Column, starting at 0 (left).
    pub col: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the position `steps` cells away in the given direction, or None if that position
    /// would be outside of a `size` by `size` grid.
    pub fn step(&self, direction: Direction, steps: usize, size: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row: isize = self.row as isize + dr * steps as isize;
        let col: isize = self.col as isize + dc * steps as isize;

        if (0..size as isize).contains(&row) && (0..size as isize).contains(&col) {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction in which the letters of a word are written.
///
/// The orthogonal directions come first so that the `0..NUM_ORTHOGONAL` range of
/// [`Direction::from_repr`] only selects orthogonal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

/// Number of horizontal and vertical directions.
pub const NUM_ORTHOGONAL: u8 = 4;

/// Number of directions, including diagonals.
pub const NUM_ALL: u8 = 8;

impl Direction {
    /// Return the row and column increments for one step in that direction.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Number of directions available, depending on whether diagonals are allowed.
    pub fn count(diagonals: bool) -> u8 {
        if diagonals { NUM_ALL } else { NUM_ORTHOGONAL }
    }
}
