/*
player_input.rs

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

//! Manage the player's selections.
//!
//! The module tracks the selection in progress, the words that the player found, and the cells
//! revealed as hints.
//! The puzzle itself (grid and placements) is never modified: found and hinted states are
//! stored here, as overlays.

use log::debug;
use std::collections::BTreeSet;

use crate::generator::path::Path;
use crate::generator::placement::WordPlacement;
use crate::generator::position::Position;
use crate::selection;

/// Selection state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// No cell selected.
    #[default]
    Idle,

    /// The player selected the first cell of a word and must select the last cell.
    Pending(Position),
}

/// Result of a tap on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The cell is the first cell of a new selection.
    Started,

    /// The two cells are not on a straight line. The selection is dropped.
    Cancelled,

    /// The selection matches the placement at the given index, which is now found.
    Found(usize),

    /// The selection does not match any word that remains to be found.
    Missed,

    /// The cell is outside of the grid. Nothing changed.
    Ignored,
}

/// Manage the words that the player found and the cells that are hinted.
#[derive(Debug, Default, Clone)]
pub struct PlayerInput {
    /// Current selection.
    selection: Selection,

    /// Indexes of the placements that the player found.
    found: BTreeSet<usize>,

    /// Cells revealed as hints.
    hinted: BTreeSet<Position>,
}

impl PlayerInput {
    /// Create a [`PlayerInput`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the object.
    pub fn clear(&mut self) {
        self.selection = Selection::Idle;
        self.found.clear();
        self.hinted.clear();
    }

    /// Return the current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Drop the selection in progress.
    pub fn cancel_selection(&mut self) {
        self.selection = Selection::Idle;
    }

    /// Process a tap on the given cell.
    ///
    /// The first tap starts a selection. The second tap completes it: the cells between the two
    /// taps are compared to the placements that are not found yet, and the first matching
    /// placement is marked as found. In all cases the second tap ends the selection.
    pub fn tap(&mut self, cell: Position, placements: &[WordPlacement]) -> TapOutcome {
        let start: Position = match self.selection {
            Selection::Idle => {
                self.selection = Selection::Pending(cell);
                return TapOutcome::Started;
            }
            Selection::Pending(start) => start,
        };
        self.selection = Selection::Idle;

        let path: Path = selection::straight_line(start, cell);
        if path.is_empty() {
            debug!("Selection {start} - {cell} is not a straight line");
            return TapOutcome::Cancelled;
        }

        match selection::find_match(&path, placements, |i| self.found.contains(&i)) {
            Some(index) => {
                debug!("Selection {start} - {cell} matches placement {index}");
                self.found.insert(index);
                TapOutcome::Found(index)
            }
            None => TapOutcome::Missed,
        }
    }

    /// Whether the placement at the given index is found.
    pub fn is_found(&self, index: usize) -> bool {
        self.found.contains(&index)
    }

    /// Return the indexes of the found placements, in increasing order.
    pub fn found(&self) -> &BTreeSet<usize> {
        &self.found
    }

    /// Number of found placements.
    pub fn num_found(&self) -> usize {
        self.found.len()
    }

    /// Mark a cell as hinted. Return false if the cell was already hinted.
    pub fn add_hint(&mut self, cell: Position) -> bool {
        self.hinted.insert(cell)
    }

    /// Whether the cell is hinted.
    pub fn is_hinted(&self, cell: &Position) -> bool {
        self.hinted.contains(cell)
    }

    /// Return the hinted cells.
    pub fn hinted(&self) -> &BTreeSet<Position> {
        &self.hinted
    }
}
