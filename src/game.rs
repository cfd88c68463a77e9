/*
game.rs

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

//! Manage the status of a game in progress.

use log::{debug, info};
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::generator::letter_grid::LetterGrid;
use crate::generator::placement::WordPlacement;
use crate::generator::position::Position;
use crate::generator::random_grid::{GenerateGrid, GridBuild, GridError, GridOptions};
use crate::player_input::{PlayerInput, Selection, TapOutcome};

/// State of a grid cell, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Row of the cell.
    pub row: usize,

    /// Column of the cell.
    pub col: usize,

    /// Letter in the cell.
    pub letter: char,

    /// Whether the cell belongs to a word that the player found.
    pub is_found: bool,

    /// Whether the cell is revealed as a hint (and not found yet).
    pub is_hint: bool,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Puzzle being played. It is never modified during the game.
    build: GridBuild,

    /// Selection, found words, and hinted cells.
    player_input: PlayerInput,

    /// Number of hints that the player asked for.
    hints_used: usize,

    /// Whether the player paused the game.
    pub paused: bool,

    /// Whether all the words are found.
    solved: bool,

    /// Time when the game started. Used to compute game duration.
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,
}

impl Game {
    /// Create a [`Game`] object for the given puzzle.
    pub fn new(build: GridBuild) -> Self {
        info!(
            "New game: {}x{} grid, {} words to find",
            build.grid.size(),
            build.grid.size(),
            build.placements.len()
        );
        let solved: bool = build.placements.is_empty();
        Self {
            build,
            player_input: PlayerInput::new(),
            hints_used: 0,
            paused: false,
            solved,
            start_time: Instant::now(),
            pause_duration: None,
        }
    }

    /// Build a new puzzle with the given generator and create the [`Game`] object for it.
    ///
    /// # Errors
    ///
    /// The method returns the generator error, when the options are not valid.
    pub fn generate(
        generator: &mut dyn GenerateGrid,
        words: &[&str],
        options: &GridOptions,
    ) -> Result<Self, GridError> {
        Ok(Self::new(generator.create_grid(words, options)?))
    }

    /// Restart the game (player inputs, hints, and timer), but keep the puzzle.
    pub fn reset(&mut self) {
        self.player_input.clear();
        self.hints_used = 0;
        self.paused = false;
        self.solved = self.build.placements.is_empty();
        self.start_time = Instant::now();
        self.pause_duration = None;
    }

    /// Return the puzzle.
    pub fn build(&self) -> &GridBuild {
        &self.build
    }

    /// Return the letter grid.
    pub fn grid(&self) -> &LetterGrid {
        &self.build.grid
    }

    /// Return the words to find.
    pub fn placements(&self) -> &[WordPlacement] {
        &self.build.placements
    }

    /// Return the words that could not be placed in the grid.
    pub fn skipped(&self) -> &[String] {
        &self.build.skipped
    }

    /// Return the current selection.
    pub fn selection(&self) -> Selection {
        self.player_input.selection()
    }

    /// Whether the placement at the given index is found.
    pub fn is_found(&self, index: usize) -> bool {
        self.player_input.is_found(index)
    }

    /// Return the number of found words.
    pub fn num_found(&self) -> usize {
        self.player_input.num_found()
    }

    /// Return the number of hints so far.
    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    /// Process a tap on a cell.
    ///
    /// Taps are ignored while the game is paused or once the puzzle is solved.
    pub fn on_cell_tap(&mut self, row: usize, col: usize) -> TapOutcome {
        let size: usize = self.build.grid.size();
        if row >= size || col >= size || self.paused || self.solved {
            return TapOutcome::Ignored;
        }

        let outcome: TapOutcome = self
            .player_input
            .tap(Position::new(row, col), &self.build.placements);
        if let TapOutcome::Found(index) = outcome {
            info!(
                "Found {:?} ({}/{})",
                self.build.placements[index].original,
                self.player_input.num_found(),
                self.build.placements.len()
            );
            if self.player_input.num_found() == self.build.placements.len() {
                info!("Puzzle solved in {:?}", self.get_duration());
                self.solved = true;
            }
        }
        outcome
    }

    /// Reveal one cell of a word that is not found yet, and return its position.
    ///
    /// The revealed cell is the first cell that belongs to a word not found yet, that is not
    /// part of a found word (two words can share cells), and that is not already revealed.
    /// Return None when there is no such cell.
    pub fn give_hint(&mut self) -> Option<Position> {
        let found_cells: HashSet<Position> = self.found_cells();

        let cell: Position = self
            .build
            .placements
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.player_input.is_found(*i))
            .flat_map(|(_, p)| p.cells.get().iter().copied())
            .find(|c| !found_cells.contains(c) && !self.player_input.is_hinted(c))?;

        self.player_input.add_hint(cell);
        self.hints_used += 1;
        debug!("Hint {} at {cell}", self.hints_used);
        Some(cell)
    }

    /// Return the cells of all the found words.
    fn found_cells(&self) -> HashSet<Position> {
        self.player_input
            .found()
            .iter()
            .filter_map(|i| self.build.placements.get(*i))
            .flat_map(|p| p.cells.get().iter().copied())
            .collect()
    }

    /// Return the grid cells, row by row, with their found and hint states.
    pub fn cells(&self) -> Vec<Vec<Cell>> {
        let found_cells: HashSet<Position> = self.found_cells();

        self.build
            .grid
            .rows()
            .enumerate()
            .map(|(row, letters)| {
                letters
                    .iter()
                    .enumerate()
                    .map(|(col, letter)| {
                        let position: Position = Position::new(row, col);
                        let is_found: bool = found_cells.contains(&position);
                        Cell {
                            row,
                            col,
                            letter: *letter,
                            is_found,
                            is_hint: !is_found && self.player_input.is_hinted(&position),
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Whether all the words are found.
    ///
    /// A puzzle without any word to find is solved from the start.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.player_input.cancel_selection();
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        // Refresh the game elapsed time by removing the pause time.
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the game duration, without the pauses.
    pub fn get_duration(&self) -> Duration {
        match self.pause_duration {
            Some(d) => d,
            None => self.start_time.elapsed(),
        }
    }

    /// Return the game duration in hours, minutes, and seconds
    pub fn get_duration_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.get_duration().as_secs();
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }
}
