/*
random_grid.rs

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

//! Generate a random grid.

use clap::ValueEnum;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::letter_grid::{LetterGrid, WorkGrid};
use super::path::Path;
use super::placement::{WordPlacement, normalize};
use super::position::{Direction, Position};
use crate::config::DEFAULT_GRID_SIZE;

/// Smallest number of rows and columns for a grid.
pub const MIN_GRID_SIZE: usize = 4;

/// Number of random positions and directions tried for a word before giving up on it.
pub const MAX_ATTEMPTS_PER_WORD: usize = 350;

/// Type of errors.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GridError {
    /// The requested grid size is smaller than [`MIN_GRID_SIZE`].
    GridTooSmall(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::GridTooSmall(size) => write!(
                f,
                "grid size too small: {size} (the minimum is {MIN_GRID_SIZE})"
            ),
        }
    }
}

impl Error for GridError {}

/// Order in which the words are placed.
///
/// Longer words have fewer possible positions, so placing them first skips fewer words.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WordOrder {
    /// Longest words first. Words of the same length keep their input order.
    #[default]
    LongestFirst,

    /// Input order.
    Input,
}

/// Parameters for building a grid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Number of rows and columns.
    pub size: usize,

    /// Whether words can be written along diagonals.
    pub diagonals: bool,

    /// Whether two words can share a cell when they have the same letter in that cell.
    pub allow_intersections: bool,

    /// Order in which the words are placed.
    pub order: WordOrder,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            diagonals: true,
            allow_intersections: true,
            order: WordOrder::LongestFirst,
        }
    }
}

/// Result of the generator: final grid, placements, and skipped words.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GridBuild {
    /// Final grid. Every cell has a letter.
    pub grid: LetterGrid,

    /// Placed words, in the order of the input words.
    pub placements: Vec<WordPlacement>,

    /// Words that could not be placed, in the order of the input words.
    pub skipped: Vec<String>,
}

impl GridBuild {
    /// Create a [`GridBuild`] object from already computed parts.
    pub fn new(grid: LetterGrid, placements: Vec<WordPlacement>, skipped: Vec<String>) -> Self {
        Self {
            grid,
            placements,
            skipped,
        }
    }

    /// Number of words that were considered for placement (placed or skipped).
    pub fn num_words(&self) -> usize {
        self.placements.len() + self.skipped.len()
    }
}

/// Build a character grid and record where the words are placed.
pub trait GenerateGrid {
    /// Place the words in a new grid.
    ///
    /// # Errors
    ///
    /// The method returns an error if the grid size is smaller than [`MIN_GRID_SIZE`].
    /// Words that cannot be placed are not errors: they are returned in [`GridBuild::skipped`].
    fn create_grid(&mut self, words: &[&str], options: &GridOptions)
    -> Result<GridBuild, GridError>;
}

/// Word waiting to be placed.
struct PendingWord<'a> {
    /// Position of the word in the input list.
    index: usize,

    /// Word as provided.
    original: &'a str,

    /// Normalized form, as characters.
    letters: Vec<char>,
}

/// [`RandomGrid`] object.
///
/// Words are placed at random positions and in random directions.
pub struct RandomGrid<R: Rng> {
    /// Random source. Two objects created with the same seed produce the same grids.
    rng: R,

    /// Number of placement attempts for the last grid.
    pub attempts: usize,

    /// Duration in seconds it took to generate the last grid.
    pub duration: f32,
}

impl<R: Rng> RandomGrid<R> {
    /// Create the object.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            attempts: 0,
            duration: 0.0,
        }
    }
}

impl RandomGrid<StdRng> {
    /// Create the object with a seeded random source.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GenerateGrid for RandomGrid<R> {
    fn create_grid(
        &mut self,
        words: &[&str],
        options: &GridOptions,
    ) -> Result<GridBuild, GridError> {
        let start: Instant = Instant::now();
        let (build, attempts) = build_grid(words, options, &mut self.rng)?;

        self.attempts = attempts;
        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Attempts = {}  Duration = {}",
            self.attempts, self.duration
        );
        Ok(build)
    }
}

/// Place the words in a new grid by using the provided random source.
///
/// # Errors
///
/// The function returns an error if the grid size is smaller than [`MIN_GRID_SIZE`].
pub fn generate<R>(
    words: &[&str],
    options: &GridOptions,
    rng: &mut R,
) -> Result<GridBuild, GridError>
where
    R: Rng + ?Sized,
{
    build_grid(words, options, rng).map(|(build, _)| build)
}

/// Build the grid and return it with the total number of placement attempts.
fn build_grid<R>(
    words: &[&str],
    options: &GridOptions,
    rng: &mut R,
) -> Result<(GridBuild, usize), GridError>
where
    R: Rng + ?Sized,
{
    if options.size < MIN_GRID_SIZE {
        return Err(GridError::GridTooSmall(options.size));
    }

    let mut pending: Vec<PendingWord> = words
        .iter()
        .enumerate()
        .filter_map(|(index, &original)| {
            let letters: Vec<char> = normalize(original).chars().collect();
            if letters.is_empty() {
                debug!("Ignoring {original:?}: no letter");
                None
            } else {
                Some(PendingWord {
                    index,
                    original,
                    letters,
                })
            }
        })
        .collect();

    // Stable sort: words of the same length stay in input order
    if options.order == WordOrder::LongestFirst {
        pending.sort_by_key(|w| Reverse(w.letters.len()));
    }

    let mut work: WorkGrid = WorkGrid::new(options.size);
    let mut placed: Vec<(usize, WordPlacement)> = Vec::with_capacity(pending.len());
    let mut skipped: Vec<(usize, String)> = Vec::new();
    let mut total_attempts: usize = 0;

    for word in &pending {
        let (cells, attempts) = place_word(&mut work, &word.letters, options, rng);
        total_attempts += attempts;
        match cells {
            Some(cells) => {
                debug!(
                    "Placed {:?} from {:?} to {:?} after {attempts} attempts",
                    word.original,
                    cells.get_first(),
                    cells.get_last()
                );
                placed.push((
                    word.index,
                    WordPlacement {
                        original: word.original.to_string(),
                        normalized: word.letters.iter().collect(),
                        cells,
                    },
                ));
            }
            None => {
                debug!("Skipped {:?} after {attempts} attempts", word.original);
                skipped.push((word.index, word.original.to_string()));
            }
        }
    }

    // Report the words in input order, not in placement order
    placed.sort_by_key(|(index, _)| *index);
    skipped.sort_by_key(|(index, _)| *index);

    info!(
        "{} words placed, {} skipped, {} cells filled with random letters",
        placed.len(),
        skipped.len(),
        work.num_empty()
    );

    let grid: LetterGrid = work.into_letter_grid(|| random_letter(rng));
    Ok((
        GridBuild {
            grid,
            placements: placed.into_iter().map(|(_, p)| p).collect(),
            skipped: skipped.into_iter().map(|(_, w)| w).collect(),
        },
        total_attempts,
    ))
}

/// Try random positions and directions until the word fits, and then write it into the grid.
///
/// Return the cells of the word, or None if no position was found, with the number of attempts.
fn place_word<R>(
    work: &mut WorkGrid,
    letters: &[char],
    options: &GridOptions,
    rng: &mut R,
) -> (Option<Path>, usize)
where
    R: Rng + ?Sized,
{
    let size: usize = work.size();

    // The word cannot fit in any direction
    if letters.len() > size {
        return (None, 0);
    }

    let num_directions: u8 = Direction::count(options.diagonals);
    for attempt in 1..=MAX_ATTEMPTS_PER_WORD {
        let Some(direction) = Direction::from_repr(rng.random_range(0..num_directions)) else {
            continue;
        };
        let start: Position = Position::new(rng.random_range(0..size), rng.random_range(0..size));

        if let Some(cells) = fit(work, letters, start, direction, options.allow_intersections) {
            for (cell, letter) in cells.get().iter().zip(letters) {
                work.set(*cell, *letter);
            }
            return (Some(cells), attempt);
        }
    }
    (None, MAX_ATTEMPTS_PER_WORD)
}

/// Return the cells the word would occupy, or None if the word does not fit at that position in
/// that direction.
///
/// A cell that already has a letter can only be reused when intersections are allowed and the
/// letter is the same.
fn fit(
    work: &WorkGrid,
    letters: &[char],
    start: Position,
    direction: Direction,
    allow_intersections: bool,
) -> Option<Path> {
    let size: usize = work.size();

    // Check the last cell first: most attempts fail because the word leaves the grid
    start.step(direction, letters.len().checked_sub(1)?, size)?;

    let mut cells: Path = Path::new(letters.len());
    for (i, letter) in letters.iter().enumerate() {
        let cell: Position = start.step(direction, i, size)?;
        if let Some(existing) = work.get(cell) {
            if !allow_intersections || existing != *letter {
                return None;
            }
        }
        cells.push(cell);
    }
    Some(cells)
}

/// Return a random letter between A and Z.
fn random_letter<R>(rng: &mut R) -> char
where
    R: Rng + ?Sized,
{
    char::from(b'A' + rng.random_range(0..26u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(size: usize, diagonals: bool, allow_intersections: bool) -> GridOptions {
        GridOptions {
            size,
            diagonals,
            allow_intersections,
            order: WordOrder::LongestFirst,
        }
    }

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn grid_too_small() {
        let mut generator = RandomGrid::from_seed(1);

        assert_eq!(
            generator.create_grid(&["CAT"], &options(3, true, true)),
            Err(GridError::GridTooSmall(3))
        );
        assert_eq!(
            GridError::GridTooSmall(3).to_string(),
            "grid size too small: 3 (the minimum is 4)"
        );
        assert!(generator.create_grid(&["CAT"], &options(4, true, true)).is_ok());
    }

    #[test]
    fn fit_respects_intersection_policy() {
        let mut work = WorkGrid::new(4);
        for (i, letter) in "ABCD".chars().enumerate() {
            work.set(Position::new(0, i), letter);
        }

        // Crossing the first row on a matching letter
        let down = fit(&work, &letters("AXY"), Position::new(0, 0), Direction::Down, true);
        assert_eq!(
            down.map(|p| p.get().to_vec()),
            Some(vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0)
            ])
        );
        assert!(fit(&work, &letters("AXY"), Position::new(0, 0), Direction::Down, false).is_none());

        // Crossing on a different letter is never allowed
        assert!(fit(&work, &letters("ZXY"), Position::new(0, 0), Direction::Down, true).is_none());

        // Leaving the grid
        assert!(fit(&work, &letters("XYZ"), Position::new(2, 0), Direction::Down, true).is_none());
        assert!(fit(&work, &letters("XYZ"), Position::new(1, 1), Direction::UpLeft, true).is_none());

        // Empty cells only
        assert!(fit(&work, &letters("XYZ"), Position::new(3, 3), Direction::UpLeft, false).is_some());
    }

    #[test]
    fn words_without_letters_are_ignored() {
        let build = generate(
            &["123", "Brot", " - ", ""],
            &options(8, true, true),
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();

        assert_eq!(build.num_words(), 1);
        assert!(!build.skipped.iter().any(|w| w != "Brot"));
        assert!(!build.placements.iter().any(|p| p.original != "Brot"));
    }

    #[test]
    fn too_long_words_are_skipped() {
        let build = generate(
            &["ABCDE", "ABC"],
            &options(4, true, true),
            &mut StdRng::seed_from_u64(3),
        )
        .unwrap();

        assert_eq!(build.skipped, ["ABCDE"]);
        assert_eq!(build.placements.len(), 1);
        assert_eq!(build.placements[0].normalized, "ABC");
    }

    #[test]
    fn placements_are_in_input_order() {
        for order in [WordOrder::LongestFirst, WordOrder::Input] {
            let opts = GridOptions {
                order,
                ..options(8, true, true)
            };
            let build =
                generate(&["ab", "Abcdefgh"], &opts, &mut StdRng::seed_from_u64(11)).unwrap();

            assert!(build.skipped.is_empty());
            assert_eq!(build.placements[0].original, "ab");
            assert_eq!(build.placements[1].original, "Abcdefgh");
            assert_eq!(build.placements[1].normalized, "ABCDEFGH");
        }
    }

    #[test]
    fn no_shared_cells_without_intersections() {
        let words = ["ABCD", "AEFG", "HAIJ", "KLMA", "ANOP", "QRAS"];

        for seed in 0..20 {
            let build = generate(
                &words,
                &options(4, true, false),
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();

            for (i, a) in build.placements.iter().enumerate() {
                for b in &build.placements[i + 1..] {
                    assert!(
                        !a.cells.get().iter().any(|cell| b.cells.contains(cell)),
                        "seed {seed}: {} and {} share a cell",
                        a.original,
                        b.original
                    );
                }
            }
        }
    }

    #[test]
    fn intersections_place_at_least_as_many_words() {
        // Five four-letter words cannot fit in sixteen cells without sharing some
        let words = ["ABCD"; 5];

        let disallow = generate(
            &words,
            &options(4, false, false),
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let allow = generate(
            &words,
            &options(4, false, true),
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();

        assert!(disallow.placements.len() <= 4);
        assert!(!disallow.skipped.is_empty());
        assert!(allow.placements.len() >= disallow.placements.len());
    }

    #[test]
    fn same_seed_same_grid() {
        let words = ["Wasser", "Apfel", "Brot"];
        let mut first = RandomGrid::from_seed(1234);
        let mut second = RandomGrid::from_seed(1234);

        let a = first.create_grid(&words, &options(8, true, true)).unwrap();
        let b = second.create_grid(&words, &options(8, true, true)).unwrap();

        assert_eq!(a, b);
        assert_eq!(first.attempts, second.attempts);
        assert!(first.attempts >= a.placements.len());
    }
}
