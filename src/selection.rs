/*
selection.rs

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

//! Match the player's selections against the placed words.
//!
//! The player selects a word by choosing its first and last cells (in any order).
//! [`straight_line`] computes the cells between these two cells, and [`find_match`] looks for a
//! word that occupies exactly these cells.

use crate::generator::path::Path;
use crate::generator::placement::WordPlacement;
use crate::generator::position::Position;

/// Return the cells on a straight line from `start` to `end`, both included.
///
/// The line can be horizontal, vertical, or diagonal (45°). For any other pair of cells, the
/// returned path is empty.
pub fn straight_line(start: Position, end: Position) -> Path {
    let dr: isize = end.row as isize - start.row as isize;
    let dc: isize = end.col as isize - start.col as isize;

    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return Path::default();
    }

    let len: usize = dr.unsigned_abs().max(dc.unsigned_abs()) + 1;
    (0..len as isize)
        .map(|i| {
            Position::new(
                (start.row as isize + dr.signum() * i) as usize,
                (start.col as isize + dc.signum() * i) as usize,
            )
        })
        .collect()
}

/// Whether the path follows the cells of the placed word, in either direction.
pub fn matches(path: &Path, placement: &WordPlacement) -> bool {
    *path == placement.cells || path.is_reverse_of(&placement.cells)
}

/// Return the index of the first placement that the path matches.
///
/// Placements for which `skip` returns true (for example words already found) are not tested.
pub fn find_match<F>(path: &Path, placements: &[WordPlacement], skip: F) -> Option<usize>
where
    F: Fn(usize) -> bool,
{
    if path.is_empty() {
        return None;
    }
    placements
        .iter()
        .enumerate()
        .find(|(i, placement)| !skip(*i) && matches(path, placement))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(list: &[(usize, usize)]) -> Vec<Position> {
        list.iter().map(|&(r, c)| Position::new(r, c)).collect()
    }

    fn placement(word: &str, list: &[(usize, usize)]) -> WordPlacement {
        WordPlacement {
            original: word.to_string(),
            normalized: word.to_uppercase(),
            cells: cells(list).into(),
        }
    }

    #[test]
    fn single_cell() {
        for p in [Position::new(0, 0), Position::new(5, 2)] {
            assert_eq!(straight_line(p, p).get(), &[p]);
        }
    }

    #[test]
    fn horizontal_line_is_returned_inclusive() {
        let path = straight_line(Position::new(2, 1), Position::new(2, 4));
        assert_eq!(path.get(), cells(&[(2, 1), (2, 2), (2, 3), (2, 4)]));
    }

    #[test]
    fn vertical_line_is_returned_inclusive() {
        let path = straight_line(Position::new(3, 5), Position::new(0, 5));
        assert_eq!(path.get(), cells(&[(3, 5), (2, 5), (1, 5), (0, 5)]));
    }

    #[test]
    fn diagonal_line_is_returned_inclusive() {
        let path = straight_line(Position::new(1, 1), Position::new(4, 4));
        assert_eq!(path.get(), cells(&[(1, 1), (2, 2), (3, 3), (4, 4)]));

        let path = straight_line(Position::new(3, 0), Position::new(0, 3));
        assert_eq!(path.get(), cells(&[(3, 0), (2, 1), (1, 2), (0, 3)]));
    }

    #[test]
    fn non_straight_returns_empty() {
        assert!(straight_line(Position::new(0, 0), Position::new(2, 3)).is_empty());
        assert!(straight_line(Position::new(4, 1), Position::new(0, 0)).is_empty());
    }

    #[test]
    fn match_in_both_directions() {
        let brot = placement("Brot", &[(0, 0), (1, 1), (2, 2), (3, 3)]);

        assert!(matches(&brot.cells, &brot));
        let backwards: Path = brot.cells.get().iter().rev().copied().collect();
        assert!(matches(&backwards, &brot));
        assert!(matches(
            &straight_line(Position::new(3, 3), Position::new(0, 0)),
            &brot
        ));

        // Partial selections do not count
        assert!(!matches(
            &straight_line(Position::new(0, 0), Position::new(2, 2)),
            &brot
        ));
        assert!(!matches(&Path::default(), &brot));
    }

    #[test]
    fn first_unskipped_match() {
        let placements = [
            placement("Hund", &[(0, 0), (0, 1), (0, 2), (0, 3)]),
            placement("Tee", &[(1, 0), (1, 1), (1, 2)]),
            placement("Hund", &[(0, 0), (0, 1), (0, 2), (0, 3)]),
        ];
        let hund = straight_line(Position::new(0, 3), Position::new(0, 0));

        assert_eq!(find_match(&hund, &placements, |_| false), Some(0));
        assert_eq!(find_match(&hund, &placements, |i| i == 0), Some(2));
        assert_eq!(find_match(&hund, &placements, |i| i != 1), None);
        assert_eq!(find_match(&Path::default(), &placements, |_| false), None);
    }
}
