/*
generation.rs

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

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

use wordsearch::game::Game;
use wordsearch::generator::letter_grid::LetterGrid;
use wordsearch::generator::placement::{is_grid_letter, normalize};
use wordsearch::generator::random_grid::{
    GenerateGrid, GridBuild, GridOptions, RandomGrid, WordOrder, generate,
};
use wordsearch::player_input::TapOutcome;
use wordsearch::selection::{matches, straight_line};

const WORDS: [&str; 10] = [
    "Wasser",
    "Apfel",
    "Brot",
    " kitty-cat!! ",
    "Käse",
    "123",
    "Milch",
    "Ei",
    "Schokolade",
    "",
];

fn all_options() -> Vec<GridOptions> {
    let mut list = Vec::new();
    for size in [4, 8, 12] {
        for diagonals in [false, true] {
            for allow_intersections in [false, true] {
                for order in [WordOrder::LongestFirst, WordOrder::Input] {
                    list.push(GridOptions {
                        size,
                        diagonals,
                        allow_intersections,
                        order,
                    });
                }
            }
        }
    }
    list
}

/// Check the properties that every generated puzzle must have.
fn check_build(build: &GridBuild, options: &GridOptions) {
    let size = options.size;

    // Every cell has an uppercase letter
    assert_eq!(build.grid.size(), size);
    assert_eq!(build.grid.rows().count(), size);
    for row in build.grid.rows() {
        assert_eq!(row.len(), size);
        assert!(row.iter().all(|c| is_grid_letter(*c)), "{row:?}");
    }

    for placement in &build.placements {
        // The grid spells the word along the path, which is straight
        assert_eq!(normalize(&placement.original), placement.normalized);
        assert_eq!(
            placement.cells.len(),
            placement.normalized.chars().count()
        );
        assert_eq!(
            build.grid.word_at(&placement.cells).as_deref(),
            Some(placement.normalized.as_str())
        );

        // The straight line between both ends is the word, in both directions
        let first = placement.cells.get_first().unwrap();
        let last = placement.cells.get_last().unwrap();
        assert_eq!(straight_line(first, last), placement.cells);
        if !options.diagonals {
            assert!(first.row == last.row || first.col == last.col);
        }
        assert!(matches(&straight_line(first, last), placement));
        assert!(matches(&straight_line(last, first), placement));
    }

    // Shared cells
    if !options.allow_intersections {
        for (i, a) in build.placements.iter().enumerate() {
            for b in &build.placements[i + 1..] {
                assert!(!a.cells.get().iter().any(|c| b.cells.contains(c)));
            }
        }
    }

    // Every word with letters is either placed or skipped, in input order
    let expected: Vec<&str> = WORDS
        .iter()
        .copied()
        .filter(|w| !normalize(w).is_empty())
        .collect();
    let placed: HashSet<&str> = build
        .placements
        .iter()
        .map(|p| p.original.as_str())
        .collect();
    let skipped: HashSet<&str> = build.skipped.iter().map(String::as_str).collect();
    assert_eq!(build.num_words(), expected.len());
    for word in &expected {
        assert!(placed.contains(word) != skipped.contains(word), "{word:?}");
    }
    let placed_order: Vec<&str> = expected
        .iter()
        .copied()
        .filter(|w| placed.contains(w))
        .collect();
    assert_eq!(
        build
            .placements
            .iter()
            .map(|p| p.original.as_str())
            .collect::<Vec<_>>(),
        placed_order
    );
    assert!(!build.skipped.iter().any(|w| w == "123" || w.is_empty()));
}

#[test]
fn generated_puzzles_are_consistent() {
    for options in all_options() {
        for seed in 0..10 {
            let build = generate(&WORDS, &options, &mut StdRng::seed_from_u64(seed)).unwrap();
            check_build(&build, &options);
        }
    }
}

#[test]
fn fixed_seed_is_reproducible() {
    let words = ["Wasser", "Apfel", "Brot"];
    let options = GridOptions {
        size: 8,
        diagonals: true,
        allow_intersections: true,
        order: WordOrder::LongestFirst,
    };

    let first = RandomGrid::from_seed(1234).create_grid(&words, &options).unwrap();
    for _ in 0..3 {
        let again = RandomGrid::from_seed(1234).create_grid(&words, &options).unwrap();
        assert_eq!(again, first);
    }

    let mut rng = StdRng::seed_from_u64(1234);
    assert_eq!(generate(&words, &options, &mut rng).unwrap(), first);

    // Three short words always fit in an empty 8x8 grid
    assert!(first.skipped.is_empty());
    assert_eq!(
        first
            .placements
            .iter()
            .map(|p| p.normalized.as_str())
            .collect::<Vec<_>>(),
        ["WASSER", "APFEL", "BROT"]
    );
}

#[test]
fn json_output_decodes_to_the_same_puzzle() {
    let build = RandomGrid::from_seed(99)
        .create_grid(&WORDS, &GridOptions::default())
        .unwrap();

    let json = serde_json::to_string(&build).unwrap();
    let back: GridBuild = serde_json::from_str(&json).unwrap();

    assert_eq!(back, build);
}

#[test]
fn grid_only_holds_uppercase_letters() {
    let words = ["水山", "ŉa", "Straße", "Tee 水", "ǆungla"];

    for seed in 0..20 {
        let build = generate(&words, &GridOptions::default(), &mut StdRng::seed_from_u64(seed))
            .unwrap();

        // "水山" has no letter that can go into the grid
        assert_eq!(build.num_words(), 4);
        assert!(build.grid.rows().flatten().all(|c| is_grid_letter(*c)));
        let normalized: Vec<&str> = build
            .placements
            .iter()
            .map(|p| p.normalized.as_str())
            .collect();
        assert!(normalized.iter().all(|w| ["NA", "STRASSE", "TEE", "ǄUNGLA"].contains(w)));

        let json = serde_json::to_string(&build).unwrap();
        assert_eq!(serde_json::from_str::<GridBuild>(&json).unwrap(), build);
        assert_eq!(build.grid.to_string().parse::<LetterGrid>().unwrap(), build.grid);
    }
}

#[test]
fn play_a_generated_puzzle() {
    let mut generator = RandomGrid::from_seed(5);
    let mut game = Game::generate(&mut generator, &WORDS, &GridOptions::default()).unwrap();
    let placements = game.placements().to_vec();
    assert!(!placements.is_empty());

    for (i, placement) in placements.iter().enumerate() {
        let first = placement.cells.get_first().unwrap();
        let last = placement.cells.get_last().unwrap();

        // Select the word backwards
        assert_eq!(game.on_cell_tap(last.row, last.col), TapOutcome::Started);
        let outcome = game.on_cell_tap(first.row, first.col);

        // An identical word placed on the same cells earlier would already be found
        match outcome {
            TapOutcome::Found(index) => assert_eq!(index, i),
            other => panic!("unexpected {other:?} for {}", placement.original),
        }
    }

    assert!(game.is_solved());
    assert!(game.cells().iter().flatten().all(|c| !c.is_hint));
    assert_eq!(game.give_hint(), None);
}
