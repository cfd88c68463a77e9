/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! List the available packs:
//!
//! ```text
//! $ wordsearch --ls --packs-dir packs
//! basics  Basics (8 words)
//! travel  Travel (6 words)
//! ```
//!
//! Build a puzzle from a pack, always the same for a given seed:
//!
//! ```text
//! $ wordsearch -p travel -n 10 --seed 1234
//! ```
//!
//! Build a puzzle from words provided on the command line, without diagonals, and print it in
//! JSON format:
//!
//! ```text
//! $ wordsearch --no-diagonals --json Wasser Apfel Brot
//! ```
//!
//! Generate a hundred puzzles and print some statistics:
//!
//! ```text
//! $ wordsearch -p basics -c 100 -s
//! ```
//!
//! Play a puzzle in the terminal. Select a word by entering the row and column of its first
//! letter, and then of its last letter. With a pack, the translation of each found word is
//! displayed:
//!
//! ```text
//! $ wordsearch --play -p basics
//! ```

use clap::Parser;
use log::{LevelFilter, debug, warn};
use rand::Rng;
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use wordsearch::config::{COPYRIGHT_NOTICE, DEFAULT_GRID_SIZE, DEFAULT_PACKS_DIR};
use wordsearch::game::Game;
use wordsearch::generator::random_grid::{
    GenerateGrid, GridBuild, GridOptions, RandomGrid, WordOrder,
};
use wordsearch::pack_repository::{DirectoryPackRepository, PackRepository};
use wordsearch::player_input::TapOutcome;
use wordsearch::word_pack::WordPack;

/// Build word-search puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Words to hide in the grid, when no pack is selected
    words: Vec<String>,

    /// List the word packs
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Directory that contains the word packs
    #[arg(long, default_value = DEFAULT_PACKS_DIR)]
    packs_dir: PathBuf,

    /// Identifier of the word pack to use
    #[arg(short, long, conflicts_with = "words")]
    pack: Option<String>,

    /// Number of rows and columns
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Do not write words along diagonals
    #[arg(long, default_value_t = false)]
    no_diagonals: bool,

    /// Do not let words share cells
    #[arg(long, default_value_t = false)]
    no_intersections: bool,

    /// Order in which the words are placed
    #[arg(value_enum, long, default_value_t = WordOrder::LongestFirst)]
    order: WordOrder,

    /// Seed for the random generator. A random seed is used when not provided
    #[arg(long)]
    seed: Option<u64>,

    /// Print the puzzles in JSON format
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Play the puzzle in the terminal
    #[arg(long, default_value_t = false, conflicts_with_all = ["json", "count", "summary"])]
    play: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Initialize the logger.
///
/// `RUST_LOG` overrides the level selected with `--debug`.
fn init_logger(debug_enabled: bool) {
    let level: LevelFilter = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_target(false);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

/// Parse and process command-line options.
pub fn run() -> ExitCode {
    let args: Args = Args::parse();
    init_logger(args.debug);

    match process(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn process(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut repo: DirectoryPackRepository = DirectoryPackRepository::new(args.packs_dir.clone());

    //
    // List the packs
    //
    if args.ls {
        for pack_id in repo.list_builtin_packs()? {
            match repo.load_pack(&pack_id) {
                Ok(pack) => println!("{pack_id}\t{} ({} words)", pack.title, pack.words.len()),
                Err(e) => {
                    warn!("Cannot read pack {pack_id:?}: {e}");
                    println!("{pack_id}");
                }
            }
        }
        return Ok(());
    }

    //
    // Retrieve the words
    //
    let pack: Option<WordPack> = match &args.pack {
        Some(pack_id) => {
            let pack: WordPack = repo.load_pack(pack_id)?;
            debug!("Using pack {:?}", pack.title);
            Some(pack)
        }
        None => None,
    };
    let words: Vec<&str> = match &pack {
        Some(pack) => pack.source_words(),
        None => args.words.iter().map(String::as_str).collect(),
    };
    if words.is_empty() {
        return Err("no words: provide words on the command line or select a pack".into());
    }

    let options: GridOptions = GridOptions {
        size: args.size,
        diagonals: !args.no_diagonals,
        allow_intersections: !args.no_intersections,
        order: args.order,
    };
    let seed: u64 = args.seed.unwrap_or_else(|| rand::rng().random());
    debug!("Seed = {seed}  Options = {options:?}");

    if args.play {
        let mut generator = RandomGrid::from_seed(seed);
        let game: Game = Game::generate(&mut generator, &words, &options)?;
        return play(game, pack.as_ref());
    }

    //
    // Generate the puzzles. Each puzzle uses the next seed, so that any of them can be
    // generated again with --seed.
    //
    let mut builds: Vec<GridBuild> = Vec::with_capacity(args.count);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut placed: usize = 0;
    let mut considered: usize = 0;

    for i in 0..args.count {
        let puzzle_seed: u64 = seed.wrapping_add(i as u64);
        let mut generator = RandomGrid::from_seed(puzzle_seed);
        let build: GridBuild = generator.create_grid(&words, &options)?;

        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        attempts += generator.attempts;
        placed += build.placements.len();
        considered += build.num_words();

        if !args.json {
            if args.count > 1 {
                println!("# Seed {puzzle_seed}");
            }
            print_build(&build);
        }
        builds.push(build);
    }

    if args.json {
        if builds.len() == 1 {
            println!("{}", serde_json::to_string_pretty(&builds[0])?);
        } else {
            println!("{}", serde_json::to_string_pretty(&builds)?);
        }
    }

    // Print some stats
    if args.summary && args.count > 0 {
        eprintln!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
  average attempts = {}
      placed words = {placed}/{considered}",
            total,
            total / args.count as f32,
            max,
            attempts / args.count,
        );
    }
    Ok(())
}

/// Print the grid, the placed words, and the skipped words.
fn print_build(build: &GridBuild) {
    println!("{}", build.grid);
    for placement in &build.placements {
        if let (Some(first), Some(last)) =
            (placement.cells.get_first(), placement.cells.get_last())
        {
            println!(
                "{:<20} {:<20} {first} -> {last}",
                placement.original, placement.normalized
            );
        }
    }
    if !build.skipped.is_empty() {
        println!("Skipped: {}", build.skipped.join(", "));
    }
    println!();
}

/// Print the grid with the found words in lowercase and the hints marked with a star.
fn print_board(game: &Game) {
    print!("   ");
    for col in 0..game.grid().size() {
        print!("{col:>3}");
    }
    println!();

    for row in game.cells() {
        if let Some(first) = row.first() {
            print!("{:>3}", first.row);
        }
        for cell in &row {
            let letter: char = if cell.is_found {
                cell.letter.to_lowercase().next().unwrap_or(cell.letter)
            } else {
                cell.letter
            };
            let mark: char = if cell.is_hint { '*' } else { ' ' };
            print!(" {mark}{letter}");
        }
        println!();
    }
}

/// Play the game: read the player's commands from the standard input.
///
/// When the words come from a pack, the translation of each found word is displayed.
fn play(mut game: Game, pack: Option<&WordPack>) -> Result<(), Box<dyn Error>> {
    print_board(&game);
    println!("Words to find: {}", game.placements().len());
    println!("Enter \"row col\" to select a cell, \"hint\" to reveal a letter, \"quit\" to stop.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line: String = line?;
        let command: &str = line.trim();

        match command {
            "" => (),
            "quit" | "q" => break,
            "hint" | "h" => match game.give_hint() {
                Some(position) => {
                    println!("Hint at {position}");
                    print_board(&game);
                }
                None => println!("No more hints"),
            },
            _ => match parse_cell(command) {
                Some((row, col)) => match game.on_cell_tap(row, col) {
                    TapOutcome::Started => println!("From ({row}, {col}) to..."),
                    TapOutcome::Cancelled => println!("Not a straight line"),
                    TapOutcome::Missed => println!("No word there"),
                    TapOutcome::Ignored => println!("Outside of the grid"),
                    TapOutcome::Found(index) => {
                        let original: &str = &game.placements()[index].original;
                        match pack.and_then(|p| p.translation(original)) {
                            Some(target) => print!("Found {original} = {target}"),
                            None => print!("Found {original}"),
                        }
                        println!(" ({}/{})", game.num_found(), game.placements().len());
                        print_board(&game);
                    }
                },
                None => println!("Expected \"row col\", \"hint\", or \"quit\""),
            },
        }

        if game.is_solved() {
            let (h, m, s) = game.get_duration_hms();
            println!(
                "All the words found in {h}:{m:02}:{s:02} with {} hints",
                game.hints_used()
            );
            return Ok(());
        }
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}

/// Parse a "row col" command.
fn parse_cell(command: &str) -> Option<(usize, usize)> {
    let mut parts = command
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cell_commands() {
        assert_eq!(parse_cell("2 3"), Some((2, 3)));
        assert_eq!(parse_cell("2,3"), Some((2, 3)));
        assert_eq!(parse_cell(" 10   0 "), Some((10, 0)));
        assert_eq!(parse_cell("2"), None);
        assert_eq!(parse_cell("2 3 4"), None);
        assert_eq!(parse_cell("a b"), None);
        assert_eq!(parse_cell("-1 2"), None);
    }

    #[test]
    fn arguments() {
        Args::command().debug_assert();

        let args = Args::try_parse_from(["wordsearch", "--no-diagonals", "--seed", "7", "Brot"])
            .unwrap();
        assert_eq!(args.words, ["Brot"]);
        assert_eq!(args.size, DEFAULT_GRID_SIZE);
        assert!(args.no_diagonals);
        assert_eq!(args.order, WordOrder::LongestFirst);
        assert_eq!(args.seed, Some(7));

        let args = Args::try_parse_from(["wordsearch", "--order", "input", "-p", "food"]).unwrap();
        assert_eq!(args.order, WordOrder::Input);
        assert_eq!(args.pack.as_deref(), Some("food"));

        assert!(Args::try_parse_from(["wordsearch", "--play", "--json", "Brot"]).is_err());
        assert!(Args::try_parse_from(["wordsearch", "-p", "food", "Brot"]).is_err());
    }

    #[test]
    fn generate_from_the_sample_packs() {
        let packs_dir: String = format!("{}/packs", env!("CARGO_MANIFEST_DIR"));

        let args = Args::try_parse_from([
            "wordsearch",
            "--packs-dir",
            &packs_dir,
            "-p",
            "basics",
            "--seed",
            "3",
            "--json",
        ])
        .unwrap();
        assert!(process(&args).is_ok());

        let args = Args::try_parse_from(["wordsearch", "--packs-dir", &packs_dir, "-p", "nope"])
            .unwrap();
        assert!(process(&args).is_err());

        let mut repo = DirectoryPackRepository::new(PathBuf::from(&packs_dir));
        let basics: WordPack = repo.load_pack("basics").unwrap();
        assert_eq!(basics.source_words()[0], "Wasser");
        assert_eq!(basics.translation("Wasser"), Some("water"));
        assert_eq!(repo.list_builtin_packs().unwrap(), ["basics", "travel"]);
    }
}
