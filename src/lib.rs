/*
lib.rs

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

//! Word-search puzzles.
//!
//! * [`generator`] hides words in a square grid of letters.
//! * [`selection`] checks whether the cells that the player selected trace a hidden word.
//! * [`game`] and [`player_input`] manage a puzzle being played: found words, hints, and timer.
//! * [`word_pack`] and [`pack_repository`] provide the vocabulary lists.
//!
//! The library only logs through the [`log`] facade. Setting up a logger is left to the
//! application.

pub mod config;
pub mod game;
pub mod generator;
pub mod pack_repository;
pub mod player_input;
pub mod selection;
pub mod word_pack;
