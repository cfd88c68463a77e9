/*
word_pack.rs

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

//! Vocabulary packs.
//!
//! A pack is a list of words in a source language with their translation in a target language.
//! Only the source words are hidden in the grid.
//!
//! Packs are stored as JSON documents:
//!
//! ```json
//! {
//!   "packId": "basics",
//!   "sourceLang": "de",
//!   "targetLang": "en",
//!   "title": "Basics",
//!   "words": [
//!     { "source": "Wasser", "target": "water" },
//!     { "source": "Brot", "target": "bread" }
//!   ]
//! }
//! ```
//!
//! Unknown keys are ignored, so that the format can evolve.

use serde::{Deserialize, Serialize};

fn default_version() -> u32 {
    1
}

fn default_direction() -> String {
    "LTR".to_string()
}

fn default_origin() -> String {
    "builtin".to_string()
}

/// A single term and its translation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Word to find in the grid, for example "Wasser".
    pub source: String,

    /// Translation, for example "water".
    pub target: String,
}

/// Metadata and vocabulary list of a pack.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordPack {
    /// Pack identifier. It is also the name of the JSON file, without the extension.
    pub pack_id: String,

    /// Format version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Language of the words to find, for example "de".
    pub source_lang: String,

    /// Language of the translations, for example "en".
    pub target_lang: String,

    /// Writing direction of the source language ("LTR" or "RTL").
    #[serde(default = "default_direction")]
    pub direction: String,

    /// Human-friendly name.
    pub title: String,

    /// Where the pack comes from: "builtin" or "user".
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Vocabulary.
    pub words: Vec<WordEntry>,
}

impl WordPack {
    /// Return the words to hide in the grid.
    pub fn source_words(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.source.as_str()).collect()
    }

    /// Return the translation of a source word, if the word is in the pack.
    pub fn translation(&self, source: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|w| w.source == source)
            .map(|w| w.target.as_str())
    }
}
