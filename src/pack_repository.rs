/*
pack_repository.rs

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

//! Load word packs.
//!
//! [`DirectoryPackRepository`] reads the packs from `<pack_id>.json` files in a directory.
//! The packs are deserialized with [`serde`] and kept in memory for repeated loads.

use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fs::{File, read_dir};
use std::io::{self, BufReader, ErrorKind};
use std::path::PathBuf;

use crate::word_pack::WordPack;

/// File name extension of the pack files.
const PACK_EXTENSION: &str = "json";

/// Source of word packs.
pub trait PackRepository {
    /// Return the identifiers of the available packs, sorted.
    fn list_builtin_packs(&self) -> Result<Vec<String>, Box<dyn Error>>;

    /// Return the pack with the given identifier.
    fn load_pack(&mut self, pack_id: &str) -> Result<WordPack, Box<dyn Error>>;
}

/// Object to load packs from a directory.
pub struct DirectoryPackRepository {
    /// Directory that contains the pack files.
    packs_dir: PathBuf,

    /// Packs already loaded, indexed by their identifier.
    cache: HashMap<String, WordPack>,
}

impl DirectoryPackRepository {
    /// Create a [`DirectoryPackRepository`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory that contains the pack files.
    pub fn new(packs_dir: PathBuf) -> Self {
        debug!("Packs directory: {packs_dir:?}");
        Self {
            packs_dir,
            cache: HashMap::new(),
        }
    }

    /// Return the path to the file of the given pack.
    fn pack_file(&self, pack_id: &str) -> PathBuf {
        self.packs_dir.join(format!("{pack_id}.{PACK_EXTENSION}"))
    }
}

impl PackRepository for DirectoryPackRepository {
    fn list_builtin_packs(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let mut ids: Vec<String> = Vec::new();

        for entry in read_dir(&self.packs_dir)? {
            let path: PathBuf = entry?.path();
            let is_pack: bool = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(PACK_EXTENSION));
            if !is_pack || !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn load_pack(&mut self, pack_id: &str) -> Result<WordPack, Box<dyn Error>> {
        if let Some(pack) = self.cache.get(pack_id) {
            return Ok(pack.clone());
        }

        let path: PathBuf = self.pack_file(pack_id);
        let file: File = match File::open(&path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => {
                    return Err(Box::new(io::Error::new(
                        ErrorKind::NotFound,
                        format!("unknown pack {pack_id:?} ({path:?} does not exist)"),
                    )));
                }
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let pack: WordPack = serde_json::from_reader(reader)?;
        debug!("Loaded pack {pack_id:?}: {} words", pack.words.len());

        self.cache.insert(pack_id.to_string(), pack.clone());
        Ok(pack)
    }
}
