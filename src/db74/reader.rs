// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs;
use std::path::Path;

use log::info;

use super::Db74;

/// Loads the pre-built 74xx lookup table from disk.
pub struct Db74Reader;

impl Db74Reader {
    pub fn new() -> Self {
        Self
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Db74, Box<dyn std::error::Error>> {
        let path_str = path.as_ref().display().to_string();
        info!("loading pin-function table: {path_str}");

        let content = fs::read_to_string(path)?;
        let db: Db74 = serde_json::from_str(&content)?;
        info!("loaded {} part families", db.family_count());
        Ok(db)
    }
}

impl Default for Db74Reader {
    fn default() -> Self {
        Self::new()
    }
}
