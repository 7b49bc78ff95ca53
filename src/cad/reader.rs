// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs;
use std::path::Path;

use log::{debug, info};

use super::parser::parse_design;
use super::Design;

/// Loads a `cad.temp` export from disk.
pub struct CadReader;

impl CadReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Design, Box<dyn std::error::Error>> {
        let path_str = path.as_ref().display().to_string();
        info!("loading CAD export: {path_str}");

        let content = fs::read_to_string(path)?;
        debug!("export size: {} bytes", content.len());

        let design = parse_design(&content)?;
        info!(
            "parsed {} components, {} nets",
            design.component_count(),
            design.net_count()
        );
        Ok(design)
    }
}

impl Default for CadReader {
    fn default() -> Self {
        Self::new()
    }
}
