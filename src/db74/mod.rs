// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Pin-function lookup for the 74xx logic family
//!
//! A pre-built table mapping a part-family name and pin number to that
//! pin's documented function, loaded wholesale and queried read-only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Documented function of one pin of one part family member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinFunc {
    pub number: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub pin_type: String,
    #[serde(default)]
    pub inverted: bool,
}

/// Lookup table keyed by part-family name, then pin number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Db74 {
    parts: HashMap<String, HashMap<u32, PinFunc>>,
}

impl Db74 {
    /// Look up the function of one pin. Part names without the `74` prefix
    /// get it prepended before the lookup, so `"00"` finds `"7400"`.
    pub fn find_pin(&self, partname: &str, pin: u32) -> Option<&PinFunc> {
        let family = if partname.starts_with("74") {
            partname.to_string()
        } else {
            format!("74{partname}")
        };
        self.parts.get(&family)?.get(&pin)
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn family_count(&self) -> usize {
        self.parts.len()
    }
}

pub mod reader;
