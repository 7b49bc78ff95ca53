// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// One physical pin of one component instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRef {
    pub designator: String,
    pub pin: u32,
}

/// Stable handle to a net inside a [`Design`].
///
/// Components link to their nets through ids resolved via [`Design::net`],
/// so a net lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetId(pub(crate) usize);

/// One electrical node and the pins it connects, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Net {
    pub name: String,
    pub pins: Vec<PinRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub designator: String,
    pub name: String,
    pub package: String,
    /// Populated by the cross-reference pass; empty before it runs.
    pub pin_nets: BTreeMap<u32, NetId>,
}

impl Component {
    pub fn new(
        designator: impl Into<String>,
        name: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            designator: designator.into(),
            name: name.into(),
            package: package.into(),
            pin_nets: BTreeMap::new(),
        }
    }
}

/// Owner of every component and net parsed from one export.
///
/// Nets live in an arena in encounter order; `net_index` maps each distinct
/// net name to its slot.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Design {
    pub(crate) components: HashMap<String, Component>,
    pub(crate) nets: Vec<Net>,
    pub(crate) net_index: HashMap<String, NetId>,
}

impl Design {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a component; `None` for an unknown designator.
    pub fn component(&self, designator: &str) -> Option<&Component> {
        self.components.get(designator)
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Resolve a net id handed out by this design.
    pub fn net(&self, id: NetId) -> &Net {
        &self.nets[id.0]
    }

    pub fn net_by_name(&self, name: &str) -> Option<&Net> {
        self.net_index.get(name).map(|&id| &self.nets[id.0])
    }

    pub fn nets(&self) -> impl Iterator<Item = &Net> {
        self.nets.iter()
    }

    pub fn net_count(&self) -> usize {
        self.nets.len()
    }

    /// Look up a net by name, creating an empty one at the end of the arena
    /// when the name is new.
    pub(crate) fn intern_net(&mut self, name: &str) -> NetId {
        if let Some(&id) = self.net_index.get(name) {
            return id;
        }
        let id = NetId(self.nets.len());
        self.nets.push(Net {
            name: name.to_string(),
            pins: Vec::new(),
        });
        self.net_index.insert(name.to_string(), id);
        id
    }
}

pub mod parser;
pub mod reader;
pub mod xref;
