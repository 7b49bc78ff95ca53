// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Pin connectivity report rendering
//!
//! Builds one row per reported pin, then renders the rows with column
//! widths sized to the widest entry actually printed.

use std::collections::BTreeMap;

use crate::cad::{Component, Design, NetId};
use crate::db74::Db74;

/// Placeholder printed for pins with no net.
pub const NOT_CONNECTED: &str = "(n/c)";

/// Power rails whose destinations are never enumerated.
pub const RESERVED_NETS: [&str; 2] = ["GND", "VCC"];

/// One far end of a net, seen from the reported pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub designator: String,
    pub pin: u32,
}

/// One reported pin: its net, optional pin function, and destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinRow {
    pub net: String,
    pub func: String,
    pub desc: String,
    pub connected: bool,
    /// `None` for reserved rails: connections exist but are not listed.
    pub destinations: Option<Vec<Destination>>,
}

impl PinRow {
    fn unconnected() -> Self {
        Self {
            net: NOT_CONNECTED.to_string(),
            func: String::new(),
            desc: String::new(),
            connected: false,
            destinations: None,
        }
    }
}

/// Title line, e.g. `U1: 7400 (DIP14) -- pin 3 only`.
pub fn header(component: &Component, pin: Option<u32>) -> String {
    match pin {
        Some(pin) => format!(
            "{}: {} ({}) -- pin {} only",
            component.designator, component.name, component.package, pin
        ),
        None => format!(
            "{}: {} ({})",
            component.designator, component.name, component.package
        ),
    }
}

/// Rows for every connected pin of `component`, keyed by pin number.
pub fn component_rows(design: &Design, component: &Component, db: &Db74) -> BTreeMap<u32, PinRow> {
    component
        .pin_nets
        .iter()
        .map(|(&pin, &net_id)| (pin, make_row(design, component, pin, net_id, db)))
        .collect()
}

/// Row for one pin; empty when that pin has no net.
pub fn pin_rows(
    design: &Design,
    component: &Component,
    pin: u32,
    db: &Db74,
) -> BTreeMap<u32, PinRow> {
    let mut rows = BTreeMap::new();
    if let Some(&net_id) = component.pin_nets.get(&pin) {
        rows.insert(pin, make_row(design, component, pin, net_id, db));
    }
    rows
}

fn make_row(
    design: &Design,
    component: &Component,
    pin: u32,
    net_id: NetId,
    db: &Db74,
) -> PinRow {
    let net = design.net(net_id);
    let (func, desc) = match db.find_pin(&component.name, pin) {
        Some(pin_func) => (pin_func.pin_type.clone(), pin_func.name.clone()),
        None => (String::new(), String::new()),
    };
    let destinations = if RESERVED_NETS.contains(&net.name.as_str()) {
        None
    } else {
        Some(
            net.pins
                .iter()
                .filter(|p| !(p.designator == component.designator && p.pin == pin))
                .map(|p| Destination {
                    designator: p.designator.clone(),
                    pin: p.pin,
                })
                .collect(),
        )
    };
    PinRow {
        net: net.name.clone(),
        func,
        desc,
        connected: true,
        destinations,
    }
}

/// Render rows for pins `min_pin..=max_pin`; `max_pin` defaults to the
/// highest connected pin. Pins in range without a row render the
/// [`NOT_CONNECTED`] placeholder.
pub fn render(rows: &BTreeMap<u32, PinRow>, min_pin: u32, max_pin: Option<u32>) -> String {
    let name_width = rows
        .values()
        .map(|r| r.net.len())
        .chain([NOT_CONNECTED.len()])
        .max()
        .unwrap_or(NOT_CONNECTED.len());
    let func_width = rows.values().map(|r| r.func.len()).max().unwrap_or(0);
    let desc_width = rows.values().map(|r| r.desc.len()).max().unwrap_or(0);
    // Destination designators align to at least four columns.
    let designator_width = rows
        .values()
        .flat_map(|r| r.destinations.iter().flatten())
        .map(|d| d.designator.len())
        .chain([4])
        .max()
        .unwrap_or(4);

    let last = match max_pin {
        Some(pin) => pin,
        None => rows.keys().next_back().copied().unwrap_or(0),
    };

    let unconnected = PinRow::unconnected();
    let mut out = String::new();
    for pin in min_pin..=last {
        let row = rows.get(&pin).unwrap_or(&unconnected);
        let mut line = format!(
            "{:<name_width$} {:<func_width$} {:<desc_width$} {:>2}",
            row.net, row.func, row.desc, pin
        );
        match &row.destinations {
            Some(destinations) if !destinations.is_empty() => {
                let list = destinations
                    .iter()
                    .map(|d| format!("{:<designator_width$} {:>2}", d.designator, d.pin))
                    .collect::<Vec<_>>()
                    .join(" / ");
                line.push_str(&format!(" -> {list}"));
            }
            _ if row.connected => {
                line.push_str(&format!("    (connections not listed for {})", row.net));
            }
            _ => {}
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
