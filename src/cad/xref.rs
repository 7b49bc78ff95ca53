// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Cross-reference pass linking every net pin back to its owning component

use log::warn;

use super::parser::{ParseError, ParseResult};
use super::{Design, NetId};

/// Populate every component's pin-to-net table from the parsed nets.
///
/// Nets are walked in encounter order, so when two nets claim the same
/// physical pin the later one wins; the collision is reported and
/// overwritten rather than failing the pass. A pin naming a designator the
/// parts list never declared aborts with an error.
pub fn build_ref(design: &mut Design) -> ParseResult<()> {
    let Design {
        components, nets, ..
    } = design;

    for (index, net) in nets.iter().enumerate() {
        for pin in &net.pins {
            let component = components
                .get_mut(&pin.designator)
                .ok_or_else(|| ParseError::UnknownDesignator(pin.designator.clone()))?;
            if let Some(previous) = component.pin_nets.insert(pin.pin, NetId(index)) {
                warn!(
                    "duplicate pin {} on component {} ({}): net {} replaces {}",
                    pin.pin,
                    component.designator,
                    component.name,
                    net.name,
                    nets[previous.0].name
                );
            }
        }
    }
    Ok(())
}
