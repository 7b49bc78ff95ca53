// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Section parsing for the fixed-layout CAD export
//!
//! The export holds a `PARTS LIST` section followed by a `NET LIST` section,
//! each a stream of records closed by an `EOS` line. One engine walks a
//! section and hands record and continuation lines to a per-section item
//! parser.

pub mod fields;
pub mod netlist;
pub mod partlist;

use std::fmt;

use log::{debug, warn};

use super::{xref, Component, Design};

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Error types that can occur while parsing an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingSectionHeader { expected: &'static str },
    UnterminatedSection { section: &'static str },
    DuplicateDesignator(String),
    DanglingPinData(String),
    MalformedPinField(String),
    UnknownDesignator(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingSectionHeader { expected } => {
                write!(f, "expected \"{expected}\" section header, wrong file?")
            }
            ParseError::UnterminatedSection { section } => {
                write!(f, "{section} section not terminated by EOS")
            }
            ParseError::DuplicateDesignator(designator) => {
                write!(f, "designator {designator} already defined")
            }
            ParseError::DanglingPinData(designator) => {
                write!(f, "found component {designator} before any NODE line")
            }
            ParseError::MalformedPinField(field) => {
                write!(f, "malformed pin field \"{field}\"")
            }
            ParseError::UnknownDesignator(designator) => {
                write!(f, "net references unknown designator {designator}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Line closing every section.
pub const SECTION_TERMINATOR: &str = "EOS";

/// Per-section item parser driven by [`SectionParser`].
///
/// A section is a sequence of items; each item opens with a header line and
/// may be extended by continuation lines until the next header or the
/// section terminator.
pub trait SectionItemParser {
    /// The type of item this parser produces
    type Item;
    /// Accumulator for the item currently being parsed
    type Context;

    /// Strip layout noise before a line is classified. The export prefixes
    /// page breaks with a form feed.
    fn normalize<'a>(&self, line: &'a str) -> &'a str {
        line.strip_prefix('\u{0C}').unwrap_or(line)
    }

    /// `Some(context)` when the line opens a new item.
    fn parse_header(&self, line: &str) -> Option<Self::Context>;

    /// Fold a continuation line into the current item.
    fn parse_continuation(&self, context: &mut Self::Context, line: &str) -> ParseResult<()>;

    /// A data line seen before any item header.
    fn on_orphan(&self, line: &str) -> ParseResult<()> {
        warn!("skipping line outside any record: {line}");
        Ok(())
    }

    /// Finish the item accumulated in `context`.
    fn finalize(&self, context: Self::Context) -> ParseResult<Self::Item>;

    /// Get the name of this item type for debugging
    fn item_name() -> &'static str;
}

/// Engine walking one section of the export.
pub struct SectionParser<P> {
    parser: P,
    header: &'static str,
}

impl<P: SectionItemParser> SectionParser<P> {
    pub fn new(parser: P, header: &'static str) -> Self {
        Self { parser, header }
    }

    /// Parse one section. `lines[0]` must carry the section header; on
    /// success the parsed items are returned together with the index of the
    /// line following the terminator, relative to `lines`.
    pub fn parse(&self, lines: &[&str]) -> ParseResult<(Vec<P::Item>, usize)> {
        match lines.first() {
            Some(first) if first.starts_with(self.header) => {}
            _ => {
                return Err(ParseError::MissingSectionHeader {
                    expected: self.header,
                })
            }
        }

        let mut items = Vec::new();
        let mut current: Option<P::Context> = None;

        for (offset, raw) in lines[1..].iter().enumerate() {
            let line = self.parser.normalize(raw);

            if line == SECTION_TERMINATOR {
                if let Some(context) = current.take() {
                    items.push(self.parser.finalize(context)?);
                }
                // `offset` counts from lines[1], so the line after the
                // terminator sits two past it in the caller's slice.
                return Ok((items, offset + 2));
            }

            if line.trim().is_empty() {
                continue;
            }

            if let Some(context) = self.parser.parse_header(line) {
                debug!("{} record: {line}", P::item_name());
                if let Some(done) = current.replace(context) {
                    items.push(self.parser.finalize(done)?);
                }
                continue;
            }

            match current.as_mut() {
                Some(context) => self.parser.parse_continuation(context, line)?,
                None => self.parser.on_orphan(line)?,
            }
        }

        Err(ParseError::UnterminatedSection {
            section: self.header,
        })
    }
}

/// Parse a complete export: the parts list, then the netlist starting at the
/// line the parts list hands back, then the cross-reference pass.
pub fn parse_design(input: &str) -> ParseResult<Design> {
    let lines: Vec<&str> = input.lines().collect();

    let (records, next_index) = partlist::parse(&lines)?;
    let mut design = Design::new();
    for record in records {
        for designator in record.designators {
            if design.components.contains_key(&designator) {
                return Err(ParseError::DuplicateDesignator(designator));
            }
            debug!(
                "component {designator}: {} ({})",
                record.name, record.package
            );
            design.components.insert(
                designator.clone(),
                Component::new(designator, record.name.clone(), record.package.clone()),
            );
        }
    }

    let (fragments, _) = netlist::parse(&lines[next_index..])?;
    for fragment in fragments {
        let id = design.intern_net(&fragment.name);
        design.nets[id.0].pins.extend(fragment.pins);
    }

    xref::build_ref(&mut design)?;
    Ok(design)
}
