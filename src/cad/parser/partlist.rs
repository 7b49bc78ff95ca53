// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! PARTS LIST section parser

use super::fields;
use super::{ParseResult, SectionItemParser, SectionParser};

/// First line of the section.
pub const PARTS_HEADER: &str = "PARTS LIST";

/// One parts-list record: a part type, its package, and every instance
/// declared for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartRecord {
    pub name: String,
    pub package: String,
    pub designators: Vec<String>,
}

/// Parser for the PARTS LIST section.
///
/// A record line carries a part name in the name field; lines whose name
/// field is blank or space-led continue the designator list of the record
/// above them.
pub struct PartListParser;

impl SectionItemParser for PartListParser {
    type Item = PartRecord;
    type Context = PartRecord;

    fn parse_header(&self, line: &str) -> Option<Self::Context> {
        let name_field = fields::PART_NAME.slice(line);
        if name_field.trim().is_empty() || name_field.starts_with(' ') {
            return None;
        }
        Some(PartRecord {
            name: name_field.trim_end().to_string(),
            package: fields::PART_PACKAGE.slice(line).trim_end().to_string(),
            designators: designators(line).collect(),
        })
    }

    fn parse_continuation(&self, record: &mut Self::Context, line: &str) -> ParseResult<()> {
        record.designators.extend(designators(line));
        Ok(())
    }

    fn finalize(&self, record: Self::Context) -> ParseResult<Self::Item> {
        Ok(record)
    }

    fn item_name() -> &'static str {
        "part"
    }
}

fn designators(line: &str) -> impl Iterator<Item = String> + '_ {
    fields::PART_DESIGNATORS
        .slice(line)
        .split_whitespace()
        .map(str::to_string)
}

/// Parse the PARTS LIST section at the head of `lines`; returns the records
/// and the index of the line following the `EOS` terminator.
pub fn parse(lines: &[&str]) -> ParseResult<(Vec<PartRecord>, usize)> {
    SectionParser::new(PartListParser, PARTS_HEADER).parse(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cad::parser::ParseError;

    #[test]
    fn test_parse_simple_records() {
        let lines = vec![
            "PARTS LIST",
            "7400            DIP14            U1 U2",
            "CAP             C0805            C1 C2 C3",
            "EOS",
        ];
        let (records, next_index) = parse(&lines).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "7400");
        assert_eq!(records[0].package, "DIP14");
        assert_eq!(records[0].designators, vec!["U1", "U2"]);
        assert_eq!(records[1].designators, vec!["C1", "C2", "C3"]);
        assert_eq!(next_index, 4);
    }

    #[test]
    fn test_next_index_is_one_past_terminator() {
        let lines = vec![
            "PARTS LIST",
            "7400            DIP14            U1",
            "EOS",
            "NET LIST",
        ];
        let (_, next_index) = parse(&lines).unwrap();
        assert_eq!(lines[next_index], "NET LIST");
    }

    #[test]
    fn test_continuation_extends_previous_record() {
        let lines = vec![
            "PARTS LIST",
            "7400            DIP14            U1 U2",
            "                                 U3 U4",
            "EOS",
        ];
        let (records, _) = parse(&lines).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].designators, vec!["U1", "U2", "U3", "U4"]);
    }

    #[test]
    fn test_space_led_name_field_is_a_continuation() {
        let lines = vec![
            "PARTS LIST",
            "7400            DIP14            U1",
            "  spill        over              U2",
            "EOS",
        ];
        let (records, _) = parse(&lines).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "7400");
        assert_eq!(records[0].designators, vec!["U1", "U2"]);
    }

    #[test]
    fn test_form_feed_prefix_is_stripped() {
        let lines = vec![
            "PARTS LIST",
            "7400            DIP14            U1",
            "\u{0C}EOS",
        ];
        let (records, next_index) = parse(&lines).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(next_index, 3);
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let lines = vec!["NET LIST", "EOS"];
        assert_eq!(
            parse(&lines),
            Err(ParseError::MissingSectionHeader {
                expected: PARTS_HEADER
            })
        );
    }

    #[test]
    fn test_missing_terminator_is_an_error() {
        let lines = vec!["PARTS LIST", "7400            DIP14            U1"];
        assert_eq!(
            parse(&lines),
            Err(ParseError::UnterminatedSection {
                section: PARTS_HEADER
            })
        );
    }

    #[test]
    fn test_record_without_designators() {
        let lines = vec!["PARTS LIST", "7400            DIP14", "EOS"];
        let (records, _) = parse(&lines).unwrap();
        assert_eq!(records[0].name, "7400");
        assert_eq!(records[0].package, "DIP14");
        assert!(records[0].designators.is_empty());
    }
}
