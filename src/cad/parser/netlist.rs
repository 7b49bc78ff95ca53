// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! NET LIST section parser

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{digit1, multispace0, multispace1},
    combinator::map_res,
    IResult, Parser,
};

use crate::cad::PinRef;

use super::fields;
use super::{ParseError, ParseResult, SectionItemParser, SectionParser};

/// First line of the section.
pub const NET_HEADER: &str = "NET LIST";

/// Pins collected under one `NODE` line. Fragments sharing a name merge into
/// a single net when registered into the design, so a later `NODE` line may
/// resume an earlier net.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetFragment {
    pub name: String,
    pub pins: Vec<PinRef>,
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace()).parse(input)
}

/// `NODE <name>` introduces or resumes a net.
fn node_line(input: &str) -> IResult<&str, &str> {
    let (input, _) = tag("NODE").parse(input)?;
    let (input, _) = multispace1(input)?;
    identifier(input)
}

/// One `<designator> <pin>` pair inside a fixed-width cell.
fn pin_ref(input: &str) -> IResult<&str, (&str, u32)> {
    let (input, _) = multispace0(input)?;
    let (input, designator) = identifier(input)?;
    let (input, _) = multispace1(input)?;
    let (input, pin) = map_res(digit1, str::parse).parse(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, (designator, pin)))
}

fn parse_pin_cell(cell: &str) -> ParseResult<(&str, u32)> {
    match pin_ref(cell) {
        Ok(("", pair)) => Ok(pair),
        _ => Err(ParseError::MalformedPinField(cell.trim().to_string())),
    }
}

/// Parser for the NET LIST section.
pub struct NetListParser;

impl SectionItemParser for NetListParser {
    type Item = NetFragment;
    type Context = NetFragment;

    /// Netlist lines additionally carry trailing `$` markers and padding.
    fn normalize<'a>(&self, line: &'a str) -> &'a str {
        line.strip_prefix('\u{0C}')
            .unwrap_or(line)
            .trim_end_matches([' ', '$'])
    }

    fn parse_header(&self, line: &str) -> Option<Self::Context> {
        let (_, name) = node_line(line).ok()?;
        Some(NetFragment {
            name: name.to_string(),
            pins: Vec::new(),
        })
    }

    fn parse_continuation(&self, fragment: &mut Self::Context, line: &str) -> ParseResult<()> {
        for cell in pin_cells(line) {
            if cell.trim().is_empty() {
                continue;
            }
            let (designator, pin) = parse_pin_cell(cell)?;
            fragment.pins.push(PinRef {
                designator: designator.to_string(),
                pin,
            });
        }
        Ok(())
    }

    fn on_orphan(&self, line: &str) -> ParseResult<()> {
        let designator = fields::NET_PIN_DATA
            .slice(line)
            .split_whitespace()
            .next()
            .unwrap_or(line);
        Err(ParseError::DanglingPinData(designator.to_string()))
    }

    fn finalize(&self, fragment: Self::Context) -> ParseResult<Self::Item> {
        Ok(fragment)
    }

    fn item_name() -> &'static str {
        "net"
    }
}

fn pin_cells(line: &str) -> impl Iterator<Item = &str> {
    fields::cells(
        fields::NET_PIN_DATA.slice(line),
        fields::NET_PIN_FIELD_WIDTH,
    )
}

/// Parse the NET LIST section at the head of `lines`; returns the net
/// fragments and the index of the line following the `EOS` terminator.
pub fn parse(lines: &[&str]) -> ParseResult<(Vec<NetFragment>, usize)> {
    SectionParser::new(NetListParser, NET_HEADER).parse(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_net() {
        let lines = vec!["NET LIST", "NODE N1", "    U1         3U2         5", "EOS"];
        let (fragments, next_index) = parse(&lines).unwrap();

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].name, "N1");
        assert_eq!(
            fragments[0].pins,
            vec![
                PinRef {
                    designator: "U1".to_string(),
                    pin: 3
                },
                PinRef {
                    designator: "U2".to_string(),
                    pin: 5
                },
            ]
        );
        assert_eq!(next_index, 4);
    }

    #[test]
    fn test_pin_count_matches_nonempty_cells() {
        let lines = vec![
            "NET LIST",
            "NODE GND",
            "    U1         7U2         7U3         7",
            "    U4        14",
            "EOS",
        ];
        let (fragments, _) = parse(&lines).unwrap();
        assert_eq!(fragments[0].pins.len(), 4);
        assert_eq!(fragments[0].pins[3].pin, 14);
    }

    #[test]
    fn test_trailing_dollar_and_spaces_are_stripped() {
        let lines = vec!["NET LIST", "NODE N1", "    U1         3 $", "EOS $ "];
        let (fragments, next_index) = parse(&lines).unwrap();
        assert_eq!(fragments[0].pins.len(), 1);
        assert_eq!(next_index, 4);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let lines = vec!["NET LIST", "", "NODE N1", "", "    U1         3", "EOS"];
        let (fragments, _) = parse(&lines).unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].pins.len(), 1);
    }

    #[test]
    fn test_resumed_node_yields_second_fragment() {
        let lines = vec![
            "NET LIST",
            "NODE N1",
            "    U1         3",
            "NODE N2",
            "    U2         1",
            "NODE N1",
            "    U2         2",
            "EOS",
        ];
        let (fragments, _) = parse(&lines).unwrap();
        let names: Vec<&str> = fragments.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["N1", "N2", "N1"]);
    }

    #[test]
    fn test_pin_data_before_node_is_an_error() {
        let lines = vec!["NET LIST", "    U1         3", "EOS"];
        assert_eq!(
            parse(&lines),
            Err(ParseError::DanglingPinData("U1".to_string()))
        );
    }

    #[test]
    fn test_malformed_cell_is_an_error() {
        let lines = vec!["NET LIST", "NODE N1", "    U1       3 X", "EOS"];
        assert_eq!(
            parse(&lines),
            Err(ParseError::MalformedPinField("U1       3 X".trim().to_string()))
        );
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let lines = vec!["PARTS LIST", "EOS"];
        assert_eq!(
            parse(&lines),
            Err(ParseError::MissingSectionHeader {
                expected: NET_HEADER
            })
        );
    }

    #[test]
    fn test_node_line_parses_name() {
        let (_, name) = node_line("NODE VCC").unwrap();
        assert_eq!(name, "VCC");
        assert!(node_line("NODE").is_err());
    }

    #[test]
    fn test_pin_cell_round_trip() {
        assert_eq!(parse_pin_cell("U10        4").unwrap(), ("U10", 4));
        assert_eq!(parse_pin_cell(" C3  12     ").unwrap(), ("C3", 12));
        assert!(parse_pin_cell("U1").is_err());
        assert!(parse_pin_cell("U1 x").is_err());
    }
}
