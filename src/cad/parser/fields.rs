// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Fixed-width field layout of the export
//!
//! The column layout is described declaratively as [`FieldSpec`] descriptors
//! consumed by one generic slicer, instead of literal offsets scattered
//! through the parsers.

/// Byte-offset descriptor for one fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub start: usize,
    /// `None` takes the rest of the line.
    pub width: Option<usize>,
}

impl FieldSpec {
    /// Extract the field from `line`, clamped to the line's length. Short
    /// lines yield a short or empty slice, never a panic.
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        let start = self.start.min(line.len());
        let end = match self.width {
            Some(width) => (start + width).min(line.len()),
            None => line.len(),
        };
        line.get(start..end).unwrap_or("")
    }
}

/// PARTS LIST record layout: part name, package, then the designator list.
pub const PART_NAME: FieldSpec = FieldSpec {
    start: 0,
    width: Some(16),
};
pub const PART_PACKAGE: FieldSpec = FieldSpec {
    start: 16,
    width: Some(17),
};
pub const PART_DESIGNATORS: FieldSpec = FieldSpec {
    start: 33,
    width: None,
};

/// NET LIST pin-data layout: a 4-byte ignored prefix, then 12-byte cells
/// each holding one `<designator> <pin>` pair.
pub const NET_PIN_DATA: FieldSpec = FieldSpec {
    start: 4,
    width: None,
};
pub const NET_PIN_FIELD_WIDTH: usize = 12;

/// Chop `line` into consecutive cells of `width` bytes; the last cell may be
/// short. The export is plain ASCII, so a cell that would split a multi-byte
/// character yields an empty slice instead.
pub fn cells(line: &str, width: usize) -> impl Iterator<Item = &str> {
    line.as_bytes()
        .chunks(width)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
}
